//! Dimension annotation entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

use super::text::MAX_TEXT_LENGTH;

/// The supported dimension kinds with their kind-specific point fields
#[derive(Debug, Clone)]
pub enum DimensionKind {
    /// Linear dimension between two measured points
    Linear {
        start: Vector3,
        end: Vector3,
        dimline_point: Vector3,
    },
    /// Radius dimension from a center to a point on the curve
    Radial {
        center: Vector3,
        radius_point: Vector3,
    },
    /// Diameter dimension through a center point
    Diameter {
        center: Vector3,
        diameter_point: Vector3,
    },
    /// Angle dimension at a vertex between two rays
    Angular {
        vertex: Vector3,
        first_point: Vector3,
        second_point: Vector3,
    },
}

/// A dimension annotation
#[derive(Debug, Clone)]
pub struct Dimension {
    /// Common entity data
    pub common: EntityCommon,
    /// Kind and measurement points
    pub kind: DimensionKind,
    /// Optional text override replacing the measured value
    pub text_override: Option<String>,
}

impl Dimension {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let kind_tag = convert::require(fields, "dimension_type", "dimension")?
            .as_str()
            .ok_or_else(|| {
                CompileError::validation("dimension.dimension_type", "expected a string")
            })?;

        let point = |key: &str| -> Result<Vector3> {
            CoordinateConverter::point3(
                convert::require(fields, key, "dimension")?,
                &format!("dimension.{key}"),
            )
        };

        let kind = match kind_tag {
            "linear" => DimensionKind::Linear {
                start: point("start")?,
                end: point("end")?,
                dimline_point: point("dimline_point")?,
            },
            "radial" => DimensionKind::Radial {
                center: point("center")?,
                radius_point: point("radius_point")?,
            },
            "diameter" => DimensionKind::Diameter {
                center: point("center")?,
                diameter_point: point("diameter_point")?,
            },
            "angular" => DimensionKind::Angular {
                vertex: point("vertex")?,
                first_point: point("first_point")?,
                second_point: point("second_point")?,
            },
            other => {
                return Err(CompileError::validation(
                    "dimension.dimension_type",
                    format!(
                        "unknown dimension type '{other}' (expected linear, radial, diameter, or angular)"
                    ),
                ))
            }
        };

        let text_override = convert::optional_text(fields, "text", MAX_TEXT_LENGTH, "dimension")?;
        Ok(Dimension {
            common,
            kind,
            text_override,
        })
    }
}
