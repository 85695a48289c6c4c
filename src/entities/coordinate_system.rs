//! Coordinate system transform entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// The supported coordinate transform kinds
#[derive(Debug, Clone)]
pub enum TransformKind {
    /// Translation by an offset vector
    Translate { base_point: Vector3, offset: Vector3 },
    /// Rotation around a base point, angle in degrees
    Rotate { base_point: Vector3, angle: f64 },
    /// Uniform scaling about a base point
    Scale { base_point: Vector3, factor: f64 },
    /// User coordinate system definition
    Ucs {
        origin: Vector3,
        x_axis: Vector3,
        y_axis: Vector3,
    },
}

/// A coordinate system transform record
#[derive(Debug, Clone)]
pub struct CoordinateSystem {
    /// Common entity data
    pub common: EntityCommon,
    /// Transform kind and parameters
    pub kind: TransformKind,
}

impl CoordinateSystem {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let tag = convert::require(fields, "transform_type", "coordinate_system")?
            .as_str()
            .ok_or_else(|| {
                CompileError::validation("coordinate_system.transform_type", "expected a string")
            })?;

        let point = |key: &str| -> Result<Vector3> {
            CoordinateConverter::point3(
                convert::require(fields, key, "coordinate_system")?,
                &format!("coordinate_system.{key}"),
            )
        };

        let kind = match tag {
            "translate" => TransformKind::Translate {
                base_point: point("base_point")?,
                offset: point("offset")?,
            },
            "rotate" => TransformKind::Rotate {
                base_point: point("base_point")?,
                angle: convert::angle_degrees(
                    convert::require(fields, "angle", "coordinate_system")?,
                    "coordinate_system.angle",
                )?,
            },
            "scale" => TransformKind::Scale {
                base_point: point("base_point")?,
                factor: convert::positive(
                    convert::require(fields, "scale_factor", "coordinate_system")?,
                    "coordinate_system.scale_factor",
                )?,
            },
            "ucs" => {
                let origin = point("origin")?;
                let x_axis = point("x_axis")?;
                let y_axis = point("y_axis")?;
                if x_axis.length() == 0.0 || y_axis.length() == 0.0 {
                    return Err(CompileError::validation(
                        "coordinate_system.x_axis",
                        "UCS axes must be non-zero vectors",
                    ));
                }
                // Parallel axes cannot span a plane
                if x_axis.cross(&y_axis).length() < 1e-9 {
                    return Err(CompileError::validation(
                        "coordinate_system.y_axis",
                        "UCS axes must not be parallel",
                    ));
                }
                TransformKind::Ucs {
                    origin,
                    x_axis,
                    y_axis,
                }
            }
            other => {
                return Err(CompileError::validation(
                    "coordinate_system.transform_type",
                    format!(
                        "unknown transform type '{other}' (expected translate, rotate, scale, or ucs)"
                    ),
                ))
            }
        };

        Ok(CoordinateSystem { common, kind })
    }
}
