//! 3D solid primitive entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// The supported solid primitive shapes
#[derive(Debug, Clone)]
pub enum SolidShape {
    /// Axis-aligned box between two opposite corners
    Box { corner1: Vector3, corner2: Vector3 },
    /// Cylinder along the Z axis
    Cylinder {
        center: Vector3,
        radius: f64,
        height: f64,
    },
    /// Sphere
    Sphere { center: Vector3, radius: f64 },
}

/// A 3D solid primitive
#[derive(Debug, Clone)]
pub struct Solid {
    /// Common entity data
    pub common: EntityCommon,
    /// Shape kind and parameters
    pub shape: SolidShape,
}

impl Solid {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let kind = convert::require(fields, "solid_type", "solid")?
            .as_str()
            .ok_or_else(|| CompileError::validation("solid.solid_type", "expected a string"))?;
        let shape = match kind {
            "box" => {
                let corner1 = CoordinateConverter::point3(
                    convert::require(fields, "corner1", "solid")?,
                    "solid.corner1",
                )?;
                let corner2 = CoordinateConverter::point3(
                    convert::require(fields, "corner2", "solid")?,
                    "solid.corner2",
                )?;
                if corner1 == corner2 {
                    return Err(CompileError::validation(
                        "solid.corner2",
                        "box corners must differ",
                    ));
                }
                SolidShape::Box { corner1, corner2 }
            }
            "cylinder" => SolidShape::Cylinder {
                center: CoordinateConverter::point3(
                    convert::require(fields, "center", "solid")?,
                    "solid.center",
                )?,
                radius: convert::positive(
                    convert::require(fields, "radius", "solid")?,
                    "solid.radius",
                )?,
                height: convert::positive(
                    convert::require(fields, "height", "solid")?,
                    "solid.height",
                )?,
            },
            "sphere" => SolidShape::Sphere {
                center: CoordinateConverter::point3(
                    convert::require(fields, "center", "solid")?,
                    "solid.center",
                )?,
                radius: convert::positive(
                    convert::require(fields, "radius", "solid")?,
                    "solid.radius",
                )?,
            },
            other => {
                return Err(CompileError::validation(
                    "solid.solid_type",
                    format!("unknown solid type '{other}' (expected box, cylinder, or sphere)"),
                ))
            }
        };
        Ok(Solid { common, shape })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Result<Solid> {
        Solid::from_raw(EntityCommon::new(), value.as_object().unwrap())
    }

    #[test]
    fn test_box() {
        let solid = build(json!({
            "solid_type": "box", "corner1": [0, 300, 0], "corner2": [50, 350, 50]
        }))
        .unwrap();
        assert!(matches!(solid.shape, SolidShape::Box { .. }));
    }

    #[test]
    fn test_cylinder_requires_positive_height() {
        assert!(build(json!({
            "solid_type": "cylinder", "center": [0, 0, 0], "radius": 5, "height": -1
        }))
        .is_err());
    }

    #[test]
    fn test_sphere() {
        assert!(build(json!({
            "solid_type": "sphere", "center": [0, 0, 0], "radius": 3
        }))
        .is_ok());
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let err = build(json!({"solid_type": "cone"})).unwrap_err();
        assert!(err.to_string().contains("cone"));
    }

    #[test]
    fn test_degenerate_box_rejected() {
        assert!(build(json!({
            "solid_type": "box", "corner1": [1, 1, 1], "corner2": [1, 1, 1]
        }))
        .is_err());
    }
}
