//! Polyline entity (2D or 3D)

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// Bounds on polyline vertex count
pub const MIN_POINTS: usize = 2;
pub const MAX_POINTS: usize = 10_000;

/// A polyline with 2 to 10,000 vertices.
///
/// All vertices must share the same dimensionality; 2D input is stored
/// with z = 0 and flagged via `is_3d`.
#[derive(Debug, Clone)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices in order
    pub points: Vec<Vector3>,
    /// Whether the input carried 3D vertices
    pub is_3d: bool,
    /// Is the polyline closed?
    pub closed: bool,
}

impl Polyline {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let raw = convert::require(fields, "points", "polyline")?;
        let items = raw
            .as_array()
            .ok_or_else(|| CompileError::malformed("polyline.points", "expected an array of points"))?;
        if items.len() < MIN_POINTS || items.len() > MAX_POINTS {
            return Err(CompileError::validation(
                "polyline.points",
                format!("expected {MIN_POINTS}-{MAX_POINTS} points, got {}", items.len()),
            ));
        }

        let arity = items[0].as_array().map(|a| a.len()).unwrap_or(0);
        let is_3d = match arity {
            2 => false,
            3 => true,
            _ => {
                return Err(CompileError::malformed(
                    "polyline.points[0]",
                    "points must have 2 or 3 components",
                ))
            }
        };

        let mut points = Vec::with_capacity(items.len());
        for (i, item) in items.iter().enumerate() {
            let path = format!("polyline.points[{i}]");
            if item.as_array().map(|a| a.len()) != Some(arity) {
                return Err(CompileError::malformed(
                    path,
                    "mixed 2D and 3D points in one polyline",
                ));
            }
            points.push(if is_3d {
                CoordinateConverter::point3_strict(item, &path)?
            } else {
                CoordinateConverter::point3(item, &path)?
            });
        }

        let closed = convert::boolean_or(fields, "closed", false, "polyline")?;
        Ok(Polyline {
            common,
            points,
            is_3d,
            closed,
        })
    }

    /// Number of vertices
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Result<Polyline> {
        Polyline::from_raw(EntityCommon::new(), value.as_object().unwrap())
    }

    #[test]
    fn test_2d_polyline() {
        let poly = build(json!({
            "points": [[200, 0], [250, 50], [300, 0], [350, 50]],
            "closed": false
        }))
        .unwrap();
        assert!(!poly.is_3d);
        assert_eq!(poly.point_count(), 4);
    }

    #[test]
    fn test_3d_polyline() {
        let poly = build(json!({"points": [[0, 0, 0], [5, 5, 2], [10, 0, 5]]})).unwrap();
        assert!(poly.is_3d);
        assert_eq!(poly.points[1], Vector3::new(5.0, 5.0, 2.0));
    }

    #[test]
    fn test_mixed_arity_rejected() {
        let err = build(json!({"points": [[0, 0], [5, 5, 2]]})).unwrap_err();
        assert!(err.to_string().contains("mixed 2D and 3D"));
    }

    #[test]
    fn test_single_point_rejected() {
        assert!(build(json!({"points": [[0, 0]]})).is_err());
    }
}
