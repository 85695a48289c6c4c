//! Spline entity (NURBS-style control point curve)

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// Bounds on spline control point count
pub const MIN_CONTROL_POINTS: usize = 2;
pub const MAX_CONTROL_POINTS: usize = 1000;

/// A spline entity
#[derive(Debug, Clone)]
pub struct Spline {
    /// Common entity data
    pub common: EntityCommon,
    /// Control points (2..=1000)
    pub control_points: Vec<Vector3>,
    /// Degree of the curve (1..=10, typically 3 for cubic)
    pub degree: i32,
    /// Is the spline closed?
    pub closed: bool,
}

impl Spline {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let control_points = CoordinateConverter::points3(
            convert::require(fields, "control_points", "spline")?,
            "spline.control_points",
        )?;
        if control_points.len() < MIN_CONTROL_POINTS || control_points.len() > MAX_CONTROL_POINTS {
            return Err(CompileError::validation(
                "spline.control_points",
                format!(
                    "expected {MIN_CONTROL_POINTS}-{MAX_CONTROL_POINTS} control points, got {}",
                    control_points.len()
                ),
            ));
        }
        let degree = match fields.get("degree") {
            // A degree-n curve needs n+1 control points; the implicit
            // cubic degrades for short point lists
            None | Some(Value::Null) => 3.min(control_points.len() as i32 - 1),
            Some(v) => {
                let degree = convert::integer(v, "spline.degree", 1, 10)? as i32;
                if control_points.len() <= degree as usize {
                    return Err(CompileError::validation(
                        "spline.degree",
                        format!(
                            "degree {degree} requires at least {} control points, got {}",
                            degree + 1,
                            control_points.len()
                        ),
                    ));
                }
                degree
            }
        };
        let closed = convert::boolean_or(fields, "closed", false, "spline")?;
        Ok(Spline {
            common,
            control_points,
            degree,
            closed,
        })
    }

    /// Get the number of control points
    pub fn control_point_count(&self) -> usize {
        self.control_points.len()
    }
}
