//! Rectangle entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector2;

/// A rectangle defined by 4 ordered corner points
#[derive(Debug, Clone)]
pub struct Rectangle {
    /// Common entity data
    pub common: EntityCommon,
    /// Corner points, in request order
    pub corners: [Vector2; 4],
}

impl Rectangle {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let raw = convert::require(fields, "points", "rectangle")?;
        let points = CoordinateConverter::points2(raw, "rectangle.points")?;
        if points.len() != 4 {
            return Err(CompileError::validation(
                "rectangle.points",
                format!("expected exactly 4 corner points, got {}", points.len()),
            ));
        }
        Ok(Rectangle {
            common,
            corners: [points[0], points[1], points[2], points[3]],
        })
    }

    /// Perimeter length, following the corner order
    pub fn perimeter(&self) -> f64 {
        let c = &self.corners;
        c[0].distance(&c[1]) + c[1].distance(&c[2]) + c[2].distance(&c[3]) + c[3].distance(&c[0])
    }
}
