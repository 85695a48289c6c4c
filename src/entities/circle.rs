//! Circle entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::Result;
use crate::types::Vector3;

/// A circle entity
#[derive(Debug, Clone)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius, strictly positive
    pub radius: f64,
}

impl Circle {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let center =
            CoordinateConverter::point3(convert::require(fields, "center", "circle")?, "circle.center")?;
        let radius = convert::positive(convert::require(fields, "radius", "circle")?, "circle.radius")?;
        Ok(Circle {
            common,
            center,
            radius,
        })
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Get the area of the circle
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}
