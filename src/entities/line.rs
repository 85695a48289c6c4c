//! Line entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::Result;
use crate::types::Vector3;

/// A straight line segment
#[derive(Debug, Clone)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector3,
    /// End point
    pub end: Vector3,
}

impl Line {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let start =
            CoordinateConverter::point3(convert::require(fields, "start", "line")?, "line.start")?;
        let end = CoordinateConverter::point3(convert::require(fields, "end", "line")?, "line.end")?;
        Ok(Line { common, start, end })
    }

    /// Length of the segment
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }
}
