//! Arc entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::Result;
use crate::types::Vector3;

/// A circular arc defined by center, radius, and start/end angles in
/// degrees
#[derive(Debug, Clone)]
pub struct Arc {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Radius, strictly positive
    pub radius: f64,
    /// Start angle in degrees
    pub start_angle: f64,
    /// End angle in degrees
    pub end_angle: f64,
}

impl Arc {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let center =
            CoordinateConverter::point3(convert::require(fields, "center", "arc")?, "arc.center")?;
        let radius = convert::positive(convert::require(fields, "radius", "arc")?, "arc.radius")?;
        let start_angle = convert::angle_degrees(
            convert::require(fields, "start_angle", "arc")?,
            "arc.start_angle",
        )?;
        let end_angle = convert::angle_degrees(
            convert::require(fields, "end_angle", "arc")?,
            "arc.end_angle",
        )?;
        Ok(Arc {
            common,
            center,
            radius,
            start_angle,
            end_angle,
        })
    }
}
