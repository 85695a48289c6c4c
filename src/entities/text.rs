//! Single-line text entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::Result;
use crate::types::Vector3;

/// Maximum length of a single-line text value
pub const MAX_TEXT_LENGTH: usize = 256;

/// Default text height in drawing units when the request omits one
pub const DEFAULT_TEXT_HEIGHT: f64 = 100.0;

/// A single-line text entity
#[derive(Debug, Clone)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Text value
    pub value: String,
    /// Insertion point
    pub position: Vector3,
    /// Text height
    pub height: f64,
}

impl Text {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let value = convert::text(
            convert::require(fields, "text", "text")?,
            "text.text",
            MAX_TEXT_LENGTH,
        )?;
        let position = CoordinateConverter::point3(
            convert::require(fields, "position", "text")?,
            "text.position",
        )?;
        let height =
            convert::optional_positive(fields, "height", "text")?.unwrap_or(DEFAULT_TEXT_HEIGHT);
        Ok(Text {
            common,
            value,
            position,
            height,
        })
    }
}
