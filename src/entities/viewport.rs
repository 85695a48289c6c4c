//! Paper-space viewport entity

use serde_json::{Map, Value};

use super::text::MAX_TEXT_LENGTH;
use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::Result;
use crate::types::Vector2;

/// A rectangular viewport with an optional label
#[derive(Debug, Clone)]
pub struct Viewport {
    /// Common entity data
    pub common: EntityCommon,
    /// Center of the viewport
    pub center: Vector2,
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// Optional label drawn with the viewport
    pub label: Option<String>,
}

impl Viewport {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let center = CoordinateConverter::point2(
            convert::require(fields, "center", "viewport")?,
            "viewport.center",
        )?;
        let width = convert::positive(
            convert::require(fields, "width", "viewport")?,
            "viewport.width",
        )?;
        let height = convert::positive(
            convert::require(fields, "height", "viewport")?,
            "viewport.height",
        )?;
        let label = convert::optional_text(fields, "label", MAX_TEXT_LENGTH, "viewport")?;
        Ok(Viewport {
            common,
            center,
            width,
            height,
            label,
        })
    }
}
