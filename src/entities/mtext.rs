//! Multi-line text entity

use serde_json::{Map, Value};

use super::text::DEFAULT_TEXT_HEIGHT;
use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// Maximum length of a multi-line text value
pub const MAX_MTEXT_LENGTH: usize = 4096;

/// Horizontal alignment of a text block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MTextAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl MTextAlignment {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "LEFT" => Some(MTextAlignment::Left),
            "CENTER" => Some(MTextAlignment::Center),
            "RIGHT" => Some(MTextAlignment::Right),
            _ => None,
        }
    }
}

/// A multi-line text block
#[derive(Debug, Clone)]
pub struct MText {
    /// Common entity data
    pub common: EntityCommon,
    /// Text value, may contain formatting codes
    pub value: String,
    /// Insertion point
    pub position: Vector3,
    /// Text height
    pub height: f64,
    /// Optional reference column width
    pub width: Option<f64>,
    /// Horizontal alignment
    pub alignment: MTextAlignment,
}

impl MText {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let value = convert::text(
            convert::require(fields, "text", "mtext")?,
            "mtext.text",
            MAX_MTEXT_LENGTH,
        )?;
        let position = CoordinateConverter::point3(
            convert::require(fields, "position", "mtext")?,
            "mtext.position",
        )?;
        let height =
            convert::optional_positive(fields, "height", "mtext")?.unwrap_or(DEFAULT_TEXT_HEIGHT);
        let width = convert::optional_positive(fields, "width", "mtext")?;
        let alignment = match fields.get("alignment") {
            None | Some(Value::Null) => MTextAlignment::default(),
            Some(Value::String(s)) => MTextAlignment::from_tag(s).ok_or_else(|| {
                CompileError::validation(
                    "mtext.alignment",
                    format!("unknown alignment '{s}' (expected LEFT, CENTER, or RIGHT)"),
                )
            })?,
            Some(_) => {
                return Err(CompileError::validation("mtext.alignment", "expected a string"))
            }
        };
        Ok(MText {
            common,
            value,
            position,
            height,
            width,
            alignment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Result<MText> {
        MText::from_raw(EntityCommon::new(), value.as_object().unwrap())
    }

    #[test]
    fn test_valid_mtext() {
        let mtext = build(json!({
            "text": "This is multi-line text\\Pwith line breaks",
            "position": [500, 100],
            "height": 120,
            "width": 2000,
            "alignment": "CENTER"
        }))
        .unwrap();
        assert_eq!(mtext.alignment, MTextAlignment::Center);
        assert_eq!(mtext.width, Some(2000.0));
    }

    #[test]
    fn test_alignment_defaults_left() {
        let mtext = build(json!({"text": "note", "position": [0, 0]})).unwrap();
        assert_eq!(mtext.alignment, MTextAlignment::Left);
    }

    #[test]
    fn test_unknown_alignment_rejected() {
        assert!(build(json!({
            "text": "note", "position": [0, 0], "alignment": "JUSTIFIED"
        }))
        .is_err());
    }

    #[test]
    fn test_longer_cap_than_text() {
        // mtext allows values the single-line cap would reject
        let value = "x".repeat(1000);
        assert!(build(json!({"text": value, "position": [0, 0]})).is_ok());
    }
}
