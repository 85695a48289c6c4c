//! Block attribute entity (definition or value)

use serde_json::{Map, Value};

use super::text::MAX_TEXT_LENGTH;
use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// The two attribute variants the request contract distinguishes
#[derive(Debug, Clone)]
pub enum AttributeVariant {
    /// Attribute definition (template with prompt and default)
    Definition {
        prompt: Option<String>,
        default_value: Option<String>,
    },
    /// Attribute value (a filled-in instance)
    Value { value: String },
}

/// A block attribute
#[derive(Debug, Clone)]
pub struct Attribute {
    /// Common entity data
    pub common: EntityCommon,
    /// Attribute tag, a whitespace-free identifier
    pub tag: String,
    /// Insertion point
    pub position: Vector3,
    /// Definition or value payload
    pub variant: AttributeVariant,
}

impl Attribute {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let tag = convert::text(
            convert::require(fields, "tag", "attribute")?,
            "attribute.tag",
            MAX_TEXT_LENGTH,
        )?;
        if tag.chars().any(char::is_whitespace) {
            return Err(CompileError::validation(
                "attribute.tag",
                "tag must not contain whitespace",
            ));
        }
        let position = CoordinateConverter::point3(
            convert::require(fields, "position", "attribute")?,
            "attribute.position",
        )?;

        let kind = convert::require(fields, "attribute_type", "attribute")?
            .as_str()
            .ok_or_else(|| CompileError::validation("attribute.attribute_type", "expected a string"))?;
        let variant = match kind {
            "definition" => AttributeVariant::Definition {
                prompt: convert::optional_text(fields, "prompt", MAX_TEXT_LENGTH, "attribute")?,
                default_value: convert::optional_text(
                    fields,
                    "default_value",
                    MAX_TEXT_LENGTH,
                    "attribute",
                )?,
            },
            "value" => AttributeVariant::Value {
                value: convert::text(
                    convert::require(fields, "value", "attribute")?,
                    "attribute.value",
                    MAX_TEXT_LENGTH,
                )?,
            },
            other => {
                return Err(CompileError::validation(
                    "attribute.attribute_type",
                    format!("unknown attribute type '{other}' (expected definition or value)"),
                ))
            }
        };

        Ok(Attribute {
            common,
            tag,
            position,
            variant,
        })
    }
}
