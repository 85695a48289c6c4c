//! Linetype definition entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert;
use crate::document::is_valid_name;
use crate::error::{CompileError, Result};

/// Maximum number of dash pattern elements
pub const MAX_PATTERN_ELEMENTS: usize = 12;

/// A custom linetype definition.
///
/// Dash pattern elements follow DXF convention: positive lengths are
/// dashes, negative lengths are gaps, zero is a dot.
#[derive(Debug, Clone)]
pub struct Linetype {
    /// Common entity data
    pub common: EntityCommon,
    /// Linetype name, same rules as layer names
    pub name: String,
    /// Dash pattern lengths
    pub pattern: Vec<f64>,
}

impl Linetype {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let name = convert::require(fields, "linetype_name", "linetype")?
            .as_str()
            .ok_or_else(|| CompileError::validation("linetype.linetype_name", "expected a string"))?
            .to_string();
        if !is_valid_name(&name) {
            return Err(CompileError::validation(
                "linetype.linetype_name",
                format!("invalid linetype name '{name}'"),
            ));
        }

        let raw_pattern = convert::require(fields, "linetype_pattern", "linetype")?
            .as_array()
            .ok_or_else(|| {
                CompileError::validation("linetype.linetype_pattern", "expected an array of numbers")
            })?;
        if raw_pattern.is_empty() || raw_pattern.len() > MAX_PATTERN_ELEMENTS {
            return Err(CompileError::validation(
                "linetype.linetype_pattern",
                format!(
                    "expected 1-{MAX_PATTERN_ELEMENTS} pattern elements, got {}",
                    raw_pattern.len()
                ),
            ));
        }
        let mut pattern = Vec::with_capacity(raw_pattern.len());
        for (i, raw) in raw_pattern.iter().enumerate() {
            pattern.push(convert::finite(raw, &format!("linetype.linetype_pattern[{i}]"))?);
        }
        if pattern.iter().all(|&d| d == 0.0) {
            return Err(CompileError::validation(
                "linetype.linetype_pattern",
                "pattern must contain at least one non-zero element",
            ));
        }

        Ok(Linetype {
            common,
            name,
            pattern,
        })
    }
}
