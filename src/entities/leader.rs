//! Leader annotation entity

use serde_json::{Map, Value};

use super::text::MAX_TEXT_LENGTH;
use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// Bounds on leader vertex count
pub const MIN_VERTICES: usize = 2;
pub const MAX_VERTICES: usize = 10;

/// A leader line with an optional annotation text
#[derive(Debug, Clone)]
pub struct Leader {
    /// Common entity data
    pub common: EntityCommon,
    /// Leader vertices (2..=10)
    pub vertices: Vec<Vector3>,
    /// Optional annotation text at the last vertex
    pub text: Option<String>,
    /// Optional annotation text height
    pub text_height: Option<f64>,
}

impl Leader {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let vertices = CoordinateConverter::points3(
            convert::require(fields, "vertices", "leader")?,
            "leader.vertices",
        )?;
        if vertices.len() < MIN_VERTICES || vertices.len() > MAX_VERTICES {
            return Err(CompileError::validation(
                "leader.vertices",
                format!("expected {MIN_VERTICES}-{MAX_VERTICES} vertices, got {}", vertices.len()),
            ));
        }
        let text = convert::optional_text(fields, "text", MAX_TEXT_LENGTH, "leader")?;
        let text_height = convert::optional_positive(fields, "text_height", "leader")?;
        Ok(Leader {
            common,
            vertices,
            text,
            text_height,
        })
    }
}
