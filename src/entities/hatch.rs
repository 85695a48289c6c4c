//! Hatch fill entity

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector2;

/// Bounds on hatch boundary point count
pub const MIN_BOUNDARY_POINTS: usize = 3;
pub const MAX_BOUNDARY_POINTS: usize = 1000;

/// The fixed set of recognized hatch pattern names
static HATCH_PATTERNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "SOLID", "ANSI31", "ANSI32", "ANSI33", "ANSI34", "ANSI35", "ANSI36", "ANSI37", "ANSI38",
        "LINE", "NET", "NET3", "DOTS", "CROSS", "GRASS", "BRICK", "EARTH",
    ]
    .into_iter()
    .collect()
});

/// Check whether a pattern name belongs to the recognized set
pub fn is_known_pattern(name: &str) -> bool {
    HATCH_PATTERNS.contains(name)
}

/// A hatch fill over a closed polygonal boundary
#[derive(Debug, Clone)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Boundary polygon points (3..=1000)
    pub boundary: Vec<Vector2>,
    /// Pattern name from the fixed set
    pub pattern: String,
    /// Pattern scale factor
    pub pattern_scale: f64,
    /// Pattern rotation angle in degrees
    pub pattern_angle: f64,
}

impl Hatch {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let boundary = CoordinateConverter::points2(
            convert::require(fields, "boundary", "hatch")?,
            "hatch.boundary",
        )?;
        if boundary.len() < MIN_BOUNDARY_POINTS || boundary.len() > MAX_BOUNDARY_POINTS {
            return Err(CompileError::validation(
                "hatch.boundary",
                format!(
                    "expected {MIN_BOUNDARY_POINTS}-{MAX_BOUNDARY_POINTS} boundary points, got {}",
                    boundary.len()
                ),
            ));
        }
        let pattern = convert::require(fields, "pattern", "hatch")?
            .as_str()
            .ok_or_else(|| CompileError::validation("hatch.pattern", "expected a string"))?
            .to_string();
        if !is_known_pattern(&pattern) {
            return Err(CompileError::validation(
                "hatch.pattern",
                format!("unknown hatch pattern '{pattern}'"),
            ));
        }
        let pattern_scale =
            convert::optional_positive(fields, "pattern_scale", "hatch")?.unwrap_or(1.0);
        let pattern_angle = match fields.get("pattern_angle") {
            None | Some(Value::Null) => 0.0,
            Some(v) => convert::angle_degrees(v, "hatch.pattern_angle")?,
        };
        Ok(Hatch {
            common,
            boundary,
            pattern,
            pattern_scale,
            pattern_angle,
        })
    }
}
