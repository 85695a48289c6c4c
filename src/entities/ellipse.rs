//! Ellipse entity

use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert::{self, CoordinateConverter};
use crate::error::{CompileError, Result};
use crate::types::Vector3;

/// An ellipse defined by center, major-axis vector, and minor/major
/// axis ratio
#[derive(Debug, Clone)]
pub struct Ellipse {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector3,
    /// Major axis endpoint relative to the center
    pub major_axis: Vector3,
    /// Ratio of minor to major axis, in (0, 1]
    pub ratio: f64,
}

impl Ellipse {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let center = CoordinateConverter::point3(
            convert::require(fields, "center", "ellipse")?,
            "ellipse.center",
        )?;
        let major_axis = CoordinateConverter::point3(
            convert::require(fields, "major_axis", "ellipse")?,
            "ellipse.major_axis",
        )?;
        if major_axis.length() == 0.0 {
            return Err(CompileError::validation(
                "ellipse.major_axis",
                "major axis vector must be non-zero",
            ));
        }
        let ratio = convert::finite(convert::require(fields, "ratio", "ellipse")?, "ellipse.ratio")?;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(CompileError::validation(
                "ellipse.ratio",
                format!("ratio must be within (0, 1], got {ratio}"),
            ));
        }
        Ok(Ellipse {
            common,
            center,
            major_axis,
            ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Result<Ellipse> {
        Ellipse::from_raw(EntityCommon::new(), value.as_object().unwrap())
    }

    #[test]
    fn test_valid_ellipse() {
        let ellipse = build(json!({
            "center": [100, 200], "major_axis": [50, 0], "ratio": 0.6
        }))
        .unwrap();
        assert_eq!(ellipse.major_axis.length(), 50.0);
    }

    #[test]
    fn test_full_ratio_accepted() {
        assert!(build(json!({"center": [0, 0], "major_axis": [1, 0], "ratio": 1.0})).is_ok());
    }

    #[test]
    fn test_zero_ratio_rejected() {
        assert!(build(json!({"center": [0, 0], "major_axis": [1, 0], "ratio": 0})).is_err());
    }

    #[test]
    fn test_ratio_above_one_rejected() {
        assert!(build(json!({"center": [0, 0], "major_axis": [1, 0], "ratio": 1.5})).is_err());
    }

    #[test]
    fn test_zero_axis_rejected() {
        let err = build(json!({"center": [0, 0], "major_axis": [0, 0], "ratio": 0.5})).unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }
}
