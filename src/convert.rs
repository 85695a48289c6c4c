//! Conversion from raw JSON values to validated geometry and scalars
//!
//! Every function here is total and pure: it either produces a fully
//! typed value or an error naming the offending field path. Nothing is
//! silently coerced; numeric strings and nulls are rejected.

use serde_json::{Map, Value};

use crate::error::{CompileError, Result};
use crate::types::{Vector2, Vector3};

/// Converts loosely-typed numeric input into validated 2D/3D points
pub struct CoordinateConverter;

impl CoordinateConverter {
    /// Convert a `[x, y]` array into a 2D point
    pub fn point2(raw: &Value, path: &str) -> Result<Vector2> {
        let c = components(raw, path, 2, 2)?;
        Ok(Vector2::new(c[0], c[1]))
    }

    /// Convert a `[x, y]` or `[x, y, z]` array into a 3D point.
    ///
    /// A missing z component defaults to 0.
    pub fn point3(raw: &Value, path: &str) -> Result<Vector3> {
        let c = components(raw, path, 2, 3)?;
        Ok(Vector3::new(c[0], c[1], c.get(2).copied().unwrap_or(0.0)))
    }

    /// Convert a `[x, y, z]` array into a 3D point, rejecting 2D input
    pub fn point3_strict(raw: &Value, path: &str) -> Result<Vector3> {
        let c = components(raw, path, 3, 3)?;
        Ok(Vector3::new(c[0], c[1], c[2]))
    }

    /// Convert an array of 2D points
    pub fn points2(raw: &Value, path: &str) -> Result<Vec<Vector2>> {
        let items = raw
            .as_array()
            .ok_or_else(|| CompileError::malformed(path, "expected an array of points"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, v)| Self::point2(v, &format!("{path}[{i}]")))
            .collect()
    }

    /// Convert an array of 2D or 3D points into 3D points
    pub fn points3(raw: &Value, path: &str) -> Result<Vec<Vector3>> {
        let items = raw
            .as_array()
            .ok_or_else(|| CompileError::malformed(path, "expected an array of points"))?;
        items
            .iter()
            .enumerate()
            .map(|(i, v)| Self::point3(v, &format!("{path}[{i}]")))
            .collect()
    }
}

fn component(raw: &Value, path: &str) -> Result<f64> {
    let n = raw
        .as_f64()
        .ok_or_else(|| CompileError::malformed(path, "component is not a number"))?;
    if !n.is_finite() {
        return Err(CompileError::malformed(path, "component is not finite"));
    }
    Ok(n)
}

fn components(raw: &Value, path: &str, min: usize, max: usize) -> Result<Vec<f64>> {
    let items = raw
        .as_array()
        .ok_or_else(|| CompileError::malformed(path, "expected an array of coordinates"))?;
    if items.len() < min || items.len() > max {
        return Err(CompileError::malformed(
            path,
            format!("expected {min}-{max} components, got {}", items.len()),
        ));
    }
    items
        .iter()
        .enumerate()
        .map(|(i, v)| component(v, &format!("{path}[{i}]")))
        .collect()
}

/// Look up a required field in a raw entity record
pub(crate) fn require<'a>(fields: &'a Map<String, Value>, key: &str, kind: &str) -> Result<&'a Value> {
    fields
        .get(key)
        .filter(|v| !v.is_null())
        .ok_or_else(|| CompileError::validation(format!("{kind}.{key}"), "missing required field"))
}

/// Parse a finite number
pub(crate) fn finite(raw: &Value, path: &str) -> Result<f64> {
    let n = raw
        .as_f64()
        .ok_or_else(|| CompileError::validation(path, "expected a number"))?;
    if !n.is_finite() {
        return Err(CompileError::validation(path, "value is not finite"));
    }
    Ok(n)
}

/// Parse a strictly positive finite number
pub(crate) fn positive(raw: &Value, path: &str) -> Result<f64> {
    let n = finite(raw, path)?;
    if n <= 0.0 {
        return Err(CompileError::validation(
            path,
            format!("must be positive, got {n}"),
        ));
    }
    Ok(n)
}

/// Parse an angle in degrees, limited to one full turn either way
pub(crate) fn angle_degrees(raw: &Value, path: &str) -> Result<f64> {
    let n = finite(raw, path)?;
    if !(-360.0..=360.0).contains(&n) {
        return Err(CompileError::validation(
            path,
            format!("angle must be within -360..=360 degrees, got {n}"),
        ));
    }
    Ok(n)
}

/// Parse an integer within an inclusive range.
///
/// Whole-valued floats (`3.0`) are accepted since JSON producers do
/// not always distinguish them from integers.
pub(crate) fn integer(raw: &Value, path: &str, min: i64, max: i64) -> Result<i64> {
    let n = if let Some(i) = raw.as_i64() {
        i
    } else if let Some(f) = raw.as_f64() {
        if f.is_finite() && f.fract() == 0.0 {
            f as i64
        } else {
            return Err(CompileError::validation(path, "expected an integer"));
        }
    } else {
        return Err(CompileError::validation(path, "expected an integer"));
    };
    if n < min || n > max {
        return Err(CompileError::validation(
            path,
            format!("must be within {min}..={max}, got {n}"),
        ));
    }
    Ok(n)
}

/// Parse a non-empty string with a length cap
pub(crate) fn text(raw: &Value, path: &str, max_len: usize) -> Result<String> {
    let s = raw
        .as_str()
        .ok_or_else(|| CompileError::validation(path, "expected a string"))?;
    if s.is_empty() {
        return Err(CompileError::validation(path, "must not be empty"));
    }
    if s.chars().count() > max_len {
        return Err(CompileError::validation(
            path,
            format!("length exceeds {max_len} characters"),
        ));
    }
    Ok(s.to_string())
}

/// Parse an optional boolean, falling back to a default when absent
pub(crate) fn boolean_or(
    fields: &Map<String, Value>,
    key: &str,
    default: bool,
    kind: &str,
) -> Result<bool> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(b)) => Ok(*b),
        Some(_) => Err(CompileError::validation(
            format!("{kind}.{key}"),
            "expected a boolean",
        )),
    }
}

/// Parse an optional bounded string
pub(crate) fn optional_text(
    fields: &Map<String, Value>,
    key: &str,
    max_len: usize,
    kind: &str,
) -> Result<Option<String>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => text(v, &format!("{kind}.{key}"), max_len).map(Some),
    }
}

/// Parse an optional strictly positive number
pub(crate) fn optional_positive(
    fields: &Map<String, Value>,
    key: &str,
    kind: &str,
) -> Result<Option<f64>> {
    match fields.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => positive(v, &format!("{kind}.{key}")).map(Some),
    }
}
