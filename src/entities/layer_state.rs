//! Layer state override entity

use bitflags::bitflags;
use serde_json::{Map, Value};

use super::EntityCommon;
use crate::convert;
use crate::error::Result;

bitflags! {
    /// State overrides applied to the referenced layer
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct LayerStateFlags: u8 {
        /// Layer is hidden (not visible)
        const HIDDEN = 0b001;
        /// Layer is frozen
        const FROZEN = 0b010;
        /// Layer is locked
        const LOCKED = 0b100;
    }
}

/// A state override for the layer this entity references.
///
/// The target layer is the entity's own `layer` field; request-level
/// validation guarantees it exists.
#[derive(Debug, Clone)]
pub struct LayerState {
    /// Common entity data; `common.layer` is the override target
    pub common: EntityCommon,
    /// Visibility/frozen/locked overrides
    pub flags: LayerStateFlags,
    /// Optional lineweight override in hundredths of a millimeter
    pub lineweight: Option<i32>,
}

impl LayerState {
    /// Validate and build from a raw record
    pub(crate) fn from_raw(common: EntityCommon, fields: &Map<String, Value>) -> Result<Self> {
        let visible = convert::boolean_or(fields, "visible", true, "layer_state")?;
        let frozen = convert::boolean_or(fields, "frozen", false, "layer_state")?;
        let locked = convert::boolean_or(fields, "locked", false, "layer_state")?;

        let mut flags = LayerStateFlags::empty();
        flags.set(LayerStateFlags::HIDDEN, !visible);
        flags.set(LayerStateFlags::FROZEN, frozen);
        flags.set(LayerStateFlags::LOCKED, locked);

        let lineweight = match fields.get("lineweight") {
            None | Some(Value::Null) => None,
            Some(v) => Some(convert::integer(v, "layer_state.lineweight", 0, 211)? as i32),
        };

        Ok(LayerState {
            common,
            flags,
            lineweight,
        })
    }

    /// Check if the layer is hidden by this override
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(LayerStateFlags::HIDDEN)
    }

    /// Check if the layer is frozen by this override
    pub fn is_frozen(&self) -> bool {
        self.flags.contains(LayerStateFlags::FROZEN)
    }

    /// Check if the layer is locked by this override
    pub fn is_locked(&self) -> bool {
        self.flags.contains(LayerStateFlags::LOCKED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value) -> Result<LayerState> {
        LayerState::from_raw(EntityCommon::new(), value.as_object().unwrap())
    }

    #[test]
    fn test_defaults_are_visible_thawed_unlocked() {
        let state = build(json!({})).unwrap();
        assert!(!state.is_hidden());
        assert!(!state.is_frozen());
        assert!(!state.is_locked());
        assert!(state.lineweight.is_none());
    }

    #[test]
    fn test_overrides_applied() {
        let state = build(json!({
            "visible": false, "frozen": true, "locked": true, "lineweight": 50
        }))
        .unwrap();
        assert!(state.is_hidden());
        assert!(state.is_frozen());
        assert!(state.is_locked());
        assert_eq!(state.lineweight, Some(50));
    }

    #[test]
    fn test_lineweight_out_of_range_rejected() {
        assert!(build(json!({"lineweight": 212})).is_err());
        assert!(build(json!({"lineweight": -1})).is_err());
    }
}
