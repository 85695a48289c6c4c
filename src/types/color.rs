//! Color representation for drawing entities
//!
//! Requests carry colors as AutoCAD Color Index (ACI) integers in the
//! range 0-255; entities without an explicit color inherit the layer
//! color.

use std::fmt;

/// An ACI color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Color by layer (index 256)
    #[default]
    ByLayer,
    /// Color by block (index 0)
    ByBlock,
    /// AutoCAD Color Index (1-255)
    Index(u8),
}

impl Color {
    /// Create a color from a raw ACI index
    pub fn from_index(index: i16) -> Self {
        match index {
            0 => Color::ByBlock,
            256 => Color::ByLayer,
            1..=255 => Color::Index(index as u8),
            _ => Color::Index(7), // Default to white
        }
    }

    /// Create a color from the 0-255 range the request contract allows.
    ///
    /// Callers validate the range first; 0 maps to ByBlock per ACI
    /// convention.
    pub fn from_request_index(index: i64) -> Self {
        Color::from_index(index.clamp(0, 255) as i16)
    }

    /// Get the color index
    pub fn index(&self) -> u16 {
        match self {
            Color::ByBlock => 0,
            Color::Index(i) => *i as u16,
            Color::ByLayer => 256,
        }
    }

    /// Common color constants
    pub const RED: Color = Color::Index(1);
    pub const YELLOW: Color = Color::Index(2);
    pub const GREEN: Color = Color::Index(3);
    pub const CYAN: Color = Color::Index(4);
    pub const BLUE: Color = Color::Index(5);
    pub const MAGENTA: Color = Color::Index(6);
    pub const WHITE: Color = Color::Index(7);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::ByLayer => write!(f, "ByLayer"),
            Color::ByBlock => write!(f, "ByBlock"),
            Color::Index(i) => write!(f, "Index({})", i),
        }
    }
}
