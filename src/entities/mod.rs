//! Drawing entity catalog
//!
//! One module per entity kind. Each kind is a struct with a
//! `from_raw` validator/builder: it either returns a fully valid
//! entity or a descriptive error, never a half-built one.

use serde_json::{Map, Value};

use crate::convert;
use crate::error::{CompileError, Result};
use crate::factory::EntityKind;
use crate::types::Color;

pub mod arc;
pub mod attribute;
pub mod circle;
pub mod coordinate_system;
pub mod dimension;
pub mod ellipse;
pub mod hatch;
pub mod layer_state;
pub mod leader;
pub mod line;
pub mod linetype;
pub mod mesh;
pub mod mtext;
pub mod polyline;
pub mod rectangle;
pub mod solid;
pub mod spline;
pub mod text;
pub mod viewport;

pub use arc::Arc;
pub use attribute::{Attribute, AttributeVariant};
pub use circle::Circle;
pub use coordinate_system::{CoordinateSystem, TransformKind};
pub use dimension::{Dimension, DimensionKind};
pub use ellipse::Ellipse;
pub use hatch::Hatch;
pub use layer_state::{LayerState, LayerStateFlags};
pub use leader::Leader;
pub use line::Line;
pub use linetype::Linetype;
pub use mesh::Mesh;
pub use mtext::{MText, MTextAlignment};
pub use polyline::Polyline;
pub use rectangle::Rectangle;
pub use solid::{Solid, SolidShape};
pub use spline::Spline;
pub use text::Text;
pub use viewport::Viewport;

/// Name of the implicit layer used when a request or entity does not
/// declare one
pub const DEFAULT_LAYER: &str = "default";

/// Common entity data shared by all entities
#[derive(Debug, Clone, PartialEq)]
pub struct EntityCommon {
    /// Name of the layer this entity lives on
    pub layer: String,
    /// Color override; ByLayer means inherit from the layer
    pub color: Color,
}

impl EntityCommon {
    /// Create common data on the default layer with layer color
    pub fn new() -> Self {
        EntityCommon {
            layer: DEFAULT_LAYER.to_string(),
            color: Color::ByLayer,
        }
    }

    /// Create common data on a specific layer
    pub fn with_layer(layer: impl Into<String>) -> Self {
        EntityCommon {
            layer: layer.into(),
            ..Self::new()
        }
    }

    /// Parse the shared `layer` and `color` fields of a raw record
    pub(crate) fn from_raw(fields: &Map<String, Value>, kind: &str) -> Result<Self> {
        let layer = match fields.get("layer") {
            None | Some(Value::Null) => DEFAULT_LAYER.to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(_) => {
                return Err(CompileError::validation(
                    format!("{kind}.layer"),
                    "expected a string",
                ))
            }
        };
        let color = match fields.get("color") {
            None | Some(Value::Null) => Color::ByLayer,
            Some(v) => {
                let index = convert::integer(v, &format!("{kind}.color"), 0, 255)?;
                Color::from_request_index(index)
            }
        };
        Ok(EntityCommon { layer, color })
    }
}

impl Default for EntityCommon {
    fn default() -> Self {
        Self::new()
    }
}

/// Tagged union over the full entity catalog.
///
/// The exhaustive matches below (and in the factory) are the reason
/// the catalog is a closed sum type: adding a kind without handling it
/// everywhere is a compile error, not a runtime surprise.
#[derive(Debug, Clone)]
pub enum Entity {
    /// Rectangle entity (4 ordered corners)
    Rectangle(Rectangle),
    /// Circle entity
    Circle(Circle),
    /// Line entity
    Line(Line),
    /// Single-line text entity
    Text(Text),
    /// Arc entity
    Arc(Arc),
    /// Spline entity
    Spline(Spline),
    /// Polyline entity (2D or 3D)
    Polyline(Polyline),
    /// Ellipse entity
    Ellipse(Ellipse),
    /// 3D solid primitive
    Solid(Solid),
    /// Mesh entity
    Mesh(Mesh),
    /// Dimension annotation
    Dimension(Dimension),
    /// Leader annotation
    Leader(Leader),
    /// Hatch fill
    Hatch(Hatch),
    /// Multi-line text block
    MText(MText),
    /// Paper-space viewport
    Viewport(Viewport),
    /// Linetype definition
    Linetype(Linetype),
    /// Layer state override
    LayerState(LayerState),
    /// Block attribute (definition or value)
    Attribute(Attribute),
    /// Coordinate system transform
    CoordinateSystem(CoordinateSystem),
}

impl Entity {
    /// Get the entity's kind discriminator
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Rectangle(_) => EntityKind::Rectangle,
            Entity::Circle(_) => EntityKind::Circle,
            Entity::Line(_) => EntityKind::Line,
            Entity::Text(_) => EntityKind::Text,
            Entity::Arc(_) => EntityKind::Arc,
            Entity::Spline(_) => EntityKind::Spline,
            Entity::Polyline(_) => EntityKind::Polyline,
            Entity::Ellipse(_) => EntityKind::Ellipse,
            Entity::Solid(_) => EntityKind::Solid,
            Entity::Mesh(_) => EntityKind::Mesh,
            Entity::Dimension(_) => EntityKind::Dimension,
            Entity::Leader(_) => EntityKind::Leader,
            Entity::Hatch(_) => EntityKind::Hatch,
            Entity::MText(_) => EntityKind::MText,
            Entity::Viewport(_) => EntityKind::Viewport,
            Entity::Linetype(_) => EntityKind::Linetype,
            Entity::LayerState(_) => EntityKind::LayerState,
            Entity::Attribute(_) => EntityKind::Attribute,
            Entity::CoordinateSystem(_) => EntityKind::CoordinateSystem,
        }
    }

    /// Get the common data shared by all entity kinds
    pub fn common(&self) -> &EntityCommon {
        match self {
            Entity::Rectangle(e) => &e.common,
            Entity::Circle(e) => &e.common,
            Entity::Line(e) => &e.common,
            Entity::Text(e) => &e.common,
            Entity::Arc(e) => &e.common,
            Entity::Spline(e) => &e.common,
            Entity::Polyline(e) => &e.common,
            Entity::Ellipse(e) => &e.common,
            Entity::Solid(e) => &e.common,
            Entity::Mesh(e) => &e.common,
            Entity::Dimension(e) => &e.common,
            Entity::Leader(e) => &e.common,
            Entity::Hatch(e) => &e.common,
            Entity::MText(e) => &e.common,
            Entity::Viewport(e) => &e.common,
            Entity::Linetype(e) => &e.common,
            Entity::LayerState(e) => &e.common,
            Entity::Attribute(e) => &e.common,
            Entity::CoordinateSystem(e) => &e.common,
        }
    }

    /// Name of the layer this entity lives on
    pub fn layer(&self) -> &str {
        &self.common().layer
    }

    /// Effective color setting
    pub fn color(&self) -> Color {
        self.common().color
    }
}
