//! Entity factory: discriminator-tag dispatch to validator/builders
//!
//! This is the single place new entity kinds are registered. The
//! matches below are exhaustive over [`EntityKind`], so adding a
//! variant without wiring its builder fails to compile.

use serde_json::Value;

use crate::entities::{
    Arc, Attribute, Circle, CoordinateSystem, Dimension, Ellipse, Entity, EntityCommon, Hatch,
    LayerState, Leader, Line, Linetype, Mesh, MText, Polyline, Rectangle, Solid, Spline, Text,
    Viewport,
};
use crate::error::{CompileError, Result};

/// Discriminator over the full entity catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Rectangle,
    Circle,
    Line,
    Text,
    Arc,
    Spline,
    Polyline,
    Ellipse,
    Solid,
    Mesh,
    Dimension,
    Leader,
    Hatch,
    MText,
    Viewport,
    Linetype,
    LayerState,
    Attribute,
    CoordinateSystem,
}

impl EntityKind {
    /// All recognized kinds, in catalog order
    pub const ALL: [EntityKind; 19] = [
        EntityKind::Rectangle,
        EntityKind::Circle,
        EntityKind::Line,
        EntityKind::Text,
        EntityKind::Arc,
        EntityKind::Spline,
        EntityKind::Polyline,
        EntityKind::Ellipse,
        EntityKind::Solid,
        EntityKind::Mesh,
        EntityKind::Dimension,
        EntityKind::Leader,
        EntityKind::Hatch,
        EntityKind::MText,
        EntityKind::Viewport,
        EntityKind::Linetype,
        EntityKind::LayerState,
        EntityKind::Attribute,
        EntityKind::CoordinateSystem,
    ];

    /// Resolve a request discriminator tag
    pub fn from_tag(tag: &str) -> Option<EntityKind> {
        match tag {
            "rectangle" => Some(EntityKind::Rectangle),
            "circle" => Some(EntityKind::Circle),
            "line" => Some(EntityKind::Line),
            "text" => Some(EntityKind::Text),
            "arc" => Some(EntityKind::Arc),
            "spline" => Some(EntityKind::Spline),
            "polyline" => Some(EntityKind::Polyline),
            "ellipse" => Some(EntityKind::Ellipse),
            "solid" => Some(EntityKind::Solid),
            "mesh" => Some(EntityKind::Mesh),
            "dimension" => Some(EntityKind::Dimension),
            "leader" => Some(EntityKind::Leader),
            "hatch" => Some(EntityKind::Hatch),
            "mtext" => Some(EntityKind::MText),
            "viewport" => Some(EntityKind::Viewport),
            "linetype" => Some(EntityKind::Linetype),
            "layer_state" => Some(EntityKind::LayerState),
            "attribute" => Some(EntityKind::Attribute),
            "coordinate_system" => Some(EntityKind::CoordinateSystem),
            _ => None,
        }
    }

    /// The request discriminator tag for this kind
    pub fn as_tag(&self) -> &'static str {
        match self {
            EntityKind::Rectangle => "rectangle",
            EntityKind::Circle => "circle",
            EntityKind::Line => "line",
            EntityKind::Text => "text",
            EntityKind::Arc => "arc",
            EntityKind::Spline => "spline",
            EntityKind::Polyline => "polyline",
            EntityKind::Ellipse => "ellipse",
            EntityKind::Solid => "solid",
            EntityKind::Mesh => "mesh",
            EntityKind::Dimension => "dimension",
            EntityKind::Leader => "leader",
            EntityKind::Hatch => "hatch",
            EntityKind::MText => "mtext",
            EntityKind::Viewport => "viewport",
            EntityKind::Linetype => "linetype",
            EntityKind::LayerState => "layer_state",
            EntityKind::Attribute => "attribute",
            EntityKind::CoordinateSystem => "coordinate_system",
        }
    }
}

/// All recognized discriminator tags
pub fn supported_types() -> Vec<&'static str> {
    EntityKind::ALL.iter().map(EntityKind::as_tag).collect()
}

/// Validate a raw entity record and build the corresponding entity.
///
/// Fails with [`CompileError::UnknownEntityType`] for unrecognized
/// tags; all other failures identify the offending field path.
pub fn build_entity(raw: &Value) -> Result<Entity> {
    let fields = raw.as_object().ok_or_else(|| {
        CompileError::validation("figure", "entity must be a JSON object")
    })?;
    let tag = fields
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            CompileError::validation("figure.type", "missing or non-string 'type' discriminator")
        })?;
    let kind = EntityKind::from_tag(tag)
        .ok_or_else(|| CompileError::UnknownEntityType(tag.to_string()))?;
    let common = EntityCommon::from_raw(fields, tag)?;

    tracing::debug!(entity_type = tag, layer = %common.layer, "dispatching entity");

    let entity = match kind {
        EntityKind::Rectangle => Entity::Rectangle(Rectangle::from_raw(common, fields)?),
        EntityKind::Circle => Entity::Circle(Circle::from_raw(common, fields)?),
        EntityKind::Line => Entity::Line(Line::from_raw(common, fields)?),
        EntityKind::Text => Entity::Text(Text::from_raw(common, fields)?),
        EntityKind::Arc => Entity::Arc(Arc::from_raw(common, fields)?),
        EntityKind::Spline => Entity::Spline(Spline::from_raw(common, fields)?),
        EntityKind::Polyline => Entity::Polyline(Polyline::from_raw(common, fields)?),
        EntityKind::Ellipse => Entity::Ellipse(Ellipse::from_raw(common, fields)?),
        EntityKind::Solid => Entity::Solid(Solid::from_raw(common, fields)?),
        EntityKind::Mesh => Entity::Mesh(Mesh::from_raw(common, fields)?),
        EntityKind::Dimension => Entity::Dimension(Dimension::from_raw(common, fields)?),
        EntityKind::Leader => Entity::Leader(Leader::from_raw(common, fields)?),
        EntityKind::Hatch => Entity::Hatch(Hatch::from_raw(common, fields)?),
        EntityKind::MText => Entity::MText(MText::from_raw(common, fields)?),
        EntityKind::Viewport => Entity::Viewport(Viewport::from_raw(common, fields)?),
        EntityKind::Linetype => Entity::Linetype(Linetype::from_raw(common, fields)?),
        EntityKind::LayerState => Entity::LayerState(LayerState::from_raw(common, fields)?),
        EntityKind::Attribute => Entity::Attribute(Attribute::from_raw(common, fields)?),
        EntityKind::CoordinateSystem => {
            Entity::CoordinateSystem(CoordinateSystem::from_raw(common, fields)?)
        }
    };
    Ok(entity)
}
