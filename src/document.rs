//! In-memory drawing document: layers, blocks, and compiled entities

use indexmap::IndexMap;

use crate::entities::{Entity, DEFAULT_LAYER};
use crate::error::{CompileError, Result};
use crate::types::Color;

/// Maximum length of a layer or block name
pub const MAX_NAME_LENGTH: usize = 255;

/// Check a layer/block/linetype name: ASCII alphanumerics, underscores
/// and hyphens, non-empty, at most [`MAX_NAME_LENGTH`] characters.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_NAME_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// A drawing layer
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    /// Layer name, unique within a document
    pub name: String,
    /// Default color for entities on this layer
    pub color: Color,
}

impl Layer {
    /// Create a layer with the default color (white)
    pub fn new(name: impl Into<String>) -> Self {
        Layer {
            name: name.into(),
            color: Color::WHITE,
        }
    }

    /// Create a layer with an explicit color
    pub fn with_color(name: impl Into<String>, color: Color) -> Self {
        Layer {
            name: name.into(),
            color,
        }
    }
}

/// A named group of entities, compiled once and insertable by name
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// Block name, unique within a document
    pub name: String,
    /// Entities the block contains
    pub entities: Vec<Entity>,
}

impl Block {
    /// Create an empty block
    pub fn new(name: impl Into<String>) -> Self {
        Block {
            name: name.into(),
            entities: Vec::new(),
        }
    }
}

/// The compiled drawing document.
///
/// Layers and blocks keep request declaration order; entities keep
/// figure order. Every entity's layer is guaranteed to exist in
/// `layers`.
#[derive(Debug, Default)]
pub struct DrawingDocument {
    /// Layers by name, in declaration order
    pub layers: IndexMap<String, Layer>,
    /// Blocks by name, in declaration order
    pub blocks: IndexMap<String, Block>,
    /// Top-level entities in figure order
    pub entities: Vec<Entity>,
}

impl DrawingDocument {
    /// Create an empty document containing only the default layer
    pub fn new() -> Self {
        let mut doc = DrawingDocument::default();
        doc.layers
            .insert(DEFAULT_LAYER.to_string(), Layer::new(DEFAULT_LAYER));
        doc
    }

    /// Add a layer; duplicate names are an error
    pub fn add_layer(&mut self, layer: Layer) -> Result<()> {
        if self.layers.contains_key(&layer.name) {
            return Err(CompileError::Request(format!(
                "duplicate layer '{}'",
                layer.name
            )));
        }
        self.layers.insert(layer.name.clone(), layer);
        Ok(())
    }

    /// Check whether a layer exists
    pub fn has_layer(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    /// Add a block; duplicate names are an error
    pub fn add_block(&mut self, block: Block) -> Result<()> {
        if self.blocks.contains_key(&block.name) {
            return Err(CompileError::Request(format!(
                "duplicate block '{}'",
                block.name
            )));
        }
        self.blocks.insert(block.name.clone(), block);
        Ok(())
    }

    /// Add a top-level entity. The entity's layer must already exist.
    pub fn add_entity(&mut self, entity: Entity) -> Result<()> {
        if !self.has_layer(entity.layer()) {
            return Err(CompileError::LayerReference(vec![format!(
                "entity references undeclared layer '{}'",
                entity.layer()
            )]));
        }
        self.entities.push(entity);
        Ok(())
    }

    /// Number of top-level entities
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityCommon, Line};
    use crate::types::Vector3;

    fn line_on(layer: &str) -> Entity {
        Entity::Line(Line {
            common: EntityCommon::with_layer(layer),
            start: Vector3::ZERO,
            end: Vector3::new(10.0, 0.0, 0.0),
        })
    }

    #[test]
    fn test_name_validation() {
        assert!(is_valid_name("Walls"));
        assert!(is_valid_name("layer_2-b"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("bad name"));
        assert!(!is_valid_name("emoji\u{1F600}"));
        assert!(!is_valid_name(&"x".repeat(256)));
        assert!(is_valid_name(&"x".repeat(255)));
    }

    #[test]
    fn test_new_document_has_default_layer() {
        let doc = DrawingDocument::new();
        assert!(doc.has_layer("default"));
        assert_eq!(doc.layers.len(), 1);
    }

    #[test]
    fn test_duplicate_layer_rejected() {
        let mut doc = DrawingDocument::new();
        doc.add_layer(Layer::new("Walls")).unwrap();
        assert!(doc.add_layer(Layer::new("Walls")).is_err());
    }

    #[test]
    fn test_entity_layer_must_exist() {
        let mut doc = DrawingDocument::new();
        assert!(doc.add_entity(line_on("default")).is_ok());
        let err = doc.add_entity(line_on("Ghost")).unwrap_err();
        assert!(matches!(err, CompileError::LayerReference(_)));
        assert_eq!(doc.entity_count(), 1);
    }

    #[test]
    fn test_layers_keep_declaration_order() {
        let mut doc = DrawingDocument::new();
        doc.add_layer(Layer::new("Walls")).unwrap();
        doc.add_layer(Layer::new("Annotations")).unwrap();
        let names: Vec<&str> = doc.layers.keys().map(String::as_str).collect();
        assert_eq!(names, ["default", "Walls", "Annotations"]);
    }
}
