//! Drawing request model and request-level validation.
//!
//! Structural limits (entity count, mesh vertex total) fail fast;
//! naming and layer-reference problems are collected across the whole
//! request so a client sees every violation at once.

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::document::{is_valid_name, MAX_NAME_LENGTH};
use crate::entities::{mesh, DEFAULT_LAYER};
use crate::error::{CompileError, Result};

/// Hard ceilings applied before any entity is compiled
#[derive(Debug, Clone)]
pub struct CompileLimits {
    /// Maximum number of entities in a request, figures and block
    /// contents combined
    pub max_entities: usize,
    /// Maximum total mesh vertices across the request
    pub max_mesh_vertices: usize,
    /// Maximum layer/block name length
    pub max_name_len: usize,
    /// Per-entity detail records above this count are summarized
    pub detail_threshold: usize,
}

impl Default for CompileLimits {
    fn default() -> Self {
        CompileLimits {
            max_entities: 10_000,
            max_mesh_vertices: mesh::MAX_VERTICES,
            max_name_len: MAX_NAME_LENGTH,
            detail_threshold: 100,
        }
    }
}

/// A layer declaration in a request
#[derive(Debug, Clone, Deserialize)]
pub struct LayerSpec {
    /// Layer name
    pub name: String,
    /// ACI color index, 0-255 (0 means ByBlock)
    #[serde(default = "default_color_index")]
    pub color: i64,
}

fn default_color_index() -> i64 {
    7
}

/// A block declaration in a request
#[derive(Debug, Clone, Deserialize)]
pub struct BlockSpec {
    /// Block name
    pub name: String,
    /// Raw entity records the block contains
    #[serde(default)]
    pub entities: Vec<Value>,
}

/// A deserialized drawing request, prior to validation
#[derive(Debug, Clone, Deserialize)]
pub struct DrawingRequest {
    /// Declared layers; when omitted, only the default layer exists
    #[serde(default)]
    pub layers: Option<Vec<LayerSpec>>,
    /// Declared blocks
    #[serde(default)]
    pub blocks: Vec<BlockSpec>,
    /// Raw top-level entity records, in drawing order
    pub figures: Vec<Value>,
    /// Whether the caller wants the full processing report
    #[serde(default)]
    pub return_summary: bool,
    /// Response size in bytes above which streaming delivery applies
    #[serde(default = "default_streaming_threshold")]
    pub streaming_threshold: usize,
    /// Opaque client metadata, carried through for logging
    #[serde(default)]
    pub client_info: Option<Value>,
}

fn default_streaming_threshold() -> usize {
    1_048_576
}

impl DrawingRequest {
    /// Parse a request from a JSON string
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Parse a request from an already-decoded JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Declared layers, or the implicit default layer when none given
    pub fn effective_layers(&self) -> Vec<LayerSpec> {
        match &self.layers {
            Some(layers) if !layers.is_empty() => layers.clone(),
            _ => vec![LayerSpec {
                name: DEFAULT_LAYER.to_string(),
                color: default_color_index(),
            }],
        }
    }
}

/// Request-level validator, run before compilation begins
#[derive(Debug)]
pub struct RequestValidator<'a> {
    limits: &'a CompileLimits,
}

impl<'a> RequestValidator<'a> {
    pub fn new(limits: &'a CompileLimits) -> Self {
        RequestValidator { limits }
    }

    /// Validate the request shape. On success the compiler may assume
    /// every layer reference resolves and all ceilings hold.
    pub fn validate(&self, request: &DrawingRequest) -> Result<()> {
        if request.figures.is_empty() {
            return Err(CompileError::Request(
                "request contains no figures".to_string(),
            ));
        }
        if let Some(layers) = &request.layers {
            if layers.is_empty() {
                return Err(CompileError::Request(
                    "'layers' must not be an empty array".to_string(),
                ));
            }
        }

        let entity_count = request.figures.len()
            + request
                .blocks
                .iter()
                .map(|b| b.entities.len())
                .sum::<usize>();
        if entity_count > self.limits.max_entities {
            return Err(CompileError::RequestTooLarge {
                what: "entities",
                count: entity_count,
                limit: self.limits.max_entities,
            });
        }

        let mesh_vertices = self.total_mesh_vertices(request);
        if mesh_vertices > self.limits.max_mesh_vertices {
            return Err(CompileError::RequestTooLarge {
                what: "mesh vertices",
                count: mesh_vertices,
                limit: self.limits.max_mesh_vertices,
            });
        }

        let declared = self.check_declarations(request)?;
        self.check_layer_references(request, &declared)
    }

    /// Layer and block declarations: name pattern, duplicates, colors.
    /// Returns the set of resolvable layer names.
    fn check_declarations(&self, request: &DrawingRequest) -> Result<HashSet<String>> {
        let mut problems = Vec::new();
        let mut declared: HashSet<String> = HashSet::new();
        declared.insert(DEFAULT_LAYER.to_string());
        let mut seen: HashSet<String> = HashSet::new();

        for layer in request.effective_layers() {
            if !is_valid_name(&layer.name) || layer.name.len() > self.limits.max_name_len {
                problems.push(format!("invalid layer name '{}'", layer.name));
            } else {
                if !seen.insert(layer.name.clone()) {
                    problems.push(format!("duplicate layer '{}'", layer.name));
                }
                declared.insert(layer.name.clone());
            }
            if !(0..=255).contains(&layer.color) {
                problems.push(format!(
                    "layer '{}' color index {} out of range 0-255",
                    layer.name, layer.color
                ));
            }
        }

        let mut block_names: HashSet<&str> = HashSet::new();
        for block in &request.blocks {
            if !is_valid_name(&block.name) || block.name.len() > self.limits.max_name_len {
                problems.push(format!("invalid block name '{}'", block.name));
            } else if !block_names.insert(&block.name) {
                problems.push(format!("duplicate block '{}'", block.name));
            }
        }

        if problems.is_empty() {
            Ok(declared)
        } else {
            Err(CompileError::Request(problems.join("; ")))
        }
    }

    /// Collect every undeclared layer reference in figures and block
    /// contents. Reported once per distinct layer name.
    fn check_layer_references(
        &self,
        request: &DrawingRequest,
        declared: &HashSet<String>,
    ) -> Result<()> {
        let mut missing: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        let block_entities = request.blocks.iter().flat_map(|b| b.entities.iter());
        for raw in request.figures.iter().chain(block_entities) {
            let Some(layer) = raw.get("layer").and_then(Value::as_str) else {
                continue;
            };
            if !declared.contains(layer) && seen.insert(layer) {
                missing.push(format!("entity references undeclared layer '{layer}'"));
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(CompileError::LayerReference(missing))
        }
    }

    fn total_mesh_vertices(&self, request: &DrawingRequest) -> usize {
        let block_entities = request.blocks.iter().flat_map(|b| b.entities.iter());
        request
            .figures
            .iter()
            .chain(block_entities)
            .filter(|raw| raw.get("type").and_then(Value::as_str) == Some("mesh"))
            .filter_map(|raw| raw.get("vertices").and_then(Value::as_array))
            .map(Vec::len)
            .sum()
    }
}
