//! Drawing compiler: request in, document plus summary out

use serde_json::Value;

use crate::document::{Block, DrawingDocument, Layer};
use crate::entities::DEFAULT_LAYER;
use crate::error::Result;
use crate::factory;
use crate::request::{CompileLimits, DrawingRequest, RequestValidator};
use crate::summary::ProcessingSummary;
use crate::types::Color;

/// Result of a successful compile run
#[derive(Debug)]
pub struct CompileOutput {
    /// The compiled document
    pub document: DrawingDocument,
    /// Accounting for the run, including per-entity failures
    pub summary: ProcessingSummary,
}

/// Compiles drawing requests into documents.
///
/// Request-level problems (size ceilings, bad declarations, unresolved
/// layer references) abort the run; per-entity validation failures are
/// recorded in the summary and compilation continues.
#[derive(Debug, Default)]
pub struct Compiler {
    limits: CompileLimits,
}

impl Compiler {
    /// Create a compiler with default limits
    pub fn new() -> Self {
        Compiler::default()
    }

    /// Create a compiler with explicit limits
    pub fn with_limits(limits: CompileLimits) -> Self {
        Compiler { limits }
    }

    /// Compile a validated request into a document and summary
    pub fn compile(&self, request: &DrawingRequest) -> Result<CompileOutput> {
        RequestValidator::new(&self.limits).validate(request)?;

        tracing::debug!(
            figures = request.figures.len(),
            blocks = request.blocks.len(),
            "compiling drawing request"
        );

        let mut summary = ProcessingSummary::start(self.limits.detail_threshold);
        let mut document = DrawingDocument::new();

        for spec in request.effective_layers() {
            if document.has_layer(&spec.name) {
                continue;
            }
            let color = Color::from_request_index(spec.color);
            document.add_layer(Layer::with_color(spec.name, color))?;
        }

        for spec in &request.blocks {
            let mut block = Block::new(spec.name.clone());
            for raw in &spec.entities {
                if let Some(entity) = self.process_entity(raw, &mut summary)? {
                    block.entities.push(entity);
                }
            }
            document.add_block(block)?;
        }

        for raw in &request.figures {
            if let Some(entity) = self.process_entity(raw, &mut summary)? {
                document.add_entity(entity)?;
            }
        }

        if summary.failed > 0 {
            summary.add_warning(format!(
                "{} of {} entities failed validation and were skipped",
                summary.failed, summary.total
            ));
        }
        summary.finalize();
        tracing::info!(
            total = summary.total,
            successful = summary.successful,
            failed = summary.failed,
            duration_ms = summary.duration_ms,
            "drawing request compiled"
        );

        Ok(CompileOutput { document, summary })
    }

    /// Build one entity, recording the outcome. Recoverable failures
    /// yield `None`; anything else aborts the run.
    fn process_entity(
        &self,
        raw: &Value,
        summary: &mut ProcessingSummary,
    ) -> Result<Option<crate::entities::Entity>> {
        let tag = raw_tag(raw);
        match factory::build_entity(raw) {
            Ok(entity) => {
                summary.record_success(entity.kind().as_tag(), entity.layer());
                Ok(Some(entity))
            }
            Err(err) if err.is_recoverable() => {
                tracing::warn!(entity_type = tag, error = %err, "entity rejected");
                summary.record_failure(tag, raw_layer(raw), &err.to_string());
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

fn raw_tag(raw: &Value) -> &str {
    raw.get("type").and_then(Value::as_str).unwrap_or("unknown")
}

fn raw_layer(raw: &Value) -> &str {
    raw.get("layer")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_LAYER)
}
