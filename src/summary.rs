//! Processing summary: per-request accounting of compiled entities

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{json, Value};

/// One entry per processed entity, kept while below the detail cap
#[derive(Debug, Clone, Serialize)]
pub struct EntityRecord {
    /// Discriminator tag of the entity
    pub entity_type: String,
    /// Layer the entity targeted
    pub layer: String,
    /// Whether compilation of this entity succeeded
    pub success: bool,
    /// Failure message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Accounting for one compile run.
///
/// Successes and failures are tallied as entities are processed;
/// [`finalize`](ProcessingSummary::finalize) stamps the duration.
#[derive(Debug, Serialize)]
pub struct ProcessingSummary {
    /// Wall-clock start, milliseconds since the Unix epoch
    pub started_at_ms: u64,
    /// Wall-clock finish, zero until finalized
    pub finished_at_ms: u64,
    /// Elapsed processing time in milliseconds
    pub duration_ms: u64,
    /// Total entities processed
    pub total: usize,
    /// Entities compiled successfully
    pub successful: usize,
    /// Entities that failed validation or conversion
    pub failed: usize,
    /// Success tallies keyed by discriminator tag, first-seen order
    pub entities_by_type: IndexMap<String, usize>,
    /// Success tallies keyed by layer, first-seen order
    pub entities_by_layer: IndexMap<String, usize>,
    /// Non-fatal notices
    pub warnings: Vec<String>,
    /// Failure messages, in processing order
    pub errors: Vec<String>,
    /// Per-entity records; summarized in reports above the threshold
    #[serde(skip)]
    pub details: Vec<EntityRecord>,
    #[serde(skip)]
    detail_threshold: usize,
    #[serde(skip)]
    started: Instant,
}

fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl ProcessingSummary {
    /// Start a summary for a new compile run
    pub fn start(detail_threshold: usize) -> Self {
        ProcessingSummary {
            started_at_ms: unix_ms(),
            finished_at_ms: 0,
            duration_ms: 0,
            total: 0,
            successful: 0,
            failed: 0,
            entities_by_type: IndexMap::new(),
            entities_by_layer: IndexMap::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
            details: Vec::new(),
            detail_threshold,
            started: Instant::now(),
        }
    }

    /// Record a successfully compiled entity
    pub fn record_success(&mut self, entity_type: &str, layer: &str) {
        self.total += 1;
        self.successful += 1;
        *self
            .entities_by_type
            .entry(entity_type.to_string())
            .or_insert(0) += 1;
        *self
            .entities_by_layer
            .entry(layer.to_string())
            .or_insert(0) += 1;
        self.details.push(EntityRecord {
            entity_type: entity_type.to_string(),
            layer: layer.to_string(),
            success: true,
            error: None,
        });
    }

    /// Record a failed entity; the message also lands in `errors`
    pub fn record_failure(&mut self, entity_type: &str, layer: &str, message: &str) {
        self.total += 1;
        self.failed += 1;
        self.errors.push(format!("{entity_type}: {message}"));
        self.details.push(EntityRecord {
            entity_type: entity_type.to_string(),
            layer: layer.to_string(),
            success: false,
            error: Some(message.to_string()),
        });
    }

    /// Record a non-fatal notice
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Stamp finish time and duration
    pub fn finalize(&mut self) {
        self.finished_at_ms = unix_ms();
        self.duration_ms = self.started.elapsed().as_millis() as u64;
    }

    /// Success rate as a percentage string with one decimal, e.g.
    /// `"50.0%"`. An empty run reports `"0.0%"`.
    pub fn success_rate(&self) -> String {
        if self.total == 0 {
            return "0.0%".to_string();
        }
        let rate = self.successful as f64 / self.total as f64 * 100.0;
        format!("{rate:.1}%")
    }

    /// Render the client-facing report. Per-entity details collapse
    /// into a count once they exceed the detail threshold.
    pub fn to_report(&self) -> Value {
        let entity_details: Value = if self.details.len() > self.detail_threshold {
            json!(format!(
                "{} entity records (detail capped at {})",
                self.details.len(),
                self.detail_threshold
            ))
        } else {
            json!(self.details)
        };
        json!({
            "processing_summary": {
                "started_at_ms": self.started_at_ms,
                "finished_at_ms": self.finished_at_ms,
                "duration_ms": self.duration_ms,
                "total": self.total,
                "successful": self.successful,
                "failed": self.failed,
                "success_rate": self.success_rate(),
                "entities_by_type": self.entities_by_type,
                "entities_by_layer": self.entities_by_layer,
            },
            "warnings": self.warnings,
            "errors": self.errors,
            "entity_details": entity_details,
        })
    }
}
