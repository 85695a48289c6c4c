//! Error types for the drawing request compiler

use thiserror::Error;

/// Main error type for compilation operations
#[derive(Debug, Error)]
pub enum CompileError {
    /// Raw coordinate input has the wrong shape (not an array, wrong
    /// arity, non-numeric or non-finite component)
    #[error("malformed coordinate at '{path}': {reason}")]
    MalformedCoordinate { path: String, reason: String },

    /// Kind-specific field or range violation
    #[error("validation error at '{path}': {message}")]
    Validation { path: String, message: String },

    /// Unrecognized entity discriminator tag
    #[error("unknown entity type: '{0}'")]
    UnknownEntityType(String),

    /// Entities referencing layers absent from the request, collected
    /// across the whole request
    #[error("layer reference violations: {}", .0.join("; "))]
    LayerReference(Vec<String>),

    /// Entity or vertex count ceiling exceeded
    #[error("request too large: {what} count {count} exceeds limit of {limit}")]
    RequestTooLarge {
        what: &'static str,
        count: usize,
        limit: usize,
    },

    /// Structural problem with the request as a whole
    #[error("invalid request: {0}")]
    Request(String),

    /// Surfaced from the downstream drawing-format encoder, fatal for
    /// the request
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Request body is not valid JSON or does not match the request shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CompileError {
    /// Shorthand for a [`CompileError::Validation`]
    pub fn validation(path: impl Into<String>, message: impl Into<String>) -> Self {
        CompileError::Validation {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a [`CompileError::MalformedCoordinate`]
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        CompileError::MalformedCoordinate {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Whether the compiler may record this error and keep processing
    /// the remaining entities.
    ///
    /// Per-entity failures are recoverable; whole-request failures and
    /// encoder failures are fatal.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CompileError::MalformedCoordinate { .. }
                | CompileError::Validation { .. }
                | CompileError::UnknownEntityType(_)
        )
    }
}

/// Result type alias for compilation operations
pub type Result<T> = std::result::Result<T, CompileError>;
