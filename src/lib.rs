//! # dxf-compile-rs
//!
//! A compiler for JSON drawing requests. A request declares layers,
//! reusable blocks, and a list of figures; the compiler validates
//! every figure against a closed entity catalog and produces an
//! in-memory drawing document together with a processing summary.
//!
//! Entity-level validation failures do not abort a run: the offending
//! figure is recorded in the summary and compilation continues.
//! Request-level problems, such as size ceilings or references to
//! undeclared layers, fail the whole request before any entity is
//! built.
//!
//! ## Example
//!
//! ```
//! use dxf_compile_rs::{Compiler, DrawingRequest};
//!
//! let request = DrawingRequest::from_json(r#"{
//!     "layers": [{"name": "Walls", "color": 1}],
//!     "figures": [
//!         {"type": "line", "layer": "Walls", "start": [0, 0], "end": [5000, 0]},
//!         {"type": "circle", "center": [2500, 1500], "radius": 300}
//!     ]
//! }"#).unwrap();
//!
//! let output = Compiler::new().compile(&request).unwrap();
//! assert_eq!(output.document.entity_count(), 2);
//! assert_eq!(output.summary.success_rate(), "100.0%");
//! ```

pub mod compiler;
pub mod convert;
pub mod document;
pub mod entities;
pub mod error;
pub mod factory;
pub mod request;
pub mod summary;
pub mod types;

pub use compiler::{CompileOutput, Compiler};
pub use document::{Block, DrawingDocument, Layer};
pub use entities::Entity;
pub use error::{CompileError, Result};
pub use factory::EntityKind;
pub use request::{CompileLimits, DrawingRequest};
pub use summary::ProcessingSummary;
pub use types::{Color, Vector2, Vector3};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_public_api_compiles_a_request() {
        let request = DrawingRequest::from_json(
            r#"{"figures": [{"type": "text", "text": "hello", "position": [0, 0]}]}"#,
        )
        .unwrap();
        let output = Compiler::new().compile(&request).unwrap();
        assert_eq!(output.summary.successful, 1);
    }
}
