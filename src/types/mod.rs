//! Core value types used across the compiler

pub mod color;
pub mod vector;

pub use color::Color;
pub use vector::{Vector2, Vector3};
