//! Infrastructure adapters for shapecast.
//!
//! This crate implements the ports defined in `shapecast-core::application::ports`.
//! It is the only place that depends on a serialization backend.

pub mod renderer;

// Re-export commonly used adapters
pub use renderer::StandardRenderer;
