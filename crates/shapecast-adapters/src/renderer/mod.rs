//! Renderers implementing `ShapeRenderer`.

pub mod standard;

pub use standard::StandardRenderer;
