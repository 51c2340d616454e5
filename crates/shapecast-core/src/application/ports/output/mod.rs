//! Driven (output) ports - implemented by infrastructure.
//!
//! The `shapecast-adapters` crate provides implementations.

use crate::domain::Shape;
use crate::error::ShapeResult;

/// Port for shape rendering.
///
/// Implemented by:
/// - `shapecast_adapters::renderer::StandardRenderer` (text + JSON)
///
/// ## Design Notes
///
/// - Implementations hold no state that changes between calls; rendering the
///   same shape twice yields the same output
/// - Only the [`Shape`] capability is visible here, never a concrete variant
pub trait ShapeRenderer: Send + Sync {
    /// Render a single human-readable line:
    /// `area of shape <name> is <area>`, area with six fractional digits.
    fn render_text(&self, shape: &dyn Shape) -> String;

    /// Render a structured record `{"shape": <name>, "area": <area>}`.
    ///
    /// Fails with `ApplicationError::SerializationFailed` when the area has
    /// no representation in the target format (NaN, ±∞).
    fn render_structured(&self, shape: &dyn Shape) -> ShapeResult<String>;
}
