//! Text and JSON renderer.

use shapecast_core::{
    application::{ApplicationError, ports::ShapeRenderer},
    domain::{AreaRecord, Shape},
    error::ShapeResult,
};
use tracing::{instrument, trace};

/// Fractional digits used by [`StandardRenderer::render_text`].
pub const TEXT_PRECISION: usize = 6;

/// Stateless renderer producing the plain-text line and the JSON record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRenderer;

impl StandardRenderer {
    /// Create a new renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ShapeRenderer for StandardRenderer {
    fn render_text(&self, shape: &dyn Shape) -> String {
        format!(
            "area of shape {} is {:.prec$}",
            shape.name(),
            shape.area(),
            prec = TEXT_PRECISION
        )
    }

    #[instrument(skip_all, fields(shape = %shape.name()))]
    fn render_structured(&self, shape: &dyn Shape) -> ShapeResult<String> {
        let record = AreaRecord::of(shape);

        // serde_json writes NaN/±∞ as `null`, which would silently change the
        // field's type.
        if !record.area.is_finite() {
            return Err(ApplicationError::SerializationFailed {
                shape: record.shape,
                reason: format!("area {} is not a finite number", record.area),
            }
            .into());
        }

        let json = serde_json::to_string(&record).map_err(|e| {
            ApplicationError::SerializationFailed {
                shape: record.shape.clone(),
                reason: e.to_string(),
            }
        })?;

        trace!(%json, "Structured record encoded");
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapecast_core::{
        domain::{Circle, Rectangle, Square},
        error::ShapeError,
    };

    #[test]
    fn text_for_circle() {
        assert_eq!(
            StandardRenderer.render_text(&Circle::new(3.0)),
            "area of shape circle is 28.274334"
        );
    }

    #[test]
    fn text_for_square() {
        assert_eq!(
            StandardRenderer.render_text(&Square::new(3.0)),
            "area of shape square is 9.000000"
        );
    }

    #[test]
    fn text_passes_negative_area_through() {
        assert_eq!(
            StandardRenderer.render_text(&Rectangle::new(2.0, -3.0)),
            "area of shape rectangle is -6.000000"
        );
    }

    #[test]
    fn structured_for_circle() {
        let json = StandardRenderer
            .render_structured(&Circle::new(3.0))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["shape"], "circle");
        let area = value["area"].as_f64().unwrap();
        assert!((area - 28.274334).abs() < 1e-6);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }

    #[test]
    fn structured_has_no_whitespace() {
        let json = StandardRenderer
            .render_structured(&Square::new(3.0))
            .unwrap();
        assert_eq!(json, r#"{"shape":"square","area":9.0}"#);
    }

    // Aborting the process on an unencodable area is not reproduced: the
    // failure is returned to the caller.
    #[test]
    fn structured_of_non_finite_area_is_error_not_abort() {
        for radius in [f64::NAN, f64::INFINITY] {
            let err = StandardRenderer
                .render_structured(&Circle::new(radius))
                .unwrap_err();
            assert!(matches!(
                err,
                ShapeError::Application(ApplicationError::SerializationFailed { ref shape, .. })
                    if shape == "circle"
            ));
        }
    }

    #[test]
    fn overflowing_area_is_error() {
        // finite side, infinite area
        assert!(
            StandardRenderer
                .render_structured(&Square::new(1e200))
                .is_err()
        );
    }

    #[test]
    fn text_of_non_finite_area_does_not_fail() {
        assert_eq!(
            StandardRenderer.render_text(&Circle::new(f64::NAN)),
            "area of shape circle is NaN"
        );
    }
}
