//! Render Service - selects a render format and drives the renderer port.
//!
//! The service never inspects a concrete shape type; it only forwards the
//! capability to whichever `ShapeRenderer` it was built with.

use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ShapeRenderer},
    domain::{RenderFormat, Shape},
    error::ShapeResult,
};

/// Main render service.
pub struct RenderService {
    renderer: Box<dyn ShapeRenderer>,
}

impl RenderService {
    /// Create a new render service with the given adapter.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use shapecast_core::application::RenderService;
    ///
    /// let service = RenderService::new(Box::new(renderer)); // impl ShapeRenderer
    /// ```
    pub fn new(renderer: Box<dyn ShapeRenderer>) -> Self {
        Self { renderer }
    }

    /// Render one shape in the requested format.
    #[instrument(skip_all, fields(shape = %shape.name(), format = %format))]
    pub fn render(&self, shape: &dyn Shape, format: RenderFormat) -> ShapeResult<String> {
        let rendered = match format {
            RenderFormat::Text => Ok(self.renderer.render_text(shape)),
            RenderFormat::Json => self.renderer.render_structured(shape),
        };

        match &rendered {
            Ok(_) => debug!(area = shape.area(), "Shape rendered"),
            Err(e) => warn!(error = %e, "Shape could not be rendered"),
        }

        rendered
    }

    /// Render a batch of shapes, one output line per shape, in order.
    ///
    /// Stops at the first failure. In JSON mode the lines form a JSON Lines
    /// document.
    #[instrument(skip_all, fields(format = %format))]
    pub fn render_all<'a, I>(&self, shapes: I, format: RenderFormat) -> ShapeResult<Vec<String>>
    where
        I: IntoIterator<Item = &'a dyn Shape>,
    {
        let lines = shapes
            .into_iter()
            .map(|shape| self.render(shape, format))
            .collect::<ShapeResult<Vec<_>>>()?;

        if lines.is_empty() {
            return Err(ApplicationError::NothingToRender.into());
        }

        debug!(count = lines.len(), "Batch rendered");
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Circle, Square};
    use crate::error::ShapeError;
    use mockall::mock;

    mock! {
        pub Renderer {}

        impl ShapeRenderer for Renderer {
            fn render_text(&self, shape: &dyn Shape) -> String;
            fn render_structured(&self, shape: &dyn Shape) -> ShapeResult<String>;
        }
    }

    #[test]
    fn text_format_uses_render_text() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render_text()
            .times(1)
            .returning(|s| format!("text:{}", s.name()));
        renderer.expect_render_structured().never();

        let service = RenderService::new(Box::new(renderer));
        let out = service.render(&Circle::new(1.0), RenderFormat::Text).unwrap();
        assert_eq!(out, "text:circle");
    }

    #[test]
    fn json_format_uses_render_structured() {
        let mut renderer = MockRenderer::new();
        renderer.expect_render_text().never();
        renderer
            .expect_render_structured()
            .times(1)
            .returning(|s| Ok(format!("json:{}", s.name())));

        let service = RenderService::new(Box::new(renderer));
        let out = service.render(&Square::new(2.0), RenderFormat::Json).unwrap();
        assert_eq!(out, "json:square");
    }

    #[test]
    fn render_all_keeps_order() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render_text()
            .times(2)
            .returning(|s| s.name().to_string());

        let service = RenderService::new(Box::new(renderer));
        let circle = Circle::new(1.0);
        let square = Square::new(1.0);
        let shapes: [&dyn Shape; 2] = [&circle, &square];

        let lines = service.render_all(shapes, RenderFormat::Text).unwrap();
        assert_eq!(lines, ["circle", "square"]);
    }

    #[test]
    fn render_all_stops_at_first_failure() {
        let mut renderer = MockRenderer::new();
        renderer
            .expect_render_structured()
            .times(1)
            .returning(|s| {
                Err(ApplicationError::SerializationFailed {
                    shape: s.name().to_string(),
                    reason: "boom".into(),
                }
                .into())
            });

        let service = RenderService::new(Box::new(renderer));
        let first = Circle::new(f64::NAN);
        let second = Square::new(1.0);
        let shapes: [&dyn Shape; 2] = [&first, &second];

        let err = service.render_all(shapes, RenderFormat::Json).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::Application(ApplicationError::SerializationFailed { .. })
        ));
    }

    #[test]
    fn render_all_rejects_empty_batch() {
        let service = RenderService::new(Box::new(MockRenderer::new()));
        let err = service
            .render_all(std::iter::empty(), RenderFormat::Text)
            .unwrap_err();
        assert_eq!(err, ShapeError::Application(ApplicationError::NothingToRender));
    }
}
