//! Implementation of the `shapecast area` command.
//!
//! Responsibility: turn descriptors into shapes, pick the render format, call
//! the core render service, and print one line per shape. No geometry lives
//! here.

use std::str::FromStr;

use tracing::{debug, info, instrument};

use shapecast_adapters::StandardRenderer;
use shapecast_core::{
    application::RenderService,
    domain::{RenderFormat, Shape, ShapeDescriptor},
};

use crate::{
    cli::AreaArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `shapecast area` command.
///
/// Every descriptor is validated before anything is printed, so a bad
/// argument never leaves partial output behind.
#[instrument(skip_all, fields(count = args.shapes.len()))]
pub fn execute(args: AreaArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let shapes = parse_shapes(&args.shapes)?;
    let format = resolve_format(args.format, &config);
    debug!(%format, "Render format resolved");

    let service = RenderService::new(Box::new(StandardRenderer::new()));
    let lines = service.render_all(shapes.iter().map(|s| s.as_ref()), format)?;

    for line in &lines {
        output.emit(line)?;
    }

    info!(rendered = lines.len(), "Area command completed");
    Ok(())
}

/// Parse and validate every descriptor, failing on the first bad one.
pub fn parse_shapes(inputs: &[String]) -> CliResult<Vec<Box<dyn Shape>>> {
    inputs
        .iter()
        .map(|input| {
            ShapeDescriptor::from_str(input)
                .and_then(ShapeDescriptor::into_shape)
                .map_err(|e| CliError::InvalidShape {
                    input: input.clone(),
                    source: e.into(),
                })
        })
        .collect()
}

/// `--format` wins over the configured default.
fn resolve_format(flag: Option<RenderFormat>, config: &AppConfig) -> RenderFormat {
    flag.unwrap_or(config.render.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_valid_shapes() {
        let shapes = parse_shapes(&["circle:3".into(), "rectangle:2x4".into()]).unwrap();
        let names: Vec<_> = shapes.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, ["circle", "rectangle"]);
        assert_eq!(shapes[1].area(), 8.0);
    }

    #[test]
    fn first_bad_shape_is_reported() {
        let err = parse_shapes(&["circle:3".into(), "square:-1".into(), "blob:2".into()])
            .err()
            .unwrap();
        match err {
            CliError::InvalidShape { input, .. } => assert_eq!(input, "square:-1"),
            other => panic!("expected InvalidShape, got {other:?}"),
        }
    }

    #[test]
    fn flag_overrides_config() {
        let mut config = AppConfig::default();
        config.render.format = RenderFormat::Json;

        assert_eq!(resolve_format(Some(RenderFormat::Text), &config), RenderFormat::Text);
        assert_eq!(resolve_format(None, &config), RenderFormat::Json);
    }
}
