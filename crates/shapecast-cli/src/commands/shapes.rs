//! Implementation of the `shapecast shapes` command.

use serde::Serialize;
use shapecast_core::domain::ShapeKind;

use crate::{
    cli::{ListFormat, ShapesArgs},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Listing entry for one built-in shape.
#[derive(Debug, Serialize)]
struct ShapeInfo {
    name: &'static str,
    dimensions: &'static [&'static str],
    formula: &'static str,
    example: String,
}

impl ShapeInfo {
    fn of(kind: ShapeKind) -> Self {
        let example = match kind {
            ShapeKind::Circle => "circle:3",
            ShapeKind::Square => "square:3",
            ShapeKind::Rectangle => "rectangle:2x4",
        };
        Self {
            name: kind.as_str(),
            dimensions: kind.dimensions(),
            formula: kind.formula(),
            example: example.to_string(),
        }
    }
}

pub fn execute(args: ShapesArgs, output: OutputManager) -> CliResult<()> {
    let shapes: Vec<ShapeInfo> = ShapeKind::ALL.into_iter().map(ShapeInfo::of).collect();

    match args.format {
        ListFormat::Table => {
            output.header("Built-in Shapes:")?;
            for shape in &shapes {
                output.print(&format!(
                    "  {:<10} {:<22} {}",
                    shape.name,
                    shape.formula,
                    shape.example
                ))?;
            }
        }
        ListFormat::List => {
            for shape in &shapes {
                output.emit(shape.name)?;
            }
        }
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&shapes).map_err(|e| CliError::IoError {
                message: format!("Failed to encode shape list: {e}"),
                source: e.into(),
            })?;
            output.emit(&json)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_example_parses() {
        for kind in ShapeKind::ALL {
            let info = ShapeInfo::of(kind);
            let shapes = crate::commands::area::parse_shapes(&[info.example.clone()]).unwrap();
            assert_eq!(shapes[0].name(), info.name);
        }
    }

    #[test]
    fn json_listing_has_dimensions() {
        let json = serde_json::to_value(ShapeInfo::of(ShapeKind::Rectangle)).unwrap();
        assert_eq!(json["dimensions"], serde_json::json!(["width", "height"]));
    }
}
