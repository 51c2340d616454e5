//! Textual shape descriptors: `<kind>:<dimensions>`.
//!
//! ```text
//! circle:3
//! square:2.5
//! rectangle:2x4      (or rectangle:2,4)
//! ```
//!
//! Parsing is purely syntactic. Dimension values are checked when the
//! descriptor is turned into a shape with [`ShapeDescriptor::into_shape`].

use std::fmt;
use std::str::FromStr;

use crate::domain::{Circle, DomainError, Rectangle, Shape, ShapeKind, Square};

/// A parsed, not yet validated, description of a built-in shape.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    kind: ShapeKind,
    dimensions: Vec<f64>,
}

impl ShapeDescriptor {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn dimensions(&self) -> &[f64] {
        &self.dimensions
    }

    /// Build the shape through the variant's checked constructor.
    pub fn into_shape(self) -> Result<Box<dyn Shape>, DomainError> {
        let shape: Box<dyn Shape> = match (self.kind, self.dimensions.as_slice()) {
            (ShapeKind::Circle, &[radius]) => Box::new(Circle::try_new(radius)?),
            (ShapeKind::Square, &[length]) => Box::new(Square::try_new(length)?),
            (ShapeKind::Rectangle, &[width, height]) => {
                Box::new(Rectangle::try_new(width, height)?)
            }
            // FromStr enforces the arity, so this only trips on hand-built values.
            (kind, dims) => {
                return Err(DomainError::InvalidDescriptor {
                    input: self.to_string(),
                    reason: format!(
                        "{kind} takes {} dimension(s), got {}",
                        kind.dimensions().len(),
                        dims.len()
                    ),
                });
            }
        };
        Ok(shape)
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.kind)?;
        for (i, d) in self.dimensions.iter().enumerate() {
            if i > 0 {
                f.write_str("x")?;
            }
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for ShapeDescriptor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| DomainError::InvalidDescriptor {
            input: s.to_string(),
            reason,
        };

        let (kind, dims) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("missing ':' between kind and dimensions".into()))?;

        let kind = ShapeKind::from_str(kind.trim())?;

        let dimensions = dims
            .split(['x', 'X', ','])
            .map(|d| {
                let d = d.trim();
                d.parse::<f64>()
                    .map_err(|_| invalid(format!("'{d}' is not a number")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let expected = kind.dimensions();
        if dimensions.len() != expected.len() {
            return Err(invalid(format!(
                "{kind} expects {} ({}), got {} value(s)",
                expected.len(),
                expected.join(", "),
                dimensions.len()
            )));
        }

        Ok(Self { kind, dimensions })
    }
}
