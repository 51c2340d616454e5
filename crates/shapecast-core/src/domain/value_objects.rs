//! Domain value objects: ShapeKind, RenderFormat, AreaRecord.
//!
//! # Design
//!
//! These are pure value types, equality-by-value, no identity. `ShapeKind`
//! and `RenderFormat` are closed sets with string representations and
//! `FromStr` parsers; `AreaRecord` is the structured render result.

use crate::domain::{Shape, error::DomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── ShapeKind ────────────────────────────────────────────────────────────────

/// A built-in shape variant.
///
/// Only needed for parsing shapes from text. Renderers never look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Circle, Self::Square, Self::Rectangle];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
        }
    }

    /// Names of the dimensions a descriptor must supply, in order.
    pub const fn dimensions(&self) -> &'static [&'static str] {
        match self {
            Self::Circle => &["radius"],
            Self::Square => &["length"],
            Self::Rectangle => &["width", "height"],
        }
    }

    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Circle => "pi * radius^2",
            Self::Square => "length^2",
            Self::Rectangle => "width * height",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" | "sq" => Ok(Self::Square),
            "rectangle" | "rect" => Ok(Self::Rectangle),
            other => Err(DomainError::UnknownShape(other.to_string())),
        }
    }
}

// ── RenderFormat ─────────────────────────────────────────────────────────────

/// Output format requested from a renderer.
///
/// Deserialization goes through [`FromStr`], so configuration files and the
/// environment accept exactly what the command line accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum RenderFormat {
    /// `area of shape <name> is <area>`
    #[default]
    Text,
    /// `{"shape": <name>, "area": <area>}`
    Json,
}

impl RenderFormat {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" | "structured" => Ok(Self::Json),
            other => Err(DomainError::InvalidFormat(other.to_string())),
        }
    }
}

impl TryFrom<String> for RenderFormat {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── AreaRecord ───────────────────────────────────────────────────────────────

/// Structured render result.
///
/// Field names and types are the external contract; field order is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaRecord {
    pub shape: String,
    pub area: f64,
}

impl AreaRecord {
    /// Snapshot a shape's name and area.
    pub fn of(shape: &dyn Shape) -> Self {
        Self {
            shape: shape.name().to_owned(),
            area: shape.area(),
        }
    }
}
