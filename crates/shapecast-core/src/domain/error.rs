// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("invalid {dimension} for {shape}: {value} ({reason})")]
    InvalidDimension {
        shape: &'static str,
        dimension: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid shape descriptor '{input}': {reason}")]
    InvalidDescriptor { input: String, reason: String },

    #[error("Invalid render format: {0}")]
    InvalidFormat(String),

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown shape kind: {0}")]
    UnknownShape(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDimension {
                shape, dimension, ..
            } => vec![
                format!("The {dimension} of a {shape} must be a finite, non-negative number"),
                format!("Example: {shape}:3"),
            ],
            Self::InvalidDescriptor { .. } => vec![
                "Describe shapes as <kind>:<dimensions>".into(),
                "Examples: circle:3, square:2.5, rectangle:2x4".into(),
            ],
            Self::InvalidFormat(_) => vec!["Supported formats: text, json".into()],
            Self::UnknownShape(kind) => vec![
                format!("'{kind}' is not a built-in shape"),
                "Try: shapecast shapes".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDimension { .. } | Self::InvalidDescriptor { .. } => {
                ErrorCategory::Validation
            }
            Self::InvalidFormat(_) => ErrorCategory::Validation,
            Self::UnknownShape(_) => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
