//! Application layer errors.
//!
//! These errors represent failures while rendering, not geometry.
//! Geometry errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during render orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The structured record could not be encoded.
    ///
    /// Surfaced to the caller instead of aborting the process.
    #[error("Failed to serialize {shape}: {reason}")]
    SerializationFailed { shape: String, reason: String },

    /// A batch render was requested with nothing to render.
    #[error("No shapes to render")]
    NothingToRender,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SerializationFailed { shape, .. } => vec![
                format!("The area of '{shape}' cannot be represented in JSON"),
                "Check that every dimension is a finite number".into(),
                "Or render with --format text".into(),
            ],
            Self::NothingToRender => vec![
                "Pass at least one shape".into(),
                "Example: shapecast area circle:3".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SerializationFailed { .. } => ErrorCategory::Rendering,
            Self::NothingToRender => ErrorCategory::Validation,
        }
    }
}
