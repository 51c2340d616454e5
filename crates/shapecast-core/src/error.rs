//! Unified error handling for shapecast core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for shapecast core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// Errors from the domain layer (invalid shapes, descriptors, formats).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (rendering failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl ShapeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Rendering,
}

/// Convenient result type alias.
pub type ShapeResult<T> = Result<T, ShapeError>;
