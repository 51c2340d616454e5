//! Application layer for shapecast.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RenderService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! geometry itself. All area formulas live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::RenderService;

// Re-export port traits (for adapter implementation)
pub use ports::ShapeRenderer;

pub use error::ApplicationError;
