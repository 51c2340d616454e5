// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for shapecast.
//!
//! This module contains pure geometry with no I/O. Rendering is handled via
//! the port defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: shapes have no setters
//!
pub mod descriptor;
pub mod entities;
pub mod error;
pub mod shape;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use descriptor::ShapeDescriptor;
pub use entities::{Circle, Rectangle, Square};
pub use error::{DomainError, ErrorCategory};
pub use shape::Shape;
pub use validation::DomainValidator;
pub use value_objects::{AreaRecord, RenderFormat, ShapeKind};
