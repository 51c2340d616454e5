//! shapecast Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for shapecast:
//! shapes that know their own name and area, and a rendering port that turns
//! any such shape into text or a structured record.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          shapecast-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (RenderService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │            (ShapeRenderer)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   shapecast-adapters (Infrastructure)   │
//! │           (StandardRenderer)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Shape, Circle, Square, Rectangle)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shapecast_core::prelude::*;
//!
//! // 1. Create a shape
//! let circle = Circle::new(3.0);
//!
//! // 2. Use the application service (with an injected renderer)
//! let service = RenderService::new(Box::new(renderer));
//! let line = service.render(&circle, RenderFormat::Text)?;
//! assert_eq!(line, "area of shape circle is 28.274334");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{RenderService, ports::ShapeRenderer};
    pub use crate::domain::{
        AreaRecord, Circle, Rectangle, RenderFormat, Shape, ShapeDescriptor, ShapeKind, Square,
    };
    pub use crate::error::{ShapeError, ShapeResult};
}
