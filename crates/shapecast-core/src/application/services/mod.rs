//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "render these shapes as JSON".

pub mod render_service;

pub use render_service::RenderService;
