//! The shape capability.
//!
//! # Design
//!
//! A shape is anything that can name itself and compute its own area. That
//! is the whole contract: renderers only ever see `&dyn Shape`, so a new
//! variant never requires a change on the rendering side.
//!
//! # Adding New Variants
//!
//! 1. Add a type under `entities/`
//! 2. Implement [`Shape`] for it
//! 3. Done, renderers pick it up unchanged
//!
//! Registering it in [`ShapeKind`](crate::domain::ShapeKind) is only needed
//! if the CLI should be able to parse it from a descriptor.

use std::fmt;

/// The capability every shape variant provides.
///
/// Both methods are pure: calling them twice on the same value yields the
/// same result, and neither can fail.
pub trait Shape: fmt::Debug + Send + Sync {
    /// Fixed, variant-specific label (e.g. `"circle"`).
    fn name(&self) -> &str;

    /// Area computed from the variant's own dimensions.
    ///
    /// Plain constructors do not validate their input, so this returns
    /// whatever the formula yields (including negative or non-finite values).
    fn area(&self) -> f64;
}

impl<S: Shape + ?Sized> Shape for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<S: Shape + ?Sized> Shape for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn area(&self) -> f64 {
        (**self).area()
    }
}
