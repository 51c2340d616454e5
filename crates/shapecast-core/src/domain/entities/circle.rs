//! Circle: π·r².

use std::f64::consts::PI;

use crate::domain::{DomainError, DomainValidator as validator, Shape};

/// A circle described by its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub const NAME: &'static str = "circle";

    /// Create a circle without validating the radius.
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Create a circle, rejecting negative or non-finite radii.
    ///
    /// This is the non-permissive variant of [`Circle::new`].
    pub fn try_new(radius: f64) -> Result<Self, DomainError> {
        let radius = validator::validate_dimension(Self::NAME, "radius", radius)?;
        Ok(Self { radius })
    }

    pub const fn radius(&self) -> f64 {
        self.radius
    }
}

impl Shape for Circle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_radius_three() {
        let circle = Circle::new(3.0);
        assert!((circle.area() - 28.274_333_882_308_138).abs() < 1e-12);
        assert_eq!(circle.name(), "circle");
    }

    #[test]
    fn area_matches_formula() {
        for r in [0.0, 0.5, 1.0, 2.25, 10.0, 1e6] {
            let expected = PI * r * r;
            let tolerance = 1e-12 * expected.max(1.0);
            assert!((Circle::new(r).area() - expected).abs() <= tolerance, "r = {r}");
        }
    }

    #[test]
    fn negative_radius_passes_through() {
        // r² hides the sign, so the area stays positive
        assert_eq!(Circle::new(-3.0).area(), Circle::new(3.0).area());
    }

    #[test]
    fn try_new_rejects_bad_radius() {
        assert!(Circle::try_new(-1.0).is_err());
        assert!(Circle::try_new(f64::NAN).is_err());
        assert!(Circle::try_new(f64::INFINITY).is_err());
        assert_eq!(Circle::try_new(0.0).unwrap().area(), 0.0);
    }
}
