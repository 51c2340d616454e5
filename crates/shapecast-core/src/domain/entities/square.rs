//! Square: s².

use crate::domain::{DomainError, DomainValidator as validator, Shape};

/// A square described by its side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    length: f64,
}

impl Square {
    pub const NAME: &'static str = "square";

    /// Create a square without validating the side length.
    pub const fn new(length: f64) -> Self {
        Self { length }
    }

    /// Create a square, rejecting negative or non-finite lengths.
    pub fn try_new(length: f64) -> Result<Self, DomainError> {
        let length = validator::validate_dimension(Self::NAME, "length", length)?;
        Ok(Self { length })
    }

    pub const fn length(&self) -> f64 {
        self.length
    }
}

impl Shape for Square {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn area(&self) -> f64 {
        self.length * self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_of_side_three() {
        let square = Square::new(3.0);
        assert_eq!(square.area(), 9.0);
        assert_eq!(square.name(), "square");
    }

    #[test]
    fn area_matches_formula() {
        for s in [0.0, 0.1, 1.0, 7.5, 1e4] {
            assert!((Square::new(s).area() - s * s).abs() <= 1e-12 * (s * s).max(1.0));
        }
    }

    #[test]
    fn try_new_rejects_negative_length() {
        let err = Square::try_new(-2.0).unwrap_err();
        assert!(err.to_string().contains("length"));
    }
}
