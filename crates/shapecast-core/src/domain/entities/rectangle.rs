use crate::domain::{DomainError, DomainValidator as validator, Shape};

/// A rectangle described by width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub const NAME: &'static str = "rectangle";

    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn try_new(width: f64, height: f64) -> Result<Self, DomainError> {
        let width = validator::validate_dimension(Self::NAME, "width", width)?;
        let height = validator::validate_dimension(Self::NAME, "height", height)?;
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> f64 {
        self.width
    }

    pub const fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_is_width_times_height() {
        assert_eq!(Rectangle::new(2.0, 4.0).area(), 8.0);
    }

    #[test]
    fn one_negative_side_gives_negative_area() {
        assert_eq!(Rectangle::new(2.0, -3.0).area(), -6.0);
    }

    #[test]
    fn try_new_reports_the_offending_dimension() {
        match Rectangle::try_new(2.0, -3.0) {
            Err(DomainError::InvalidDimension { dimension, .. }) => assert_eq!(dimension, "height"),
            other => panic!("expected InvalidDimension, got {other:?}"),
        }
    }
}
