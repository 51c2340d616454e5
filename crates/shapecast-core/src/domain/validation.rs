use crate::domain::error::DomainError;

/// Centralized dimension validation.
///
/// Used by the checked constructors (`try_new`) of every variant. The plain
/// constructors never call into this.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_dimension(
        shape: &'static str,
        dimension: &'static str,
        value: f64,
    ) -> Result<f64, DomainError> {
        let reason = if value.is_nan() {
            "not a number"
        } else if value.is_infinite() {
            "not finite"
        } else if value < 0.0 {
            "negative"
        } else {
            return Ok(value);
        };

        Err(DomainError::InvalidDimension {
            shape,
            dimension,
            value,
            reason,
        })
    }
}
