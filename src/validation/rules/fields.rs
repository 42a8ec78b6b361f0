//! Single-field rules: each input must be a finite number inside its domain.

use crate::model::{Field, RawValue};
use crate::validation::error::{ValidationError, ValidationErrorType};

/// Lower bound a field must respect once it parses.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Bound {
    /// `value >= 0`
    NonNegative,
    /// `value > 0`
    Positive,
}

fn bound_for(field: Field) -> Bound {
    match field {
        Field::FixedCosts | Field::VariableCostPerUnit => Bound::NonNegative,
        Field::PricePerUnit => Bound::Positive,
    }
}

/// Checks one raw value against the bound of its field.
///
/// Returns the parsed number when it is acceptable, or the error to attach
/// to the field otherwise.
pub(crate) fn validate_field(field: Field, raw: &RawValue) -> Result<f64, ValidationError> {
    let value = raw.as_finite().ok_or_else(|| {
        ValidationError::new(
            field,
            ValidationErrorType::MissingOrNonNumeric,
            format!("{} must be a number.", field.label()),
        )
    })?;

    match bound_for(field) {
        Bound::NonNegative if value < 0.0 => Err(ValidationError::new(
            field,
            ValidationErrorType::OutOfRange,
            format!("{} cannot be negative.", field.label()),
        )),
        Bound::Positive if value <= 0.0 => Err(ValidationError::new(
            field,
            ValidationErrorType::OutOfRange,
            format!("{} must be greater than zero.", field.label()),
        )),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Field::FixedCosts, RawValue::from(0.0))]
    #[case(Field::FixedCosts, RawValue::from("1000"))]
    #[case(Field::VariableCostPerUnit, RawValue::from(0.0))]
    #[case(Field::PricePerUnit, RawValue::from("0.01"))]
    fn test_accepts_in_range(#[case] field: Field, #[case] raw: RawValue) {
        assert!(validate_field(field, &raw).is_ok());
    }

    #[rstest]
    #[case(Field::FixedCosts, RawValue::from(-5.0), ValidationErrorType::OutOfRange)]
    #[case(Field::VariableCostPerUnit, RawValue::from("-0.5"), ValidationErrorType::OutOfRange)]
    #[case(Field::PricePerUnit, RawValue::from(0.0), ValidationErrorType::OutOfRange)]
    #[case(Field::PricePerUnit, RawValue::from(-1.0), ValidationErrorType::OutOfRange)]
    #[case(Field::FixedCosts, RawValue::from(""), ValidationErrorType::MissingOrNonNumeric)]
    #[case(Field::PricePerUnit, RawValue::from("ninety"), ValidationErrorType::MissingOrNonNumeric)]
    #[case(Field::VariableCostPerUnit, RawValue::from(f64::INFINITY), ValidationErrorType::MissingOrNonNumeric)]
    fn test_rejects(#[case] field: Field, #[case] raw: RawValue, #[case] expected: ValidationErrorType) {
        let err = validate_field(field, &raw).unwrap_err();
        assert_eq!(err.field, field);
        assert_eq!(err.error_type, expected);
    }

    #[test]
    fn test_message_names_the_field() {
        let err = validate_field(Field::PricePerUnit, &RawValue::from(0.0)).unwrap_err();
        assert_eq!(err.message, "Price per unit must be greater than zero.");
    }
}
