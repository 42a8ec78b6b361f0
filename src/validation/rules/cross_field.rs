//! Cross-field rule: a unit has to sell for more than it costs to make.

use crate::model::Field;
use crate::validation::error::{ValidationError, ValidationErrorType};

/// Rejects `variable_cost >= price`. The error is attributed to the
/// variable-cost field, since that is the input the user is asked to lower.
///
/// Only meaningful once both values passed their single-field checks.
pub(crate) fn validate_margin(variable_cost: f64, price: f64) -> Option<ValidationError> {
    if variable_cost >= price {
        return Some(ValidationError::new(
            Field::VariableCostPerUnit,
            ValidationErrorType::CrossFieldViolation,
            "Variable cost per unit must be less than the price per unit.",
        ));
    }
    None
}
