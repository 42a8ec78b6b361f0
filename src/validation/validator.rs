//! The central validator that orchestrates the execution of all validation rules.
use super::error::{ValidationError, ValidationErrors};
use super::rules::{cross_field, fields};
use crate::model::{Field, RawInputs, ValidatedInputs};
use tracing::{debug, warn};

/// The orchestrator for input checking.
///
/// Every single-field rule runs regardless of earlier failures so the user
/// sees all problems at once. The cross-field rule only runs when all three
/// fields are individually valid.
pub struct Validator<'a> {
    raw: &'a RawInputs,
}

impl<'a> Validator<'a> {
    pub fn new(raw: &'a RawInputs) -> Self {
        Self { raw }
    }

    /// Executes all validation rules against the submission.
    ///
    /// # Returns
    /// - `Ok(ValidatedInputs)` if no validation errors are found.
    /// - `Err(ValidationErrors)` containing every error discovered.
    pub fn validate(&self) -> Result<ValidatedInputs, ValidationErrors> {
        let mut errors: Vec<ValidationError> = Vec::new();
        let mut values = [0.0_f64; 3];

        for (slot, field) in values.iter_mut().zip(Field::ALL) {
            match fields::validate_field(field, self.raw.get(field)) {
                Ok(v) => {
                    debug!(field = field.id(), value = v, "field accepted");
                    *slot = v;
                }
                Err(err) => {
                    debug!(field = field.id(), kind = ?err.error_type, "field rejected");
                    errors.push(err);
                }
            }
        }

        let [fixed_costs, variable_cost, price] = values;

        if errors.is_empty() {
            if let Some(err) = cross_field::validate_margin(variable_cost, price) {
                debug!(variable_cost, price, "cross-field rule rejected submission");
                errors.push(err);
            }
        }

        if errors.is_empty() {
            Ok(ValidatedInputs::new_unchecked(fixed_costs, variable_cost, price))
        } else {
            warn!(count = errors.len(), "submission rejected by validation");
            Err(ValidationErrors(errors))
        }
    }
}

/// Shorthand for `Validator::new(raw).validate()`.
pub fn validate(raw: &RawInputs) -> Result<ValidatedInputs, ValidationErrors> {
    Validator::new(raw).validate()
}
