//! Defines the error types for the validation module.
use crate::model::Field;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// The specific category of a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorType {
    /// The value is blank or cannot be read as a finite number.
    MissingOrNonNumeric,
    /// The value parses but violates a domain bound (negative cost, non-positive price).
    OutOfRange,
    /// The variable cost is not strictly below the price.
    CrossFieldViolation,
}

/// A structured error report, attributed to the form field it belongs to.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[error("{field}: {message}")]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// The field the message should be shown next to.
    pub field: Field,
    /// The category of the error.
    pub error_type: ValidationErrorType,
    /// A human-readable message explaining the error.
    pub message: String,
}

impl ValidationError {
    pub fn new(field: Field, error_type: ValidationErrorType, message: impl Into<String>) -> Self {
        Self { field, error_type, message: message.into() }
    }
}

/// Every failure found in one submission, in field order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
    pub fn len(&self) -> usize { self.0.len() }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// All errors attributed to `field`.
    pub fn for_field(&self, field: Field) -> impl Iterator<Item = &ValidationError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    pub fn has_field(&self, field: Field) -> bool {
        self.for_field(field).next().is_some()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
