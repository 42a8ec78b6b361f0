//! Input checking for a break-even submission.
//!
//! Failures are data: the validator returns every `(field, message)` pair it
//! finds so a presentation layer can bind them to the form, and nothing is
//! computed until the submission is clean.

pub use self::error::{ValidationError, ValidationErrorType, ValidationErrors};
pub use self::validator::{validate, Validator};

mod error;
mod validator;
mod rules {
    pub mod cross_field;
    pub mod fields;
}
