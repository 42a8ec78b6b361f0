//! Break-even analysis core.
//!
//! A submission of three raw numbers (fixed costs, variable cost per unit,
//! price per unit) goes through a single pipeline:
//! validation -> calculation -> chart sampling -> presentation.
//! See [`compute::Engine`] for the entry point.

pub mod compute;
pub mod config;
pub mod display;
pub mod model;
pub mod validation;

#[cfg(feature = "python")]
mod bindings {
    pub mod python;
}

pub use compute::{Engine, Evaluation};
pub use config::{Config, ConfigError};
pub use model::{BreakEvenResult, ChartSeries, Field, RawInputs, RawValue, SeriesPoint, ValidatedInputs};
pub use validation::{ValidationError, ValidationErrorType, ValidationErrors};
