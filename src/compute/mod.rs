//! The break-even formulas, chart sampling and the per-submission pipeline.
pub mod calculator;
pub mod engine;
pub mod series;

pub use calculator::compute;
pub use engine::{Engine, Evaluation};
pub use series::generate_series;
