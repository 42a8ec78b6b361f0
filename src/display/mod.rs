//! Presentation of results: labeled formulas and the chart payload.
pub mod chart;
pub mod formulas;

pub use chart::{ChartPayload, ChartSink, ChartSlot, Dataset};
pub use formulas::{present, Calculations, FormulaLine, MarginHealth};
