//! Sample points for the cost/revenue line chart.
use crate::model::{ChartSeries, SeriesPoint};

/// The chart extends this far past the break-even quantity.
pub const RANGE_FACTOR: f64 = 1.5;
/// Target number of steps across the plotted range.
pub const TARGET_STEPS: u64 = 20;

/// Samples total cost and total revenue from zero units up to
/// `ceil(break_even_quantity * 1.5)`.
///
/// The step is `ceil(max_units / 20)` and never less than one, so a zero
/// break-even quantity yields the single point at zero units. Units are
/// visited in ascending order and never exceed `max_units`.
pub fn generate_series(
    break_even_quantity: f64,
    fixed_costs: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
) -> ChartSeries {
    // Float-to-int `as` saturates, so a huge or non-finite quantity stays bounded.
    let max_units = (break_even_quantity * RANGE_FACTOR).ceil().max(0.0) as u64;
    let step = max_units.div_ceil(TARGET_STEPS).max(1);

    let mut points = Vec::with_capacity((max_units / step) as usize + 1);
    let mut units = Some(0u64);
    while let Some(u) = units.filter(|&u| u <= max_units) {
        let x = u as f64;
        points.push(SeriesPoint {
            units: u,
            total_cost: fixed_costs + variable_cost_per_unit * x,
            total_revenue: price_per_unit * x,
        });
        units = u.checked_add(step);
    }

    ChartSeries { points }
}
