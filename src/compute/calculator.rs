use crate::model::{BreakEvenResult, ValidatedInputs};

/// Derives the break-even figures from a validated submission.
///
/// Pure: no state is read or kept, so equal inputs give bit-identical results.
/// `contribution_margin` is strictly positive because the validator guarantees
/// `variable_cost < price`, which keeps both divisions well defined.
pub fn compute(inputs: ValidatedInputs) -> BreakEvenResult {
    let fc = inputs.fixed_costs();
    let vc = inputs.variable_cost_per_unit();
    let p = inputs.price_per_unit();

    let contribution_margin = p - vc;
    let contribution_margin_ratio = contribution_margin / p * 100.0;
    let break_even_quantity = fc / contribution_margin;
    let break_even_revenue = fc / (contribution_margin_ratio / 100.0);

    BreakEvenResult {
        contribution_margin,
        contribution_margin_ratio,
        break_even_quantity,
        break_even_revenue,
    }
}
