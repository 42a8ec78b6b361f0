//! Plain-text report printed for a successful evaluation.
use breakeven_core::display::formulas::fixed;
use breakeven_core::Evaluation;
use std::fmt::Write;

/// Formulas block, blank line, then the sampled cost/revenue table.
pub fn render(evaluation: &Evaluation) -> String {
    let mut out = evaluation.calculations.render_text();
    let _ = writeln!(out);
    let _ = writeln!(out, "{:>10} {:>16} {:>16}", "Units", "Total cost", "Total revenue");
    for point in &evaluation.series.points {
        let _ = writeln!(
            out,
            "{:>10} {:>16} {:>16}",
            point.units,
            fixed(point.total_cost, 2),
            fixed(point.total_revenue, 2)
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use breakeven_core::{Engine, RawInputs};

    #[test]
    fn test_report_has_formulas_and_table() {
        let eval = Engine::default().evaluate(&RawInputs::new(1000.0, 40.0, 90.0)).unwrap();
        let text = render(&eval);

        assert!(text.contains("Q = FC / MD = 1000 / 50.00 = 20"));
        assert!(text.contains("Total revenue"));
        // 5 formula lines, blank, header, 16 samples
        assert_eq!(text.lines().count(), 5 + 1 + 1 + 16);
        assert!(text.lines().last().unwrap().trim_start().starts_with("30 "));
    }
}
