use crate::compute::{calculator, series};
use crate::config::Config;
use crate::display::{formulas, ChartPayload};
use crate::display::formulas::Calculations;
use crate::model::{BreakEvenResult, ChartSeries, RawInputs, ValidatedInputs};
use crate::validation::{ValidationErrors, Validator};
use serde::Serialize;
use tracing::info;

/// Everything produced by one successful submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub inputs: ValidatedInputs,
    pub result: BreakEvenResult,
    pub series: ChartSeries,
    pub calculations: Calculations,
    pub chart: ChartPayload,
}

/// Runs validation, calculation, sampling and presentation for a submission.
///
/// Holds only read-only configuration, so every call is independent of the
/// ones before it.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluates one submission. Nothing past validation runs when any
    /// field is rejected.
    pub fn evaluate(&self, raw: &RawInputs) -> Result<Evaluation, ValidationErrors> {
        let inputs = Validator::new(raw).validate()?;
        let result = calculator::compute(inputs);

        let series = series::generate_series(
            result.break_even_quantity,
            inputs.fixed_costs(),
            inputs.variable_cost_per_unit(),
            inputs.price_per_unit(),
        );

        let calculations = formulas::present(&inputs, &result, self.config.good_ratio_threshold);
        let chart = ChartPayload::new(&series, &self.config.chart);

        info!(
            quantity = result.break_even_quantity,
            revenue = result.break_even_revenue,
            ratio = result.contribution_margin_ratio,
            points = series.len(),
            "break-even computed"
        );

        Ok(Evaluation { inputs, result, series, calculations, chart })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::formulas::MarginHealth;
    use crate::model::Field;
    use crate::validation::ValidationErrorType;

    #[test]
    fn test_scenario_reference_submission() {
        let eval = Engine::default().evaluate(&RawInputs::new("1000", "40", "90")).unwrap();

        assert_eq!(eval.result.contribution_margin, 50.0);
        assert_eq!(formulas::fixed(eval.result.contribution_margin_ratio, 2), "55.56");
        assert_eq!(eval.result.break_even_quantity, 20.0);
        assert_eq!(formulas::fixed(eval.result.break_even_revenue, 2), "1800.00");
        assert_eq!(eval.chart.labels, eval.series.units());
        assert_eq!(eval.calculations.margin_health, MarginHealth::Good);
    }

    #[test]
    fn test_scenario_cost_above_price_is_rejected() {
        let errs = Engine::default().evaluate(&RawInputs::new(500.0, 30.0, 20.0)).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs.0[0].field, Field::VariableCostPerUnit);
        assert_eq!(errs.0[0].error_type, ValidationErrorType::CrossFieldViolation);
    }

    #[test]
    fn test_scenario_negative_fixed_costs() {
        let errs = Engine::default().evaluate(&RawInputs::new(-5.0, -1.0, 50.0)).unwrap_err();
        assert!(errs.for_field(Field::FixedCosts).all(|e| e.error_type == ValidationErrorType::OutOfRange));
        assert!(errs.has_field(Field::FixedCosts));
        assert!(errs.has_field(Field::VariableCostPerUnit));
    }

    #[test]
    fn test_scenario_zero_fixed_costs() {
        let eval = Engine::default().evaluate(&RawInputs::new(0.0, 10.0, 50.0)).unwrap();
        assert_eq!(eval.result.break_even_quantity, 0.0);
        assert_eq!(eval.result.break_even_revenue, 0.0);
        assert_eq!(formulas::fixed(eval.result.contribution_margin_ratio, 2), "80.00");
        assert_eq!(eval.series.units(), vec![0]);
    }

    #[test]
    fn test_repeat_submissions_are_independent() {
        let engine = Engine::default();
        let a = engine.evaluate(&RawInputs::new(1000.0, 40.0, 90.0)).unwrap();
        let _ = engine.evaluate(&RawInputs::new(5.0, 1.0, 2.0)).unwrap();
        let b = engine.evaluate(&RawInputs::new(1000.0, 40.0, 90.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_threshold_comes_from_config() {
        let config = Config { good_ratio_threshold: 60.0, ..Config::default() };
        let eval = Engine::new(config).evaluate(&RawInputs::new(1000.0, 40.0, 90.0)).unwrap();
        assert_eq!(eval.calculations.margin_health, MarginHealth::Poor);
    }

    #[test]
    fn test_evaluation_serializes() {
        let eval = Engine::default().evaluate(&RawInputs::new(1000.0, 40.0, 90.0)).unwrap();
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["result"]["breakEvenQuantity"], 20.0);
        assert_eq!(json["inputs"]["pricePerUnit"], 90.0);
        assert_eq!(json["calculations"]["marginHealth"], "Good");
    }
}
