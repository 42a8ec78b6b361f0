//! Data records flowing through one submission: raw form values, validated
//! inputs, the derived break-even figures and the sampled chart series.
mod types;

pub use self::types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RawValue::from("1000"), Some(1000.0))]
    #[case(RawValue::from("  42.5 "), Some(42.5))]
    #[case(RawValue::from("-5"), Some(-5.0))]
    #[case(RawValue::from("1e3"), Some(1000.0))]
    #[case(RawValue::from(""), None)]
    #[case(RawValue::from("   "), None)]
    #[case(RawValue::from("abc"), None)]
    #[case(RawValue::from("12abc"), None)]
    #[case(RawValue::from("NaN"), None)]
    #[case(RawValue::from("inf"), None)]
    #[case(RawValue::from(f64::NAN), None)]
    #[case(RawValue::from(f64::NEG_INFINITY), None)]
    #[case(RawValue::from(0.0), Some(0.0))]
    #[case(RawValue::Missing, None)]
    fn test_raw_value_as_finite(#[case] raw: RawValue, #[case] expected: Option<f64>) {
        assert_eq!(raw.as_finite(), expected);
    }

    #[test]
    fn test_raw_inputs_deserialize_mixed_payload() {
        let json = r#"{"fixedCosts": 1000, "variableCosts": "40", "pricePerUnit": "ninety"}"#;
        let raw: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fixed_costs, RawValue::Number(1000.0));
        assert_eq!(raw.get(Field::VariableCostPerUnit), &RawValue::Text("40".into()));
        assert_eq!(raw.price_per_unit.as_finite(), None);
    }

    #[test]
    fn test_null_value_becomes_missing() {
        let json = r#"{"fixedCosts": null, "variableCosts": 40, "pricePerUnit": 90}"#;
        let raw: RawInputs = serde_json::from_str(json).unwrap();
        assert_eq!(raw.fixed_costs, RawValue::Missing);
        assert_eq!(raw.variable_cost_per_unit, RawValue::Number(40.0));
    }

    #[test]
    fn test_absent_keys_become_missing() {
        let raw: RawInputs = serde_json::from_str(r#"{"pricePerUnit": "90"}"#).unwrap();
        assert_eq!(raw.fixed_costs, RawValue::Missing);
        assert_eq!(raw.get(Field::VariableCostPerUnit), &RawValue::Missing);
        assert_eq!(raw.price_per_unit.as_finite(), Some(90.0));

        let empty: RawInputs = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, RawInputs::default());
    }

    #[test]
    fn test_field_ids_match_form() {
        let ids: Vec<&str> = Field::ALL.iter().map(|f| f.id()).collect();
        assert_eq!(ids, ["fixedCosts", "variableCosts", "pricePerUnit"]);
        assert_eq!(serde_json::to_string(&Field::VariableCostPerUnit).unwrap(), "\"variableCosts\"");
    }

    #[test]
    fn test_series_columns() {
        let series = ChartSeries {
            points: vec![
                SeriesPoint { units: 0, total_cost: 10.0, total_revenue: 0.0 },
                SeriesPoint { units: 5, total_cost: 20.0, total_revenue: 25.0 },
            ],
        };
        assert_eq!(series.units(), vec![0, 5]);
        assert_eq!(series.total_costs(), vec![10.0, 20.0]);
        assert_eq!(series.total_revenues(), vec![0.0, 25.0]);
    }
}
