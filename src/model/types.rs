use serde::{Deserialize, Serialize};
use std::fmt;

/// The three form fields a submission is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "fixedCosts")]
    FixedCosts,
    #[serde(rename = "variableCosts")]
    VariableCostPerUnit,
    #[serde(rename = "pricePerUnit")]
    PricePerUnit,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FixedCosts, Field::VariableCostPerUnit, Field::PricePerUnit];

    /// Identifier of the form input this field is bound to.
    pub fn id(&self) -> &'static str {
        match self {
            Field::FixedCosts => "fixedCosts",
            Field::VariableCostPerUnit => "variableCosts",
            Field::PricePerUnit => "pricePerUnit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FixedCosts => "Fixed costs",
            Field::VariableCostPerUnit => "Variable cost per unit",
            Field::PricePerUnit => "Price per unit",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single value as it arrives from the form, before any checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
    /// The form sent `null` or left the field out.
    Missing,
}

impl RawValue {
    /// Returns the value as a finite number, or `None` if it is missing,
    /// blank, unparsable, NaN or infinite.
    pub fn as_finite(&self) -> Option<f64> {
        let v = match self {
            RawValue::Number(n) => *n,
            RawValue::Text(s) => s.trim().parse::<f64>().ok()?,
            RawValue::Missing => return None,
        };
        v.is_finite().then_some(v)
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self { RawValue::Number(v) }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self { RawValue::Text(s.to_string()) }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self { RawValue::Text(s) }
}

impl Default for RawValue {
    fn default() -> Self { RawValue::Missing }
}

/// Absent keys deserialize as [`RawValue::Missing`] so they are reported
/// against their own field instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawInputs {
    pub fixed_costs: RawValue,
    #[serde(rename = "variableCosts")]
    pub variable_cost_per_unit: RawValue,
    pub price_per_unit: RawValue,
}

impl RawInputs {
    pub fn new(
        fixed_costs: impl Into<RawValue>,
        variable_cost_per_unit: impl Into<RawValue>,
        price_per_unit: impl Into<RawValue>,
    ) -> Self {
        Self {
            fixed_costs: fixed_costs.into(),
            variable_cost_per_unit: variable_cost_per_unit.into(),
            price_per_unit: price_per_unit.into(),
        }
    }

    pub fn get(&self, field: Field) -> &RawValue {
        match field {
            Field::FixedCosts => &self.fixed_costs,
            Field::VariableCostPerUnit => &self.variable_cost_per_unit,
            Field::PricePerUnit => &self.price_per_unit,
        }
    }
}

/// Inputs that passed every validation rule.
///
/// Invariants: `fixed_costs >= 0`, `variable_cost_per_unit >= 0`,
/// `price_per_unit > 0` and `variable_cost_per_unit < price_per_unit`.
/// Only the validator can build one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedInputs {
    fixed_costs: f64,
    variable_cost_per_unit: f64,
    price_per_unit: f64,
}

impl ValidatedInputs {
    pub(crate) fn new_unchecked(fixed_costs: f64, variable_cost_per_unit: f64, price_per_unit: f64) -> Self {
        Self { fixed_costs, variable_cost_per_unit, price_per_unit }
    }

    #[inline]
    pub fn fixed_costs(&self) -> f64 { self.fixed_costs }
    #[inline]
    pub fn variable_cost_per_unit(&self) -> f64 { self.variable_cost_per_unit }
    #[inline]
    pub fn price_per_unit(&self) -> f64 { self.price_per_unit }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakEvenResult {
    /// MD = P - VC
    pub contribution_margin: f64,
    /// MR = MD / P * 100, a percentage.
    pub contribution_margin_ratio: f64,
    /// Q = FC / MD
    pub break_even_quantity: f64,
    /// S = FC / (MR / 100)
    pub break_even_revenue: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    pub units: u64,
    pub total_cost: f64,
    pub total_revenue: f64,
}

/// Sampled cost/revenue points in ascending unit order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<SeriesPoint>,
}

impl ChartSeries {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn units(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.units).collect()
    }

    pub fn total_costs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_cost).collect()
    }

    pub fn total_revenues(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.total_revenue).collect()
    }
}
