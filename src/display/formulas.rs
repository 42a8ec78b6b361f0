//! Human-readable rendering of the break-even figures as labeled formulas.
use crate::model::{BreakEvenResult, ValidatedInputs};
use serde::Serialize;
use std::fmt::Write;

/// Display classification of the contribution margin ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MarginHealth {
    Good,
    Poor,
}

impl MarginHealth {
    /// `ratio` is a percentage; the threshold is inclusive.
    pub fn classify(ratio: f64, threshold: f64) -> Self {
        if ratio >= threshold { MarginHealth::Good } else { MarginHealth::Poor }
    }

    pub fn color(&self) -> &'static str {
        match self {
            MarginHealth::Good => "green",
            MarginHealth::Poor => "red",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormulaLine {
    pub label: &'static str,
    /// e.g. `MD = P - VC = 90 - 40 = 50.00`
    pub plain: String,
    /// The same expression as display-math TeX, wrapped in `$$`.
    pub tex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculations {
    pub contribution_margin: FormulaLine,
    pub contribution_margin_ratio: FormulaLine,
    pub break_even_quantity: FormulaLine,
    pub break_even_revenue: FormulaLine,
    pub margin_health: MarginHealth,
}

impl Calculations {
    pub fn lines(&self) -> [&FormulaLine; 4] {
        [
            &self.contribution_margin,
            &self.contribution_margin_ratio,
            &self.break_even_quantity,
            &self.break_even_revenue,
        ]
    }

    /// Plain-text block, one labeled formula per line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for line in self.lines() {
            let _ = writeln!(out, "{}: {}", line.label, line.plain);
        }
        let verdict = match self.margin_health {
            MarginHealth::Good => "healthy",
            MarginHealth::Poor => "weak",
        };
        let _ = writeln!(out, "Margin ratio is {}", verdict);
        out
    }
}

/// Fractional digits that hold the complete decimal expansion of any `f64`.
const EXACT_FRACTION_DIGITS: usize = 1100;

/// True when the exact binary value sits precisely halfway between two
/// `places`-decimal neighbours.
fn is_exact_tie(value: f64, places: usize) -> bool {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value);
    let tail = exact
        .split_once('.')
        .and_then(|(_, fraction)| fraction.get(places..));
    match tail {
        Some(tail) => tail.starts_with('5') && tail.bytes().skip(1).all(|b| b == b'0'),
        None => false,
    }
}

/// Scales, rounds away from zero and scales back. Exact for tie values,
/// which always have a short binary expansion.
fn round_tie_away(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Fixed-point text with `places` decimals.
///
/// The exact binary value is rounded to the nearest neighbour, so `0.015`
/// (stored just below) shows as `0.01`. Exact ties go away from zero:
/// `2.5 -> 3`, `0.125 -> 0.13`.
pub fn fixed(value: f64, places: u32) -> String {
    let p = places as usize;
    if value.is_finite() && is_exact_tie(value, p) {
        format!("{:.*}", p, round_tie_away(value, places))
    } else {
        format!("{:.*}", p, value)
    }
}

/// Builds the four labeled formulas shown after a successful calculation.
///
/// Money and ratio values are shown with two decimals, the break-even quantity
/// with none. User inputs are echoed as entered.
pub fn present(inputs: &ValidatedInputs, result: &BreakEvenResult, good_ratio_threshold: f64) -> Calculations {
    let fc = inputs.fixed_costs();
    let vc = inputs.variable_cost_per_unit();
    let p = inputs.price_per_unit();

    let md = fixed(result.contribution_margin, 2);
    let mr = fixed(result.contribution_margin_ratio, 2);
    let q = fixed(result.break_even_quantity, 0);
    let s = fixed(result.break_even_revenue, 2);

    let health = MarginHealth::classify(result.contribution_margin_ratio, good_ratio_threshold);

    Calculations {
        contribution_margin: FormulaLine {
            label: "Contribution margin (MD)",
            plain: format!("MD = P - VC = {} - {} = {}", p, vc, md),
            tex: format!("$$ MD = P - VC = {} - {} = {} $$", p, vc, md),
        },
        contribution_margin_ratio: FormulaLine {
            label: "Contribution margin ratio (MR)",
            plain: format!("MR = MD / P * 100% = {} / {} * 100% = {}%", md, p, mr),
            tex: format!(
                "$$ MR = \\frac{{MD}}{{P}} \\times 100\\% = \\frac{{{}}}{{{}}} \\times 100\\% = \\color{{{}}}{{{}\\%}} $$",
                md, p, health.color(), mr
            ),
        },
        break_even_quantity: FormulaLine {
            label: "Break-even quantity (Q)",
            plain: format!("Q = FC / MD = {} / {} = {}", fc, md, q),
            tex: format!("$$ Q = \\frac{{FC}}{{MD}} = \\frac{{{}}}{{{}}} = {} $$", fc, md, q),
        },
        break_even_revenue: FormulaLine {
            label: "Break-even revenue (S)",
            plain: format!("S = FC / (MR / 100) = {} / ({} / 100) = {}", fc, mr, s),
            tex: format!(
                "$$ S = \\frac{{FC}}{{MR \\div 100}} = \\frac{{{}}}{{{} \\div 100}} = {} $$",
                fc, mr, s
            ),
        },
        margin_health: health,
    }
}
