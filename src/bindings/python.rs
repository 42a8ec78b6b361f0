//! FFI Facade: exposes the submission pipeline to Python hosts as `_core`.
use crate::compute::Engine;
use crate::model::{RawInputs, RawValue};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

/// Numbers pass through as numbers and strings as text. `None` and any
/// other object become `Missing`, which the validator reports on its field.
fn to_raw(obj: &Bound<'_, PyAny>) -> RawValue {
    if let Ok(v) = obj.extract::<f64>() {
        return RawValue::Number(v);
    }
    match obj.extract::<String>() {
        Ok(s) => RawValue::Text(s),
        Err(_) => RawValue::default(),
    }
}

/// Evaluates one submission and returns the evaluation as a JSON string.
///
/// Raises `ValueError` with one `field: message` line per rejected input.
#[pyfunction]
fn evaluate(
    fixed_costs: &Bound<'_, PyAny>,
    variable_cost: &Bound<'_, PyAny>,
    price: &Bound<'_, PyAny>,
) -> PyResult<String> {
    let raw = RawInputs {
        fixed_costs: to_raw(fixed_costs),
        variable_cost_per_unit: to_raw(variable_cost),
        price_per_unit: to_raw(price),
    };
    let evaluation = Engine::default()
        .evaluate(&raw)
        .map_err(|errs| PyValueError::new_err(errs.to_string()))?;
    serde_json::to_string(&evaluation).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// This function defines the `_core` Python module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(version, m)?)?;
    Ok(())
}
