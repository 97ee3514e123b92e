//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod raw_bindings;
mod spectrum_bindings;

/// Python module definition
#[pymodule]
fn raw_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(raw_bindings::load_raw, m)?)?;
    m.add_function(wrap_pyfunction!(raw_bindings::write_raw, m)?)?;
    m.add_class::<spectrum_bindings::PySpectrumAnalyzer>()?;

    m.add_class::<spectrum_bindings::PyWindowType>()?;
    m.add_class::<spectrum_bindings::PyAxisBound>()?;

    Ok(())
}
