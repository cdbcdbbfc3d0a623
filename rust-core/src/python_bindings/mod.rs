//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod periodogram_bindings;
mod window_bindings;

/// Python module definition
#[pymodule]
fn spgram(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<periodogram_bindings::PyPeriodogram>()?;

    // Add WindowType enum
    m.add_class::<window_bindings::PyWindowType>()?;

    Ok(())
}
