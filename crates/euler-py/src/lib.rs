//! PyO3 bindings for the `euler` crate.
//!
//! Notes
//! - Same call shape as the NetworkX reference script, so comparison harnesses
//!   can swap one for the other: `euler_check_graph(n, edges) -> list[int]`.
//! - Out-of-range endpoints raise `ValueError`; "no walk" is an empty list.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Eulerian circuit/trail of a directed multigraph, or `[]` if none exists.
#[pyfunction]
fn euler_check_graph(n: usize, edges: Vec<(usize, usize)>) -> PyResult<Vec<usize>> {
    euler::compute_euler_trail(n, &edges).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// `"circuit"`, `"trail"` or `"none"`.
#[pyfunction]
fn euler_kind(n: usize, edges: Vec<(usize, usize)>) -> PyResult<&'static str> {
    let cls = euler::api::classify_graph(n, &edges)
        .map_err(|err| PyValueError::new_err(err.to_string()))?;
    Ok(cls.kind.as_str())
}

#[pymodule]
fn euler_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(euler_check_graph, m)?)?;
    m.add_function(wrap_pyfunction!(euler_kind, m)?)?;
    m.add("__version__", euler::VERSION)?;
    Ok(())
}
