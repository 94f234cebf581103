// Python-bindinger for de rene transformasjonene. JSON inn, JSON ut, som
// resten av kjernen sine grensesnitt mot Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::errors::GraphError;
use crate::models::Workout;
use crate::progress::{analytic_layout, locate};
use crate::workout_graph::build_interval_graph;
use crate::zones::classify;

fn to_py_err(e: GraphError) -> PyErr {
    match e {
        GraphError::ProgressIndexOutOfRange { .. } => PyIndexError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> PyResult<String> {
    serde_json::to_string(value).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pyfunction]
#[pyo3(signature = (value, ftp=None))]
fn classify_zone(value: f64, ftp: Option<f64>) -> &'static str {
    classify(value, ftp).name()
}

#[pyfunction]
fn scale_height(max: f64, value: f64) -> PyResult<f64> {
    if max == 0.0 {
        return Err(PyValueError::new_err("max må være ulik null"));
    }
    Ok(crate::scaling::scale_height(max, value))
}

#[pyfunction]
fn interval_graph_json(workout_json: &str, ftp: f64) -> PyResult<String> {
    let workout = Workout::from_json(workout_json).map_err(to_py_err)?;
    let graph = build_interval_graph(&workout, ftp).map_err(to_py_err)?;
    to_json(&graph)
}

/// Progress for intervall `index`, beregnet fra analytisk layout.
#[pyfunction]
fn locate_progress_json(workout_json: &str, ftp: f64, index: usize) -> PyResult<String> {
    let workout = Workout::from_json(workout_json).map_err(to_py_err)?;
    let graph = build_interval_graph(&workout, ftp).map_err(to_py_err)?;
    let state = locate(index, &analytic_layout(&graph)).map_err(to_py_err)?;
    to_json(&state)
}

#[pymodule]
fn zonegraph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_zone, m)?)?;
    m.add_function(wrap_pyfunction!(scale_height, m)?)?;
    m.add_function(wrap_pyfunction!(interval_graph_json, m)?)?;
    m.add_function(wrap_pyfunction!(locate_progress_json, m)?)?;
    Ok(())
}
