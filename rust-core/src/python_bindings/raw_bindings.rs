//! Python bindings for raw dump I/O

use std::path::PathBuf;

use clap::ValueEnum;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::io::{self, ByteOrder, RawError};

fn parse_byte_order(name: &str) -> PyResult<ByteOrder> {
    ByteOrder::from_str(name, true).map_err(PyValueError::new_err)
}

fn to_py_err(err: RawError) -> PyErr {
    match err {
        RawError::Io { .. } => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

/// Load a raw f64 dump
///
/// Args:
///     path: Dump file
///     byte_order: "native", "little" or "big"
///
/// Returns:
///     Samples as numpy array
#[pyfunction]
#[pyo3(signature = (path, byte_order="native"))]
pub fn load_raw<'py>(py: Python<'py>, path: PathBuf, byte_order: &str) -> PyResult<&'py PyArray1<f64>> {
    let order = parse_byte_order(byte_order)?;
    let buffer = io::load_raw(&path, order).map_err(to_py_err)?;
    Ok(PyArray1::from_vec(py, buffer.into_inner()))
}

/// Write samples as a raw f64 dump
///
/// Args:
///     path: Destination file
///     samples: Samples as numpy array
///     byte_order: "native", "little" or "big"
#[pyfunction]
#[pyo3(signature = (path, samples, byte_order="native"))]
pub fn write_raw(path: PathBuf, samples: PyReadonlyArray1<f64>, byte_order: &str) -> PyResult<()> {
    let order = parse_byte_order(byte_order)?;
    let samples = samples
        .as_slice()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    io::write_raw(&path, samples, order).map_err(to_py_err)
}
