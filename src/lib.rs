//! StagFill Rust Extensions
//!
//! Scanline seed fill ("paint bucket") for label grids, implemented in Rust
//! with optional Python bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Grid Format
//! Grids are 2D arrays of shape (height, width) indexed `[[row, col]]`:
//! - **i32**: general integer labels (segmentation maps, region ids)
//! - **u8**: 8-bit masks and palette images
//!
//! Layer stacks of shape (layers, height, width) can be filled in one call,
//! one independent fill per layer.
//!
//! ## Errors
//! Fills return `Result<_, FillError>`. A refused fill never leaves the grid
//! partially painted. The Python bindings raise `IndexError` for a seed
//! outside the grid and `ValueError` otherwise; the WASM bindings throw the
//! error message as a JavaScript exception.
//!
//! ## Logging
//! Uses the `log` facade (`debug` per fill, `trace` per painted run). Install
//! any logger in the host application to see it.

pub mod fill;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use fill::{
    grid_from_rows, span_fill, span_fill_copy, span_fill_layers, Coord, FillEngine, FillError,
    FillOptions, FillReport,
};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray2, PyReadonlyArray2, PyReadwriteArray2, PyReadwriteArray3};
    use pyo3::exceptions::{PyIndexError, PyValueError};
    use pyo3::prelude::*;

    use crate::fill::{
        painted_per_layer, span_fill as span_fill_impl, span_fill_copy, span_fill_layers, Coord,
        FillError,
    };

    impl From<FillError> for PyErr {
        fn from(err: FillError) -> PyErr {
            match err {
                FillError::InvalidSeed { .. } => PyIndexError::new_err(err.to_string()),
                _ => PyValueError::new_err(err.to_string()),
            }
        }
    }

    // ========================================================================
    // Span Fill
    // ========================================================================

    /// Fill the region around (row, col) in a copy of an int32 grid.
    ///
    /// # Arguments
    /// * `image` - 2D int32 array (height, width)
    /// * `row`, `col` - Seed cell
    /// * `new_value` - Label to paint (default: 1)
    #[pyfunction]
    #[pyo3(signature = (image, row, col, new_value=1))]
    pub fn span_fill<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, i32>,
        row: isize,
        col: isize,
        new_value: i32,
    ) -> PyResult<Bound<'py, PyArray2<i32>>> {
        let result = span_fill_copy(image.as_array(), Coord::new(row, col), new_value)?;
        Ok(result.into_pyarray(py))
    }

    /// Fill the region around (row, col) in a copy of a uint8 grid.
    #[pyfunction]
    #[pyo3(signature = (image, row, col, new_value=1))]
    pub fn span_fill_u8<'py>(
        py: Python<'py>,
        image: PyReadonlyArray2<'py, u8>,
        row: isize,
        col: isize,
        new_value: u8,
    ) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let result = span_fill_copy(image.as_array(), Coord::new(row, col), new_value)?;
        Ok(result.into_pyarray(py))
    }

    /// Fill an int32 grid in place.
    ///
    /// Returns the number of painted cells.
    #[pyfunction]
    #[pyo3(signature = (image, row, col, new_value=1))]
    pub fn span_fill_inplace(
        mut image: PyReadwriteArray2<'_, i32>,
        row: isize,
        col: isize,
        new_value: i32,
    ) -> PyResult<usize> {
        let report = span_fill_impl(image.as_array_mut(), Coord::new(row, col), new_value)?;
        Ok(report.painted)
    }

    /// Fill every layer of an int32 (layers, height, width) stack in place.
    ///
    /// Returns painted cell counts per layer. A layer whose seed cell already
    /// holds `new_value` reports `None`. A seed outside the grid raises
    /// `IndexError`; any other failure raises `ValueError`.
    #[pyfunction]
    #[pyo3(signature = (layers, row, col, new_value=1))]
    pub fn span_fill_layers_inplace(
        mut layers: PyReadwriteArray3<'_, i32>,
        row: isize,
        col: isize,
        new_value: i32,
    ) -> PyResult<Vec<Option<usize>>> {
        let results = span_fill_layers(layers.as_array_mut(), Coord::new(row, col), new_value);
        Ok(painted_per_layer(results)?)
    }

    /// Python module definition
    #[pymodule]
    pub fn stagfill(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(span_fill, m)?)?;
        m.add_function(wrap_pyfunction!(span_fill_u8, m)?)?;
        m.add_function(wrap_pyfunction!(span_fill_inplace, m)?)?;
        m.add_function(wrap_pyfunction!(span_fill_layers_inplace, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::stagfill;
