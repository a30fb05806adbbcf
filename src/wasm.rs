//! WebAssembly exports for StagFill.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Grids are passed as flat row-major arrays (length = width * height) and
//! the filled grid is returned as a new array. Errors are thrown as JS
//! exceptions carrying the error message.

use wasm_bindgen::prelude::*;

use crate::fill::{grid_from_flat, span_fill, Coord, FillError};

fn to_js(err: FillError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

// ============================================================================
// Span Fill - i32 labels
// ============================================================================

/// Fill the region around (row, col) with `new_value`.
///
/// # Arguments
/// * `data` - Flat array of labels (length = width * height)
/// * `width` - Grid width in cells
/// * `height` - Grid height in cells
/// * `row`, `col` - Seed cell
/// * `new_value` - Label to paint
///
/// # Returns
/// Flat array of labels with the region filled
#[wasm_bindgen]
pub fn span_fill_wasm(
    data: &[i32],
    width: usize,
    height: usize,
    row: isize,
    col: isize,
    new_value: i32,
) -> Result<Vec<i32>, JsValue> {
    let mut grid = grid_from_flat(data, width, height).map_err(to_js)?;
    span_fill(grid.view_mut(), Coord::new(row, col), new_value).map_err(to_js)?;
    Ok(grid.into_raw_vec_and_offset().0)
}

// ============================================================================
// Span Fill - u8 labels
// ============================================================================

/// Fill the region around (row, col) of an 8-bit mask with `new_value`.
#[wasm_bindgen]
pub fn span_fill_u8_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    row: isize,
    col: isize,
    new_value: u8,
) -> Result<Vec<u8>, JsValue> {
    let mut grid = grid_from_flat(data, width, height).map_err(to_js)?;
    span_fill(grid.view_mut(), Coord::new(row, col), new_value).map_err(to_js)?;
    Ok(grid.into_raw_vec_and_offset().0)
}
