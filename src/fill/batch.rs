//! Filling stacks of independent grids.
//!
//! A `(layers, height, width)` array is treated as separate grids sharing a
//! seed position, e.g. label planes or animation frames. Each layer is
//! filled by its own single-threaded engine; layers run in parallel with
//! rayon.

use std::fmt::Debug;

use ndarray::ArrayViewMut3;
use rayon::prelude::*;

use super::engine::{span_fill, FillReport};
use super::error::FillError;
use super::grid::Coord;

/// Fill every layer at `seed` with `new_value`.
///
/// # Arguments
/// * `layers` - Stack of grids of shape (layers, height, width), mutated in place
/// * `seed` - Starting cell, applied to each layer
/// * `new_value` - Label to paint
///
/// # Returns
/// One result per layer, in layer order. A refused layer is left untouched
/// and does not affect the others.
pub fn span_fill_layers<T>(
    mut layers: ArrayViewMut3<'_, T>,
    seed: Coord,
    new_value: T,
) -> Vec<Result<FillReport, FillError>>
where
    T: Copy + Eq + Debug + Send + Sync,
{
    let planes: Vec<_> = layers.outer_iter_mut().collect();

    planes
        .into_par_iter()
        .map(|plane| span_fill(plane, seed, new_value))
        .collect()
}

/// Collapse per-layer results into painted counts.
///
/// A layer whose seed cell already holds the fill value maps to `None`.
/// Any other error (every layer shares the seed, so an out-of-range seed
/// fails them all) is returned as the error of the whole batch.
pub fn painted_per_layer(
    results: Vec<Result<FillReport, FillError>>,
) -> Result<Vec<Option<usize>>, FillError> {
    results
        .into_iter()
        .map(|result| match result {
            Ok(report) => Ok(Some(report.painted)),
            Err(FillError::DegenerateFill { .. }) => Ok(None),
            Err(err) => Err(err),
        })
        .collect()
}
