//! Error type shared by the fill engine and the grid helpers.
//!
//! Every variant is raised before the grid is left in a modified state:
//! precondition failures are detected before the first write, and an
//! aborted fill restores the cells it painted.

use thiserror::Error;

/// Reasons a fill (or grid construction) is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FillError {
    /// The starting coordinate is outside the grid.
    #[error("seed ({row}, {col}) lies outside the {height}x{width} grid")]
    InvalidSeed {
        row: isize,
        col: isize,
        height: usize,
        width: usize,
    },

    /// The seed cell already holds the fill value, so nothing could ever stop matching.
    #[error("seed ({row}, {col}) already holds the fill value")]
    DegenerateFill { row: isize, col: isize },

    /// The pending seed stack grew past the configured limit.
    #[error("fill aborted: more than {limit} pending seeds (grid restored)")]
    SeedLimitExceeded { limit: usize },

    /// A flat buffer does not hold exactly `width * height` cells.
    #[error("{width}x{height} grid does not match {found} cells")]
    ShapeMismatch {
        width: usize,
        height: usize,
        found: usize,
    },

    /// Rows passed to `grid_from_rows` differ in length.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}
