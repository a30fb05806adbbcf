//! Grid coordinates and construction helpers.
//!
//! Grids are plain `ndarray` arrays of shape `(height, width)`, indexed
//! `[[row, col]]` like every image in this crate. Coordinates are signed so
//! that the row above row 0 (or a negative caller input) is representable
//! and is rejected by the bounds check instead of wrapping.

use ndarray::Array2;

use super::error::FillError;

/// A `(row, col)` cell address, also used as a pending seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Same column, `delta` rows away.
    #[inline]
    pub const fn offset_row(self, delta: isize) -> Self {
        Self {
            row: self.row + delta,
            col: self.col,
        }
    }

    /// Same row, different column.
    #[inline]
    pub const fn with_col(self, col: isize) -> Self {
        Self { row: self.row, col }
    }

    /// Array index for this coordinate.
    ///
    /// Only meaningful after `in_bounds` has accepted the coordinate.
    #[inline]
    pub(crate) fn index(self) -> [usize; 2] {
        [self.row as usize, self.col as usize]
    }
}

impl From<(isize, isize)> for Coord {
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

/// Build a dense grid from row vectors.
///
/// # Arguments
/// * `rows` - Row-major cell values; every row must have the same length
///
/// # Returns
/// Array of shape `(rows.len(), rows[0].len())`, or `RaggedRows` naming the
/// first row whose length differs from the first one
pub fn grid_from_rows<T: Clone>(rows: &[Vec<T>]) -> Result<Array2<T>, FillError> {
    let height = rows.len();
    let width = rows.first().map_or(0, Vec::len);

    let mut cells = Vec::with_capacity(height * width);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != width {
            return Err(FillError::RaggedRows {
                row,
                expected: width,
                found: values.len(),
            });
        }
        cells.extend_from_slice(values);
    }

    // Lengths were checked row by row above
    Array2::from_shape_vec((height, width), cells).map_err(|_| FillError::RaggedRows {
        row: 0,
        expected: width,
        found: 0,
    })
}

/// Wrap a flat row-major buffer as a `height` x `width` grid.
///
/// Dimensions whose product overflows `usize` are reported as a mismatch.
pub fn grid_from_flat<T: Clone>(
    data: &[T],
    width: usize,
    height: usize,
) -> Result<Array2<T>, FillError> {
    let mismatch = FillError::ShapeMismatch {
        width,
        height,
        found: data.len(),
    };
    if width.checked_mul(height) != Some(data.len()) {
        return Err(mismatch);
    }
    Array2::from_shape_vec((height, width), data.to_vec()).map_err(|_| mismatch)
}
