//! Seed discovery on the rows adjacent to a filled run.
//!
//! After a run `[left, right]` is painted on row `r`, rows `r - 1` and
//! `r + 1` are scanned over the same columns. Every maximal stretch of
//! cells still holding `old` inside that range yields exactly one seed (its
//! leftmost cell), so a long run costs one stack entry, not one per cell.

use ndarray::ArrayView2;

use super::bounds::in_bounds;
use super::grid::Coord;

/// Per-row scan state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    /// Not inside a matching stretch; the next match starts a new one.
    Idle,
    /// A seed was already emitted for the current stretch.
    InRun,
}

/// Scan `row` over `left..=right` and return one seed per matching stretch.
///
/// Out-of-range rows and columns are treated as non-matching. The grid is
/// only read.
pub fn find_seeds<T: Copy + Eq>(
    grid: ArrayView2<'_, T>,
    row: isize,
    left: isize,
    right: isize,
    old: T,
) -> Vec<Coord> {
    let mut seeds = Vec::new();
    scan_row_into(grid, row, left, right, old, &mut seeds);
    seeds
}

/// Same scan as [`find_seeds`], appending to `out` instead of allocating.
///
/// # Returns
/// Number of seeds appended
pub fn scan_row_into<T: Copy + Eq>(
    grid: ArrayView2<'_, T>,
    row: isize,
    left: isize,
    right: isize,
    old: T,
    out: &mut Vec<Coord>,
) -> usize {
    let (height, width) = grid.dim();
    let before = out.len();
    let mut state = ScanState::Idle;

    for col in left..=right {
        let here = Coord::new(row, col);
        let matches = in_bounds(here, height, width) && grid[here.index()] == old;

        state = match (state, matches) {
            (_, false) => ScanState::Idle,
            (ScanState::Idle, true) => {
                out.push(here);
                ScanState::InRun
            }
            (ScanState::InRun, true) => ScanState::InRun,
        };
    }

    out.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};

    #[test]
    fn test_one_seed_per_run() {
        let grid = arr2(&[[0, 0, 0, 1, 0, 0, 1, 1, 0]]);
        let seeds = find_seeds(grid.view(), 0, 0, 8, 0);

        assert_eq!(
            seeds,
            vec![Coord::new(0, 0), Coord::new(0, 4), Coord::new(0, 8)]
        );
    }

    #[test]
    fn test_range_clips_runs() {
        let grid = arr2(&[[0, 0, 0, 0, 1, 0, 0]]);
        // Run 0..=3 is entered at column 2
        let seeds = find_seeds(grid.view(), 0, 2, 5, 0);

        assert_eq!(seeds, vec![Coord::new(0, 2), Coord::new(0, 5)]);
    }

    #[test]
    fn test_no_matches() {
        let grid = Array2::<i32>::from_elem((2, 4), 3);
        assert!(find_seeds(grid.view(), 1, 0, 3, 0).is_empty());
    }

    #[test]
    fn test_out_of_range_rows() {
        let grid = Array2::<i32>::zeros((2, 3));
        assert!(find_seeds(grid.view(), -1, 0, 2, 0).is_empty());
        assert!(find_seeds(grid.view(), 2, 0, 2, 0).is_empty());
    }

    #[test]
    fn test_out_of_range_columns() {
        let grid = Array2::<i32>::zeros((1, 3));
        let seeds = find_seeds(grid.view(), 0, -2, 5, 0);
        assert_eq!(seeds, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn test_scan_row_into_appends() {
        let grid = arr2(&[[0, 1, 0], [1, 1, 1]]);
        let mut stack = vec![Coord::new(9, 9)];

        let added = scan_row_into(grid.view(), 0, 0, 2, 0, &mut stack);

        assert_eq!(added, 2);
        assert_eq!(
            stack,
            vec![Coord::new(9, 9), Coord::new(0, 0), Coord::new(0, 2)]
        );
        assert_eq!(scan_row_into(grid.view(), 1, 0, 2, 0, &mut stack), 0);
    }
}
