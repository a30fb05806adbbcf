//! Horizontal span expansion.
//!
//! Both walks repaint one direction of a scanline run, stopping at the
//! first cell that is off the grid or no longer holds `old`. Each walk keeps
//! its own column counter; the seed coordinate itself is never modified.

use ndarray::ArrayViewMut2;

use super::bounds::in_bounds;
use super::grid::Coord;

/// Fill the run to the left of the seed.
///
/// The walk starts one column left of `seed` and never touches the seed
/// cell itself.
///
/// # Returns
/// Leftmost repainted column, or `seed.col` when no cell to the left matched
pub fn fill_left<T: Copy + Eq>(
    grid: &mut ArrayViewMut2<'_, T>,
    seed: Coord,
    old: T,
    new: T,
) -> isize {
    let (height, width) = grid.dim();
    let mut left = seed.col;

    loop {
        let next = seed.with_col(left - 1);
        if !in_bounds(next, height, width) || grid[next.index()] != old {
            break;
        }
        grid[next.index()] = new;
        left -= 1;
    }

    left
}

/// Fill the run from the seed (inclusive) to the right.
///
/// # Returns
/// Rightmost repainted column, or `seed.col - 1` if the seed cell itself did not match
pub fn fill_right<T: Copy + Eq>(
    grid: &mut ArrayViewMut2<'_, T>,
    seed: Coord,
    old: T,
    new: T,
) -> isize {
    let (height, width) = grid.dim();
    let mut col = seed.col;

    loop {
        let here = seed.with_col(col);
        if !in_bounds(here, height, width) || grid[here.index()] != old {
            break;
        }
        grid[here.index()] = new;
        col += 1;
    }

    col - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};

    #[test]
    fn test_fill_left_to_edge() {
        let mut grid = Array2::<i32>::zeros((1, 5));
        let left = fill_left(&mut grid.view_mut(), Coord::new(0, 3), 0, 7);

        assert_eq!(left, 0);
        // Seed cell is left for the rightward walk
        assert_eq!(grid, arr2(&[[7, 7, 7, 0, 0]]));
    }

    #[test]
    fn test_fill_left_stops_at_wall() {
        let mut grid = arr2(&[[0, 2, 0, 0, 0]]);
        let left = fill_left(&mut grid.view_mut(), Coord::new(0, 4), 0, 1);

        assert_eq!(left, 2);
        assert_eq!(grid, arr2(&[[0, 2, 1, 1, 0]]));
    }

    #[test]
    fn test_fill_left_nothing_to_do() {
        let mut grid = arr2(&[[5, 0, 0]]);
        assert_eq!(fill_left(&mut grid.view_mut(), Coord::new(0, 1), 0, 1), 1);
        assert_eq!(fill_left(&mut grid.view_mut(), Coord::new(0, 0), 5, 1), 0);
        assert_eq!(grid, arr2(&[[5, 0, 0]]));
    }

    #[test]
    fn test_fill_right_includes_seed() {
        let mut grid = arr2(&[[0, 0, 0, 3, 0]]);
        let right = fill_right(&mut grid.view_mut(), Coord::new(0, 1), 0, 9);

        assert_eq!(right, 2);
        assert_eq!(grid, arr2(&[[0, 9, 9, 3, 0]]));
    }

    #[test]
    fn test_fill_right_to_edge() {
        let mut grid = Array2::<u8>::zeros((2, 4));
        let right = fill_right(&mut grid.view_mut(), Coord::new(1, 0), 0, 1);

        assert_eq!(right, 3);
        assert_eq!(grid, arr2(&[[0u8, 0, 0, 0], [1, 1, 1, 1]]));
    }

    #[test]
    fn test_fill_right_seed_mismatch() {
        let mut grid = arr2(&[[4, 0]]);
        let right = fill_right(&mut grid.view_mut(), Coord::new(0, 0), 0, 1);

        assert_eq!(right, -1);
        assert_eq!(grid, arr2(&[[4, 0]]));
    }

    #[test]
    fn test_left_and_right_cover_run() {
        let mut grid = arr2(&[[1, 0, 0, 0, 0, 1]]);
        let seed = Coord::new(0, 3);
        let left = fill_left(&mut grid.view_mut(), seed, 0, 2);
        let right = fill_right(&mut grid.view_mut(), seed, 0, 2);

        assert_eq!((left, right), (1, 4));
        assert_eq!(grid, arr2(&[[1, 2, 2, 2, 2, 1]]));
    }
}
