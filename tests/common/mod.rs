//! Shared helpers for the integration tests.
//!
//! `reference_fill` is a plain cell-by-cell BFS flood fill used as the
//! oracle for the scanline fill.

#![allow(dead_code)] // Not all test files use all functions

use std::collections::VecDeque;

use ndarray::Array2;

/// Flood fill the 4-connected region around (row, col), one cell at a time.
pub fn reference_fill(grid: &Array2<i32>, row: usize, col: usize, new_value: i32) -> Array2<i32> {
    let mut out = grid.clone();
    let (height, width) = grid.dim();
    let old = grid[[row, col]];
    if old == new_value {
        return out;
    }

    let mut queue = VecDeque::new();
    let mut visited = Array2::from_elem((height, width), false);
    queue.push_back((row, col));
    visited[[row, col]] = true;

    while let Some((y, x)) = queue.pop_front() {
        out[[y, x]] = new_value;
        for (dy, dx) in [(-1i64, 0i64), (1, 0), (0, -1), (0, 1)] {
            let ny = y as i64 + dy;
            let nx = x as i64 + dx;
            if ny < 0 || nx < 0 || ny >= height as i64 || nx >= width as i64 {
                continue;
            }
            let (ny, nx) = (ny as usize, nx as usize);
            if !visited[[ny, nx]] && grid[[ny, nx]] == old {
                visited[[ny, nx]] = true;
                queue.push_back((ny, nx));
            }
        }
    }

    out
}

/// Number of cells that differ between two equally shaped grids.
pub fn count_changed(a: &Array2<i32>, b: &Array2<i32>) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}
