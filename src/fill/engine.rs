//! Stack-driven scanline seed fill.
//!
//! The engine pops a seed, paints the whole run containing it, then scans
//! the rows directly above and below that run for new seeds. Seeds are
//! processed last-in first-out, which walks the region depth-first over
//! scanlines. The visiting order is not part of the result: only the set of
//! painted cells is.
//!
//! A painted cell never matches `old` again (the fill refuses `old == new`),
//! so every run is painted once and the loop terminates for any grid.

use std::fmt::Debug;

use ndarray::{Array2, ArrayView2, ArrayViewMut2};

use super::bounds::in_bounds;
use super::error::FillError;
use super::grid::Coord;
use super::seeds::scan_row_into;
use super::span::{fill_left, fill_right};

/// Fill configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillOptions<T> {
    /// Label written into every cell of the region.
    pub new_value: T,
    /// Abort (and restore the grid) once more than this many seeds are pending.
    pub seed_limit: Option<usize>,
}

impl<T> FillOptions<T> {
    /// Unlimited fill with `new_value`.
    pub fn new(new_value: T) -> Self {
        Self {
            new_value,
            seed_limit: None,
        }
    }

    /// Bound the pending seed stack.
    ///
    /// Runs painted before the limit trips are repainted with their original
    /// value, so a refused fill leaves the grid unchanged.
    pub fn with_seed_limit(mut self, limit: usize) -> Self {
        self.seed_limit = Some(limit);
        self
    }
}

/// Summary of a completed fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillReport {
    /// Number of cells repainted
    pub painted: usize,
    /// Number of scanline runs painted
    pub runs: usize,
    /// Bounds of the repainted region
    pub bounds: (usize, usize, usize, usize), // (x, y, width, height)
    /// Largest size the seed stack reached
    pub peak_pending: usize,
}

/// A painted run, kept only when the fill may have to be undone.
#[derive(Clone, Copy, Debug)]
struct Run {
    row: isize,
    left: isize,
    right: isize,
}

/// Running totals while the stack drains.
struct Tally {
    painted: usize,
    runs: usize,
    peak_pending: usize,
    min_row: isize,
    max_row: isize,
    min_col: isize,
    max_col: isize,
}

impl Tally {
    fn new(seed: Coord) -> Self {
        Self {
            painted: 0,
            runs: 0,
            peak_pending: 1,
            min_row: seed.row,
            max_row: seed.row,
            min_col: seed.col,
            max_col: seed.col,
        }
    }

    fn add_run(&mut self, run: Run) {
        self.painted += (run.right - run.left + 1) as usize;
        self.runs += 1;
        self.min_row = self.min_row.min(run.row);
        self.max_row = self.max_row.max(run.row);
        self.min_col = self.min_col.min(run.left);
        self.max_col = self.max_col.max(run.right);
    }

    fn finish(self) -> FillReport {
        FillReport {
            painted: self.painted,
            runs: self.runs,
            bounds: (
                self.min_col as usize,
                self.min_row as usize,
                (self.max_col - self.min_col + 1) as usize,
                (self.max_row - self.min_row + 1) as usize,
            ),
            peak_pending: self.peak_pending,
        }
    }
}

/// Scanline seed-fill engine.
///
/// Holds the pending seed stack so repeated fills reuse its allocation. The
/// stack is empty between calls.
pub struct FillEngine<T> {
    options: FillOptions<T>,
    stack: Vec<Coord>,
    painted_runs: Vec<Run>,
}

impl<T: Copy + Eq + Debug> FillEngine<T> {
    pub fn new(options: FillOptions<T>) -> Self {
        Self {
            options,
            stack: Vec::new(),
            painted_runs: Vec::new(),
        }
    }

    pub fn options(&self) -> &FillOptions<T> {
        &self.options
    }

    /// Fill the region containing `seed` in place.
    ///
    /// # Arguments
    /// * `grid` - Labels of shape (height, width), mutated in place
    /// * `seed` - Starting cell; its current value is the value being replaced
    ///
    /// # Returns
    /// Report of the painted region, or an error with the grid untouched
    pub fn fill(
        &mut self,
        mut grid: ArrayViewMut2<'_, T>,
        seed: Coord,
    ) -> Result<FillReport, FillError> {
        let (height, width) = grid.dim();

        if !in_bounds(seed, height, width) {
            log::debug!(
                "span fill rejected: seed {:?} outside {}x{} grid",
                seed,
                height,
                width
            );
            return Err(FillError::InvalidSeed {
                row: seed.row,
                col: seed.col,
                height,
                width,
            });
        }

        let old = grid[seed.index()];
        let new = self.options.new_value;
        if old == new {
            log::debug!(
                "span fill rejected: seed {:?} already holds {:?}",
                seed,
                new
            );
            return Err(FillError::DegenerateFill {
                row: seed.row,
                col: seed.col,
            });
        }

        log::debug!(
            "span fill from {:?} on {}x{} grid: {:?} -> {:?}",
            seed,
            height,
            width,
            old,
            new
        );

        self.stack.clear();
        self.painted_runs.clear();
        self.stack.push(seed);

        let result = self.drain(&mut grid, seed, old, new);
        if result.is_err() {
            self.restore(&mut grid, old);
        }

        self.stack.clear();
        self.painted_runs.clear();

        if let Ok(report) = &result {
            log::debug!(
                "span fill done: {} cells in {} runs, peak stack {}",
                report.painted,
                report.runs,
                report.peak_pending
            );
        }
        result
    }

    /// Pop seeds until the stack is empty.
    fn drain(
        &mut self,
        grid: &mut ArrayViewMut2<'_, T>,
        seed: Coord,
        old: T,
        new: T,
    ) -> Result<FillReport, FillError> {
        let mut tally = Tally::new(seed);

        while let Some(seed) = self.stack.pop() {
            debug_assert!(in_bounds(seed, grid.nrows(), grid.ncols()));
            // Run was painted from another seed after this one was pushed
            if grid[seed.index()] != old {
                continue;
            }

            let left = fill_left(grid, seed, old, new);
            let right = fill_right(grid, seed, old, new);
            let run = Run {
                row: seed.row,
                left,
                right,
            };

            log::trace!("painted row {} cols {}..={}", run.row, run.left, run.right);
            tally.add_run(run);
            if self.options.seed_limit.is_some() {
                self.painted_runs.push(run);
            }

            scan_row_into(grid.view(), seed.row - 1, left, right, old, &mut self.stack);
            scan_row_into(grid.view(), seed.row + 1, left, right, old, &mut self.stack);
            tally.peak_pending = tally.peak_pending.max(self.stack.len());

            if let Some(limit) = self.options.seed_limit {
                if self.stack.len() > limit {
                    log::warn!(
                        "span fill aborted: {} pending seeds exceeds limit {}",
                        self.stack.len(),
                        limit
                    );
                    return Err(FillError::SeedLimitExceeded { limit });
                }
            }
        }

        Ok(tally.finish())
    }

    /// Repaint every recorded run with `old`.
    fn restore(&mut self, grid: &mut ArrayViewMut2<'_, T>, old: T) {
        let (height, width) = grid.dim();
        for run in self.painted_runs.iter().rev() {
            for col in run.left..=run.right {
                let cell = Coord::new(run.row, col);
                debug_assert!(in_bounds(cell, height, width));
                grid[cell.index()] = old;
            }
        }
    }
}

/// Fill the region containing `seed` with `new_value`, in place.
///
/// # Arguments
/// * `grid` - Labels of shape (height, width)
/// * `seed` - Starting cell
/// * `new_value` - Label to paint
///
/// # Returns
/// Report of the painted region, or the reason the fill was refused
///
/// Labels must be `Eq`, so float grids do not compile:
///
/// ```compile_fail
/// use ndarray::Array2;
/// use stagfill::{span_fill, Coord};
///
/// let mut grid = Array2::<f32>::from_elem((2, 2), f32::NAN);
/// let _ = span_fill(grid.view_mut(), Coord::new(0, 0), 1.0);
/// ```
pub fn span_fill<T: Copy + Eq + Debug>(
    grid: ArrayViewMut2<'_, T>,
    seed: Coord,
    new_value: T,
) -> Result<FillReport, FillError> {
    FillEngine::new(FillOptions::new(new_value)).fill(grid, seed)
}

/// Fill a copy of `input` and return it.
pub fn span_fill_copy<T: Copy + Eq + Debug>(
    input: ArrayView2<'_, T>,
    seed: Coord,
    new_value: T,
) -> Result<Array2<T>, FillError> {
    let mut output = input.to_owned();
    span_fill(output.view_mut(), seed, new_value)?;
    Ok(output)
}
