//! Scanline seed fill for label grids.
//!
//! Replaces the 4-connected region of equal labels around a seed cell with a
//! new label. Instead of visiting cells one by one, the fill paints whole
//! horizontal runs and keeps one pending seed per run found on the rows
//! above and below:
//!
//! - **bounds** - coordinate range check used before every cell access
//! - **span** - left/right run expansion from a seed
//! - **seeds** - one-seed-per-run discovery on an adjacent row
//! - **engine** - seed stack and driver loop (`FillEngine`, `span_fill`)
//! - **batch** - parallel fill of independent layers
//!
//! Grids are `ndarray` arrays of shape (height, width). Labels must be
//! `Copy + Eq` (integers, enums); float grids are rejected at compile time
//! because NaN never equals itself. The bindings expose `i32` and `u8`.

pub mod batch;
pub mod bounds;
pub mod engine;
pub mod error;
pub mod grid;
pub mod seeds;
pub mod span;

pub use batch::{painted_per_layer, span_fill_layers};
pub use bounds::in_bounds;
pub use engine::{span_fill, span_fill_copy, FillEngine, FillOptions, FillReport};
pub use error::FillError;
pub use grid::{grid_from_flat, grid_from_rows, Coord};
pub use seeds::find_seeds;
pub use span::{fill_left, fill_right};
