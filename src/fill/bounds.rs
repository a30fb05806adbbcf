//! Grid extent check.

use super::grid::Coord;

/// Check a coordinate lies inside a `height` x `width` grid.
///
/// This is the only edge test the fill uses: every read or write of a cell
/// goes through it first.
#[inline]
pub fn in_bounds(coord: Coord, height: usize, width: usize) -> bool {
    coord.row >= 0
        && coord.col >= 0
        && (coord.row as usize) < height
        && (coord.col as usize) < width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_points() {
        assert!(in_bounds(Coord::new(0, 1), 3, 3));
        assert!(in_bounds(Coord::new(2, 2), 3, 3));
        assert!(in_bounds(Coord::new(0, 0), 1, 1));
    }

    #[test]
    fn test_outside_points() {
        assert!(!in_bounds(Coord::new(2, 3), 3, 3));
        assert!(!in_bounds(Coord::new(3, 0), 3, 3));
        assert!(!in_bounds(Coord::new(-1, 0), 3, 3));
        assert!(!in_bounds(Coord::new(0, -1), 3, 3));
    }

    #[test]
    fn test_empty_grid() {
        assert!(!in_bounds(Coord::new(0, 0), 0, 0));
        assert!(!in_bounds(Coord::new(0, 0), 4, 0));
    }
}
