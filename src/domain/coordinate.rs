use serde::{Deserialize, Serialize};
use std::fmt;

/// Cells per axis. The board is a cube of `BOARD_SIDE`³ cells.
pub const BOARD_SIDE: i32 = 8;

/// A cell address on the layered board.
///
/// Components are signed so that [`Coordinate::offset`] can step off the
/// board; anything produced that way must go through
/// [`Coordinate::is_within_bounds`] before it is used as a destination.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub layer: i32,
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(layer: i32, row: i32, col: i32) -> Self {
        Self { layer, row, col }
    }

    pub fn is_within_bounds(&self) -> bool {
        (0..BOARD_SIDE).contains(&self.layer)
            && (0..BOARD_SIDE).contains(&self.row)
            && (0..BOARD_SIDE).contains(&self.col)
    }

    pub fn offset(&self, delta: Delta) -> Self {
        Self {
            layer: self.layer + delta.layer,
            row: self.row + delta.row,
            col: self.col + delta.col,
        }
    }

    /// Every in-bounds cell, layer-major.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIDE).flat_map(|layer| {
            (0..BOARD_SIDE)
                .flat_map(move |row| (0..BOARD_SIDE).map(move |col| Coordinate::new(layer, row, col)))
        })
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.layer, self.row, self.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{} R{} C{}", self.layer, self.row, self.col)
    }
}

/// An additive step. Unspecified axes are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Delta {
    pub layer: i32,
    pub row: i32,
    pub col: i32,
}

impl Delta {
    pub const fn new(layer: i32, row: i32, col: i32) -> Self {
        Self { layer, row, col }
    }

    pub const fn layer(layer: i32) -> Self {
        Self::new(layer, 0, 0)
    }

    pub const fn row(row: i32) -> Self {
        Self::new(0, row, 0)
    }

    pub const fn col(col: i32) -> Self {
        Self::new(0, 0, col)
    }

    pub fn nonzero_axes(&self) -> usize {
        [self.layer, self.row, self.col]
            .iter()
            .filter(|&&v| v != 0)
            .count()
    }

    pub fn is_zero(&self) -> bool {
        self.nonzero_axes() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_half_open() {
        assert!(Coordinate::new(0, 0, 0).is_within_bounds());
        assert!(Coordinate::new(7, 7, 7).is_within_bounds());
        assert!(!Coordinate::new(8, 0, 0).is_within_bounds());
        assert!(!Coordinate::new(0, -1, 0).is_within_bounds());
        assert!(!Coordinate::new(0, 0, 8).is_within_bounds());
    }

    #[test]
    fn offset_may_leave_the_board() {
        let c = Coordinate::new(0, 7, 3);
        let next = c.offset(Delta::row(1));
        assert_eq!(next, Coordinate::new(0, 8, 3));
        assert!(!next.is_within_bounds());
    }

    #[test]
    fn unspecified_axes_default_to_zero() {
        let c = Coordinate::new(2, 2, 2);
        assert_eq!(c.offset(Delta::layer(-1)), Coordinate::new(1, 2, 2));
        assert_eq!(c.offset(Delta::default()), c);
    }

    #[test]
    fn all_cells_cover_the_cube() {
        assert_eq!(Coordinate::all().count(), 512);
        assert!(Coordinate::all().all(|c| c.is_within_bounds()));
    }
}
