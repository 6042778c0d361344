//! Precomputed diagonal neighbours for every square.

use once_cell::sync::Lazy;

use super::{Square, SIZE};

/// The four diagonal directions as (row step, col step).
pub(crate) const DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// One diagonal ray from a square: the adjacent cell and, if on the board,
/// the cell directly beyond it (a jump landing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Ray {
    pub(crate) adjacent: Square,
    pub(crate) beyond: Option<Square>,
}

#[inline]
pub(crate) const fn direction_index(d_row: isize, d_col: isize) -> usize {
    match (d_row < 0, d_col < 0) {
        (true, true) => 0,
        (true, false) => 1,
        (false, true) => 2,
        (false, false) => 3,
    }
}

pub(crate) static DIAGONALS: Lazy<[[Option<Ray>; 4]; SIZE * SIZE]> = Lazy::new(|| {
    let mut rays = [[None; 4]; SIZE * SIZE];
    for sq in Square::all() {
        for (d_row, d_col) in DIRECTIONS {
            rays[sq.as_index()][direction_index(d_row, d_col)] =
                sq.offset(d_row, d_col).map(|adjacent| Ray {
                    adjacent,
                    beyond: adjacent.offset(d_row, d_col),
                });
        }
    }
    rays
});

/// The ray leaving `sq` in the given direction, `None` at the edge.
#[inline]
pub(crate) fn ray(sq: Square, d_row: isize, d_col: isize) -> Option<Ray> {
    DIAGONALS[sq.as_index()][direction_index(d_row, d_col)]
}
