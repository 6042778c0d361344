//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::Square;

/// Checker colors.
///
/// Dark sets up on the high rows and advances toward row 0; Light sets up on
/// the low rows and advances toward row 7.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    /// Both colors in index order (Dark=0, Light=1)
    pub const BOTH: [Color; 2] = [Color::Dark, Color::Light];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::Dark => 0,
            Color::Light => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }

    /// Row step a man of this color travels (-1 for Dark, +1 for Light)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::Dark => -1,
            Color::Light => 1,
        }
    }

    /// Rows occupied by this color in the starting position
    #[inline]
    #[must_use]
    pub(crate) const fn home_rows(self) -> [usize; 3] {
        match self {
            Color::Dark => [5, 6, 7],
            Color::Light => [0, 1, 2],
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Dark => write!(f, "Dark"),
            Color::Light => write!(f, "Light"),
        }
    }
}

/// A single checker.
///
/// The grid is the only owner of live pieces. Copies handed out in capture
/// sets are snapshots and go stale once the board moves on.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Piece {
    row: usize,
    col: usize,
    color: Color,
    king: bool,
}

impl Piece {
    #[must_use]
    pub const fn new(row: usize, col: usize, color: Color) -> Self {
        Piece {
            row,
            col,
            color,
            king: false,
        }
    }

    /// A piece that is already crowned.
    #[must_use]
    pub const fn king(row: usize, col: usize, color: Color) -> Self {
        Piece {
            row,
            col,
            color,
            king: true,
        }
    }

    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn is_king(&self) -> bool {
        self.king
    }

    #[inline]
    #[must_use]
    pub const fn square(&self) -> Square {
        Square(self.row, self.col)
    }

    /// Update the stored position. The caller keeps the grid in sync.
    pub fn move_to(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
    }

    pub fn make_king(&mut self) {
        self.king = true;
    }

    /// Row steps this piece may travel in: its forward row for a man, both for a king.
    #[must_use]
    pub(crate) fn row_directions(&self) -> &'static [isize] {
        if self.king {
            &[-1, 1]
        } else {
            match self.color {
                Color::Dark => &[-1],
                Color::Light => &[1],
            }
        }
    }

    /// Single-character board glyph: `d`/`l` for men, `D`/`L` for kings.
    #[must_use]
    pub const fn to_char(&self) -> char {
        match (self.color, self.king) {
            (Color::Dark, false) => 'd',
            (Color::Dark, true) => 'D',
            (Color::Light, false) => 'l',
            (Color::Light, true) => 'L',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.king { "king" } else { "man" };
        write!(f, "{} {} on {}", self.color, kind, self.square())
    }
}
