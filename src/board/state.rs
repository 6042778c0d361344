use std::fmt;

use super::{Color, Piece, Square, SIZE};

/// Pieces each side starts with.
pub const PIECES_PER_SIDE: u8 = 12;

/// The 8x8 checkers board.
///
/// Each cell is either empty or holds exactly one `Piece`; the grid owns them.
/// Remaining counts always equal the number of occupied cells per color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; SIZE]; SIZE],
    pub(crate) left: [u8; 2],
    pub(crate) kings: [u8; 2],
}

impl Board {
    /// Standard starting position: 12 pieces per side on the playable squares
    /// of rows 0-2 (Light) and 5-7 (Dark).
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for row in color.home_rows() {
                for col in 0..SIZE {
                    let sq = Square(row, col);
                    if sq.is_playable() {
                        board.set_piece(Piece::new(row, col, color));
                    }
                }
            }
        }
        debug_assert_eq!(board.left, [PIECES_PER_SIDE; 2]);
        board
    }

    /// A board with no pieces and zeroed counters.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; SIZE]; SIZE],
            left: [0, 0],
            kings: [0, 0],
        }
    }

    /// Restore the starting position in place.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// Place a piece at its own square, counting it toward its color.
    /// Replaces (and uncounts) whatever stood there.
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        let sq = piece.square();
        if let Some(old) = self.grid[sq.0][sq.1].take() {
            self.left[old.color().index()] -= 1;
        }
        self.left[piece.color().index()] += 1;
        self.grid[sq.0][sq.1] = Some(piece);
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.0][sq.1].as_ref()
    }

    /// Piece at (row, col); `None` for empty or off-board coordinates.
    #[must_use]
    pub fn get_piece(&self, row: usize, col: usize) -> Option<&Piece> {
        Square::new(row, col).and_then(|sq| self.piece_at(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    #[inline]
    #[must_use]
    pub fn pieces_left(&self, color: Color) -> u8 {
        self.left[color.index()]
    }

    /// Promotions recorded for a color. A statistic only.
    #[inline]
    #[must_use]
    pub fn kings(&self, color: Color) -> u8 {
        self.kings[color.index()]
    }

    /// All pieces of a color in row-major order.
    #[must_use]
    pub fn pieces(&self, color: Color) -> Vec<Piece> {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.color() == color)
            .copied()
            .collect()
    }

    /// Check that the remaining counts match the grid and every piece's
    /// stored position matches its cell.
    pub fn is_consistent(&self) -> bool {
        let mut found = [0u8; 2];
        for (row, cells) in self.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if let Some(piece) = cell {
                    if piece.row() != row || piece.col() != col {
                        return false;
                    }
                    found[piece.color().index()] += 1;
                }
            }
        }
        Color::BOTH
            .iter()
            .all(|&color| found[color.index()] == self.pieces_left(color))
    }

    /// The side that has taken every opposing piece, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if self.pieces_left(Color::Light) == 0 {
            Some(Color::Dark)
        } else if self.pieces_left(Color::Dark) == 0 {
            Some(Color::Light)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   0 1 2 3 4 5 6 7")?;
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                let ch = cell.as_ref().map_or('.', Piece::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
