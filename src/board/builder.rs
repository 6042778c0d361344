//! Fluent builder for constructing checkers positions.
//!
//! Allows creating positions piece by piece rather than going through a
//! snapshot.
//!
//! # Example
//! ```
//! use checkers_engine::board::{BoardBuilder, Color, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(5, 2), Color::Dark)
//!     .piece(Square(4, 1), Color::Light)
//!     .king(Square(0, 7), Color::Dark)
//!     .build();
//! assert_eq!(board.pieces_left(Color::Dark), 2);
//! ```

use super::{Board, Color, Piece, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        for color in Color::BOTH {
            builder.pieces.extend(board.pieces(color));
        }
        builder
    }

    /// Place a man on a square, replacing anything already there.
    #[must_use]
    pub fn piece(self, square: Square, color: Color) -> Self {
        self.place(Piece::new(square.row(), square.col(), color))
    }

    /// Place a king on a square, replacing anything already there.
    #[must_use]
    pub fn king(self, square: Square, color: Color) -> Self {
        self.place(Piece::king(square.row(), square.col(), color))
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|piece| piece.square() != square);
        self
    }

    fn place(self, piece: Piece) -> Self {
        let mut builder = self.clear(piece.square());
        builder.pieces.push(piece);
        builder
    }

    /// Build the board. Squares off the 8x8 grid are skipped.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            if Square::new(piece.row(), piece.col()).is_some() {
                board.set_piece(piece);
            }
        }
        board
    }
}
