//! Checkers board representation and rules.
//!
//! An 8x8 grid of optional pieces with move generation (including chained
//! captures), move application, promotion, win detection and snapshots.
//!
//! # Example
//! ```
//! use checkers_engine::board::{Board, Square};
//!
//! let mut board = Board::new();
//! let piece = *board.piece_at(Square(5, 0)).unwrap();
//! let moves = board.valid_moves(&piece);
//! assert!(moves.contains(Square(4, 1)));
//!
//! let captured = board.apply_move(Square(5, 0), Square(4, 1), &moves).unwrap();
//! assert!(captured.is_empty());
//! ```

mod builder;
#[cfg(debug_assertions)]
mod debug;
mod diagonals;
mod error;
mod make_move;
mod movegen;
pub mod prelude;
mod snapshot;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{MoveError, SquareError, StateError};
pub use snapshot::{BoardState, PieceState};
pub use state::{Board, PIECES_PER_SIDE};
pub use types::{Captures, Color, MoveMap, Piece, Square, SIZE};
