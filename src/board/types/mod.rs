//! Core checkers types.
//!
//! - `Piece` and `Color` - a checker and its side
//! - `Square` - bounds-checked (row, col) coordinate
//! - `MoveMap` - destination → captured pieces

mod moves;
mod piece;
mod square;

pub use moves::{Captures, MoveMap};
pub use piece::{Color, Piece};
pub use square::{Square, SIZE};
