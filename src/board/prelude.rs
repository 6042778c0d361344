//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use checkers_engine::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, BoardState, Color, MoveError, MoveMap, Piece, Square, StateError,
};
pub use crate::game::{Game, GameConfig, SelectOutcome};
