//! Board snapshots for persistence and for mirroring a game across a link.
//!
//! The field names are the wire contract: `red_*` counts belong to Light,
//! `white_*` counts to Dark, `black_score` is Dark's capture total and
//! `white_score` Light's. Scores are owned by the caller and only passed
//! through here.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::StateError;
use super::{Board, Color, Piece, Square, SIZE};

/// One occupied cell of a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PieceState {
    pub row: usize,
    pub col: usize,
    pub color: Color,
    pub king: bool,
}

impl From<&Piece> for PieceState {
    fn from(piece: &Piece) -> Self {
        PieceState {
            row: piece.row(),
            col: piece.col(),
            color: piece.color(),
            king: piece.is_king(),
        }
    }
}

impl From<PieceState> for Piece {
    fn from(state: PieceState) -> Self {
        if state.king {
            Piece::king(state.row, state.col, state.color)
        } else {
            Piece::new(state.row, state.col, state.color)
        }
    }
}

/// Complete, order-independent board snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardState {
    pub board_pieces: Vec<PieceState>,
    pub red_left: u8,
    pub white_left: u8,
    pub red_kings: u8,
    pub white_kings: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub black_score: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub white_score: u32,
}

impl BoardState {
    /// Declared remaining count for a color.
    #[must_use]
    pub fn pieces_left(&self, color: Color) -> u8 {
        match color {
            Color::Light => self.red_left,
            Color::Dark => self.white_left,
        }
    }

    /// Check the snapshot describes a consistent grid.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut seen = [[false; SIZE]; SIZE];
        let mut found = [0usize; 2];

        for piece in &self.board_pieces {
            let (row, col) = (piece.row, piece.col);
            let sq = Square::new(row, col).ok_or(StateError::OutOfBounds { row, col })?;
            if seen[sq.0][sq.1] {
                return Err(StateError::DuplicatePosition { row, col });
            }
            seen[sq.0][sq.1] = true;
            found[piece.color.index()] += 1;
        }

        for color in Color::BOTH {
            let declared = self.pieces_left(color);
            if usize::from(declared) != found[color.index()] {
                return Err(StateError::CountMismatch {
                    color,
                    declared,
                    found: found[color.index()],
                });
            }
        }
        Ok(())
    }
}

impl Board {
    /// Snapshot the grid and counters. Scores are left at zero.
    #[must_use]
    pub fn export_state(&self) -> BoardState {
        BoardState {
            board_pieces: self
                .grid
                .iter()
                .flatten()
                .flatten()
                .map(PieceState::from)
                .collect(),
            red_left: self.pieces_left(Color::Light),
            white_left: self.pieces_left(Color::Dark),
            red_kings: self.kings(Color::Light),
            white_kings: self.kings(Color::Dark),
            black_score: 0,
            white_score: 0,
        }
    }

    /// Overwrite the whole board from a snapshot.
    ///
    /// The snapshot is validated first; on error the board is left untouched.
    pub fn import_state(&mut self, state: &BoardState) -> Result<(), StateError> {
        if let Err(err) = state.validate() {
            crate::log_event!(warn, "rejected board snapshot: {}", err);
            return Err(err);
        }

        self.grid = [[None; SIZE]; SIZE];
        for piece in &state.board_pieces {
            self.grid[piece.row][piece.col] = Some(Piece::from(*piece));
        }
        self.left[Color::Light.index()] = state.red_left;
        self.left[Color::Dark.index()] = state.white_left;
        self.kings[Color::Light.index()] = state.red_kings;
        self.kings[Color::Dark.index()] = state.white_kings;

        crate::log_event!(
            debug,
            "imported snapshot with {} pieces",
            state.board_pieces.len()
        );
        Ok(())
    }

    /// Build a fresh board from a snapshot.
    pub fn from_state(state: &BoardState) -> Result<Self, StateError> {
        let mut board = Board::empty();
        board.import_state(state)?;
        Ok(board)
    }
}

impl TryFrom<&BoardState> for Board {
    type Error = StateError;

    fn try_from(state: &BoardState) -> Result<Self, Self::Error> {
        Board::from_state(state)
    }
}
