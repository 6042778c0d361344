//! Error types for board operations.

use std::fmt;

use super::{Color, Square};

/// Error type for square construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the origin square
    NoPiece { from: Square },
    /// Destination already holds a piece
    DestinationOccupied { to: Square },
    /// Destination is not in the supplied valid-move map
    NotAValidMove { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPiece { from } => write!(f, "No piece on {from}"),
            MoveError::DestinationOccupied { to } => {
                write!(f, "Destination {to} is occupied")
            }
            MoveError::NotAValidMove { from, to } => {
                write!(f, "Move from {from} to {to} is not valid")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for malformed board snapshots
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// A piece lies outside the 8x8 grid
    OutOfBounds { row: usize, col: usize },
    /// Two pieces claim the same square
    DuplicatePosition { row: usize, col: usize },
    /// Declared remaining count disagrees with the listed pieces
    CountMismatch {
        color: Color,
        declared: u8,
        found: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::OutOfBounds { row, col } => {
                write!(f, "Piece at ({row}, {col}) is off the board")
            }
            StateError::DuplicatePosition { row, col } => {
                write!(f, "More than one piece at ({row}, {col})")
            }
            StateError::CountMismatch {
                color,
                declared,
                found,
            } => {
                write!(
                    f,
                    "{color} declares {declared} pieces left but {found} are listed"
                )
            }
        }
    }
}

impl std::error::Error for StateError {}
