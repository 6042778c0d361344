//! Turn and selection state machine on top of [`Board`].
//!
//! A `Game` tracks whose turn it is, which piece is selected, the valid moves
//! of that piece, capture scores and both clocks. Input layers forward board
//! clicks to [`Game::select`]; renderers read a borrowed [`GameView`].
//!
//! # Example
//! ```
//! use checkers_engine::game::{Game, SelectOutcome};
//! use checkers_engine::board::Color;
//!
//! let mut game = Game::new();
//! assert_eq!(game.select(5, 0), SelectOutcome::PieceSelected);
//! assert_eq!(game.select(4, 1), SelectOutcome::MoveMade);
//! assert_eq!(game.turn(), Color::Light);
//! ```

mod clock;
mod config;


use std::collections::BTreeMap;
use std::time::Duration;

use crate::board::{Board, BoardState, Color, MoveMap, Piece, Square, StateError};

pub use clock::Clock;
pub use config::{GameConfig, DEFAULT_TIME_PER_SIDE};

/// Result of forwarding a click to [`Game::select`].
///
/// An off-board click leaves an existing selection in place and so reports
/// `PieceSelected`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Nothing is selected after the click
    NothingSelected,
    /// A piece is (still) selected and waiting for a destination
    PieceSelected,
    /// A move was applied
    MoveMade,
}

/// One checkers session.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    valid_moves: MoveMap,
    in_chain: bool,
    scores: [u32; 2],
    clock: Clock,
    config: GameConfig,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    #[must_use]
    pub fn with_config(config: GameConfig) -> Self {
        Self::from_board(Board::new(), Color::Dark, config)
    }

    /// Start a session from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, turn: Color, config: GameConfig) -> Self {
        Game {
            board,
            turn,
            selected: None,
            valid_moves: MoveMap::new(),
            in_chain: false,
            scores: [0, 0],
            clock: Clock::new(config.time_per_side),
            config,
        }
    }

    /// Start over: fresh board, Dark to move, scores and clocks reset.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    #[must_use]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|sq| self.board.piece_at(sq))
    }

    /// Valid destinations of the selected piece; empty when nothing is selected.
    #[inline]
    #[must_use]
    pub fn valid_moves(&self) -> &MoveMap {
        &self.valid_moves
    }

    /// Pieces captured so far by `color`.
    #[inline]
    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.scores[color.index()]
    }

    /// True while the selected piece must keep jumping.
    #[inline]
    #[must_use]
    pub fn in_capture_chain(&self) -> bool {
        self.in_chain
    }

    /// Every piece of the side to move that has a legal move.
    #[must_use]
    pub fn movable_pieces(&self) -> BTreeMap<Square, MoveMap> {
        self.board.movable_pieces(self.turn)
    }

    /// Handle a click on (row, col).
    ///
    /// With nothing selected, selects a piece of the side to move that has at
    /// least one legal move. With a piece selected, a click on one of its
    /// valid destinations moves it; any other click drops the selection and is
    /// treated as a fresh selection. While a capture chain is in progress the
    /// jumping piece stays selected and other clicks are ignored.
    pub fn select(&mut self, row: usize, col: usize) -> SelectOutcome {
        let Some(sq) = Square::new(row, col) else {
            return if self.selected.is_some() {
                SelectOutcome::PieceSelected
            } else {
                SelectOutcome::NothingSelected
            };
        };

        if self.selected.is_some() {
            if self.try_move(sq) {
                return SelectOutcome::MoveMade;
            }
            if self.in_chain {
                return SelectOutcome::PieceSelected;
            }
            self.clear_selection();
            return self.select(row, col);
        }

        let Some(piece) = self.board.piece_at(sq).copied() else {
            return SelectOutcome::NothingSelected;
        };
        if piece.color() != self.turn {
            return SelectOutcome::NothingSelected;
        }

        let moves = self.board.valid_moves(&piece);
        if moves.is_empty() {
            return SelectOutcome::NothingSelected;
        }

        crate::log_event!(trace, "selected {} with {} moves", piece, moves.len());
        self.selected = Some(sq);
        self.valid_moves = moves;
        SelectOutcome::PieceSelected
    }

    /// Move the selected piece to `to` if it is a valid destination.
    ///
    /// Captured pieces are removed and credited to the mover. If the piece
    /// can keep capturing from its new square the turn stays and the valid
    /// moves narrow to those captures; otherwise the turn passes.
    fn try_move(&mut self, to: Square) -> bool {
        let Some(from) = self.selected else {
            return false;
        };
        let captures = match self.board.apply_move(from, to, &self.valid_moves) {
            Ok(captures) => captures,
            Err(_) => return false,
        };

        if !captures.is_empty() {
            let removed = self.board.remove(&captures);
            self.scores[self.turn.index()] += removed as u32;

            if let Some(piece) = self.board.piece_at(to).copied() {
                let follow_up = self.board.valid_moves(&piece).captures_only();
                if !follow_up.is_empty() {
                    crate::log_event!(debug, "{} must keep jumping from {}", piece.color(), to);
                    self.selected = Some(to);
                    self.valid_moves = follow_up;
                    self.in_chain = true;
                    return true;
                }
            }
        }

        self.change_turn();
        true
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.valid_moves.clear();
        self.in_chain = false;
    }

    fn change_turn(&mut self) {
        self.clear_selection();
        self.turn = self.turn.opponent();
        crate::log_event!(trace, "{} to move", self.turn);
    }

    /// Turn valid-move hints on or off for the renderer.
    pub fn set_show_valid_moves(&mut self, show: bool) {
        self.config = self.config.show_valid_moves(show);
    }

    /// Charge elapsed wall time to the side to move.
    pub fn tick(&mut self, elapsed: Duration) {
        self.clock.tick(self.turn, elapsed);
    }

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    #[inline]
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.clock.is_paused()
    }

    /// Winner by time first (a flagged side loses), then by pieces.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if self.clock.is_flagged(Color::Dark) {
            return Some(Color::Light);
        }
        if self.clock.is_flagged(Color::Light) {
            return Some(Color::Dark);
        }
        self.board.winner()
    }

    /// Board snapshot including both scores.
    #[must_use]
    pub fn export_state(&self) -> BoardState {
        BoardState {
            black_score: self.score(Color::Dark),
            white_score: self.score(Color::Light),
            ..self.board.export_state()
        }
    }

    /// Replace the board and scores from a snapshot. Selection is dropped;
    /// the turn and clocks are not part of the snapshot and are kept.
    pub fn import_state(&mut self, state: &BoardState) -> Result<(), StateError> {
        self.board.import_state(state)?;
        self.scores[Color::Dark.index()] = state.black_score;
        self.scores[Color::Light.index()] = state.white_score;
        self.clear_selection();
        Ok(())
    }

    /// Read-only view handed to a renderer each frame.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView {
            board: &self.board,
            selected: self.selected(),
            valid_moves: &self.valid_moves,
            turn: self.turn,
            scores: self.scores,
            clock: &self.clock,
            show_valid_moves: self.config.show_valid_moves,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a renderer needs for one frame. Borrowed, so it cannot
/// mutate the game.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    pub board: &'a Board,
    pub selected: Option<&'a Piece>,
    pub valid_moves: &'a MoveMap,
    pub turn: Color,
    pub scores: [u32; 2],
    pub clock: &'a Clock,
    pub show_valid_moves: bool,
}

impl GameView<'_> {
    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.scores[color.index()]
    }
}
