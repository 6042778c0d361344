use super::error::MoveError;
use super::{Board, Captures, MoveMap, Piece, Square};

impl Board {
    /// Move the piece on `from` to `to`, using a map previously computed by
    /// [`Board::valid_moves`] for that piece.
    ///
    /// Crowns the piece if it lands on row 0 or row 7 and returns the pieces
    /// captured on the way. Captured pieces stay on the board until passed to
    /// [`Board::remove`].
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        moves: &MoveMap,
    ) -> Result<Captures, MoveError> {
        if self.is_empty(from) {
            return Err(MoveError::NoPiece { from });
        }
        if !self.is_empty(to) {
            return Err(MoveError::DestinationOccupied { to });
        }
        let captures = moves
            .get(to)
            .ok_or(MoveError::NotAValidMove { from, to })?
            .to_vec();

        let mut piece = self.grid[from.0][from.1]
            .take()
            .ok_or(MoveError::NoPiece { from })?;
        piece.move_to(to.row(), to.col());

        if to.is_crowning_row() && !piece.is_king() {
            piece.make_king();
            self.kings[piece.color().index()] += 1;
            crate::log_event!(debug, "{} crowned on {}", piece.color(), to);
        }
        self.grid[to.0][to.1] = Some(piece);

        crate::log_event!(
            debug,
            "{} moved {} -> {} capturing {}",
            piece.color(),
            from,
            to,
            captures.len()
        );
        Ok(captures)
    }

    /// Take captured pieces off the board.
    ///
    /// A piece is only removed if its square still holds that exact piece
    /// (same color and king flag), so stale or repeated entries cannot skew
    /// the counts. Returns the number actually removed.
    pub fn remove(&mut self, pieces: &[Piece]) -> usize {
        let mut removed = 0;
        for piece in pieces {
            let Some(cell) = self
                .grid
                .get_mut(piece.row())
                .and_then(|cells| cells.get_mut(piece.col()))
            else {
                continue;
            };
            if cell.is_some_and(|held| held == *piece) {
                *cell = None;
                let left = &mut self.left[piece.color().index()];
                *left = left.saturating_sub(1);
                removed += 1;
            }
        }
        removed
    }

    /// Generate, apply and resolve a single move in one call.
    ///
    /// Convenience for callers that do not need to keep the move map around.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<Captures, MoveError> {
        let piece = *self.piece_at(from).ok_or(MoveError::NoPiece { from })?;
        let moves = self.valid_moves(&piece);
        let captures = self.apply_move(from, to, &moves)?;
        self.remove(&captures);
        Ok(captures)
    }
}
