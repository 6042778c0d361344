use std::collections::BTreeMap;

use super::diagonals::{ray, Ray};
use super::{Board, Captures, Color, MoveMap, Piece, Square};

impl Board {
    /// Legal destinations for a piece and the pieces each one captures.
    ///
    /// Men travel toward their color's forward row only; kings in both row
    /// directions. Jumps chain from every landing square in the same row
    /// direction, each landing becoming a destination with the cumulative
    /// capture list. If the piece has any capture, its simple steps are
    /// dropped.
    #[must_use]
    pub fn valid_moves(&self, piece: &Piece) -> MoveMap {
        let mut moves = MoveMap::new();
        let from = piece.square();

        for &d_row in piece.row_directions() {
            for d_col in [-1, 1] {
                if let Some(ray) = ray(from, d_row, d_col) {
                    if self.is_empty(ray.adjacent) {
                        moves.insert(ray.adjacent, Captures::new());
                    }
                }
            }

            let mut path = Captures::new();
            self.collect_jumps(piece.color(), from, d_row, &mut path, &mut moves);
        }

        if moves.has_captures() {
            moves.retain_captures();
        }
        moves
    }

    /// Depth-first walk over jump chains leaving `from` toward `d_row`.
    /// `path` holds the pieces jumped so far on the current chain.
    fn collect_jumps(
        &self,
        color: Color,
        from: Square,
        d_row: isize,
        path: &mut Captures,
        moves: &mut MoveMap,
    ) {
        for d_col in [-1, 1] {
            let Some(Ray {
                adjacent,
                beyond: Some(landing),
            }) = ray(from, d_row, d_col)
            else {
                continue;
            };
            let Some(jumped) = self.piece_at(adjacent) else {
                continue;
            };
            if jumped.color() == color || !self.is_empty(landing) {
                continue;
            }

            path.push(*jumped);
            moves.insert(landing, path.clone());
            self.collect_jumps(color, landing, d_row, path, moves);
            path.pop();
        }
    }

    /// Every piece of `color` that can move, keyed by its square.
    #[must_use]
    pub fn movable_pieces(&self, color: Color) -> BTreeMap<Square, MoveMap> {
        self.pieces(color)
            .iter()
            .map(|piece| (piece.square(), self.valid_moves(piece)))
            .filter(|(_, moves)| !moves.is_empty())
            .collect()
    }

    /// True if `color` has at least one legal move anywhere on the board.
    #[must_use]
    pub fn has_moves(&self, color: Color) -> bool {
        self.pieces(color)
            .iter()
            .any(|piece| !self.valid_moves(piece).is_empty())
    }
}
