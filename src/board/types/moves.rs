//! Valid-move mapping.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Index;

use super::piece::Piece;
use super::square::Square;

/// Pieces jumped on the way to a destination, in jump order.
pub type Captures = Vec<Piece>;

/// Destination square → pieces captured by moving there.
///
/// An empty capture list marks a simple move. Ordered by square so rendering
/// and test output are deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveMap {
    moves: BTreeMap<Square, Captures>,
}

impl MoveMap {
    #[must_use]
    pub fn new() -> Self {
        MoveMap {
            moves: BTreeMap::new(),
        }
    }

    /// Record a destination. A longer capture chain replaces a shorter one
    /// reaching the same square; otherwise the first entry is kept.
    pub fn insert(&mut self, dest: Square, captures: Captures) {
        match self.moves.entry(dest) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(captures);
            }
            btree_map::Entry::Occupied(mut slot) => {
                if captures.len() > slot.get().len() {
                    slot.insert(captures);
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, dest: Square) -> bool {
        self.moves.contains_key(&dest)
    }

    /// Captured pieces for a destination, `None` if it is not a valid move.
    #[must_use]
    pub fn get(&self, dest: Square) -> Option<&[Piece]> {
        self.moves.get(&dest).map(Vec::as_slice)
    }

    /// True if any destination captures at least one piece.
    #[must_use]
    pub fn has_captures(&self) -> bool {
        self.moves.values().any(|captures| !captures.is_empty())
    }

    /// Drop every simple move, keeping only capturing destinations.
    pub fn retain_captures(&mut self) {
        self.moves.retain(|_, captures| !captures.is_empty());
    }

    /// The capturing subset of this map.
    #[must_use]
    pub fn captures_only(&self) -> MoveMap {
        let mut narrowed = self.clone();
        narrowed.retain_captures();
        narrowed
    }

    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Square, &[Piece])> + '_ {
        self.moves
            .iter()
            .map(|(dest, captures)| (*dest, captures.as_slice()))
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl Index<Square> for MoveMap {
    type Output = Captures;

    fn index(&self, dest: Square) -> &Self::Output {
        &self.moves[&dest]
    }
}

impl FromIterator<(Square, Captures)> for MoveMap {
    fn from_iter<I: IntoIterator<Item = (Square, Captures)>>(iter: I) -> Self {
        let mut map = MoveMap::new();
        for (dest, captures) in iter {
            map.insert(dest, captures);
        }
        map
    }
}
