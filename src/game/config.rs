//! Game session settings.

use std::time::Duration;

/// Time each side starts with
pub const DEFAULT_TIME_PER_SIDE: Duration = Duration::from_secs(10 * 60);

/// Configuration for a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Clock budget for each side
    pub time_per_side: Duration,
    /// Whether the renderer should highlight valid destinations
    pub show_valid_moves: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_per_side: DEFAULT_TIME_PER_SIDE,
            show_valid_moves: false,
        }
    }
}

impl GameConfig {
    /// Set the clock budget for each side.
    #[must_use]
    pub const fn time_per_side(mut self, budget: Duration) -> Self {
        self.time_per_side = budget;
        self
    }

    /// Turn valid-move hints on or off.
    #[must_use]
    pub const fn show_valid_moves(mut self, show: bool) -> Self {
        self.show_valid_moves = show;
        self
    }
}
