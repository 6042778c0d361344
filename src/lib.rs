/// Forward to the `log` facade when the `logging` feature is enabled.
#[doc(hidden)]
#[macro_export]
macro_rules! log_event {
    ($level:ident, $($arg:tt)+) => {{
        #[cfg(feature = "logging")]
        {
            ::log::$level!($($arg)+);
        }
    }};
}

pub mod board;
pub mod game;

pub use board::{Board, BoardState, Color, MoveMap, Piece, Square};
pub use game::{Game, GameConfig, SelectOutcome};
