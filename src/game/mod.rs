//! Core Connect Four rules: board representation, tokens and players, and the
//! session state machine that applies drops and settles wins and draws.
//!
//! Nothing in here does I/O or locking; callers serialize access.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Player, Token};
pub use state::{DropError, GameOutcome, GameSession};

/// 42 moves, alternating players, that fill the board without lining up four.
#[cfg(test)]
pub(crate) const DRAW_SEQUENCE: [isize; 42] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
];
