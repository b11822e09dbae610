//! Core Connect Four rules: tokens and players, the gravity-fed board with
//! its line scanner, and the turn-keeping game state.

pub(crate) mod board;
pub mod lines;
mod player;
mod state;

pub use board::{Board, Token, COLS, LINE_LENGTH, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
