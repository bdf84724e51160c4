//! Core Connect Four game logic: board representation, player types, and the
//! turn state machine with explicit win and draw detection.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
