//! Core Connect Four game logic: the board and its drop/undo moves, player
//! identities, the length-4 window enumeration, and terminal detection.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{terminal_outcome, GameOutcome};
pub use win::{has_four_in_a_row, windows, winner, Window, WINDOW_COUNT};
