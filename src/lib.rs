//! # Minimax Connect Four
//!
//! Connect Four against a computer opponent that searches the game tree
//! with depth-limited minimax or alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board with drop/undo moves, players, four-in-a-row detection
//! - [`ai`] — Leaf evaluators, the search engine, and agents built on it
//! - [`controller`] — Human-versus-computer turn state machine
//! - [`arena`] — Headless agent-versus-agent games
//! - [`ui`] — Terminal UI for playing a match
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ```
//! use minimax_connect_four::controller::{MatchController, Outcome};
//!
//! let mut game = MatchController::new_game();
//! let report = game.submit_human_move(3).unwrap();
//! assert_eq!(report.outcome, Outcome::Continue);
//! assert!(report.computer_column.is_some());
//! ```

pub mod ai;
pub mod arena;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
