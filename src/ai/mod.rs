//! Computer opponents: leaf evaluators, the minimax / alpha-beta search
//! engine, and agents built on top of them.

mod agent;
pub mod heuristic;
mod random;
pub mod search;

pub use agent::{Agent, AgentSpec, SearchAgent};
pub use heuristic::{CenterWeightedHeuristic, EvaluatorKind, Heuristic, WindowHeuristic, WIN_SCORE};
pub use random::RandomAgent;
pub use search::{best_move, Algorithm, Search, SearchConfig, SearchResult, SearchStats, MAX_DEPTH};
