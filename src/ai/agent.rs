use std::str::FromStr;

use super::heuristic::{EvaluatorKind, Heuristic};
use super::random::RandomAgent;
use super::search::{best_move, validate_depth, Algorithm, SearchConfig};
use crate::error::{AgentSpecError, MoveError};
use crate::game::{Board, Player};

/// Anything that can pick a column for a player.
pub trait Agent {
    /// Select a legal column for `player` on `board`.
    fn select_column(&mut self, board: &Board, player: Player) -> Result<usize, MoveError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Agent backed by the deterministic search engine.
///
/// Searches run on the agent's own scratch copy of the board, so the caller's
/// board is never touched.
pub struct SearchAgent {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    scratch: Board,
    name: String,
}

impl SearchAgent {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, EvaluatorKind::default().heuristic())
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        let name = format!("{}({})", config.algorithm.name(), config.depth);
        SearchAgent {
            config,
            heuristic,
            scratch: Board::new(),
            name,
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Agent for SearchAgent {
    fn select_column(&mut self, board: &Board, player: Player) -> Result<usize, MoveError> {
        self.scratch = *board;
        let result = best_move(&mut self.scratch, player, &self.config, self.heuristic.as_ref())?;
        result.column.ok_or(MoveError::NoLegalMove)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Command-line description of an agent: `minimax:<depth>`,
/// `alphabeta:<depth>` or `random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentSpec {
    Search(SearchConfig),
    Random,
}

impl AgentSpec {
    /// Build the agent. `seed` only affects the random agent.
    pub fn build(self, evaluator: EvaluatorKind, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentSpec::Search(config) => {
                Box::new(SearchAgent::with_heuristic(config, evaluator.heuristic()))
            }
            AgentSpec::Random => Box::new(RandomAgent::with_seed(seed)),
        }
    }
}

impl FromStr for AgentSpec {
    type Err = AgentSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if s == "random" {
            return Ok(AgentSpec::Random);
        }

        let (name, depth) = s
            .split_once(':')
            .ok_or_else(|| AgentSpecError::UnknownAgent(s.clone()))?;
        let algorithm = match name {
            "minimax" => Algorithm::Minimax,
            "alphabeta" => Algorithm::AlphaBeta,
            _ => return Err(AgentSpecError::UnknownAgent(s.clone())),
        };
        let depth: u32 = depth
            .parse()
            .map_err(|_| AgentSpecError::InvalidDepth(depth.to_string()))?;
        validate_depth(depth).map_err(|_| AgentSpecError::InvalidDepth(depth.to_string()))?;

        Ok(AgentSpec::Search(SearchConfig::new(algorithm, depth)))
    }
}
