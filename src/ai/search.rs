//! Depth-limited adversarial search over a single mutable board.
//!
//! Both procedures explore positions by dropping a piece, recursing, and
//! undoing the piece on the *same* [`Board`]. Every return path, including
//! alpha-beta cutoffs, leaves the board exactly as it was found. The board is
//! therefore scratch space for one search at a time; concurrent searches need
//! their own copies.
//!
//! Columns are tried left to right and a child only replaces the current best
//! when it is strictly better, so ties go to the leftmost column. Alpha-beta
//! returns fail-soft bounds, which keeps its root column and score identical
//! to plain minimax at the same depth.

use tracing::debug;

use super::heuristic::Heuristic;
use crate::error::{ConfigError, MoveError};
use crate::game::{winner, Board, Player, COLS, ROWS};

/// Bound used for the initial alpha-beta window. Negation-safe.
pub const INFINITY: i32 = i32::MAX;

/// Deepest search that can matter: one ply per cell.
pub const MAX_DEPTH: u32 = (ROWS * COLS) as u32;

/// Which search procedure picks the computer's move.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Minimax,
    #[value(name = "alphabeta")]
    AlphaBeta,
}

impl Algorithm {
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Minimax => "Minimax",
            Algorithm::AlphaBeta => "AlphaBeta",
        }
    }
}

/// Search settings consumed per call; the engine keeps no copy of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    pub depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            algorithm: Algorithm::Minimax,
            depth: 4,
        }
    }
}

impl SearchConfig {
    pub fn new(algorithm: Algorithm, depth: u32) -> Self {
        SearchConfig { algorithm, depth }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_depth(self.depth)
    }
}

pub fn validate_depth(depth: u32) -> Result<(), ConfigError> {
    if depth == 0 || depth > MAX_DEPTH {
        return Err(ConfigError::InvalidDepth {
            depth,
            max: MAX_DEPTH,
        });
    }
    Ok(())
}

/// Score of a node plus the column that achieved it. `column` is `None` at
/// leaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub column: Option<usize>,
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included
    pub nodes: u64,
    /// Nodes scored by the heuristic
    pub leaves: u64,
    /// Alpha-beta cutoffs
    pub cutoffs: u64,
}

/// One search from a fixed perspective. The maximizing side is always
/// `perspective`; leaves are evaluated from that side.
pub struct Search<'a> {
    heuristic: &'a dyn Heuristic,
    perspective: Player,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, perspective: Player) -> Self {
        Search {
            heuristic,
            perspective,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn mover(&self, maximizing: bool) -> Player {
        if maximizing {
            self.perspective
        } else {
            self.perspective.other()
        }
    }

    /// Returns the leaf result if the search stops here.
    fn leaf(&mut self, board: &Board, depth: u32) -> Option<SearchResult> {
        if depth > 0 && !board.is_full() && winner(board).is_none() {
            return None;
        }
        self.stats.leaves += 1;
        Some(SearchResult {
            score: self.heuristic.evaluate(board, self.perspective),
            column: None,
        })
    }

    fn initial(maximizing: bool) -> SearchResult {
        SearchResult {
            score: if maximizing { -INFINITY } else { INFINITY },
            column: None,
        }
    }

    /// Full-width minimax to `depth` plies.
    pub fn minimax(&mut self, board: &mut Board, depth: u32, maximizing: bool) -> SearchResult {
        self.stats.nodes += 1;
        if let Some(leaf) = self.leaf(board, depth) {
            return leaf;
        }

        let mover = self.mover(maximizing);
        let mut best = Self::initial(maximizing);
        for col in 0..COLS {
            if board.drop_piece(col, mover).is_err() {
                continue;
            }
            let score = self.minimax(board, depth - 1, !maximizing).score;
            board.undo(col);

            let better = if maximizing {
                score > best.score
            } else {
                score < best.score
            };
            if better {
                best = SearchResult {
                    score,
                    column: Some(col),
                };
            }
        }
        best
    }

    /// Minimax with alpha-beta pruning.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.stats.nodes += 1;
        if let Some(leaf) = self.leaf(board, depth) {
            return leaf;
        }

        let mover = self.mover(maximizing);
        let mut best = Self::initial(maximizing);
        for col in 0..COLS {
            if board.drop_piece(col, mover).is_err() {
                continue;
            }
            let score = self.alpha_beta(board, depth - 1, alpha, beta, !maximizing).score;
            board.undo(col);

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        score,
                        column: Some(col),
                    };
                }
                beta = beta.min(best.score);
            }

            if alpha >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Root call: pick `player`'s move on `board` with the configured algorithm.
///
/// The board is used as the search's scratch space and is unchanged on
/// return.
pub fn best_move(
    board: &mut Board,
    player: Player,
    config: &SearchConfig,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult, MoveError> {
    if winner(board).is_some() {
        return Err(MoveError::GameOver);
    }
    if board.is_full() {
        return Err(MoveError::NoLegalMove);
    }

    let depth = config.depth.max(1);
    let before = *board;
    let mut search = Search::new(heuristic, player);
    let result = match config.algorithm {
        Algorithm::Minimax => search.minimax(board, depth, true),
        Algorithm::AlphaBeta => search.alpha_beta(board, depth, -INFINITY, INFINITY, true),
    };
    debug_assert_eq!(*board, before, "search left the board modified");

    let stats = search.stats();
    debug!(
        algorithm = config.algorithm.name(),
        depth,
        player = player.name(),
        column = ?result.column,
        score = result.score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        cutoffs = stats.cutoffs,
        "search complete"
    );

    match result.column {
        Some(_) => Ok(result),
        None => Err(MoveError::NoLegalMove),
    }
}
