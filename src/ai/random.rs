use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::agent::Agent;
use crate::error::MoveError;
use crate::game::{Board, Player};

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and benchmarks.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, board: &Board, _player: Player) -> Result<usize, MoveError> {
        let columns: Vec<usize> = board.legal_columns().collect();
        if columns.is_empty() {
            return Err(MoveError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..columns.len());
        Ok(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..crate::game::ROWS {
            board.drop_piece(2, Player::Red).unwrap();
        }

        for _ in 0..100 {
            let col = agent.select_column(&board, Player::Yellow).unwrap();
            assert!(board.is_valid_move(col), "Action {} is not legal", col);
        }
    }

    #[test]
    fn test_seeded_agents_repeat() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(9);
        let mut b = RandomAgent::with_seed(9);
        for _ in 0..20 {
            assert_eq!(
                a.select_column(&board, Player::Red),
                b.select_column(&board, Player::Red)
            );
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "RRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR"
            .parse()
            .unwrap();
        let mut agent = RandomAgent::with_seed(0);
        assert_eq!(
            agent.select_column(&board, Player::Red),
            Err(MoveError::NoLegalMove)
        );
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
