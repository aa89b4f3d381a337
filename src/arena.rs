//! Headless agent-versus-agent games, used by the `selfplay` binary.

use tracing::debug;

use crate::ai::Agent;
use crate::error::MoveError;
use crate::game::{terminal_outcome, Board, GameOutcome, Player};

/// Result of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub outcome: GameOutcome,
    /// Columns played, Red first.
    pub moves: Vec<usize>,
    pub final_board: Board,
}

/// Play one game to completion. Red moves first.
pub fn play_game(red: &mut dyn Agent, yellow: &mut dyn Agent) -> Result<GameRecord, MoveError> {
    let mut board = Board::new();
    let mut moves = Vec::new();
    let mut player = Player::Red;

    loop {
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let col = agent.select_column(&board, player)?;
        board.drop_piece(col, player)?;
        moves.push(col);

        if let Some(outcome) = terminal_outcome(&board, player) {
            debug!(?outcome, plies = moves.len(), "game finished");
            return Ok(GameRecord {
                outcome,
                moves,
                final_board: board,
            });
        }
        player = player.other();
    }
}

/// Tally of a match between agents `a` and `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub total_plies: usize,
}

impl MatchStats {
    pub fn games(&self) -> usize {
        self.a_wins + self.b_wins + self.draws
    }

    pub fn average_game_length(&self) -> f64 {
        if self.games() == 0 {
            return 0.0;
        }
        self.total_plies as f64 / self.games() as f64
    }

    fn record(&mut self, record: &GameRecord, a_color: Player) {
        self.total_plies += record.moves.len();
        match record.outcome {
            GameOutcome::Winner(p) if p == a_color => self.a_wins += 1,
            GameOutcome::Winner(_) => self.b_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }
}

/// Play `games` games, alternating which agent moves first.
pub fn play_match(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    games: usize,
) -> Result<MatchStats, MoveError> {
    let mut stats = MatchStats::default();
    for game in 0..games {
        let (record, a_color) = if game % 2 == 0 {
            (play_game(a, b)?, Player::Red)
        } else {
            (play_game(b, a)?, Player::Yellow)
        };
        stats.record(&record, a_color);
    }
    Ok(stats)
}
