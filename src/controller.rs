//! Human-versus-computer match controller.
//!
//! A human move runs the whole turn synchronously: drop the human's piece,
//! check for a human win or draw, search and drop the computer's reply, then
//! check again. The controller sits in [`Phase::AwaitingHumanMove`] or
//! [`Phase::GameOver`] between calls; the other phases are only passed through
//! while a move is being processed.

use tracing::{debug, info};

use crate::ai::{best_move, Algorithm, EvaluatorKind, Heuristic, SearchConfig};
use crate::config::AppConfig;
use crate::error::{ConfigError, MoveError};
use crate::game::{terminal_outcome, winner, Board, Cell, GameOutcome, Player, COLS, ROWS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingHumanMove,
    CheckHumanWin,
    AwaitingComputerMove,
    CheckComputerWin,
    GameOver(GameOutcome),
}

/// Result of an accepted move as seen by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Win(Player),
    Draw,
}

impl From<Option<GameOutcome>> for Outcome {
    fn from(outcome: Option<GameOutcome>) -> Self {
        match outcome {
            None => Outcome::Continue,
            Some(GameOutcome::Winner(player)) => Outcome::Win(player),
            Some(GameOutcome::Draw) => Outcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub board: [[Cell; COLS]; ROWS],
    pub outcome: Outcome,
    /// Column the computer answered with, if the game was still running.
    pub computer_column: Option<usize>,
    /// Search score of the computer's reply, from the computer's side.
    pub computer_score: Option<i32>,
}

pub struct MatchController {
    board: Board,
    phase: Phase,
    human: Player,
    search: SearchConfig,
    evaluator: EvaluatorKind,
    heuristic: Box<dyn Heuristic>,
}

impl MatchController {
    /// Fresh match with default search settings. The human plays Red and
    /// moves first.
    pub fn new_game() -> Self {
        Self::with_config(SearchConfig::default(), EvaluatorKind::default())
    }

    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::with_config(config.search, config.evaluator)
    }

    pub fn with_config(search: SearchConfig, evaluator: EvaluatorKind) -> Self {
        Self::from_board(Board::new(), search, evaluator)
    }

    /// Resume from an arbitrary position with the human to move.
    pub fn from_board(board: Board, search: SearchConfig, evaluator: EvaluatorKind) -> Self {
        let phase = match winner(&board) {
            Some(player) => Phase::GameOver(GameOutcome::Winner(player)),
            None if board.is_full() => Phase::GameOver(GameOutcome::Draw),
            None => Phase::AwaitingHumanMove,
        };
        MatchController {
            board,
            phase,
            human: Player::Red,
            search,
            evaluator,
            heuristic: evaluator.heuristic(),
        }
    }

    pub fn human(&self) -> Player {
        self.human
    }

    pub fn computer(&self) -> Player {
        self.human.other()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_snapshot(&self) -> [[Cell; COLS]; ROWS] {
        self.board.cells()
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome).into(),
            _ => Outcome::Continue,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn search_config(&self) -> SearchConfig {
        self.search
    }

    pub fn evaluator(&self) -> EvaluatorKind {
        self.evaluator
    }

    /// Takes effect on the next computer move.
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        debug!(algorithm = algorithm.name(), "algorithm changed");
        self.search.algorithm = algorithm;
    }

    /// Takes effect on the next computer move.
    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        crate::ai::search::validate_depth(depth)?;
        debug!(depth, "depth changed");
        self.search.depth = depth;
        Ok(())
    }

    pub fn set_evaluator(&mut self, evaluator: EvaluatorKind) {
        self.evaluator = evaluator;
        self.heuristic = evaluator.heuristic();
    }

    /// Start over with an empty board, keeping the search settings.
    pub fn reset(&mut self) {
        info!("new game");
        self.board = Board::new();
        self.phase = Phase::AwaitingHumanMove;
    }

    fn transition(&mut self, next: Phase) {
        debug!(from = ?self.phase, to = ?next, "phase");
        self.phase = next;
    }

    fn report(&self, computer: Option<(usize, i32)>) -> MoveReport {
        MoveReport {
            board: self.board.cells(),
            outcome: self.outcome(),
            computer_column: computer.map(|(col, _)| col),
            computer_score: computer.map(|(_, score)| score),
        }
    }

    /// Play the human's move and, unless it ends the game, the computer's
    /// reply.
    ///
    /// A rejected move leaves the board and phase untouched.
    pub fn submit_human_move(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let human = self.human;
        let row = self.board.drop_piece(column, human)?;
        info!(player = human.name(), column, row, "human move");

        self.transition(Phase::CheckHumanWin);
        if let Some(outcome) = terminal_outcome(&self.board, human) {
            self.transition(Phase::GameOver(outcome));
            return Ok(self.report(None));
        }

        self.transition(Phase::AwaitingComputerMove);
        let computer = self.computer();
        let result = best_move(
            &mut self.board,
            computer,
            &self.search,
            self.heuristic.as_ref(),
        )?;
        let column = result.column.ok_or(MoveError::NoLegalMove)?;
        let row = self.board.drop_piece(column, computer)?;
        info!(
            player = computer.name(),
            column,
            row,
            score = result.score,
            "computer move"
        );

        self.transition(Phase::CheckComputerWin);
        match terminal_outcome(&self.board, computer) {
            Some(outcome) => self.transition(Phase::GameOver(outcome)),
            None => self.transition(Phase::AwaitingHumanMove),
        }
        Ok(self.report(Some((column, result.score))))
    }
}

impl Default for MatchController {
    fn default() -> Self {
        Self::new_game()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(text: &str, algorithm: Algorithm, depth: u32) -> MatchController {
        MatchController::from_board(
            text.parse().unwrap(),
            SearchConfig::new(algorithm, depth),
            EvaluatorKind::Window,
        )
    }

    #[test]
    fn test_new_game() {
        let game = MatchController::new_game();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.human(), Player::Red);
        assert_eq!(game.computer(), Player::Yellow);
        assert_eq!(game.search_config(), SearchConfig::default());
        assert_eq!(game.board_snapshot(), Board::new().cells());
    }

    #[test]
    fn test_accepted_move_gets_a_reply() {
        let mut game = MatchController::new_game();
        let report = game.submit_human_move(3).unwrap();
        assert_eq!(report.outcome, Outcome::Continue);
        assert_eq!(report.board[5][3], Cell::Red);

        let col = report.computer_column.unwrap();
        assert_eq!(game.board().piece_count(), 2);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(report.board, game.board_snapshot());
        assert!(game
            .board_snapshot()
            .iter()
            .any(|row| row[col] == Cell::Yellow));
    }

    #[test]
    fn test_full_column_is_rejected_without_state_change() {
        let mut game = controller(
            "...R...\n...Y...\n...R...\n...Y...\n...R...\n...Y...",
            Algorithm::Minimax,
            2,
        );
        let before = *game.board();
        assert_eq!(game.submit_human_move(3), Err(MoveError::ColumnFull(3)));
        assert_eq!(*game.board(), before);
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_invalid_column_is_rejected() {
        let mut game = MatchController::new_game();
        assert_eq!(game.submit_human_move(7), Err(MoveError::InvalidColumn(7)));
        assert_eq!(game.board().piece_count(), 0);
    }

    #[test]
    fn test_human_win_ends_game_before_computer_moves() {
        let mut game = controller(
            ".......\n.......\n.......\n.......\nYYY....\nRRR....",
            Algorithm::AlphaBeta,
            3,
        );
        let report = game.submit_human_move(3).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Player::Red));
        assert_eq!(report.computer_column, None);
        assert_eq!(game.phase(), Phase::GameOver(GameOutcome::Winner(Player::Red)));
        assert_eq!(game.board().piece_count(), 7);
    }

    #[test]
    fn test_computer_takes_the_win() {
        let mut game = controller(
            ".......\n.......\n.......\n.......\n.R.....\n.R..YYY",
            Algorithm::Minimax,
            2,
        );
        let report = game.submit_human_move(0).unwrap();
        assert_eq!(report.computer_column, Some(3));
        assert_eq!(report.outcome, Outcome::Win(Player::Yellow));
        assert!(game.is_over());
    }

    #[test]
    fn test_computer_blocks() {
        let mut game = controller(
            ".......\n.......\n.......\n.......\n......Y\nRR....Y",
            Algorithm::AlphaBeta,
            4,
        );
        let report = game.submit_human_move(2).unwrap();
        assert_eq!(report.computer_column, Some(3));
        assert_eq!(report.outcome, Outcome::Continue);
    }

    #[test]
    fn test_draw_on_human_move() {
        let mut game = controller(
            "RRYYR.Y\nYYRRYYR\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR",
            Algorithm::Minimax,
            4,
        );
        let report = game.submit_human_move(5).unwrap();
        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.computer_column, None);
        assert!(game.board().is_full());
        assert_eq!(game.phase(), Phase::GameOver(GameOutcome::Draw));
    }

    #[test]
    fn test_draw_on_computer_move() {
        let mut game = controller(
            "RRYYR..\nYYRRYYR\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR",
            Algorithm::AlphaBeta,
            4,
        );
        let report = game.submit_human_move(5).unwrap();
        assert_eq!(report.computer_column, Some(6));
        assert_eq!(report.outcome, Outcome::Draw);
    }

    #[test]
    fn test_moves_after_game_over_are_rejected() {
        let mut game = controller(
            ".......\n.......\n.......\n.......\nYYY....\nRRR....",
            Algorithm::Minimax,
            2,
        );
        game.submit_human_move(3).unwrap();
        let before = *game.board();
        assert_eq!(game.submit_human_move(0), Err(MoveError::GameOver));
        assert_eq!(*game.board(), before);
    }

    #[test]
    fn test_reset() {
        let mut game = MatchController::new_game();
        game.set_algorithm(Algorithm::AlphaBeta);
        game.submit_human_move(0).unwrap();
        game.reset();
        assert_eq!(game.phase(), Phase::AwaitingHumanMove);
        assert_eq!(game.board().piece_count(), 0);
        assert_eq!(game.search_config().algorithm, Algorithm::AlphaBeta);
    }

    #[test]
    fn test_configuration_changes() {
        let mut game = MatchController::new_game();
        game.set_algorithm(Algorithm::AlphaBeta);
        game.set_depth(6).unwrap();
        assert_eq!(
            game.search_config(),
            SearchConfig::new(Algorithm::AlphaBeta, 6)
        );
        assert!(game.set_depth(0).is_err());
        assert_eq!(game.search_config().depth, 6);

        game.set_evaluator(EvaluatorKind::Center);
        assert_eq!(game.evaluator(), EvaluatorKind::Center);
        game.submit_human_move(3).unwrap();
    }

    #[test]
    fn test_from_board_detects_finished_positions() {
        let game = controller(
            ".......\n.......\n.......\n.......\n.......\nYYYY...",
            Algorithm::Minimax,
            2,
        );
        assert_eq!(game.outcome(), Outcome::Win(Player::Yellow));

        let game = controller(
            "RRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR\nRRYYRRY\nYYRRYYR",
            Algorithm::Minimax,
            2,
        );
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_whole_game_terminates() {
        let mut game = MatchController::with_config(
            SearchConfig::new(Algorithm::AlphaBeta, 3),
            EvaluatorKind::Window,
        );
        // The human always plays the leftmost open column.
        while !game.is_over() {
            let col = game.board().legal_columns().next().unwrap();
            game.submit_human_move(col).unwrap();
            assert!(game.board().is_gravity_consistent());
        }
        assert_ne!(game.outcome(), Outcome::Continue);
    }
}
