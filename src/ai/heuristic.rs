use crate::game::{has_four_in_a_row, windows, Board, Player, COLS, ROWS};

/// Score of a completed line of four.
pub const WIN_SCORE: i32 = 1000;

/// Trait for evaluating a board position from a player's perspective.
///
/// Implementations must be zero-sum: `evaluate(b, p) == -evaluate(b, p.other())`.
pub trait Heuristic: Send + Sync {
    fn evaluate(&self, board: &Board, player: Player) -> i32;

    fn name(&self) -> &'static str;
}

/// Default heuristic that scans all 4-cell windows and scores threats.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    pub fn score_window(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (4, _, _) => WIN_SCORE,
            (_, 4, _) => -WIN_SCORE,
            (3, 0, 1) => 5,
            (0, 3, 1) => -5,
            (2, 0, 2) => 2,
            (0, 2, 2) => -2,
            _ => 0,
        }
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own_cell = player.to_cell();
        let opp_cell = player.other().to_cell();

        windows()
            .map(|window| {
                let mut own = 0;
                let mut opp = 0;
                let mut empty = 0;
                for (row, col) in window {
                    match board.get(row, col) {
                        c if c == own_cell => own += 1,
                        c if c == opp_cell => opp += 1,
                        _ => empty += 1,
                    }
                }
                Self::score_window(own, opp, empty)
            })
            .sum()
    }

    fn name(&self) -> &'static str {
        "window"
    }
}

/// Number of windows each cell belongs to; the classic center-heavy table.
const CELL_WEIGHTS: [[i32; COLS]; ROWS] = [
    [3, 4, 5, 7, 5, 4, 3],
    [4, 6, 8, 10, 8, 6, 4],
    [5, 8, 11, 13, 11, 8, 5],
    [5, 8, 11, 13, 11, 8, 5],
    [4, 6, 8, 10, 8, 6, 4],
    [3, 4, 5, 7, 5, 4, 3],
];

/// Static per-cell weights favouring the middle of the board, plus
/// [`WIN_SCORE`] for a completed line so terminal leaves still rank correctly.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterWeightedHeuristic;

impl Heuristic for CenterWeightedHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let mut score = 0;
        for (row, weights) in CELL_WEIGHTS.iter().enumerate() {
            for (col, &weight) in weights.iter().enumerate() {
                match board.get(row, col).owner() {
                    Some(p) if p == player => score += weight,
                    Some(_) => score -= weight,
                    None => {}
                }
            }
        }

        if has_four_in_a_row(board, player) {
            score += WIN_SCORE;
        }
        if has_four_in_a_row(board, player.other()) {
            score -= WIN_SCORE;
        }
        score
    }

    fn name(&self) -> &'static str {
        "center"
    }
}

/// Which evaluator the search consults at its leaves.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum EvaluatorKind {
    #[default]
    Window,
    Center,
}

impl EvaluatorKind {
    pub fn name(self) -> &'static str {
        match self {
            EvaluatorKind::Window => "window",
            EvaluatorKind::Center => "center",
        }
    }

    pub fn heuristic(self) -> Box<dyn Heuristic> {
        match self {
            EvaluatorKind::Window => Box::new(WindowHeuristic),
            EvaluatorKind::Center => Box::new(CenterWeightedHeuristic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_boards(seed: u64, count: usize) -> Vec<Board> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| {
                let mut board = Board::new();
                let mut player = Player::Red;
                for _ in 0..rng.random_range(0..30) {
                    let legal: Vec<usize> = board.legal_columns().collect();
                    let col = legal[rng.random_range(0..legal.len())];
                    board.drop_piece(col, player).unwrap();
                    player = player.other();
                }
                board
            })
            .collect()
    }

    #[test]
    fn heuristic_empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Red), 0);
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), 0);
        assert_eq!(CenterWeightedHeuristic.evaluate(&board, Player::Red), 0);
    }

    #[test]
    fn heuristics_are_zero_sum() {
        let heuristics: [&dyn Heuristic; 2] = [&WindowHeuristic, &CenterWeightedHeuristic];
        for board in random_boards(3, 300) {
            for h in heuristics {
                assert_eq!(
                    h.evaluate(&board, Player::Red),
                    -h.evaluate(&board, Player::Yellow),
                    "{} heuristic is not zero-sum on\n{board}",
                    h.name()
                );
            }
        }
    }

    #[test]
    fn window_table() {
        assert_eq!(WindowHeuristic::score_window(4, 0, 0), 1000);
        assert_eq!(WindowHeuristic::score_window(0, 4, 0), -1000);
        assert_eq!(WindowHeuristic::score_window(3, 0, 1), 5);
        assert_eq!(WindowHeuristic::score_window(0, 3, 1), -5);
        assert_eq!(WindowHeuristic::score_window(2, 0, 2), 2);
        assert_eq!(WindowHeuristic::score_window(0, 2, 2), -2);
        assert_eq!(WindowHeuristic::score_window(2, 1, 1), 0);
        assert_eq!(WindowHeuristic::score_window(1, 0, 3), 0);
    }

    #[test]
    fn three_in_a_row_scores_positive() {
        let mut board = Board::new();
        board.drop_piece(0, Player::Red).unwrap();
        board.drop_piece(1, Player::Red).unwrap();
        board.drop_piece(2, Player::Red).unwrap();
        // Windows 0..4 (3 red + empty) and 1..5 (2 red + 2 empty) both count.
        let score = WindowHeuristic.evaluate(&board, Player::Red);
        assert!(score >= 5, "3-in-a-row should score at least 5, got {score}");
        assert_eq!(WindowHeuristic.evaluate(&board, Player::Yellow), -score);
    }

    #[test]
    fn center_preference() {
        let mut center = Board::new();
        center.drop_piece(3, Player::Red).unwrap();
        let mut edge = Board::new();
        edge.drop_piece(0, Player::Red).unwrap();

        let h = CenterWeightedHeuristic;
        assert!(h.evaluate(&center, Player::Red) > h.evaluate(&edge, Player::Red));
    }

    #[test]
    fn wins_dominate_positional_terms() {
        let board: Board = ".......\n.......\n.......\nY......\nY......\nRRRRYY."
            .parse()
            .unwrap();
        assert!(WindowHeuristic.evaluate(&board, Player::Red) >= WIN_SCORE - 100);
        assert!(CenterWeightedHeuristic.evaluate(&board, Player::Red) >= WIN_SCORE - 100);
    }

    #[test]
    fn evaluator_kind_builds_matching_heuristic() {
        assert_eq!(EvaluatorKind::Window.heuristic().name(), "window");
        assert_eq!(EvaluatorKind::Center.heuristic().name(), "center");
        assert_eq!(EvaluatorKind::default(), EvaluatorKind::Window);
    }
}
