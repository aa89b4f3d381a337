use super::{has_four_in_a_row, Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Outcome of the position right after `mover` played, if the game has
/// ended. Only `mover` can have just completed a line, so only that side is
/// tested.
pub fn terminal_outcome(board: &Board, mover: Player) -> Option<GameOutcome> {
    if has_four_in_a_row(board, mover) {
        Some(GameOutcome::Winner(mover))
    } else if board.is_full() {
        Some(GameOutcome::Draw)
    } else {
        None
    }
}
