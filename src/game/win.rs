use super::{Board, Player, COLS, ROWS};

/// Four `(row, col)` coordinates forming one possible line of four.
pub type Window = [(usize, usize); 4];

/// Number of length-4 windows on a 6x7 board.
pub const WINDOW_COUNT: usize = 69;

/// Every length-4 window on the board: horizontal, vertical, diagonal `\`
/// and diagonal `/`, in that order.
pub fn windows() -> impl Iterator<Item = Window> {
    let horizontal = (0..ROWS).flat_map(|row| {
        (0..=COLS - 4).map(move |col| [(row, col), (row, col + 1), (row, col + 2), (row, col + 3)])
    });
    let vertical = (0..COLS).flat_map(|col| {
        (0..=ROWS - 4).map(move |row| [(row, col), (row + 1, col), (row + 2, col), (row + 3, col)])
    });
    let diagonal_down = (0..=ROWS - 4).flat_map(|row| {
        (0..=COLS - 4).map(move |col| {
            [
                (row, col),
                (row + 1, col + 1),
                (row + 2, col + 2),
                (row + 3, col + 3),
            ]
        })
    });
    let diagonal_up = (3..ROWS).flat_map(|row| {
        (0..=COLS - 4).map(move |col| {
            [
                (row, col),
                (row - 1, col + 1),
                (row - 2, col + 2),
                (row - 3, col + 3),
            ]
        })
    });

    horizontal
        .chain(vertical)
        .chain(diagonal_down)
        .chain(diagonal_up)
}

/// True if `player` owns four consecutive cells in any orientation.
///
/// The player under test is always explicit; this never infers it from
/// whose turn it is.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();
    windows().any(|window| window.iter().all(|&(row, col)| board.get(row, col) == cell))
}

/// The player holding a four-in-a-row, if any.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::Red, Player::Yellow]
        .into_iter()
        .find(|&player| has_four_in_a_row(board, player))
}
