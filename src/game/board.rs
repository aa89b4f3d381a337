use std::fmt;
use std::str::FromStr;

use super::Player;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the top, row 5 is the bottom.
///
/// Pieces obey gravity: within a column the occupied cells always form a
/// contiguous run ending at the bottom row. `drop_piece` and `undo` are exact
/// inverses, which lets the search engine explore positions on a single board
/// instead of cloning it at every node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Copy of the whole grid, for rendering.
    pub fn cells(&self) -> [[Cell; COLS]; ROWS] {
        self.cells
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// A move is legal iff the column exists and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| self.is_valid_move(col))
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = player.to_cell();
                return Ok(row);
            }
        }

        unreachable!("Column should not be full if is_column_full returned false");
    }

    /// Remove the most recently dropped piece from a column and return the
    /// row it occupied.
    ///
    /// # Panics
    ///
    /// Panics if the column is empty. Callers must only undo columns they
    /// dropped into and have not undone yet.
    pub fn undo(&mut self, col: usize) -> usize {
        let row = (0..ROWS)
            .find(|&row| self.cells[row][col] != Cell::Empty)
            .unwrap_or_else(|| panic!("undo on empty column {col}"));
        self.cells[row][col] = Cell::Empty;
        row
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// First cell (scanning top-down, left to right) that has an empty cell
    /// below it, if any.
    fn floating_piece(&self) -> Option<(usize, usize)> {
        for col in 0..COLS {
            let mut seen_piece = false;
            for row in 0..ROWS {
                match self.cells[row][col] {
                    Cell::Empty if seen_piece => {
                        let top = (0..row)
                            .find(|&r| self.cells[r][col] != Cell::Empty)
                            .unwrap_or(0);
                        return Some((top, col));
                    }
                    Cell::Empty => {}
                    _ => seen_piece = true,
                }
            }
        }
        None
    }

    /// True iff every column is bottom-contiguous.
    pub fn is_gravity_consistent(&self) -> bool {
        self.floating_piece().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parses six lines of seven cells, top row first: `.` empty, `R` red,
/// `Y` yellow. Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let len = line.chars().count();
            if len != COLS {
                return Err(BoardParseError::RowLength { row, len });
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '.' => Cell::Empty,
                    'R' | 'r' => Cell::Red,
                    'Y' | 'y' => Cell::Yellow,
                    _ => return Err(BoardParseError::UnknownCell { ch, row, col }),
                };
            }
        }

        if let Some((row, col)) = board.floating_piece() {
            return Err(BoardParseError::FloatingPiece { row, col });
        }
        Ok(board)
    }
}
