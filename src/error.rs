use std::path::PathBuf;

/// Errors returned when a move cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is out of range (expected 0..7)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no legal move remains")]
    NoLegalMove,

    #[error("game is over")]
    GameOver,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("search depth must be in 1..={max}, got {depth}")]
    InvalidDepth { depth: u32, max: u32 },
}

/// Errors from parsing the textual board format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected 6 rows, found {0}")]
    RowCount(usize),

    #[error("row {row} has {len} cells, expected 7")]
    RowLength { row: usize, len: usize },

    #[error("unknown cell '{ch}' at row {row}, column {col}")]
    UnknownCell { ch: char, row: usize, col: usize },

    #[error("floating piece at row {row}, column {col}")]
    FloatingPiece { row: usize, col: usize },
}

/// Errors from parsing a self-play agent spec such as `alphabeta:5`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgentSpecError {
    #[error("unknown agent '{0}' (expected 'minimax:<depth>', 'alphabeta:<depth>' or 'random')")]
    UnknownAgent(String),

    #[error("invalid depth '{0}'")]
    InvalidDepth(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_display() {
        assert_eq!(MoveError::ColumnFull(3).to_string(), "column 3 is full");
        assert_eq!(
            MoveError::InvalidColumn(9).to_string(),
            "column 9 is out of range (expected 0..7)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidDepth { depth: 0, max: 42 };
        assert_eq!(err.to_string(), "search depth must be in 1..=42, got 0");
    }

    #[test]
    fn test_board_parse_error_display() {
        let err = BoardParseError::FloatingPiece { row: 2, col: 4 };
        assert_eq!(err.to_string(), "floating piece at row 2, column 4");
    }
}
