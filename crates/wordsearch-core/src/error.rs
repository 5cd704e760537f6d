use crate::Position;
use thiserror::Error;

/// Why a start/end selection did not claim a word.
///
/// None of these are fatal; the session turns each into a "try again" status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("start and end are the same cell")]
    SameCell,
    #[error("selection from {start} to {end} is not a legal direction")]
    IllegalDirection { start: Position, end: Position },
    #[error("{0} is outside the grid")]
    OutOfBounds(Position),
    #[error("path stopped at {0} before reaching the end cell")]
    IncompletePath(Position),
    #[error("no remaining word matches '{0}'")]
    NoMatch(String),
}

/// Problems with a puzzle configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("grid dimensions must be non-zero (got {rows}x{cols})")]
    ZeroDimensions { rows: usize, cols: usize },
    #[error("grid dimensions {rows}x{cols} exceed the {max}x{max} limit")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("word list is empty")]
    NoWords,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid fixed grid: {0}")]
    Grid(#[from] GridParseError),
}

/// Problems parsing a hand-authored grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridParseError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("grid is {rows}x{cols}, larger than {max}x{max}")]
    TooLarge { rows: usize, cols: usize, max: usize },
    #[error("'{ch}' at ({row}, {col}) is not a letter")]
    InvalidLetter { row: usize, col: usize, ch: char },
}
