//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid input structures.
/// The algorithms themselves are total; these only arise while building inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid digit: {0:?} (expected 0-9)")]
    InvalidDigit(String),

    #[error("invalid grid cell {cell:?} at row {row}, column {col} (expected '0' or '1')")]
    InvalidCell { cell: char, row: usize, col: usize },

    #[error("ragged grid: row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid token {token:?}: {message}")]
    InvalidToken { token: String, message: String },

    #[error("node not found in tree")]
    NodeNotFound,

    #[error("{side} child already set")]
    ChildOccupied { side: &'static str },

    #[error("tree already has a root")]
    RootOccupied,
}

impl DomainError {
    pub(crate) fn token(token: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidToken {
            token: token.into(),
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
