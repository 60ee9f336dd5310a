use std::fmt;

use thiserror::Error;

use crate::core::validation::ValidationErrors;
use crate::domain::RecordId;

/// Which collection an operation addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Purchase,
    Sale,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Purchase => f.write_str("Purchase"),
            RecordKind::Sale => f.write_str("Sale"),
        }
    }
}

/// Error type shared by the record store, storage backends, and configuration.
#[derive(Debug, Error)]
pub enum BooksError {
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: RecordId },
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BooksError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, BooksError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, BooksError>;

impl From<std::io::Error> for BooksError {
    fn from(err: std::io::Error) -> Self {
        BooksError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BooksError {
    fn from(err: serde_json::Error) -> Self {
        BooksError::Storage(err.to_string())
    }
}
