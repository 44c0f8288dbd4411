//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent rejected user input.
///
/// Tree construction and traversal never fail; only parsing text into
/// domain values does.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid answer {0:?}: expected (Y)es or (N)o")]
    InvalidAnswer(String),

    #[error("unknown severity: {0}")]
    InvalidSeverity(String),
}
