//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Failures around an assessment: bad input, settings, or persisted state.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid settings: {message}")]
    Config { message: String },

    #[error("assessment history {path}: {message}")]
    History { path: PathBuf, message: String },

    #[error("cannot {action} {path}")]
    Io {
        action: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
