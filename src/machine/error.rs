//! Errors raised when reading operations from text.

use thiserror::Error;

/// Errors that can occur when parsing an [`Operation`](super::Operation).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseOperationError {
    #[error("Empty operation name. Expected one of: start, pause, stop, process")]
    Empty,

    #[error("Unknown operation '{0}'. Expected one of: start, pause, stop, process")]
    Unknown(String),
}
