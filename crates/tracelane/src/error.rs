//! Error types for Tracelane operations.
//!
//! [`TracelaneError`] wraps every failure that can reach a caller. Layout
//! itself never fails: incomplete traces produce degenerate diagrams, not
//! errors.

use std::io;

use thiserror::Error;

use tracelane_ingest::IngestError;

/// The main error type for Tracelane operations.
#[derive(Debug, Error)]
pub enum TracelaneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for TracelaneError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TracelaneError {
    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Ingest(err) if err.is_retryable())
    }
}
