//! The [`IngestError`] type.

use std::io;

use thiserror::Error;

use crate::error::ErrorCode;

/// Failure to obtain a trace from a [`TraceSource`](crate::TraceSource).
#[derive(Debug, Error)]
pub enum IngestError {
    /// The identifier is unknown to the store.
    #[error("trace `{id}` not found")]
    TraceNotFound { id: String },

    /// The store could not be reached or read.
    #[error("trace source unavailable: {reason}")]
    TraceSourceUnavailable {
        reason: String,
        #[source]
        source: Option<io::Error>,
    },

    /// A document was found but could not be decoded.
    #[error("trace `{id}` is malformed: {reason}")]
    MalformedTrace { id: String, reason: String },
}

impl IngestError {
    /// Create a `TraceNotFound` error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::TraceNotFound { id: id.into() }
    }

    /// Create a `TraceSourceUnavailable` error without an underlying I/O error.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::TraceSourceUnavailable {
            reason: reason.into(),
            source: None,
        }
    }

    /// Create a `TraceSourceUnavailable` error caused by an I/O error.
    pub fn unavailable_io(reason: impl Into<String>, source: io::Error) -> Self {
        Self::TraceSourceUnavailable {
            reason: reason.into(),
            source: Some(source),
        }
    }

    /// Create a `MalformedTrace` error.
    pub fn malformed(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedTrace {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::TraceNotFound { .. } => ErrorCode::E001,
            Self::TraceSourceUnavailable { .. } => ErrorCode::E010,
            Self::MalformedTrace { .. } => ErrorCode::E020,
        }
    }

    /// Returns `true` if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::TraceSourceUnavailable { .. })
    }

    /// Returns a hint for the operator, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::TraceNotFound { .. } => {
                Some("check the session or message identifier; lookups are exact")
            }
            Self::TraceSourceUnavailable { .. } => {
                Some("the trace store may be temporarily unreachable; retry the request")
            }
            Self::MalformedTrace { .. } => None,
        }
    }
}
