//! Error adapter for converting TracelaneError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use tracelane::{TracelaneError, ingest::IngestError};

/// Adapter implementing [`MietteDiagnostic`] for [`TracelaneError`].
pub struct ErrorAdapter<'a>(pub &'a TracelaneError);

impl ErrorAdapter<'_> {
    /// Stable diagnostic code for the wrapped error
    pub fn code_str(&self) -> &'static str {
        match self.0 {
            TracelaneError::Io(_) => "tracelane::io",
            TracelaneError::Ingest(IngestError::TraceNotFound { .. }) => "tracelane::not_found",
            TracelaneError::Ingest(IngestError::TraceSourceUnavailable { .. }) => {
                "tracelane::source_unavailable"
            }
            TracelaneError::Ingest(IngestError::MalformedTrace { .. }) => {
                "tracelane::malformed_trace"
            }
            TracelaneError::Config(_) => "tracelane::config",
            TracelaneError::Export(_) => "tracelane::export",
        }
    }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            TracelaneError::Ingest(err) => {
                let code = err.code();
                let help = match err.help() {
                    Some(hint) => format!("{code}: {hint}"),
                    None => format!("{code}: {}", code.description()),
                };
                Some(Box::new(help))
            }
            TracelaneError::Config(_) => Some(Box::new(
                "check the [layout], [style] and [status] sections of the configuration file",
            )),
            TracelaneError::Io(_) | TracelaneError::Export(_) => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
