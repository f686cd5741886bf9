//! Error codes for the ingestion layer.
//!
//! - `E00x` - Lookup errors
//! - `E01x` - Transport errors
//! - `E02x` - Document errors

use std::fmt;

/// Error codes for categorizing ingestion failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lookup Errors (E00x)
    // =========================================================================
    /// Trace not found.
    ///
    /// No trace in the store is keyed by the identifier, and no trace
    /// contains a hop with that identifier.
    E001,

    // =========================================================================
    // Transport Errors (E01x)
    // =========================================================================
    /// Trace source unavailable.
    ///
    /// The store could not be reached or read. The request may succeed if
    /// retried.
    E010,

    // =========================================================================
    // Document Errors (E02x)
    // =========================================================================
    /// Malformed trace document.
    ///
    /// A document exists for the identifier but could not be decoded.
    E020,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E010 => "E010",
            ErrorCode::E020 => "E020",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "trace not found",
            ErrorCode::E010 => "trace source unavailable",
            ErrorCode::E020 => "malformed trace document",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_as_str() {
        for code in [ErrorCode::E001, ErrorCode::E010, ErrorCode::E020] {
            assert_eq!(code.to_string(), code.as_str());
            assert!(!code.description().is_empty());
        }
    }
}
