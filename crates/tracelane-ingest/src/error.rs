//! Error types for trace ingestion.
//!
//! Every failure carries an [`ErrorCode`] for documentation and searchability
//! and says whether a caller retry can help. The adapter itself never
//! retries.
//!
//! # Example
//!
//! ```
//! # use tracelane_ingest::error::{ErrorCode, IngestError};
//! let err = IngestError::not_found("session-42");
//! assert_eq!(err.code(), ErrorCode::E001);
//! assert!(!err.is_retryable());
//! ```

mod error_code;
mod ingest_error;

pub use error_code::ErrorCode;
pub use ingest_error::IngestError;

/// A type alias for `Result<T, IngestError>`.
pub type Result<T> = std::result::Result<T, IngestError>;
