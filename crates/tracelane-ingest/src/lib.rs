//! Trace ingestion for Tracelane.
//!
//! This crate fetches raw trace documents from a trace store and normalizes
//! them into [`Trace`] values:
//!
//! 1. **Fetch** - a [`TraceSource`] resolves a session or message identifier
//!    to a [`RawTrace`](tracelane_core::trace::RawTrace).
//! 2. **Normalize** - every hop's raw status token is folded into a
//!    [`CanonicalStatus`](tracelane_core::status::CanonicalStatus) using a
//!    [`StatusVocabulary`].
//!
//! # Example
//!
//! ```
//! # use chrono::{TimeZone, Utc};
//! # use tracelane_core::{status::{CanonicalStatus, StatusVocabulary}, trace::{RawTrace, TraceHop}};
//! # use tracelane_ingest::{MemoryStore, fetch_trace};
//! let created = Utc.timestamp_millis_opt(0).unwrap();
//! let hop = TraceHop::new("h1", created)
//!     .with_source("intake")
//!     .with_target("router")
//!     .with_raw_status("queued");
//!
//! let mut store = MemoryStore::new();
//! store.insert(RawTrace::new("session-1", vec![hop]));
//!
//! let trace = fetch_trace(&store, "h1", &StatusVocabulary::default()).unwrap();
//! assert_eq!(trace.session_id(), "session-1");
//! assert_eq!(trace.hops()[0].status(), CanonicalStatus::Pending);
//! ```

pub mod error;

mod directory;
mod memory;
mod normalize;
mod source;

pub use directory::DirectoryStore;
pub use error::IngestError;
pub use memory::MemoryStore;
pub use normalize::normalize;
pub use source::TraceSource;

use log::{debug, info};

use tracelane_core::{status::StatusVocabulary, trace::Trace};

/// Fetches the trace for `id` from `source` and normalizes its statuses.
///
/// # Errors
///
/// Returns the source's [`IngestError`] unchanged. Nothing is retried here.
pub fn fetch_trace(
    source: &impl TraceSource,
    id: &str,
    vocabulary: &StatusVocabulary,
) -> error::Result<Trace> {
    info!(id; "Fetching trace");

    let raw = source.fetch(id)?;
    debug!(
        session_id = raw.session_id(),
        hops_count = raw.hops().len();
        "Trace fetched"
    );

    Ok(normalize(raw, vocabulary))
}
