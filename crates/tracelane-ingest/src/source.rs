use tracelane_core::trace::RawTrace;

use crate::error::Result;

/// A store that can resolve a session or message identifier to a raw trace.
///
/// Implementations look the identifier up as a session id first and, failing
/// that, as the id of a hop inside some trace.
pub trait TraceSource {
    /// Fetches the raw trace for `id`.
    ///
    /// # Errors
    ///
    /// - [`IngestError::TraceNotFound`](crate::IngestError::TraceNotFound) if
    ///   no trace matches.
    /// - [`IngestError::TraceSourceUnavailable`](crate::IngestError::TraceSourceUnavailable)
    ///   if the store cannot be read.
    /// - [`IngestError::MalformedTrace`](crate::IngestError::MalformedTrace)
    ///   if the matching document cannot be decoded.
    fn fetch(&self, id: &str) -> Result<RawTrace>;
}

impl<T: TraceSource + ?Sized> TraceSource for &T {
    fn fetch(&self, id: &str) -> Result<RawTrace> {
        (**self).fetch(id)
    }
}
