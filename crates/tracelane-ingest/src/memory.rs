//! In-memory trace store.

use indexmap::IndexMap;
use log::trace;

use tracelane_core::trace::RawTrace;

use crate::{
    error::{IngestError, Result},
    source::TraceSource,
};

/// A [`TraceSource`] backed by a map of session id to trace.
///
/// Message-id lookups scan traces in insertion order and return the first
/// one containing the hop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    traces: IndexMap<String, RawTrace>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a trace keyed by its session id, replacing any previous one.
    pub fn insert(&mut self, trace: RawTrace) -> Option<RawTrace> {
        self.traces.insert(trace.session_id().to_string(), trace)
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

impl FromIterator<RawTrace> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = RawTrace>>(iter: I) -> Self {
        let mut store = Self::new();
        for trace in iter {
            store.insert(trace);
        }
        store
    }
}

impl TraceSource for MemoryStore {
    fn fetch(&self, id: &str) -> Result<RawTrace> {
        if let Some(trace) = self.traces.get(id) {
            return Ok(trace.clone());
        }

        trace!(id; "No session with this id, searching by message id");
        self.traces
            .values()
            .find(|trace| trace.contains_hop(id))
            .cloned()
            .ok_or_else(|| IngestError::not_found(id))
    }
}
