//! Diagram structure derived from a normalized trace.
//!
//! This module turns a [`Trace`] into a [`LayoutResult`]: the lanes, the
//! arrows between them and the time range they span. No coordinates are
//! assigned here; see [`crate::layout`] for that.
//!
//! # Pipeline
//!
//! 1. [`resolve_lanes`] - ordered, deduplicated lanes
//! 2. [`build_arrows`] - one arrow per resolvable hop, in hop order
//! 3. [`TimeRange::from_arrows`] - start and end instants of the kept hops

mod arrows;
mod lanes;
mod time_range;

pub use arrows::{ArrowSet, DropReason, DroppedHop, SequenceArrow, build_arrows};
pub use lanes::{SequenceLane, resolve_lanes};
pub use time_range::{FALLBACK_SPAN_MS, MIN_SPAN_MS, TimeRange};

use log::{debug, warn};
use serde::Serialize;

use tracelane_core::{
    identifier::ComponentId,
    trace::{Timestamp, Trace},
};

/// Lanes, arrows and time range for one trace.
///
/// Every arrow's endpoints name lanes of the same result. Hops that could not
/// be drawn are listed in [`LayoutResult::dropped_hops`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutResult {
    session_id: String,
    lanes: Vec<SequenceLane>,
    arrows: Vec<SequenceArrow>,
    time_range: TimeRange,
    dropped_hops: Vec<DroppedHop>,
}

impl LayoutResult {
    /// Builds the structure for `trace`.
    ///
    /// `now` anchors the time range of a trace without drawable hops.
    pub fn from_trace(trace: &Trace, now: Timestamp) -> Self {
        let lanes = resolve_lanes(trace);
        let ArrowSet { arrows, dropped } = build_arrows(trace.hops(), &lanes);
        let time_range = TimeRange::from_arrows(&arrows, now);

        if !dropped.is_empty() {
            warn!(
                session_id = trace.session_id(),
                dropped_count = dropped.len();
                "Some hops could not be drawn"
            );
        }

        debug!(
            session_id = trace.session_id(),
            lanes_count = lanes.len(),
            arrows_count = arrows.len();
            "Trace structure built"
        );

        Self {
            session_id: trace.session_id().to_string(),
            lanes,
            arrows,
            time_range,
            dropped_hops: dropped,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Lanes in column order.
    pub fn lanes(&self) -> &[SequenceLane] {
        &self.lanes
    }

    /// Arrows in hop order.
    pub fn arrows(&self) -> &[SequenceArrow] {
        &self.arrows
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// Hops excluded because an endpoint did not resolve to a lane.
    pub fn dropped_hops(&self) -> &[DroppedHop] {
        &self.dropped_hops
    }

    /// Number of excluded hops.
    pub fn dropped_hop_count(&self) -> usize {
        self.dropped_hops.len()
    }

    /// Finds the lane for a component.
    pub fn lane(&self, component_id: &ComponentId) -> Option<&SequenceLane> {
        self.lanes
            .iter()
            .find(|lane| lane.component_id() == component_id)
    }
}
