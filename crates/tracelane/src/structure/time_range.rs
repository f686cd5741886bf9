//! Time range calculation.

use chrono::TimeDelta;
use log::debug;
use serde::Serialize;

use tracelane_core::trace::Timestamp;

use super::arrows::SequenceArrow;

/// Span added after the last creation time when no hop has finished.
pub const FALLBACK_SPAN_MS: i64 = 1000;

/// Smallest span a [`TimeRange`] may have.
pub const MIN_SPAN_MS: i64 = 1;

/// The overall start and end instants of a trace.
///
/// `end` is always strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeRange {
    start: Timestamp,
    end: Timestamp,
}

impl TimeRange {
    /// Creates a range, widening it to [`MIN_SPAN_MS`] if `end` is not after `start`.
    ///
    /// A `start` too close to `Timestamp::MAX_UTC` to be widened is moved
    /// back so the range ends at the latest representable instant.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        let min_span = TimeDelta::milliseconds(MIN_SPAN_MS);
        match start.checked_add_signed(min_span) {
            Some(min_end) => Self {
                start,
                end: end.max(min_end),
            },
            None => {
                debug!("Time range start at the latest instant, shifting it back");
                Self {
                    start: Timestamp::MAX_UTC - min_span,
                    end: Timestamp::MAX_UTC,
                }
            }
        }
    }

    /// Derives the range covered by `arrows`.
    ///
    /// - `start` is the earliest arrow timestamp.
    /// - `end` is the latest `processed_at`; if no arrow has one, the latest
    ///   timestamp plus [`FALLBACK_SPAN_MS`].
    /// - With no arrows the range is `[now, now + 1ms]`.
    ///
    /// Instants that would pass `Timestamp::MAX_UTC` saturate there.
    pub fn from_arrows(arrows: &[SequenceArrow], now: Timestamp) -> Self {
        let Some(start) = arrows.iter().map(SequenceArrow::timestamp).min() else {
            debug!("No arrows, anchoring time range at now");
            return Self::new(now, now);
        };

        let end = arrows
            .iter()
            .filter_map(SequenceArrow::processed_at)
            .max()
            .unwrap_or_else(|| {
                let last_created = arrows
                    .iter()
                    .map(SequenceArrow::timestamp)
                    .max()
                    .unwrap_or(start);
                debug!("No processed timestamps, using fallback span");
                last_created
                    .checked_add_signed(TimeDelta::milliseconds(FALLBACK_SPAN_MS))
                    .unwrap_or(Timestamp::MAX_UTC)
            });

        Self::new(start, end)
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    /// Total span in milliseconds; always at least [`MIN_SPAN_MS`].
    pub fn duration_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Milliseconds from `start` to `instant`; negative if `instant` precedes it.
    pub fn offset_ms(&self, instant: Timestamp) -> i64 {
        (instant - self.start).num_milliseconds()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use tracelane_core::{
        component::ComponentKind,
        status::CanonicalStatus,
        trace::{DeclaredComponent, Hop, Trace, TraceHop},
    };

    use super::*;
    use crate::structure::{arrows::build_arrows, lanes::resolve_lanes};

    fn at(ms: i64) -> Timestamp {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn arrows(hops: Vec<TraceHop>) -> Vec<SequenceArrow> {
        let trace = Trace::new(
            "s",
            Some(vec![
                DeclaredComponent::new("a", ComponentKind::Service),
                DeclaredComponent::new("b", ComponentKind::Process),
            ]),
            hops.into_iter()
                .map(|raw| Hop::new(raw, CanonicalStatus::Success))
                .collect(),
        );
        build_arrows(trace.hops(), &resolve_lanes(&trace)).arrows
    }

    fn ab(id: &str, created: i64) -> TraceHop {
        TraceHop::new(id, at(created)).with_source("a").with_target("b")
    }

    #[test]
    fn test_end_is_latest_processed_at() {
        let arrows = arrows(vec![
            ab("h1", 0).with_processed_at(at(100)),
            ab("h2", 150).with_processed_at(at(150)),
        ]);

        let range = TimeRange::from_arrows(&arrows, at(99_999));
        assert_eq!(range.start(), at(0));
        assert_eq!(range.end(), at(150));
        assert_eq!(range.duration_ms(), 150);
    }

    #[test]
    fn test_fallback_without_processed_at() {
        let arrows = arrows(vec![ab("h1", 0), ab("h2", 150)]);

        let range = TimeRange::from_arrows(&arrows, at(99_999));
        assert_eq!(range.start(), at(0));
        assert_eq!(range.end(), at(1_150));
    }

    #[test]
    fn test_partial_processed_at_uses_only_present_values() {
        let arrows = arrows(vec![ab("h1", 0).with_processed_at(at(40)), ab("h2", 900)]);

        let range = TimeRange::from_arrows(&arrows, at(99_999));
        assert_eq!(range.end(), at(40));
    }

    #[test]
    fn test_start_ignores_hop_order() {
        let arrows = arrows(vec![ab("h1", 300), ab("h2", 100)]);
        let range = TimeRange::from_arrows(&arrows, at(0));
        assert_eq!(range.start(), at(100));
    }

    #[test]
    fn test_empty_anchors_at_now() {
        let now = at(1_700_000_000_000);
        let range = TimeRange::from_arrows(&[], now);
        assert_eq!(range.start(), now);
        assert_eq!(range.end(), at(1_700_000_000_001));
    }

    #[test]
    fn test_degenerate_single_instant_widens() {
        let arrows = arrows(vec![ab("h1", 10).with_processed_at(at(10))]);
        let range = TimeRange::from_arrows(&arrows, at(0));
        assert_eq!(range.duration_ms(), MIN_SPAN_MS);
    }

    #[test]
    fn test_fallback_saturates_at_latest_instant() {
        let latest = Timestamp::MAX_UTC;
        let arrows = arrows(vec![
            TraceHop::new("h1", latest).with_source("a").with_target("b"),
        ]);

        let range = TimeRange::from_arrows(&arrows, at(0));
        assert_eq!(range.end(), Timestamp::MAX_UTC);
        assert!(range.end() > range.start());
        assert_eq!(range.duration_ms(), MIN_SPAN_MS);
    }

    #[test]
    fn test_widening_at_latest_instant_moves_start_back() {
        let latest = Timestamp::MAX_UTC;
        let range = TimeRange::new(latest, latest);
        assert_eq!(range.end(), latest);
        assert_eq!(range.duration_ms(), MIN_SPAN_MS);
    }

    #[test]
    fn test_fallback_near_latest_instant_saturates() {
        let created = Timestamp::MAX_UTC - TimeDelta::milliseconds(400);
        let arrows = arrows(vec![
            TraceHop::new("h1", created).with_source("a").with_target("b"),
        ]);

        let range = TimeRange::from_arrows(&arrows, at(0));
        assert_eq!(range.start(), created);
        assert_eq!(range.end(), Timestamp::MAX_UTC);
    }

    #[test]
    fn test_offset() {
        let range = TimeRange::new(at(1_000), at(2_000));
        assert_eq!(range.offset_ms(at(1_250)), 250);
        assert_eq!(range.offset_ms(at(900)), -100);
    }

    proptest! {
        #[test]
        fn prop_end_after_start(
            hops in prop::collection::vec((0i64..100_000, prop::option::of(-5_000i64..200_000)), 0..16)
        ) {
            let raw = hops
                .iter()
                .enumerate()
                .map(|(idx, (created, processed))| {
                    let hop = ab(&format!("h{idx}"), *created);
                    match processed {
                        Some(processed) => hop.with_processed_at(at(*processed)),
                        None => hop,
                    }
                })
                .collect();

            let range = TimeRange::from_arrows(&arrows(raw), at(0));
            prop_assert!(range.end() > range.start());
            prop_assert!(range.duration_ms() >= MIN_SPAN_MS);
        }
    }
}
