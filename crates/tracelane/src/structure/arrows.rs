//! Arrow building.
//!
//! Each hop whose two endpoints resolve to lanes becomes one
//! [`SequenceArrow`], in hop order. Hops that do not resolve are excluded and
//! reported as [`DroppedHop`]s.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Serialize;

use tracelane_core::{
    identifier::ComponentId,
    status::CanonicalStatus,
    trace::{Hop, Timestamp},
};

use super::lanes::SequenceLane;

/// A directed, timestamped message between two lanes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceArrow {
    hop_id: String,
    source_component_id: ComponentId,
    target_component_id: ComponentId,
    timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    processed_at: Option<Timestamp>,
    duration_ms: u64,
    status: CanonicalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl SequenceArrow {
    pub fn hop_id(&self) -> &str {
        &self.hop_id
    }

    pub fn source_component_id(&self) -> &ComponentId {
        &self.source_component_id
    }

    pub fn target_component_id(&self) -> &ComponentId {
        &self.target_component_id
    }

    /// When the hop was created.
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// When the hop finished processing, if known.
    pub fn processed_at(&self) -> Option<Timestamp> {
        self.processed_at
    }

    /// Elapsed processing time; 0 when unknown.
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn status(&self) -> CanonicalStatus {
        self.status
    }

    /// Full, untruncated label text.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Returns `true` if the arrow starts and ends on the same lane.
    pub fn is_self_message(&self) -> bool {
        self.source_component_id == self.target_component_id
    }
}

/// Why a hop produced no arrow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "component", rename_all = "camelCase")]
pub enum DropReason {
    /// The hop has no source component name.
    MissingSource,
    /// The hop has no target component name.
    MissingTarget,
    /// The source component is not among the lanes.
    UnknownSource(String),
    /// The target component is not among the lanes.
    UnknownTarget(String),
}

/// A hop excluded from the diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedHop {
    hop_id: String,
    #[serde(flatten)]
    reason: DropReason,
}

impl DroppedHop {
    pub fn hop_id(&self) -> &str {
        &self.hop_id
    }

    pub fn reason(&self) -> &DropReason {
        &self.reason
    }
}

/// Output of [`build_arrows`].
#[derive(Debug, Clone, Default)]
pub struct ArrowSet {
    pub arrows: Vec<SequenceArrow>,
    pub dropped: Vec<DroppedHop>,
}

/// Maps hops to arrows between `lanes`, preserving hop order.
///
/// Hops that cannot be resolved to two lanes are logged at warning level and
/// returned in [`ArrowSet::dropped`].
pub fn build_arrows(hops: &[Hop], lanes: &[SequenceLane]) -> ArrowSet {
    let known: HashSet<&str> = lanes
        .iter()
        .map(|lane| lane.component_id().as_str())
        .collect();

    let mut set = ArrowSet::default();
    for hop in hops {
        match resolve_endpoints(hop, &known) {
            Ok((source, target)) => set.arrows.push(SequenceArrow {
                hop_id: hop.id().to_string(),
                source_component_id: ComponentId::new(source),
                target_component_id: ComponentId::new(target),
                timestamp: hop.created_at(),
                processed_at: hop.processed_at(),
                duration_ms: hop_duration_ms(hop),
                status: hop.status(),
                label: hop
                    .message_type_label()
                    .or(hop.description())
                    .map(str::to_string),
            }),
            Err(reason) => {
                warn!(hop_id = hop.id(), reason:? = reason; "Dropping unresolvable hop");
                set.dropped.push(DroppedHop {
                    hop_id: hop.id().to_string(),
                    reason,
                });
            }
        }
    }

    debug!(
        arrows_count = set.arrows.len(),
        dropped_count = set.dropped.len();
        "Built arrows"
    );

    set
}

fn resolve_endpoints<'a>(
    hop: &'a Hop,
    known: &HashSet<&str>,
) -> Result<(&'a str, &'a str), DropReason> {
    let source = hop.source().ok_or(DropReason::MissingSource)?;
    let target = hop.target().ok_or(DropReason::MissingTarget)?;
    if !known.contains(source) {
        return Err(DropReason::UnknownSource(source.to_string()));
    }
    if !known.contains(target) {
        return Err(DropReason::UnknownTarget(target.to_string()));
    }
    Ok((source, target))
}

/// Latency when recorded, otherwise processed minus created, clamped at 0.
fn hop_duration_ms(hop: &Hop) -> u64 {
    let millis = hop.latency_ms().or_else(|| {
        hop.processed_at()
            .map(|processed| (processed - hop.created_at()).num_milliseconds())
    });
    millis.map_or(0, |millis| u64::try_from(millis).unwrap_or(0))
}
