//! Swimlane resolution.
//!
//! Lanes are ordered by kind rank (service, process, operation) and then by
//! case-sensitive component name, so a diagram reads left to right as
//! intake, transformation, delivery no matter how the store declared them.

use std::cmp::Ordering;

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};
use serde::Serialize;

use tracelane_core::{component::ComponentKind, identifier::ComponentId, trace::Trace};

/// A vertical column representing one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceLane {
    component_id: ComponentId,
    display_name: String,
    component_kind: ComponentKind,
    column_index: usize,
}

impl SequenceLane {
    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn component_kind(&self) -> ComponentKind {
        self.component_kind
    }

    /// 0-based column position.
    pub fn column_index(&self) -> usize {
        self.column_index
    }
}

struct Candidate<'a> {
    name: &'a str,
    display_name: &'a str,
    kind: ComponentKind,
}

impl Candidate<'_> {
    fn column_order(&self, other: &Self) -> Ordering {
        self.kind
            .rank()
            .cmp(&other.kind.rank())
            .then_with(|| self.name.cmp(other.name))
    }
}

/// Derives the ordered, deduplicated lane list for a trace.
///
/// The declared component list is used when the store supplied one, even if
/// it is empty. Otherwise lanes come from the hop endpoints, in order of first
/// appearance, with kind [`ComponentKind::Process`]. Duplicate names keep
/// their first occurrence.
pub fn resolve_lanes(trace: &Trace) -> Vec<SequenceLane> {
    let declared_or_derived: Vec<Candidate> = match trace.components() {
        Some(declared) => declared
            .iter()
            .map(|component| Candidate {
                name: component.name(),
                display_name: component.display_name(),
                kind: component.kind(),
            })
            .collect(),
        None => trace
            .hops()
            .iter()
            .flat_map(|hop| [hop.source(), hop.target()])
            .flatten()
            .map(|name| Candidate {
                name,
                display_name: name,
                kind: ComponentKind::Process,
            })
            .collect(),
    };

    let mut candidates: IndexMap<&str, Candidate> = IndexMap::new();
    for candidate in declared_or_derived {
        match candidates.entry(candidate.name) {
            Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
            Entry::Occupied(_) => {
                trace!(component = candidate.name; "Ignoring duplicate component");
            }
        }
    }

    let mut ordered: Vec<_> = candidates.into_values().collect();
    ordered.sort_by(Candidate::column_order);

    let lanes: Vec<_> = ordered
        .into_iter()
        .enumerate()
        .map(|(column_index, candidate)| SequenceLane {
            component_id: ComponentId::new(candidate.name),
            display_name: candidate.display_name.to_string(),
            component_kind: candidate.kind,
            column_index,
        })
        .collect();

    debug!(
        lanes_count = lanes.len(),
        declared = trace.components().is_some();
        "Resolved swimlanes"
    );

    lanes
}
