//! Trace data model.
//!
//! A trace is the ordered record of every hop a message (or a session of
//! related messages) made across components. Two representations exist:
//!
//! - [`RawTrace`] / [`TraceHop`]: the document as the trace store supplies it,
//!   including the free-text `rawStatus` token.
//! - [`Trace`] / [`Hop`]: the normalized form handed to layout. A [`Hop`]
//!   carries a [`CanonicalStatus`] instead of the raw token.
//!
//! Only the ingestion layer turns the first into the second.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{component::ComponentKind, status::CanonicalStatus};

/// Instant type used for every trace timestamp.
pub type Timestamp = DateTime<Utc>;

/// A component declared by the trace store, with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredComponent {
    name: String,
    #[serde(default)]
    kind: ComponentKind,
    #[serde(default)]
    display_name: Option<String>,
}

impl DeclaredComponent {
    pub fn new(name: impl Into<String>, kind: ComponentKind) -> Self {
        Self {
            name: name.into(),
            kind,
            display_name: None,
        }
    }

    /// Sets a human-readable name shown instead of the component name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    /// Returns the display name, falling back to the component name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}

/// One raw message leg as stored by the source system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceHop {
    id: String,
    #[serde(default)]
    source_component_name: Option<String>,
    #[serde(default)]
    target_component_name: Option<String>,
    created_at: Timestamp,
    #[serde(default)]
    processed_at: Option<Timestamp>,
    #[serde(default, alias = "status")]
    raw_status: String,
    #[serde(default, alias = "isError")]
    is_error_flag: bool,
    #[serde(default)]
    message_type_label: Option<String>,
    #[serde(default)]
    latency_ms: Option<i64>,
    #[serde(default)]
    description: Option<String>,
}

impl TraceHop {
    /// Creates a hop with no endpoints, an empty status token and no metadata.
    pub fn new(id: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: id.into(),
            source_component_name: None,
            target_component_name: None,
            created_at,
            processed_at: None,
            raw_status: String::new(),
            is_error_flag: false,
            message_type_label: None,
            latency_ms: None,
            description: None,
        }
    }

    pub fn with_source(mut self, name: impl Into<String>) -> Self {
        self.source_component_name = Some(name.into());
        self
    }

    pub fn with_target(mut self, name: impl Into<String>) -> Self {
        self.target_component_name = Some(name.into());
        self
    }

    pub fn with_processed_at(mut self, processed_at: Timestamp) -> Self {
        self.processed_at = Some(processed_at);
        self
    }

    pub fn with_raw_status(mut self, raw_status: impl Into<String>) -> Self {
        self.raw_status = raw_status.into();
        self
    }

    pub fn with_error_flag(mut self, is_error: bool) -> Self {
        self.is_error_flag = is_error;
        self
    }

    pub fn with_message_type_label(mut self, label: impl Into<String>) -> Self {
        self.message_type_label = Some(label.into());
        self
    }

    pub fn with_latency_ms(mut self, latency_ms: i64) -> Self {
        self.latency_ms = Some(latency_ms);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn raw_status(&self) -> &str {
        &self.raw_status
    }

    pub fn is_error_flag(&self) -> bool {
        self.is_error_flag
    }
}

/// A raw trace document keyed by session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrace {
    session_id: String,
    #[serde(default)]
    components: Option<Vec<DeclaredComponent>>,
    #[serde(default)]
    hops: Vec<TraceHop>,
}

impl RawTrace {
    pub fn new(session_id: impl Into<String>, hops: Vec<TraceHop>) -> Self {
        Self {
            session_id: session_id.into(),
            components: None,
            hops,
        }
    }

    /// Attaches an explicit component declaration.
    pub fn with_components(mut self, components: Vec<DeclaredComponent>) -> Self {
        self.components = Some(components);
        self
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn components(&self) -> Option<&[DeclaredComponent]> {
        self.components.as_deref()
    }

    pub fn hops(&self) -> &[TraceHop] {
        &self.hops
    }

    /// Returns `true` if any hop carries the given id.
    pub fn contains_hop(&self, hop_id: &str) -> bool {
        self.hops.iter().any(|hop| hop.id == hop_id)
    }

    /// Splits the document into its parts.
    pub fn into_parts(self) -> (String, Option<Vec<DeclaredComponent>>, Vec<TraceHop>) {
        (self.session_id, self.components, self.hops)
    }
}

/// A hop whose status has been normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Hop {
    id: String,
    source: Option<String>,
    target: Option<String>,
    created_at: Timestamp,
    processed_at: Option<Timestamp>,
    status: CanonicalStatus,
    message_type_label: Option<String>,
    latency_ms: Option<i64>,
    description: Option<String>,
}

impl Hop {
    /// Builds a normalized hop from its raw form and its classified status.
    ///
    /// The raw status token and error flag are consumed here.
    pub fn new(raw: TraceHop, status: CanonicalStatus) -> Self {
        Self {
            id: raw.id,
            source: raw.source_component_name,
            target: raw.target_component_name,
            created_at: raw.created_at,
            processed_at: raw.processed_at,
            status,
            message_type_label: raw.message_type_label,
            latency_ms: raw.latency_ms,
            description: raw.description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the sending component, if the store recorded one.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Name of the receiving component, if the store recorded one.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn processed_at(&self) -> Option<Timestamp> {
        self.processed_at
    }

    pub fn status(&self) -> CanonicalStatus {
        self.status
    }

    pub fn message_type_label(&self) -> Option<&str> {
        self.message_type_label.as_deref()
    }

    pub fn latency_ms(&self) -> Option<i64> {
        self.latency_ms
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// A normalized trace, ready for layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    session_id: String,
    components: Option<Vec<DeclaredComponent>>,
    hops: Vec<Hop>,
}

impl Trace {
    pub fn new(
        session_id: impl Into<String>,
        components: Option<Vec<DeclaredComponent>>,
        hops: Vec<Hop>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            components,
            hops,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The declared component list, or `None` if the store supplied none.
    pub fn components(&self) -> Option<&[DeclaredComponent]> {
        self.components.as_deref()
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }
}
