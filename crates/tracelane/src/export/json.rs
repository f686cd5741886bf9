//! JSON export.

use log::debug;
use serde::Serialize;

use super::{Error, Exporter};
use crate::layout::DiagramLayout;

/// Serializes layouts and layout results as JSON.
///
/// Field names are camelCase and timestamps RFC 3339.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent the output.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Serializes any layout artifact, e.g. a
    /// [`LayoutResult`](crate::structure::LayoutResult).
    pub fn to_string<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Error> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        debug!(bytes = json.len(), pretty = self.pretty; "JSON serialized");
        Ok(json)
    }
}

impl Exporter for JsonExporter {
    fn export(&self, layout: &DiagramLayout) -> Result<String, Error> {
        self.to_string(layout)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use serde_json::Value;

    use tracelane_core::{
        component::ComponentKind,
        status::CanonicalStatus,
        trace::{DeclaredComponent, Hop, Trace, TraceHop},
    };

    use super::*;
    use crate::{
        layout::{LayoutEngine, TimelineMode},
        structure::LayoutResult,
    };

    fn result() -> LayoutResult {
        let at = |ms| Utc.timestamp_millis_opt(ms).unwrap();
        let hops = vec![
            Hop::new(
                TraceHop::new("h1", at(0))
                    .with_source("intake")
                    .with_target("router")
                    .with_processed_at(at(100)),
                CanonicalStatus::Success,
            ),
            Hop::new(
                TraceHop::new("h2", at(50)).with_source("router").with_target("ghost"),
                CanonicalStatus::Error,
            ),
        ];
        let components = vec![
            DeclaredComponent::new("intake", ComponentKind::Service),
            DeclaredComponent::new("router", ComponentKind::Process),
        ];
        LayoutResult::from_trace(&Trace::new("session-7", Some(components), hops), at(0))
    }

    #[test]
    fn test_layout_result_json_shape() {
        let json = JsonExporter::new().to_string(&result()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["sessionId"], "session-7");
        assert_eq!(value["lanes"][0]["componentId"], "intake");
        assert_eq!(value["lanes"][1]["componentKind"], "process");
        assert_eq!(value["arrows"][0]["hopId"], "h1");
        assert_eq!(value["arrows"][0]["status"], "success");
        assert_eq!(value["arrows"][0]["durationMs"], 100);
        assert_eq!(value["timeRange"]["start"], "1970-01-01T00:00:00Z");
        assert_eq!(value["droppedHops"][0]["hopId"], "h2");
        assert_eq!(value["droppedHops"][0]["reason"], "unknownTarget");
        assert_eq!(value["droppedHops"][0]["component"], "ghost");
    }

    #[test]
    fn test_diagram_layout_json_shape() {
        let layout = LayoutEngine::default().layout(result(), TimelineMode::RowIndexed);
        let json = JsonExporter::new().with_pretty(true).export(&layout).unwrap();
        assert!(json.contains('\n'));

        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["mode"], "row-indexed");
        assert_eq!(value["lanes"][0]["centerX"], 110.0);
        assert!(value["arrows"][0]["path"].as_str().unwrap().starts_with("M 110"));
        assert_eq!(value["axis"]["ticks"][0]["label"], "+0ms");
        assert_eq!(value["skippedArrows"], 0);
        assert_eq!(value["result"]["sessionId"], "session-7");
    }
}
