//! Integration tests for the TraceLayoutBuilder API
//!
//! These tests drive the full fetch, layout and export pipeline through the
//! public API with an in-memory store.

use chrono::{TimeZone, Utc};

use tracelane::{
    TraceLayoutBuilder, TracelaneError,
    component::ComponentKind,
    config::AppConfig,
    ingest::{IngestError, MemoryStore},
    layout::{DiagramLayout, TimelineMode},
    status::CanonicalStatus,
    trace::{DeclaredComponent, RawTrace, Timestamp, TraceHop},
};

fn at(ms: i64) -> Timestamp {
    Utc.timestamp_millis_opt(ms).unwrap()
}

fn pipeline_components() -> Vec<DeclaredComponent> {
    vec![
        DeclaredComponent::new("O1", ComponentKind::Operation),
        DeclaredComponent::new("P1", ComponentKind::Process),
        DeclaredComponent::new("S1", ComponentKind::Service),
    ]
}

fn store() -> MemoryStore {
    let three_lane = RawTrace::new(
        "scenario-a",
        vec![
            TraceHop::new("a1", at(0))
                .with_source("S1")
                .with_target("P1")
                .with_raw_status("completed")
                .with_latency_ms(100)
                .with_processed_at(at(100)),
            TraceHop::new("a2", at(150))
                .with_source("P1")
                .with_target("O1")
                .with_raw_status("sent")
                .with_error_flag(true)
                .with_latency_ms(0)
                .with_processed_at(at(150)),
        ],
    )
    .with_components(pipeline_components());

    let in_flight = RawTrace::new(
        "in-flight",
        vec![
            TraceHop::new("f1", at(0))
                .with_source("S1")
                .with_target("P1")
                .with_raw_status("queued"),
            TraceHop::new("f2", at(150))
                .with_source("P1")
                .with_target("O1")
                .with_raw_status("created"),
        ],
    )
    .with_components(pipeline_components());

    let undeclared_target = RawTrace::new(
        "scenario-b",
        vec![
            TraceHop::new("b1", at(0)).with_source("S1").with_target("P1"),
            TraceHop::new("b2", at(10)).with_source("P1").with_target("X9"),
        ],
    )
    .with_components(pipeline_components());

    let empty = RawTrace::new("scenario-c", vec![]).with_components(vec![]);

    let same_kind = RawTrace::new("scenario-d", vec![]).with_components(vec![
        DeclaredComponent::new("B", ComponentKind::Process),
        DeclaredComponent::new("A", ComponentKind::Process),
    ]);

    [three_lane, in_flight, undeclared_target, empty, same_kind]
        .into_iter()
        .collect()
}

fn lane_names(layout: &DiagramLayout) -> Vec<&str> {
    layout
        .lanes()
        .iter()
        .map(|lane| lane.component_id().as_str())
        .collect()
}

#[test]
fn test_three_lane_pipeline() {
    let builder = TraceLayoutBuilder::default();
    let trace = builder
        .fetch(&store(), "scenario-a")
        .expect("Failed to fetch trace");
    let layout = builder.layout_at(&trace, TimelineMode::Proportional, at(0));

    assert_eq!(lane_names(&layout), ["S1", "P1", "O1"]);
    let statuses: Vec<_> = layout.arrows().iter().map(|arrow| arrow.status()).collect();
    assert_eq!(statuses, [CanonicalStatus::Success, CanonicalStatus::Error]);
    assert_eq!(layout.result().time_range().start(), at(0));
    assert_eq!(layout.result().time_range().end(), at(150));
}

#[test]
fn test_in_flight_trace_uses_fallback_span() {
    let builder = TraceLayoutBuilder::default();
    let trace = builder.fetch(&store(), "in-flight").unwrap();
    let layout = builder.layout_at(&trace, TimelineMode::Proportional, at(0));

    assert_eq!(layout.result().time_range().end(), at(1_150));
    assert!(
        layout
            .arrows()
            .iter()
            .all(|arrow| arrow.status() == CanonicalStatus::Pending)
    );
}

#[test]
fn test_undeclared_target_is_counted_not_drawn() {
    let builder = TraceLayoutBuilder::default();
    let trace = builder.fetch(&store(), "scenario-b").unwrap();
    let layout = builder.layout_at(&trace, TimelineMode::RowIndexed, at(0));

    assert_eq!(lane_names(&layout), ["S1", "P1", "O1"]);
    assert_eq!(layout.arrows().len(), 1);
    assert_eq!(layout.result().dropped_hop_count(), 1);
    assert_eq!(layout.skipped_arrows(), 0);
}

#[test]
fn test_empty_trace_is_renderable() {
    let builder = TraceLayoutBuilder::default();
    let now = at(1_700_000_000_000);
    let trace = builder.fetch(&store(), "scenario-c").unwrap();
    let layout = builder.layout_at(&trace, TimelineMode::Proportional, now);

    assert!(layout.lanes().is_empty());
    assert!(layout.arrows().is_empty());
    assert_eq!(layout.axis().start(), now);
    assert_eq!(layout.axis().total_duration_ms(), 1);

    let svg = builder.render_svg(&layout).expect("Failed to render");
    assert!(svg.contains("</svg>"));
}

#[test]
fn test_same_kind_sorted_by_name() {
    let builder = TraceLayoutBuilder::default();
    let trace = builder.fetch(&store(), "scenario-d").unwrap();
    let layout = builder.layout_at(&trace, TimelineMode::RowIndexed, at(0));
    assert_eq!(lane_names(&layout), ["A", "B"]);
}

#[test]
fn test_fetch_by_message_id() {
    let builder = TraceLayoutBuilder::default();
    let trace = builder.fetch(&store(), "b2").unwrap();
    assert_eq!(trace.session_id(), "scenario-b");
}

#[test]
fn test_unknown_trace_is_not_found() {
    let builder = TraceLayoutBuilder::default();
    let err = builder.fetch(&store(), "nope").unwrap_err();

    assert!(matches!(
        err,
        TracelaneError::Ingest(IngestError::TraceNotFound { .. })
    ));
    assert!(!err.is_retryable());
}

#[test]
fn test_layout_is_idempotent() {
    let builder = TraceLayoutBuilder::default();
    let store = store();
    for mode in [TimelineMode::Proportional, TimelineMode::RowIndexed] {
        let first = builder.fetch(&store, "scenario-a").unwrap();
        let second = builder.fetch(&store, "scenario-a").unwrap();
        assert_eq!(
            builder.layout_at(&first, mode, at(0)),
            builder.layout_at(&second, mode, at(0))
        );
    }
}

#[test]
fn test_exports() {
    let builder = TraceLayoutBuilder::new(AppConfig::default());
    let trace = builder.fetch(&store(), "scenario-a").unwrap();
    let layout = builder.layout_at(&trace, builder.default_mode(), at(0));

    let svg = builder.render_svg(&layout).expect("Failed to render");
    assert!(svg.contains("<svg"));
    assert!(svg.contains("</svg>"));

    let json = builder.to_json(&layout).expect("Failed to export layout");
    assert!(json.contains("\"mode\": \"proportional\""));

    let result_json = builder
        .result_to_json(layout.result())
        .expect("Failed to export result");
    assert!(result_json.contains("\"sessionId\": \"scenario-a\""));
}

#[test]
fn test_invalid_style_is_config_error() {
    let config: AppConfig = toml::from_str("[style]\nerror_color = \"#zzzzzz\"").unwrap();
    let builder = TraceLayoutBuilder::new(config);
    let trace = builder.fetch(&store(), "scenario-a").unwrap();
    let layout = builder.layout_at(&trace, TimelineMode::Proportional, at(0));

    assert!(matches!(
        builder.render_svg(&layout),
        Err(TracelaneError::Config(_))
    ));
}

#[test]
fn test_trace_at_latest_representable_instant_lays_out() {
    let document = r#"{
        "sessionId": "far-future",
        "hops": [{
            "id": "z1",
            "sourceComponentName": "intake",
            "targetComponentName": "router",
            "createdAt": "+262142-12-31T23:59:59.999Z",
            "rawStatus": "queued"
        }]
    }"#;
    let raw: RawTrace = serde_json::from_str(document).expect("valid trace document");
    let store: MemoryStore = [raw].into_iter().collect();
    let builder = TraceLayoutBuilder::default();

    let trace = builder.fetch(&store, "far-future").unwrap();
    for mode in [TimelineMode::Proportional, TimelineMode::RowIndexed] {
        let layout = builder.layout_at(&trace, mode, at(0));
        let range = layout.result().time_range();

        assert!(range.end() > range.start());
        assert_eq!(layout.arrows().len(), 1);
        assert!(builder.render_svg(&layout).is_ok());
    }
}
