//! Example: laying out a trace held in memory
//!
//! Builds a small three-component trace, lays it out in both timeline modes
//! and prints the SVG for the row-indexed one.

use chrono::{TimeDelta, Utc};

use tracelane::{
    TraceLayoutBuilder,
    component::ComponentKind,
    ingest::MemoryStore,
    layout::TimelineMode,
    trace::{DeclaredComponent, RawTrace, TraceHop},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = Utc::now();
    let after = |ms| start + TimeDelta::milliseconds(ms);

    let hops = vec![
        TraceHop::new("msg-1", start)
            .with_source("mllp-intake")
            .with_target("hl7-to-fhir")
            .with_raw_status("completed")
            .with_message_type_label("ADT^A01")
            .with_processed_at(after(12)),
        TraceHop::new("msg-2", after(12))
            .with_source("hl7-to-fhir")
            .with_target("fhir-outbound")
            .with_raw_status("completed")
            .with_description("Patient resource upsert")
            .with_processed_at(after(3_400)),
        TraceHop::new("msg-3", after(3_400))
            .with_source("fhir-outbound")
            .with_target("fhir-outbound")
            .with_raw_status("retrying"),
    ];
    let components = vec![
        DeclaredComponent::new("fhir-outbound", ComponentKind::Operation),
        DeclaredComponent::new("hl7-to-fhir", ComponentKind::Process),
        DeclaredComponent::new("mllp-intake", ComponentKind::Service).with_display_name("MLLP Intake"),
    ];

    let mut store = MemoryStore::new();
    store.insert(RawTrace::new("session-1", hops).with_components(components));

    let builder = TraceLayoutBuilder::default();
    let trace = builder.fetch(&store, "msg-2")?;

    for mode in [TimelineMode::Proportional, TimelineMode::RowIndexed] {
        let layout = builder.layout(&trace, mode);
        println!(
            "{mode}: {} lanes, {} arrows, {}x{} canvas, total {}",
            layout.lanes().len(),
            layout.arrows().len(),
            layout.size().width(),
            layout.size().height(),
            layout.axis().total_label()
        );
    }

    let layout = builder.layout(&trace, TimelineMode::RowIndexed);
    println!("\n{}", builder.render_svg(&layout)?);

    Ok(())
}
