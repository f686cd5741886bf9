//! Tracelane CLI library
//!
//! This module contains the core CLI logic for the Tracelane trace viewer.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};
pub use error_adapter::ErrorAdapter;

use std::fs;

use log::{info, warn};

use tracelane::{TraceLayoutBuilder, TracelaneError, ingest::DirectoryStore};

/// Run the Tracelane CLI application
///
/// This function fetches the requested trace from the store, lays it out
/// and writes the rendered diagram to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `TracelaneError` for:
/// - Configuration loading errors
/// - Unknown, unreadable or malformed traces
/// - Rendering errors
/// - File I/O errors
pub fn run(args: &Args) -> Result<(), TracelaneError> {
    let output_path = args.output_path();
    info!(
        trace_id = args.trace_id,
        store = args.store,
        output_path;
        "Processing trace"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let builder = TraceLayoutBuilder::new(app_config);

    let store = DirectoryStore::new(&args.store);
    let trace = builder.fetch(&store, &args.trace_id)?;

    let mode = args.mode.unwrap_or_else(|| builder.default_mode());
    let layout = builder.layout(&trace, mode);

    let dropped = layout.result().dropped_hop_count();
    if dropped > 0 {
        warn!(
            session_id = trace.session_id(),
            dropped_hops = dropped;
            "Some hops reference unknown components and were not drawn"
        );
    }

    let rendered = match args.format {
        OutputFormat::Svg => builder.render_svg(&layout)?,
        OutputFormat::Json => builder.to_json(&layout)?,
    };

    fs::write(&output_path, rendered)?;

    info!(output_file = output_path, format:? = args.format; "Trace exported successfully");

    Ok(())
}
