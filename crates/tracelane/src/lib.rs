//! Tracelane - sequence diagram layout for message traces
//!
//! This library turns the recorded hops of an integration message into a
//! swimlane sequence diagram: one lane per component, one arrow per hop, laid
//! out along a time-proportional or row-indexed vertical axis. It fetches
//! traces through [`ingest`], computes the diagram structure and geometry, and
//! exports the result as SVG or JSON.

pub mod config;
pub mod export;
pub mod layout;
pub mod structure;

mod error;

pub use tracelane_core::{color, component, geometry, identifier, status, trace};
pub use tracelane_ingest as ingest;

pub use error::TracelaneError;

use chrono::Utc;
use log::{debug, info, trace};

use config::AppConfig;
use export::{Exporter, json::JsonExporter, svg::SvgRenderer};
use ingest::TraceSource;
use layout::{DiagramLayout, LayoutEngine, TimelineMode};
use structure::LayoutResult;
use trace::{Timestamp, Trace};

/// Builder for fetching, laying out and rendering message traces.
///
/// Every call is independent: nothing is cached between requests, and the
/// same trace, mode and `now` always produce the same layout.
///
/// # Examples
///
/// ```rust,no_run
/// use tracelane::{TraceLayoutBuilder, config::AppConfig, ingest::DirectoryStore};
///
/// let builder = TraceLayoutBuilder::new(AppConfig::default());
/// let store = DirectoryStore::new("traces");
///
/// // Fetch and normalize
/// let trace = builder.fetch(&store, "session-42")
///     .expect("Failed to fetch");
///
/// // Lay out in the configured default mode
/// let layout = builder.layout(&trace, builder.default_mode());
///
/// // Render
/// let svg = builder.render_svg(&layout)
///     .expect("Failed to render");
///
/// // Or use default config
/// let builder = TraceLayoutBuilder::default();
/// ```
#[derive(Debug, Clone, Default)]
pub struct TraceLayoutBuilder {
    config: AppConfig,
}

impl TraceLayoutBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Layout, style and status vocabulary settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Timeline mode from the configuration.
    pub fn default_mode(&self) -> TimelineMode {
        self.config.layout.mode
    }

    /// Fetch a trace by session or message identifier and normalize its
    /// statuses with the configured vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`TracelaneError::Ingest`] when the trace is unknown, the store
    /// is unavailable, or the stored document is malformed.
    pub fn fetch(&self, source: &impl TraceSource, id: &str) -> Result<Trace, TracelaneError> {
        let trace = ingest::fetch_trace(source, id, &self.config.status)?;
        trace!(trace:?; "Normalized trace");
        Ok(trace)
    }

    /// Lanes, arrows and time range for `trace`.
    ///
    /// `now` anchors the time range of a trace with no drawable hops.
    pub fn structure(&self, trace: &Trace, now: Timestamp) -> LayoutResult {
        LayoutResult::from_trace(trace, now)
    }

    /// Compute the diagram layout for `trace` in `mode`.
    ///
    /// Empty traces are anchored at the current time.
    pub fn layout(&self, trace: &Trace, mode: TimelineMode) -> DiagramLayout {
        self.layout_at(trace, mode, Utc::now())
    }

    /// Like [`Self::layout`], with an explicit "now" for empty traces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use tracelane::{TraceLayoutBuilder, layout::TimelineMode, trace::Trace};
    ///
    /// let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    /// let trace = Trace::new("empty", None, vec![]);
    ///
    /// let layout = TraceLayoutBuilder::default().layout_at(&trace, TimelineMode::Proportional, now);
    /// assert_eq!(layout.axis().start(), now);
    /// assert_eq!(layout.axis().total_duration_ms(), 1);
    /// ```
    pub fn layout_at(&self, trace: &Trace, mode: TimelineMode, now: Timestamp) -> DiagramLayout {
        info!(session_id = trace.session_id(), mode:% = mode; "Building diagram structure");
        let result = self.structure(trace, now);
        debug!("Structure built successfully");

        let layout = LayoutEngine::new(self.config.layout.settings.clone()).layout(result, mode);
        info!(
            lanes_count = layout.lanes().len(),
            arrows_count = layout.arrows().len(),
            dropped_hops = layout.result().dropped_hop_count();
            "Layout calculated"
        );
        layout
    }

    /// Render a computed layout to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TracelaneError::Config`] for invalid style colors, or
    /// [`TracelaneError::Export`] if rendering fails.
    pub fn render_svg(&self, layout: &DiagramLayout) -> Result<String, TracelaneError> {
        let style = &self.config.style;
        let palette = style.palette().map_err(TracelaneError::Config)?;
        let background = style.background_color().map_err(TracelaneError::Config)?;

        let svg = SvgRenderer::new(palette)
            .with_background(background)
            .export(layout)?;
        info!("SVG rendered successfully");
        Ok(svg)
    }

    /// Serialize a computed layout to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TracelaneError::Export`] if serialization fails.
    pub fn to_json(&self, layout: &DiagramLayout) -> Result<String, TracelaneError> {
        Ok(JsonExporter::new().with_pretty(true).export(layout)?)
    }

    /// Serialize only the structure (lanes, arrows, time range, dropped hops).
    ///
    /// # Errors
    ///
    /// Returns [`TracelaneError::Export`] if serialization fails.
    pub fn result_to_json(&self, result: &LayoutResult) -> Result<String, TracelaneError> {
        Ok(JsonExporter::new().with_pretty(true).to_string(result)?)
    }
}
