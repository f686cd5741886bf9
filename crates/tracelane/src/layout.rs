//! Coordinate assignment.
//!
//! [`LayoutEngine`] turns a [`LayoutResult`] into a [`DiagramLayout`]: lane
//! rectangles, arrow curves, annotations and a time axis, all in diagram
//! units. Horizontal placement is fixed by column index. Vertical placement
//! is delegated to the [`TimelineEngine`] selected by [`TimelineMode`].
//!
//! Layout is a pure function of its inputs; the same result, mode and
//! settings always produce the same geometry.

mod annotation;
mod axis;
mod curve;
pub mod engines;
mod settings;

pub use annotation::{Annotation, ELLIPSIS, truncate_label};
pub use axis::{AxisTick, TimeAxis, format_duration, format_offset};
pub use curve::{CONTROL_OFFSET_RATIO, CubicCurve};
pub use engines::{Timeline, TimelineEngine, TimelineMode};
pub use settings::LayoutSettings;

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use tracelane_core::{
    geometry::{Point, Size},
    identifier::ComponentId,
    status::CanonicalStatus,
};

use crate::structure::{LayoutResult, SequenceArrow, SequenceLane};

/// Horizontal placement of one lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneGeometry {
    component_id: ComponentId,
    display_name: String,
    x: f32,
    width: f32,
    center_x: f32,
}

impl LaneGeometry {
    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Left edge.
    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Where arrows attach and the lifeline runs.
    pub fn center_x(&self) -> f32 {
        self.center_x
    }
}

/// A fully positioned arrow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowGeometry {
    hop_id: String,
    source_component_id: ComponentId,
    target_component_id: ComponentId,
    status: CanonicalStatus,
    y: f32,
    curve: CubicCurve,
    path: String,
    label_position: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_label: Option<Annotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description_label: Option<Annotation>,
}

impl ArrowGeometry {
    pub fn hop_id(&self) -> &str {
        &self.hop_id
    }

    pub fn source_component_id(&self) -> &ComponentId {
        &self.source_component_id
    }

    pub fn target_component_id(&self) -> &ComponentId {
        &self.target_component_id
    }

    pub fn status(&self) -> CanonicalStatus {
        self.status
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn curve(&self) -> &CubicCurve {
        &self.curve
    }

    /// SVG path data for [`Self::curve`].
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Midpoint of the curve.
    pub fn label_position(&self) -> Point {
        self.label_position
    }

    /// Elapsed processing time; absent for zero durations.
    pub fn duration_label(&self) -> Option<&Annotation> {
        self.duration_label.as_ref()
    }

    /// Truncated message label, one line below the duration.
    pub fn description_label(&self) -> Option<&Annotation> {
        self.description_label.as_ref()
    }
}

/// Everything a renderer needs to draw a trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramLayout {
    mode: TimelineMode,
    result: LayoutResult,
    lanes: Vec<LaneGeometry>,
    arrows: Vec<ArrowGeometry>,
    axis: TimeAxis,
    header_height: f32,
    size: Size,
    skipped_arrows: usize,
}

impl DiagramLayout {
    pub fn mode(&self) -> TimelineMode {
        self.mode
    }

    /// The structure this layout was computed from.
    pub fn result(&self) -> &LayoutResult {
        &self.result
    }

    /// Lanes in column order.
    pub fn lanes(&self) -> &[LaneGeometry] {
        &self.lanes
    }

    /// Arrows in hop order.
    pub fn arrows(&self) -> &[ArrowGeometry] {
        &self.arrows
    }

    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Height of the lane header band.
    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    /// Total canvas size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Arrows not drawn because an endpoint had no lane geometry.
    pub fn skipped_arrows(&self) -> usize {
        self.skipped_arrows
    }

    pub fn lane(&self, component_id: &ComponentId) -> Option<&LaneGeometry> {
        self.lanes
            .iter()
            .find(|lane| lane.component_id() == component_id)
    }
}

/// Assigns coordinates to a [`LayoutResult`].
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tracelane::{
///     layout::{LayoutEngine, LayoutSettings, TimelineMode},
///     structure::LayoutResult,
/// };
/// use tracelane_core::trace::Trace;
///
/// let trace = Trace::new("empty", Some(vec![]), vec![]);
/// let result = LayoutResult::from_trace(&trace, Utc::now());
///
/// let engine = LayoutEngine::new(LayoutSettings::default());
/// let layout = engine.layout(result, TimelineMode::RowIndexed);
/// assert!(layout.arrows().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    settings: LayoutSettings,
}

impl LayoutEngine {
    pub fn new(settings: LayoutSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    /// Computes the geometry of `result` in `mode`.
    ///
    /// Arrows whose endpoints have no lane geometry are skipped with a
    /// warning and counted in [`DiagramLayout::skipped_arrows`].
    pub fn layout(&self, result: LayoutResult, mode: TimelineMode) -> DiagramLayout {
        debug!(session_id = result.session_id(), mode:% = mode; "Calculating layout");

        let lanes: Vec<_> = result
            .lanes()
            .iter()
            .map(|lane| self.lane_geometry(lane))
            .collect();

        let centers: HashMap<&ComponentId, f32> = lanes
            .iter()
            .map(|lane| (lane.component_id(), lane.center_x()))
            .collect();

        let mut drawable: Vec<(&SequenceArrow, f32, f32)> = Vec::new();
        let mut skipped_arrows = 0;
        for arrow in result.arrows() {
            match (
                centers.get(arrow.source_component_id()),
                centers.get(arrow.target_component_id()),
            ) {
                (Some(source_x), Some(target_x)) => drawable.push((arrow, *source_x, *target_x)),
                _ => {
                    warn!(hop_id = arrow.hop_id(); "Skipping arrow without lane geometry");
                    skipped_arrows += 1;
                }
            }
        }

        let placed: Vec<&SequenceArrow> = drawable.iter().map(|(arrow, ..)| *arrow).collect();
        let timeline = engines::engine_for(mode, &self.settings).place(&placed, result.time_range());

        let arrows: Vec<_> = drawable
            .iter()
            .zip(&timeline.rows)
            .map(|((arrow, source_x, target_x), y)| {
                self.arrow_geometry(arrow, *source_x, *target_x, *y)
            })
            .collect();

        let axis = TimeAxis::new(result.time_range(), timeline.ticks);
        let size = Size::new(
            self.content_width(lanes.len()),
            self.settings.header_height() + timeline.content_height,
        );

        debug!(
            lanes_count = lanes.len(),
            arrows_count = arrows.len(),
            skipped_arrows,
            width = size.width(),
            height = size.height();
            "Layout calculated"
        );

        DiagramLayout {
            mode,
            result,
            lanes,
            arrows,
            axis,
            header_height: self.settings.header_height(),
            size,
            skipped_arrows,
        }
    }

    fn lane_geometry(&self, lane: &SequenceLane) -> LaneGeometry {
        let x = self.settings.left_margin()
            + lane.column_index() as f32 * self.settings.column_width();
        let width = self.settings.lane_width();
        LaneGeometry {
            component_id: lane.component_id().clone(),
            display_name: lane.display_name().to_string(),
            x,
            width,
            center_x: x + width / 2.0,
        }
    }

    fn arrow_geometry(
        &self,
        arrow: &SequenceArrow,
        source_x: f32,
        target_x: f32,
        y: f32,
    ) -> ArrowGeometry {
        let curve = CubicCurve::horizontal(source_x, target_x, y);
        let label_position = curve.midpoint();

        let duration_label = (arrow.duration_ms() > 0).then(|| {
            Annotation::new(
                format_duration(arrow.duration_ms() as i64),
                label_position,
            )
        });
        let description_label = arrow.label().map(|label| {
            Annotation::new(
                truncate_label(label, self.settings.label_max_chars()),
                label_position.with_y(label_position.y() + self.settings.label_line_height()),
            )
        });

        ArrowGeometry {
            hop_id: arrow.hop_id().to_string(),
            source_component_id: arrow.source_component_id().clone(),
            target_component_id: arrow.target_component_id().clone(),
            status: arrow.status(),
            y,
            path: curve.to_path_data(),
            curve,
            label_position,
            duration_label,
            description_label,
        }
    }

    /// Margins on both sides plus the span of all lanes.
    fn content_width(&self, lanes_count: usize) -> f32 {
        let margins = 2.0 * self.settings.left_margin();
        match lanes_count {
            0 => margins,
            count => {
                margins
                    + (count - 1) as f32 * self.settings.column_width()
                    + self.settings.lane_width()
            }
        }
    }
}
