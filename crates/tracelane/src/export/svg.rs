//! SVG reference renderer.
//!
//! Draws a [`DiagramLayout`] as a single SVG document:
//!
//! - lane header boxes with dashed lifelines below them
//! - arrows as status-colored cubic paths ending in an arrowhead marker
//! - duration and description annotations at each arrow's midpoint
//! - the time axis along the left margin

use std::collections::BTreeMap;

use log::debug;
use svg::{Document, node::element as svg_element};

use tracelane_core::color::{Color, StatusPalette};

use super::{Error, Exporter};
use crate::layout::{ArrowGeometry, AxisTick, DiagramLayout, LaneGeometry};

const FONT_FAMILY: &str = "sans-serif";
const LANE_FONT_SIZE: f32 = 13.0;
const LABEL_FONT_SIZE: f32 = 11.0;
const AXIS_FONT_SIZE: f32 = 10.0;
const HEADER_PADDING: f32 = 10.0;
const AXIS_TICK_LENGTH: f32 = 6.0;
const LABEL_LIFT: f32 = 4.0;

/// Renders layouts to SVG text.
#[derive(Debug, Clone, Default)]
pub struct SvgRenderer {
    palette: StatusPalette,
    background: Option<Color>,
    lane_color: Color,
    lifeline_color: Color,
}

impl SvgRenderer {
    pub fn new(palette: StatusPalette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    /// Fill the canvas with `color`; transparent when `None`.
    pub fn with_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    pub fn palette(&self) -> &StatusPalette {
        &self.palette
    }

    /// Builds the SVG document for `layout`.
    pub fn render_document(&self, layout: &DiagramLayout) -> Document {
        let size = layout.size();
        let mut doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", size.width(), size.height()),
            )
            .set("width", size.width())
            .set("height", size.height());

        if let Some(color) = self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", &color)
                    .set("fill-opacity", color.alpha()),
            );
        }

        doc = doc.add(self.marker_definitions(layout));

        let mut lanes_group = svg_element::Group::new().set("class", "lanes");
        for lane in layout.lanes() {
            lanes_group = lanes_group.add(self.render_lane(lane, layout));
        }

        let mut arrows_group = svg_element::Group::new().set("class", "arrows");
        for arrow in layout.arrows() {
            arrows_group = arrows_group.add(self.render_arrow(arrow));
        }

        debug!(
            lanes_count = layout.lanes().len(),
            arrows_count = layout.arrows().len();
            "SVG document rendered"
        );

        doc.add(self.render_axis(layout))
            .add(lanes_group)
            .add(arrows_group)
    }

    /// One arrowhead marker per status color in use.
    fn marker_definitions(&self, layout: &DiagramLayout) -> svg_element::Definitions {
        let colors: BTreeMap<String, Color> = layout
            .arrows()
            .iter()
            .map(|arrow| {
                let color = self.palette.color_for(arrow.status());
                (Self::marker_id(color), color)
            })
            .collect();

        colors
            .into_iter()
            .fold(svg_element::Definitions::new(), |defs, (id, color)| {
                defs.add(Self::create_arrowhead(&id, color))
            })
    }

    fn render_lane(&self, lane: &LaneGeometry, layout: &DiagramLayout) -> svg_element::Group {
        let header_height = layout.header_height();
        let box_height = (header_height - 2.0 * HEADER_PADDING).max(0.0);

        let header = svg_element::Rectangle::new()
            .set("x", lane.x())
            .set("y", HEADER_PADDING)
            .set("width", lane.width())
            .set("height", box_height)
            .set("rx", 4.0)
            .set("fill", "none")
            .set("stroke", &self.lane_color);

        let title = Self::text(
            lane.display_name(),
            lane.center_x(),
            header_height / 2.0,
            LANE_FONT_SIZE,
        )
        .set("dominant-baseline", "central")
        .set("fill", &self.lane_color);

        let lifeline = svg_element::Line::new()
            .set("x1", lane.center_x())
            .set("y1", header_height - HEADER_PADDING)
            .set("x2", lane.center_x())
            .set("y2", layout.size().height())
            .set("stroke", &self.lifeline_color)
            .set("stroke-opacity", 0.5)
            .set("stroke-dasharray", "4");

        svg_element::Group::new()
            .set("data-component", lane.component_id().as_str())
            .add(lifeline)
            .add(header)
            .add(title)
    }

    fn render_arrow(&self, arrow: &ArrowGeometry) -> svg_element::Group {
        let color = self.palette.color_for(arrow.status());

        let path = svg_element::Path::new()
            .set("d", arrow.path())
            .set("fill", "none")
            .set("stroke", &color)
            .set("stroke-opacity", color.alpha())
            .set("stroke-width", 1.5)
            .set("marker-end", format!("url(#{})", Self::marker_id(color)));

        let mut group = svg_element::Group::new()
            .set("data-hop", arrow.hop_id())
            .set("data-status", arrow.status().as_str())
            .add(path);

        if let Some(duration) = arrow.duration_label() {
            let position = duration.position();
            group = group.add(
                Self::text(
                    duration.text(),
                    position.x(),
                    position.y() - LABEL_LIFT,
                    LABEL_FONT_SIZE,
                )
                .set("fill", &color),
            );
        }
        if let Some(description) = arrow.description_label() {
            let position = description.position();
            group = group.add(Self::text(
                description.text(),
                position.x(),
                position.y(),
                LABEL_FONT_SIZE,
            ));
        }

        group
    }

    fn render_axis(&self, layout: &DiagramLayout) -> svg_element::Group {
        let axis = layout.axis();
        let mut group = svg_element::Group::new().set("class", "time-axis");

        for tick in axis.ticks() {
            group = group.add(self.render_tick(tick));
        }

        let total = Self::text(
            &format!("total {}", axis.total_label()),
            AXIS_TICK_LENGTH,
            layout.size().height() - HEADER_PADDING,
            AXIS_FONT_SIZE,
        )
        .set("text-anchor", "start");

        group.add(total)
    }

    fn render_tick(&self, tick: &AxisTick) -> svg_element::Group {
        let mark = svg_element::Line::new()
            .set("x1", 0)
            .set("y1", tick.y())
            .set("x2", AXIS_TICK_LENGTH)
            .set("y2", tick.y())
            .set("stroke", &self.lifeline_color);

        let label = Self::text(tick.label(), AXIS_TICK_LENGTH, tick.y() - 2.0, AXIS_FONT_SIZE)
            .set("text-anchor", "start");

        let mut group = svg_element::Group::new().add(mark).add(label);
        if let Some(instant) = tick.absolute() {
            group = group.add(
                Self::text(
                    &instant.format("%H:%M:%S%.3f").to_string(),
                    AXIS_TICK_LENGTH,
                    tick.y() + AXIS_FONT_SIZE,
                    AXIS_FONT_SIZE,
                )
                .set("text-anchor", "start")
                .set("fill-opacity", 0.7),
            );
        }
        group
    }

    fn text(content: &str, x: f32, y: f32, font_size: f32) -> svg_element::Text {
        svg_element::Text::new(content)
            .set("x", x)
            .set("y", y)
            .set("text-anchor", "middle")
            .set("font-family", FONT_FAMILY)
            .set("font-size", font_size)
    }

    fn marker_id(color: Color) -> String {
        format!("arrow-right-{}", color.to_id_safe_string())
    }

    fn create_arrowhead(id: &str, color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", id)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", &color)
                    .set("fill-opacity", color.alpha()),
            )
    }
}

impl Exporter for SvgRenderer {
    fn export(&self, layout: &DiagramLayout) -> Result<String, Error> {
        let svg = self.render_document(layout).to_string();
        debug!(bytes = svg.len(); "SVG document serialized");
        Ok(svg)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

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

    fn layout(mode: TimelineMode) -> DiagramLayout {
        let at = |ms| Utc.timestamp_millis_opt(ms).unwrap();
        let hops = vec![
            Hop::new(
                TraceHop::new("h1", at(0))
                    .with_source("S1")
                    .with_target("P1")
                    .with_latency_ms(100)
                    .with_processed_at(at(100))
                    .with_description("ADT to FHIR"),
                CanonicalStatus::Success,
            ),
            Hop::new(
                TraceHop::new("h2", at(150))
                    .with_source("P1")
                    .with_target("O1")
                    .with_processed_at(at(150)),
                CanonicalStatus::Error,
            ),
        ];
        let components = vec![
            DeclaredComponent::new("S1", ComponentKind::Service).with_display_name("Intake"),
            DeclaredComponent::new("P1", ComponentKind::Process),
            DeclaredComponent::new("O1", ComponentKind::Operation),
        ];
        let result = LayoutResult::from_trace(&Trace::new("s", Some(components), hops), at(0));
        LayoutEngine::default().layout(result, mode)
    }

    #[test]
    fn test_renders_lanes_arrows_and_labels() {
        let svg = SvgRenderer::default()
            .export(&layout(TimelineMode::Proportional))
            .unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Intake"));
        assert!(svg.contains("ADT to FHIR"));
        assert!(svg.contains("100ms"));
        assert!(svg.contains("total 150ms"));
        assert_eq!(svg.matches("data-hop=").count(), 2);
        assert_eq!(svg.matches("data-component=").count(), 3);
    }

    #[test]
    fn test_markers_follow_status_colors() {
        let palette = StatusPalette::default();
        let svg = SvgRenderer::new(palette)
            .export(&layout(TimelineMode::RowIndexed))
            .unwrap();

        let success = SvgRenderer::marker_id(palette.color_for(CanonicalStatus::Success));
        let error = SvgRenderer::marker_id(palette.color_for(CanonicalStatus::Error));
        let pending = SvgRenderer::marker_id(palette.color_for(CanonicalStatus::Pending));

        assert!(svg.contains(&format!("id=\"{success}\"")));
        assert!(svg.contains(&format!("id=\"{error}\"")));
        assert!(!svg.contains(&format!("id=\"{pending}\"")));
        assert!(svg.contains("data-status=\"error\""));
    }

    #[test]
    fn test_background_is_optional() {
        let layout = layout(TimelineMode::Proportional);
        let plain = SvgRenderer::default().export(&layout).unwrap();
        let filled = SvgRenderer::default()
            .with_background(Some(Color::new("white").unwrap()))
            .export(&layout)
            .unwrap();

        assert!(filled.len() > plain.len());
    }
}
