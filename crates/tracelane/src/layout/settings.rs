//! Geometry settings shared by the layout engines.

use serde::Deserialize;

/// Rendering constants used to turn lanes and arrows into coordinates.
///
/// All lengths are in diagram units (pixels for SVG output). Every field has
/// a default, so a partial `[layout]` configuration section is valid.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Space left of the first lane, and right of the last one.
    left_margin: f32,
    /// Horizontal distance between the left edges of adjacent lanes.
    column_width: f32,
    /// Width of a lane header box.
    lane_width: f32,
    /// Vertical offset of time zero, below the lane headers.
    header_height: f32,
    /// Pixels per millisecond in time-proportional mode.
    time_scale: f32,
    /// Lower bound for the height of the timeline area.
    minimum_height: f32,
    /// Distance between rows in row-indexed mode.
    row_spacing: f32,
    /// Tick spacing in time-proportional mode.
    tick_interval_ms: u64,
    /// Character budget for description labels, ellipsis included.
    label_max_chars: usize,
    /// Vertical distance between the duration and description labels.
    label_line_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            left_margin: 40.0,
            column_width: 180.0,
            lane_width: 140.0,
            header_height: 60.0,
            time_scale: 0.2,
            minimum_height: 200.0,
            row_spacing: 48.0,
            tick_interval_ms: 500,
            label_max_chars: 32,
            label_line_height: 14.0,
        }
    }
}

impl LayoutSettings {
    /// Set the left margin
    pub fn with_left_margin(mut self, margin: f32) -> Self {
        self.left_margin = margin;
        self
    }

    /// Set the column width
    pub fn with_column_width(mut self, width: f32) -> Self {
        self.column_width = width;
        self
    }

    /// Set the lane width
    pub fn with_lane_width(mut self, width: f32) -> Self {
        self.lane_width = width;
        self
    }

    /// Set the header height
    pub fn with_header_height(mut self, height: f32) -> Self {
        self.header_height = height;
        self
    }

    /// Set the pixels-per-millisecond scale
    pub fn with_time_scale(mut self, scale: f32) -> Self {
        self.time_scale = scale;
        self
    }

    /// Set the minimum timeline height
    pub fn with_minimum_height(mut self, height: f32) -> Self {
        self.minimum_height = height;
        self
    }

    /// Set the row spacing for row-indexed layouts
    pub fn with_row_spacing(mut self, spacing: f32) -> Self {
        self.row_spacing = spacing;
        self
    }

    /// Set the tick interval for time-proportional layouts
    pub fn with_tick_interval_ms(mut self, interval: u64) -> Self {
        self.tick_interval_ms = interval;
        self
    }

    /// Set the description label character budget
    pub fn with_label_max_chars(mut self, max_chars: usize) -> Self {
        self.label_max_chars = max_chars;
        self
    }

    /// Set the annotation line height
    pub fn with_label_line_height(mut self, height: f32) -> Self {
        self.label_line_height = height;
        self
    }

    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    pub fn column_width(&self) -> f32 {
        self.column_width
    }

    pub fn lane_width(&self) -> f32 {
        self.lane_width
    }

    pub fn header_height(&self) -> f32 {
        self.header_height
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn minimum_height(&self) -> f32 {
        self.minimum_height
    }

    pub fn row_spacing(&self) -> f32 {
        self.row_spacing
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn label_max_chars(&self) -> usize {
        self.label_max_chars
    }

    pub fn label_line_height(&self) -> f32 {
        self.label_line_height
    }
}
