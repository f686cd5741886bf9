//! Row-indexed timeline.
//!
//! Arrow `i` sits at `y = header_height + (i + 1) * row_spacing`. Timestamps
//! only feed the axis labels.

use log::debug;

use super::{Timeline, TimelineEngine};
use crate::{
    layout::{axis::AxisTick, settings::LayoutSettings},
    structure::{SequenceArrow, TimeRange},
};

pub struct Engine {
    header_height: f32,
    row_spacing: f32,
    minimum_height: f32,
}

impl Engine {
    pub fn new() -> Self {
        Self::from_settings(&LayoutSettings::default())
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self {
            header_height: settings.header_height(),
            row_spacing: settings.row_spacing(),
            minimum_height: settings.minimum_height(),
        }
    }

    pub fn set_row_spacing(&mut self, spacing: f32) -> &mut Self {
        self.row_spacing = spacing;
        self
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineEngine for Engine {
    fn place(&self, arrows: &[&SequenceArrow], range: TimeRange) -> Timeline {
        let rows: Vec<f32> = (1..=arrows.len())
            .map(|row| self.header_height + row as f32 * self.row_spacing)
            .collect();

        let content_height =
            ((arrows.len() + 1) as f32 * self.row_spacing).max(self.minimum_height);

        let ticks = arrows
            .iter()
            .zip(&rows)
            .map(|(arrow, y)| AxisTick::relative(*y, range.offset_ms(arrow.timestamp())))
            .collect();

        debug!(
            arrows_count = arrows.len(),
            content_height;
            "Placed row-indexed timeline"
        );

        Timeline {
            rows,
            content_height,
            ticks,
        }
    }
}
