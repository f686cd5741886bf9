//! Time-proportional timeline.
//!
//! `y = header_height + offset_ms * time_scale`, where `offset_ms` is the
//! time from the trace start to the arrow's creation.

use log::debug;

use super::{Timeline, TimelineEngine};
use crate::{
    layout::{axis::AxisTick, settings::LayoutSettings},
    structure::{SequenceArrow, TimeRange},
};

/// Upper bound on the number of ticks; the interval widens to stay below it.
pub const MAX_TICKS: u64 = 200;

pub struct Engine {
    header_height: f32,
    time_scale: f32,
    minimum_height: f32,
    tick_interval_ms: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self::from_settings(&LayoutSettings::default())
    }

    pub fn from_settings(settings: &LayoutSettings) -> Self {
        Self {
            header_height: settings.header_height(),
            time_scale: settings.time_scale(),
            minimum_height: settings.minimum_height(),
            tick_interval_ms: settings.tick_interval_ms(),
        }
    }

    pub fn set_tick_interval_ms(&mut self, interval: u64) -> &mut Self {
        self.tick_interval_ms = interval;
        self
    }

    fn y_at(&self, offset_ms: i64) -> f32 {
        self.header_height + offset_ms as f32 * self.time_scale
    }

    /// The configured interval, widened so at most [`MAX_TICKS`] ticks fit.
    fn effective_interval(&self, total_ms: u64) -> u64 {
        if self.tick_interval_ms == 0 {
            return total_ms.max(1);
        }
        let factor = (total_ms / self.tick_interval_ms).div_ceil(MAX_TICKS).max(1);
        self.tick_interval_ms * factor
    }

    fn ticks(&self, range: TimeRange) -> Vec<AxisTick> {
        let total_ms = u64::try_from(range.duration_ms()).unwrap_or(0);
        let interval = self.effective_interval(total_ms);

        let mut offsets: Vec<u64> = (0..)
            .map(|step| step * interval)
            .take_while(|offset| *offset <= total_ms)
            .collect();
        if offsets.last() != Some(&total_ms) {
            offsets.push(total_ms);
        }

        let last = offsets.len() - 1;
        offsets
            .into_iter()
            .enumerate()
            .map(|(idx, offset)| {
                let offset = offset as i64;
                let tick = AxisTick::relative(self.y_at(offset), offset);
                if idx == 0 {
                    tick.with_absolute(range.start())
                } else if idx == last {
                    tick.with_absolute(range.end())
                } else {
                    tick
                }
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelineEngine for Engine {
    fn place(&self, arrows: &[&SequenceArrow], range: TimeRange) -> Timeline {
        let offsets: Vec<i64> = arrows
            .iter()
            .map(|arrow| range.offset_ms(arrow.timestamp()))
            .collect();
        let rows = offsets.iter().map(|offset| self.y_at(*offset)).collect();

        // Arrows created after the last processed instant lie past `end`.
        let furthest = offsets
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
            .max(range.duration_ms());
        let content_height = (furthest as f32 * self.time_scale).max(self.minimum_height);

        let ticks = self.ticks(range);
        debug!(
            arrows_count = arrows.len(),
            ticks_count = ticks.len(),
            content_height;
            "Placed proportional timeline"
        );

        Timeline {
            rows,
            content_height,
            ticks,
        }
    }
}
