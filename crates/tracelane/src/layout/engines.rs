//! Timeline engines.
//!
//! A timeline engine decides the vertical position of every arrow and the
//! ticks of the time axis. Horizontal placement is shared by all engines and
//! lives in [`crate::layout::LayoutEngine`].
//!
//! Two engines exist, selected by [`TimelineMode`]:
//!
//! - [`proportional::Engine`] maps elapsed time linearly onto `y`
//! - [`row_indexed::Engine`] gives every arrow its own evenly spaced row

pub mod proportional;
pub mod row_indexed;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{axis::AxisTick, settings::LayoutSettings};
use crate::structure::{SequenceArrow, TimeRange};

/// How arrows are spread along the vertical axis.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimelineMode {
    /// `y` proportional to the time since the trace start.
    #[default]
    Proportional,
    /// One row per arrow in hop order, ignoring timestamps.
    RowIndexed,
}

impl TimelineMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Proportional => "proportional",
            Self::RowIndexed => "row-indexed",
        }
    }
}

impl fmt::Display for TimelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimelineMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "proportional" => Ok(Self::Proportional),
            "row-indexed" | "row_indexed" | "rows" => Ok(Self::RowIndexed),
            other => Err(format!(
                "unknown timeline mode '{other}', expected 'proportional' or 'row-indexed'"
            )),
        }
    }
}

/// Vertical placement computed by a [`TimelineEngine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    /// The `y` coordinate of each arrow, in input order.
    pub rows: Vec<f32>,
    /// Height of the timeline area, below the lane headers.
    pub content_height: f32,
    /// Ticks of the time axis.
    pub ticks: Vec<AxisTick>,
}

/// Trait defining the interface for timeline engines
pub trait TimelineEngine {
    /// Places `arrows` along the vertical axis.
    ///
    /// The returned [`Timeline::rows`] has one entry per arrow, in the same
    /// order as `arrows`.
    fn place(&self, arrows: &[&SequenceArrow], range: TimeRange) -> Timeline;
}

/// Returns the engine for `mode`, configured from `settings`.
pub fn engine_for(mode: TimelineMode, settings: &LayoutSettings) -> Box<dyn TimelineEngine> {
    match mode {
        TimelineMode::Proportional => Box::new(proportional::Engine::from_settings(settings)),
        TimelineMode::RowIndexed => Box::new(row_indexed::Engine::from_settings(settings)),
    }
}
