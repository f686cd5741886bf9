//! Time axis ticks and duration formatting.

use serde::Serialize;

use tracelane_core::trace::Timestamp;

use crate::structure::TimeRange;

/// A labelled mark on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTick {
    y: f32,
    offset_ms: i64,
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    absolute: Option<Timestamp>,
}

impl AxisTick {
    /// A tick showing a relative offset.
    pub fn relative(y: f32, offset_ms: i64) -> Self {
        Self {
            y,
            offset_ms,
            label: format_offset(offset_ms),
            absolute: None,
        }
    }

    /// Attaches the absolute instant this tick stands for.
    pub fn with_absolute(mut self, instant: Timestamp) -> Self {
        self.absolute = Some(instant);
        self
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn offset_ms(&self) -> i64 {
        self.offset_ms
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The absolute instant, set on the first and last ticks of a
    /// time-proportional axis.
    pub fn absolute(&self) -> Option<Timestamp> {
        self.absolute
    }
}

/// The vertical axis of a diagram.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeAxis {
    start: Timestamp,
    end: Timestamp,
    total_duration_ms: i64,
    total_label: String,
    ticks: Vec<AxisTick>,
}

impl TimeAxis {
    pub fn new(range: TimeRange, ticks: Vec<AxisTick>) -> Self {
        Self {
            start: range.start(),
            end: range.end(),
            total_duration_ms: range.duration_ms(),
            total_label: format_duration(range.duration_ms()),
            ticks,
        }
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn total_duration_ms(&self) -> i64 {
        self.total_duration_ms
    }

    /// Human readable total duration, e.g. `"1.250s"`.
    pub fn total_label(&self) -> &str {
        &self.total_label
    }

    pub fn ticks(&self) -> &[AxisTick] {
        &self.ticks
    }
}

/// Formats a millisecond count for display.
///
/// ```
/// # use tracelane::layout::format_duration;
/// assert_eq!(format_duration(150), "150ms");
/// assert_eq!(format_duration(1_250), "1.250s");
/// assert_eq!(format_duration(125_300), "2m 5.300s");
/// ```
pub fn format_duration(ms: i64) -> String {
    let ms = ms.max(0);
    if ms < 1_000 {
        format!("{ms}ms")
    } else if ms < 60_000 {
        format!("{}.{:03}s", ms / 1_000, ms % 1_000)
    } else {
        let minutes = ms / 60_000;
        let rest = ms % 60_000;
        format!("{minutes}m {}.{:03}s", rest / 1_000, rest % 1_000)
    }
}

/// Formats an offset from the trace start, e.g. `"+150ms"`.
pub fn format_offset(ms: i64) -> String {
    format!("+{}", format_duration(ms))
}
