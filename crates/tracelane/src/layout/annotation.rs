//! Text placed next to arrows.

use serde::Serialize;

use tracelane_core::geometry::Point;

/// Marker appended to truncated labels.
pub const ELLIPSIS: char = '…';

/// A positioned text label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    text: String,
    position: Point,
}

impl Annotation {
    pub fn new(text: impl Into<String>, position: Point) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Center of the text baseline.
    pub fn position(&self) -> Point {
        self.position
    }
}

/// Shortens `text` to at most `max_chars` characters.
///
/// Text that fits is returned unchanged. Otherwise it is cut and
/// [`ELLIPSIS`] takes the last character slot.
///
/// ```
/// # use tracelane::layout::truncate_label;
/// assert_eq!(truncate_label("lab results", 32), "lab results");
/// assert_eq!(truncate_label("lab results", 6), "lab r…");
/// ```
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_chars - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}
