//! Color handling for Tracelane diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and [`StatusPalette`], which assigns a color to each
//! [`CanonicalStatus`].

use std::{fmt, str::FromStr};

use color::DynamicColor;

use crate::status::CanonicalStatus;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Color {
    /// Create a new `Color` from a CSS color string such as "#ff0000",
    /// "rgb(255, 0, 0)" or "red".
    ///
    /// # Examples
    ///
    /// ```
    /// use tracelane_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// The result only contains alphanumerics and underscores and starts with
    /// a letter.
    ///
    /// ```
    /// use tracelane_core::color::Color;
    ///
    /// let id = Color::new("#ff8000").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
            format!("c_{sanitized}")
        } else {
            sanitized
        }
    }

    /// Returns the alpha component, between 0.0 and 1.0.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        Self::from(color.to_string())
    }
}

/// Stroke colors for each [`CanonicalStatus`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusPalette {
    success: Color,
    error: Color,
    pending: Color,
}

impl StatusPalette {
    pub fn new(success: Color, error: Color, pending: Color) -> Self {
        Self {
            success,
            error,
            pending,
        }
    }

    /// Returns the color used for arrows with the given status.
    pub fn color_for(&self, status: CanonicalStatus) -> Color {
        match status {
            CanonicalStatus::Success => self.success,
            CanonicalStatus::Error => self.error,
            CanonicalStatus::Pending => self.pending,
        }
    }
}

impl Default for StatusPalette {
    fn default() -> Self {
        Self {
            success: Color::new("#2e7d32").expect("valid hex color"),
            error: Color::new("#c62828").expect("valid hex color"),
            pending: Color::new("#9e9e9e").expect("valid hex color"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex() {
        assert!(Color::new("red").is_ok());
        assert!(Color::new("#00ff00").is_ok());
        assert!(Color::new("rgb(0, 0, 255)").is_ok());
    }

    #[test]
    fn test_invalid_color_message() {
        let err = Color::new("nope").unwrap_err();
        assert!(err.contains("nope"));
    }

    #[test]
    fn test_id_safe_string_from_rgb() {
        let id = Color::new("rgb(10, 20, 30)").unwrap().to_id_safe_string();
        assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(id.starts_with(|c: char| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_default_is_opaque() {
        assert_eq!(Color::default().alpha(), 1.0);
    }

    #[test]
    fn test_palette_distinguishes_statuses() {
        let palette = StatusPalette::default();
        let success = palette.color_for(CanonicalStatus::Success);
        let error = palette.color_for(CanonicalStatus::Error);
        let pending = palette.color_for(CanonicalStatus::Pending);
        assert_ne!(success, error);
        assert_ne!(error, pending);
        assert_ne!(success, pending);
    }
}
