use serde::Deserialize;

use tracelane_core::{
    color::{Color, StatusPalette},
    status::StatusVocabulary,
};

use crate::layout::{LayoutSettings, TimelineMode};

/// Application configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Layout configuration section
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Style configuration section
    #[serde(default)]
    pub style: StyleConfig,

    /// Status vocabulary section
    #[serde(default)]
    pub status: StatusVocabulary,
}

/// Layout configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Timeline mode used when the caller does not pick one
    #[serde(default)]
    pub mode: TimelineMode,

    /// Geometry constants
    #[serde(flatten)]
    pub settings: LayoutSettings,
}

/// Style configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Default background color for diagrams
    background_color: Option<String>,
    success_color: String,
    error_color: String,
    pending_color: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            success_color: "#2e7d32".to_string(),
            error_color: "#c62828".to_string(),
            pending_color: "#9e9e9e".to_string(),
        }
    }
}

impl StyleConfig {
    /// Get the background color from configuration
    /// Returns None if no background color is configured
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Arrow colors per status
    pub fn palette(&self) -> Result<StatusPalette, String> {
        let parse = |name: &str, value: &str| {
            Color::new(value).map_err(|err| format!("Invalid {name} color in config: {err}"))
        };
        Ok(StatusPalette::new(
            parse("success", &self.success_color)?,
            parse("error", &self.error_color)?,
            parse("pending", &self.pending_color)?,
        ))
    }
}
