//! Export of computed layouts.
//!
//! # Pipeline Position
//!
//! ```text
//! Trace store
//!     ↓ fetch + normalize (tracelane-ingest)
//! Trace
//!     ↓ structure
//! LayoutResult
//!     ↓ layout
//! DiagramLayout
//!     ↓ export (this module)
//! SVG / JSON text
//! ```
//!
//! # Available Backends
//!
//! - [`svg`]: SVG reference rendering via [`svg::SvgRenderer`]
//! - [`json`]: JSON serialization via [`json::JsonExporter`]
//!
//! Both render in memory and return a `String`.

pub mod json;
pub mod svg;

use std::fmt;

use crate::layout::DiagramLayout;

/// Abstraction for layout export backends.
pub trait Exporter {
    /// Converts a positioned diagram into the backend's text format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialize`] if serialization fails.
    fn export(&self, layout: &DiagramLayout) -> Result<String, Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`TracelaneError::Export`] at the crate boundary.
///
/// [`TracelaneError::Export`]: crate::TracelaneError::Export
#[derive(Debug)]
pub enum Error {
    /// JSON serialization failed.
    Serialize(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
