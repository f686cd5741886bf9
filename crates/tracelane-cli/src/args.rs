//! Command-line argument definitions for the Tracelane CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the trace, the store to read it from,
//! the timeline mode, the output format and path, configuration file
//! selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use tracelane::layout::TimelineMode;

/// Output format of the rendered trace
#[derive(ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// SVG sequence diagram
    #[default]
    Svg,
    /// JSON layout for other renderers
    Json,
}

impl OutputFormat {
    /// File extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

/// Command-line arguments for the Tracelane trace viewer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Session or message identifier
    #[arg(help = "Session or message identifier of the trace")]
    pub trace_id: String,

    /// Directory of JSON trace documents
    #[arg(short, long, default_value = "traces")]
    pub store: String,

    /// Path to the output file [default: out.svg or out.json]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Svg)]
    pub format: OutputFormat,

    /// Timeline mode (proportional, row-indexed); overrides the configuration
    #[arg(short, long)]
    pub mode: Option<TimelineMode>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The output path, derived from the format when not given.
    pub fn output_path(&self) -> String {
        self.output
            .clone()
            .unwrap_or_else(|| format!("out.{}", self.format.extension()))
    }
}
