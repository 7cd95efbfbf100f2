//! Format projections and output sinks for gap reports.
//!
//! Every renderer is a pure function from the immutable [`GapReport`] to a
//! string, selected by [`OutputFormat`]; nothing here feeds back into the
//! gap computation. Sinks deliver the rendered text to stdout, a file, or
//! the clipboard.

mod csv;
mod json;
mod sink;
mod table;
mod text;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use numgap_core::GapReport;

pub use sink::{deliver, default_output_filename, OutputTarget, SinkConfig};

/// How to present a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Brace-delimited group blocks (default).
    #[default]
    Summary,
    /// The same content without braces.
    Inline,
    /// One row per missing item or per compact segment.
    Csv,
    /// Structured JSON with every missing item listed.
    Json,
    /// Plain ASCII table, one row per segment.
    AsciiTable,
    /// UTF-8 box-drawing table, one row per group.
    RichTable,
}

/// Whether to list every missing item or just `first..last` per segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeStyle {
    /// List each missing item.
    All,
    /// Show `first..last (count)` per segment.
    #[default]
    Compact,
}

/// How a missing item is labelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowMode {
    /// Reconstructed name from the group's template.
    #[default]
    Filename,
    /// Zero-padded number only.
    Padded,
    /// Bare number.
    Number,
    /// Last three padded digits.
    Significant,
}

/// Presentation options shared by all renderers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    /// Per-item vs compact segment display.
    pub range_style: RangeStyle,
    /// Blank line between segments (summary/inline only).
    pub range_spacing: bool,
    /// Missing-item label style.
    pub show: ShowMode,
    /// Append the leading/internal/trailing reason to each label.
    pub explain: bool,
    /// Append the global `STATS =>` trailer.
    pub stats: bool,
    /// Include groups with nothing missing.
    pub show_empty: bool,
    /// Per-group debug line with found/missing counts.
    pub verbose: bool,
}

/// Rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to a file sink failed.
    #[error("Could not write {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render a report in the requested format.
pub fn render(
    report: &GapReport,
    format: OutputFormat,
    opts: &RenderOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Summary => Ok(text::summary(report, opts)),
        OutputFormat::Inline => Ok(text::inline(report, opts)),
        OutputFormat::Csv => csv::render(report, opts),
        OutputFormat::Json => json::render(report, opts),
        OutputFormat::AsciiTable => Ok(table::ascii(report, opts)),
        OutputFormat::RichTable => Ok(table::rich(report, opts)),
    }
}
