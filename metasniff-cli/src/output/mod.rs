//! Output formatting module

use anyhow::Result;
use metasniff_engine::{Confidence, SniffResult, Source};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for a single input
    fn format_record(&mut self, record: &DetectionRecord) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path: encoding (source)` line per input
    #[default]
    Text,
    /// JSON array of detection records
    Json,
}

/// Detection outcome for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionRecord {
    /// Input path, or `-` for standard input
    pub path: String,
    /// Canonical encoding name
    pub encoding: String,
    /// Which tier decided the encoding
    pub source: Source,
    /// Whether the decision is final for a decoder
    pub confidence: Confidence,
}

impl DetectionRecord {
    /// Build a record from a sniff result
    pub fn new(path: impl Into<String>, result: &SniffResult) -> Self {
        Self {
            path: path.into(),
            encoding: result.encoding().to_string(),
            source: result.source,
            confidence: result.confidence(),
        }
    }
}

/// Create the formatter for `format` on top of `writer`
pub fn create_formatter<'a, W: Write + Send + Sync + 'a>(
    format: OutputFormat,
    pretty_json: bool,
    writer: W,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
