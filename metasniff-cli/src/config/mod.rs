//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use metasniff_engine::{SnifferConfig, DEFAULT_PRESCAN_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Sniffing configuration
    #[serde(default)]
    pub sniffing: SniffingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Sniffing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct SniffingConfig {
    /// Number of leading bytes searched for a `<meta>` declaration
    pub prescan_limit: usize,

    /// Label of the encoding used when nothing is declared
    pub default_encoding: String,
}

impl Default for SniffingConfig {
    fn default() -> Self {
        Self {
            prescan_limit: DEFAULT_PRESCAN_LIMIT,
            default_encoding: "windows-1252".to_string(),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Validated engine configuration for the `[sniffing]` table
    pub fn sniffer_config(&self) -> Result<SnifferConfig> {
        SnifferConfig::builder()
            .prescan_limit(self.sniffing.prescan_limit)
            .default_label(self.sniffing.default_encoding.as_str())
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }
}
