//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod detect;
pub mod generate_config;
pub mod labels;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Detect the encoding of HTML files or standard input
    Detect(detect::DetectArgs),

    /// Resolve charset labels to canonical encoding names
    Labels(labels::LabelsArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Detect(args) => args.execute(),
            Commands::Labels(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
