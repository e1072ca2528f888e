//! metasniff command-line entry point

use anyhow::Result;
use clap::Parser;
use metasniff_cli::commands::Commands;

/// Detect the character encoding of HTML documents
#[derive(Debug, Parser)]
#[command(name = "metasniff", version, about, arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    Cli::parse().command.execute()
}
