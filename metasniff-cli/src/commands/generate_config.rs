//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use metasniff_engine::DEFAULT_PRESCAN_LIMIT;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration template written to {}", path.display());
                eprintln!("Use it with: metasniff detect -c {} -i <FILE>", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(template.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}

/// Template configuration content, populated with the stock defaults
fn generate_template() -> String {
    format!(
        r#"# metasniff configuration

[sniffing]
# Leading bytes searched for a <meta charset> declaration.
# Browsers use {DEFAULT_PRESCAN_LIMIT}; values below 3 are rejected.
prescan_limit = {DEFAULT_PRESCAN_LIMIT}

# Encoding reported when there is neither a byte-order mark nor a
# declaration. Any WHATWG label is accepted, e.g. "utf-8" or "shift_jis".
default_encoding = "windows-1252"

[output]
# "text" or "json"
format = "text"

# Indent JSON output
pretty_json = true
"#
    )
}
