//! Labels command implementation

use anyhow::Result;
use clap::Args;
use metasniff_engine::{AliasResolver, Charset};
use std::io::{self, Write};

/// Arguments for the labels command
#[derive(Debug, Args)]
pub struct LabelsArgs {
    /// Charset labels to resolve, e.g. `latin1` or `Shift_JIS`
    #[arg(value_name = "LABEL", required_unless_present = "all")]
    pub labels: Vec<String>,

    /// List every supported encoding instead
    #[arg(short, long, conflicts_with = "labels")]
    pub all: bool,
}

impl LabelsArgs {
    /// Execute the labels command
    pub fn execute(&self) -> Result<()> {
        self.run(&mut io::stdout().lock())
    }

    /// Write one line per label (or per encoding with `--all`)
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.all {
            for charset in Charset::ALL {
                writeln!(out, "{charset}")?;
            }
            return Ok(());
        }

        let resolver = AliasResolver::shared();
        for label in &self.labels {
            match resolver.resolve_str(label) {
                Some(charset) => writeln!(out, "{label}: {charset}")?,
                None => writeln!(out, "{label}: unsupported")?,
            }
        }
        out.flush()?;
        Ok(())
    }
}
