//! Detect command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::file_reader::DEFAULT_CHUNK_SIZE;
use crate::input::{resolve_patterns, FileReader, InputSource, ReadMode};
use crate::output::{create_formatter, DetectionRecord, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::PathBuf;

/// Arguments for the detect command
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Input files or patterns (supports glob); `-` reads standard input
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Feed the sniffer chunk by chunk instead of reading the window at once
    #[arg(long)]
    pub stream: bool,

    /// Bytes per read in streaming mode
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Number of leading bytes searched for a <meta> declaration [default: 1024]
    #[arg(long, value_name = "BYTES")]
    pub limit: Option<usize>,

    /// Encoding used when nothing is declared [default: windows-1252]
    #[arg(long = "default", value_name = "LABEL")]
    pub default_encoding: Option<String>,

    /// Sniff inputs in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;
        self.run(io::stdout())
    }

    /// Sniff every input and write the report to `writer`
    pub fn run<W: Write + Send + Sync>(&self, writer: W) -> Result<()> {
        log::info!("Starting encoding detection");
        log::debug!("Arguments: {:?}", self);

        let config = self.load_config()?;
        let reader = FileReader::new(config.sniffer_config()?, self.read_mode()?);
        let inputs = resolve_patterns(&self.input)?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(inputs.len() as u64);

        let sniff_one = |source: &InputSource| -> Result<DetectionRecord> {
            let name = source.display_name();
            let result = reader.sniff(source)?;
            log::debug!("{name}: {} ({})", result.charset, result.source);
            progress.file_completed(&name);
            Ok(DetectionRecord::new(name, &result))
        };

        let records = if self.parallel {
            inputs.par_iter().map(sniff_one).collect::<Result<Vec<_>>>()
        } else {
            inputs.iter().map(sniff_one).collect::<Result<Vec<_>>>()
        };
        progress.finish();
        let records = records?;

        let mut formatter =
            create_formatter(config.output.format, config.output.pretty_json, writer);
        for record in &records {
            formatter.format_record(record)?;
        }
        formatter.finish()?;

        log::info!("Sniffed {} inputs", records.len());
        Ok(())
    }

    /// Config file values overridden by command-line flags
    fn load_config(&self) -> Result<CliConfig> {
        let mut config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        if let Some(limit) = self.limit {
            config.sniffing.prescan_limit = limit;
        }
        if let Some(label) = &self.default_encoding {
            config.sniffing.default_encoding = label.clone();
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }

        Ok(config)
    }

    fn read_mode(&self) -> Result<ReadMode> {
        if !self.stream {
            return Ok(ReadMode::Prefix);
        }
        if self.chunk_size == 0 {
            let message = "chunk size must be at least 1 byte".to_string();
            return Err(CliError::ConfigError(message).into());
        }
        Ok(ReadMode::Stream {
            chunk_size: self.chunk_size,
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Already initialized when called more than once in a process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}
