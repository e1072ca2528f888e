//! Reading inputs into the sniffer

use super::InputSource;
use anyhow::{Context, Result};
use metasniff_engine::{sniff_with, AliasResolver, Input, SniffResult, Sniffer, SnifferConfig};
use std::fs::File;
use std::io::{self, ErrorKind, Read};
use std::path::Path;
use std::sync::Arc;

/// Default chunk size for streaming mode
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// How bytes reach the sniffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Read the prescan window in one go and sniff it
    Prefix,
    /// Feed fixed-size chunks to a [`Sniffer`] until it resolves
    Stream {
        /// Bytes per read
        chunk_size: usize,
    },
}

/// Sniffs files and standard input
pub struct FileReader {
    config: SnifferConfig,
    mode: ReadMode,
    resolver: Arc<AliasResolver>,
}

impl FileReader {
    /// Create a reader sharing the process-wide alias cache
    pub fn new(config: SnifferConfig, mode: ReadMode) -> Self {
        Self {
            config,
            mode,
            resolver: AliasResolver::shared(),
        }
    }

    /// Sniff one input
    pub fn sniff(&self, source: &InputSource) -> Result<SniffResult> {
        match source {
            InputSource::Stdin => self
                .sniff_stdin()
                .context("Failed to read standard input"),
            InputSource::File(path) => self
                .sniff_file(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }

    fn sniff_file(&self, path: &Path) -> Result<SniffResult> {
        match self.mode {
            ReadMode::Prefix => self.sniff_prefix(Input::from_file(path)),
            ReadMode::Stream { chunk_size } => Ok(self.stream(File::open(path)?, chunk_size)?),
        }
    }

    fn sniff_stdin(&self) -> Result<SniffResult> {
        match self.mode {
            ReadMode::Prefix => self.sniff_prefix(Input::from_reader(io::stdin())),
            ReadMode::Stream { chunk_size } => Ok(self.stream(io::stdin().lock(), chunk_size)?),
        }
    }

    fn sniff_prefix(&self, input: Input) -> Result<SniffResult> {
        let prefix = input.read_prefix(self.config.prescan_limit())?;
        Ok(sniff_with(&prefix, &self.config, &self.resolver))
    }

    /// Stops reading as soon as the sniffer resolves
    fn stream<R: Read>(&self, mut reader: R, chunk_size: usize) -> io::Result<SniffResult> {
        let mut sniffer = Sniffer::with_resolver(self.config, Arc::clone(&self.resolver));
        let mut chunk = vec![0u8; chunk_size];
        let mut total = 0usize;

        while !sniffer.is_resolved() {
            let n = match reader.read(&mut chunk) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            total += n;
            sniffer.write(&chunk[..n]);
        }

        log::trace!("streamed {total} bytes, state {:?}", sniffer.state());
        Ok(sniffer.finish())
    }
}
