//! Streaming sniffer
//!
//! Reproduces the one-shot result for input that arrives in pieces. The
//! sniffer keeps at most the prescan window of leading bytes and resumes
//! the `<meta>` scan at the start of the construct the previous pass could
//! not finish. Work is bounded by the window size, not by the length of the
//! stream. A construct that stays open is rescanned from its start on every
//! write, so byte-at-a-time input costs O(window²) in the worst case.

use crate::alias::AliasResolver;
use crate::charset::Charset;
use crate::config::SnifferConfig;
use crate::detect::{bom_result, default_result, meta_result};
use crate::result::SniffResult;
use metasniff_core::{detect_bom, scan, BomMatch, ScanStep};
use std::io;
use std::sync::Arc;

/// Where a [`Sniffer`] is in the algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SniffState {
    /// Nothing written yet
    Init,
    /// Too few bytes to rule a byte-order mark in or out
    AwaitingBom,
    /// No mark; looking for a `<meta>` declaration
    ScanningMeta,
    /// Terminal: decided by a byte-order mark
    BomDecided,
    /// Terminal: decided by a declaration, the window filling up, or
    /// [`Sniffer::finish`]
    Resolved,
}

impl SniffState {
    /// Whether no further input can change the answer
    pub fn is_terminal(self) -> bool {
        matches!(self, SniffState::BomDecided | SniffState::Resolved)
    }
}

/// Incremental encoding sniffer for one byte stream.
///
/// Feed bytes with [`write`](Sniffer::write) and read
/// [`encoding`](Sniffer::encoding) at any time. Until the sniffer resolves,
/// `encoding` reports the configured default charset (`windows-1252`
/// unless configured otherwise). Once resolved the answer never changes and
/// further writes are ignored.
///
/// ```rust
/// use metasniff_engine::Sniffer;
///
/// let mut sniffer = Sniffer::new();
/// for byte in b"\xEF\xBB\xBF<html></html>" {
///     sniffer.write(&[*byte]);
/// }
/// assert_eq!(sniffer.encoding(), "utf-8");
/// ```
#[derive(Debug)]
pub struct Sniffer {
    config: SnifferConfig,
    resolver: Arc<AliasResolver>,
    buffer: Vec<u8>,
    cursor: usize,
    state: SniffState,
    result: Option<SniffResult>,
}

impl Default for Sniffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sniffer {
    /// Create an unresolved sniffer with the default configuration
    pub fn new() -> Self {
        Self::with_config(SnifferConfig::default())
    }

    /// Create a sniffer with a custom configuration and the shared resolver
    pub fn with_config(config: SnifferConfig) -> Self {
        Self::with_resolver(config, AliasResolver::shared())
    }

    /// Create a sniffer that resolves labels through `resolver`
    pub fn with_resolver(config: SnifferConfig, resolver: Arc<AliasResolver>) -> Self {
        Self {
            config,
            resolver,
            buffer: Vec::with_capacity(config.prescan_limit().min(64 * 1024)),
            cursor: 0,
            state: SniffState::Init,
            result: None,
        }
    }

    /// Feed the next chunk of the stream.
    ///
    /// Bytes past the prescan window are dropped; after resolution the call
    /// does nothing.
    pub fn write(&mut self, chunk: &[u8]) {
        if self.state.is_terminal() {
            return;
        }

        let room = self.config.prescan_limit() - self.buffer.len();
        self.buffer.extend_from_slice(&chunk[..chunk.len().min(room)]);

        if self.state == SniffState::Init {
            self.state = SniffState::AwaitingBom;
        }
        self.advance(false);
    }

    /// Declare end of stream and return the final answer.
    ///
    /// Resolves an undecided sniffer exactly as the one-shot
    /// [`sniff`](crate::sniff) would on the bytes seen so far.
    pub fn finish(&mut self) -> SniffResult {
        if !self.state.is_terminal() {
            if self.state == SniffState::Init {
                self.state = SniffState::AwaitingBom;
            }
            self.advance(true);
        }
        self.result.unwrap_or_else(|| default_result(&self.config))
    }

    /// Canonical name of the best-known encoding
    pub fn encoding(&self) -> &'static str {
        self.charset().name()
    }

    /// Best-known charset: the decided one, or the configured default while
    /// unresolved
    pub fn charset(&self) -> Charset {
        self.result
            .map_or(self.config.default_charset(), |result| result.charset)
    }

    /// Final result, once resolved
    pub fn result(&self) -> Option<SniffResult> {
        self.result
    }

    /// Whether the answer is final
    pub fn is_resolved(&self) -> bool {
        self.state.is_terminal()
    }

    /// Current state
    pub fn state(&self) -> SniffState {
        self.state
    }

    /// Leading bytes retained so far (never more than the prescan window)
    pub fn buffered(&self) -> &[u8] {
        &self.buffer
    }

    /// Configuration in use
    pub fn config(&self) -> &SnifferConfig {
        &self.config
    }

    fn advance(&mut self, at_end: bool) {
        let out_of_input = at_end || self.buffer.len() >= self.config.prescan_limit();

        if self.state == SniffState::AwaitingBom {
            match detect_bom(&self.buffer) {
                BomMatch::Found(bom) => return self.settle(SniffState::BomDecided, bom_result(bom)),
                BomMatch::Absent => self.state = SniffState::ScanningMeta,
                BomMatch::Pending if out_of_input => self.state = SniffState::ScanningMeta,
                BomMatch::Pending => return,
            }
        }

        if self.state != SniffState::ScanningMeta {
            return;
        }

        let decided = match scan(&self.buffer, self.cursor) {
            ScanStep::Found { label, .. } => Some(meta_result(label, &self.config, &self.resolver)),
            ScanStep::Pending { resume_at } => {
                log::trace!("prescan pending at byte {resume_at} of {}", self.buffer.len());
                self.cursor = resume_at;
                out_of_input.then(|| default_result(&self.config))
            }
        };

        if let Some(result) = decided {
            self.settle(SniffState::Resolved, result);
        }
    }

    fn settle(&mut self, state: SniffState, result: SniffResult) {
        log::debug!(
            "sniffer resolved after {} bytes: {} ({})",
            self.buffer.len(),
            result.charset,
            result.source
        );
        self.state = state;
        self.result = Some(result);
    }
}

/// Lets a sniffer sit at the end of `io::copy`. Every byte is accepted so
/// the copy never stalls, even after resolution.
impl io::Write for Sniffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Sniffer::write(self, buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
