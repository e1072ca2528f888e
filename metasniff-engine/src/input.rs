//! Input abstraction for sniffing
//!
//! Sniffing only ever looks at the leading bytes of a document, so inputs
//! are read up to a limit instead of to the end.

use crate::error::Result;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

/// Unified input abstraction
pub enum Input {
    /// File path to read from
    File(PathBuf),
    /// Reader stream (for stdin, network, etc.)
    Reader(Box<dyn Read + Send>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<Reader>").finish(),
        }
    }
}

impl Input {
    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + Send + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read at most `limit` leading bytes.
    ///
    /// Short reads are retried until `limit` bytes arrive or the source is
    /// exhausted.
    pub fn read_prefix(self, limit: usize) -> Result<Vec<u8>> {
        match self {
            Input::File(path) => read_limited(File::open(path)?, limit),
            Input::Reader(reader) => read_limited(reader, limit),
        }
    }
}

/// Read at most `limit` bytes from any reader
pub(crate) fn read_limited<R: Read>(reader: R, limit: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(limit.min(64 * 1024));
    reader.take(limit as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}
