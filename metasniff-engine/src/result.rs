//! What a sniff produces

use crate::charset::Charset;
use std::fmt;

/// Which tier of the sniffing algorithm decided the encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Source {
    /// A byte-order mark at the start of the stream
    Bom,
    /// A `<meta>` declaration inside the prescan window
    Meta,
    /// Nothing found; the configured fallback
    Default,
}

impl Source {
    /// Lowercase name used in reports
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Bom => "bom",
            Source::Meta => "meta",
            Source::Default => "default",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far a decoder may trust the answer.
///
/// <https://html.spec.whatwg.org/#concept-encoding-confidence>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Confidence {
    /// The encoding cannot be wrong
    Certain,
    /// A later, better signal may override it
    Tentative,
}

/// Final answer of a sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SniffResult {
    /// Detected encoding
    pub charset: Charset,
    /// Tier that produced it
    pub source: Source,
}

impl SniffResult {
    /// Create a result
    pub fn new(charset: Charset, source: Source) -> Self {
        Self { charset, source }
    }

    /// Canonical lowercase encoding name
    pub fn encoding(&self) -> &'static str {
        self.charset.name()
    }

    /// Only a byte-order mark is certain
    pub fn confidence(&self) -> Confidence {
        match self.source {
            Source::Bom => Confidence::Certain,
            Source::Meta | Source::Default => Confidence::Tentative,
        }
    }
}
