//! Character encoding sniffing for HTML byte streams
//!
//! Decides which encoding a decoder should use for an HTML document when no
//! transport-level charset is known. The answer comes from, in order:
//!
//! 1. a byte-order mark at the start of the stream,
//! 2. the first `<meta>` charset declaration in the leading bytes
//!    (1024 by default), resolved through the WHATWG label table,
//! 3. the configured default, `windows-1252`.
//!
//! [`get_encoding`] and [`sniff`] work on a complete buffer. [`Sniffer`]
//! gives the same answer for input arriving in chunks.
//!
//! # Example
//!
//! ```rust
//! use metasniff_engine::{get_encoding, Sniffer, Source};
//!
//! let html = br#"<!DOCTYPE html><meta charset="iso-8859-1"><p>caf\xE9</p>"#;
//! assert_eq!(get_encoding(html), "windows-1252");
//!
//! let mut sniffer = Sniffer::new();
//! for chunk in html.chunks(5) {
//!     sniffer.write(chunk);
//! }
//! assert_eq!(sniffer.encoding(), "windows-1252");
//! assert_eq!(sniffer.result().unwrap().source, Source::Meta);
//! ```

#![warn(missing_docs)]

pub mod alias;
pub mod charset;
pub mod config;
pub mod detect;
pub mod error;
pub mod input;
pub mod result;
pub mod sniffer;

// Re-export key types
pub use alias::AliasResolver;
pub use charset::Charset;
pub use config::{SnifferConfig, SnifferConfigBuilder, MIN_PRESCAN_LIMIT};
pub use detect::{get_encoding, sniff, sniff_reader, sniff_with};
pub use error::{EngineError, Result};
pub use input::Input;
pub use result::{Confidence, SniffResult, Source};
pub use sniffer::{SniffState, Sniffer};

// Re-export from core for convenience
pub use metasniff_core::{Bom, DEFAULT_PRESCAN_LIMIT};
