//! Byte-level building blocks for HTML encoding sniffing
//!
//! This crate holds the pure algorithms that look at raw document bytes:
//!
//! - [`bom`]: byte-order mark detection on the first bytes of a stream
//! - [`attributes`]: a small tokenizer for the attributes of one tag, plus
//!   extraction of `charset=` from a `content` value
//! - [`prescan`]: the bounded, resumable scan for `<meta>` declarations
//!
//! Nothing here allocates, performs I/O or knows about concrete encodings.
//! Labels come out raw; mapping them to encodings is the engine's job.
//!
//! # Example
//!
//! ```rust
//! use metasniff_core::{detect_bom, scan_for_meta, BomMatch, DEFAULT_PRESCAN_LIMIT};
//!
//! let html = br#"<!DOCTYPE html><meta charset="iso-8859-1">"#;
//! assert_eq!(detect_bom(html), BomMatch::Absent);
//!
//! let label = scan_for_meta(html, DEFAULT_PRESCAN_LIMIT).unwrap();
//! assert_eq!(label.as_bytes(), b"iso-8859-1");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod attributes;
pub mod bom;
pub mod prescan;

pub use attributes::{charset_from_content, Attribute, AttributeStep, AttributeTokenizer};
pub use bom::{detect_bom, Bom, BomMatch, MAX_BOM_LEN};
pub use prescan::{scan, scan_for_meta, RawLabel, ScanStep, DEFAULT_PRESCAN_LIMIT};
