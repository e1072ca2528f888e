//! One-shot sniffing over a complete buffer
//!
//! Priority is strict: byte-order mark, then the first `<meta>` declaration
//! inside the prescan window, then the configured default.

use crate::alias::AliasResolver;
use crate::charset::Charset;
use crate::config::SnifferConfig;
use crate::error::Result;
use crate::input::read_limited;
use crate::result::{SniffResult, Source};
use metasniff_core::{detect_bom, scan_for_meta, Bom, BomMatch, RawLabel};
use std::io::Read;

/// Sniff `bytes` with the default configuration and return the canonical
/// encoding name, e.g. `"utf-8"` or `"windows-1252"`.
///
/// Accepts any input, including an empty slice, and never fails.
///
/// ```rust
/// use metasniff_engine::get_encoding;
///
/// assert_eq!(get_encoding(b"\xEF\xBB\xBF<html></html>"), "utf-8");
/// assert_eq!(get_encoding(br#"<meta charset="iso-8859-1">"#), "windows-1252");
/// assert_eq!(get_encoding(b""), "windows-1252");
/// ```
pub fn get_encoding(bytes: &[u8]) -> &'static str {
    sniff(bytes).encoding()
}

/// Sniff `bytes` with the default configuration and the shared resolver.
pub fn sniff(bytes: &[u8]) -> SniffResult {
    sniff_with(bytes, &SnifferConfig::default(), &AliasResolver::shared())
}

/// Sniff `bytes` with an explicit configuration and resolver.
pub fn sniff_with(bytes: &[u8], config: &SnifferConfig, resolver: &AliasResolver) -> SniffResult {
    let result = match detect_bom(bytes) {
        BomMatch::Found(bom) => bom_result(bom),
        // A stream shorter than any mark has none
        BomMatch::Absent | BomMatch::Pending => {
            match scan_for_meta(bytes, config.prescan_limit()) {
                Some(label) => meta_result(label, config, resolver),
                None => default_result(config),
            }
        }
    };

    log::debug!(
        "sniffed {} bytes: {} ({})",
        bytes.len(),
        result.charset,
        result.source
    );
    result
}

/// Sniff whatever `reader` yields, reading no more than the bytes the
/// algorithm can look at.
pub fn sniff_reader<R: Read>(
    reader: R,
    config: &SnifferConfig,
    resolver: &AliasResolver,
) -> Result<SniffResult> {
    let prefix = read_limited(reader, config.prescan_limit())?;
    Ok(sniff_with(&prefix, config, resolver))
}

pub(crate) fn bom_result(bom: Bom) -> SniffResult {
    let charset = match bom {
        Bom::Utf8 => Charset::Utf8,
        Bom::Utf16Le => Charset::Utf16Le,
        Bom::Utf16Be => Charset::Utf16Be,
    };
    SniffResult::new(charset, Source::Bom)
}

/// The first declaring tag fixes the outcome: an unsupported label falls
/// straight through to the default instead of resuming the scan.
pub(crate) fn meta_result(
    label: RawLabel<'_>,
    config: &SnifferConfig,
    resolver: &AliasResolver,
) -> SniffResult {
    match resolver.resolve(label.as_bytes()) {
        Some(charset) => SniffResult::new(declared_charset(charset), Source::Meta),
        None => {
            log::trace!(
                "unsupported meta charset {:?}, using default",
                String::from_utf8_lossy(label.as_bytes())
            );
            default_result(config)
        }
    }
}

pub(crate) fn default_result(config: &SnifferConfig) -> SniffResult {
    SniffResult::new(config.default_charset(), Source::Default)
}

/// A document whose markup could be read as ASCII is not UTF-16, and
/// x-user-defined is only meaningful for XHR.
fn declared_charset(charset: Charset) -> Charset {
    match charset {
        Charset::Utf16Le | Charset::Utf16Be => Charset::Utf8,
        Charset::XUserDefined => Charset::Windows1252,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_beats_meta() {
        let html = b"\xEF\xBB\xBF<meta charset=\"iso-8859-1\">";
        let result = sniff(html);
        assert_eq!(result, SniffResult::new(Charset::Utf8, Source::Bom));
    }

    #[test]
    fn test_utf16_boms() {
        assert_eq!(get_encoding(b"\xFF\xFE<\x00h\x00"), "utf-16le");
        assert_eq!(get_encoding(b"\xFE\xFF\x00<\x00h"), "utf-16be");
    }

    #[test]
    fn test_meta_beats_default() {
        let html = br#"<!DOCTYPE html><meta charset="iso-8859-1"><p>caf\xE9</p>"#;
        assert_eq!(sniff(html), SniffResult::new(Charset::Windows1252, Source::Meta));
    }

    #[test]
    fn test_pragma_declaration() {
        let html = br#"<meta http-equiv="content-type" content="text/html; charset=utf-8">"#;
        assert_eq!(get_encoding(html), "utf-8");
    }

    #[test]
    fn test_default_when_nothing_declared() {
        assert_eq!(
            sniff(b"<html><body>plain</body></html>"),
            SniffResult::new(Charset::Windows1252, Source::Default)
        );
        assert_eq!(get_encoding(b""), "windows-1252");
        assert_eq!(get_encoding(b"\xEF"), "windows-1252");
        assert_eq!(get_encoding(b"\xEF\xBB"), "windows-1252");
    }

    #[test]
    fn test_declared_utf16_means_utf8() {
        assert_eq!(get_encoding(br#"<meta charset="utf-16le">"#), "utf-8");
        assert_eq!(get_encoding(br#"<meta charset="UTF-16">"#), "utf-8");
        assert_eq!(get_encoding(br#"<meta charset="x-user-defined">"#), "windows-1252");
    }

    #[test]
    fn test_unsupported_label_falls_to_default() {
        let html = br#"<meta charset="iso-2022-kr"><meta charset="utf-8">"#;
        assert_eq!(sniff(html).source, Source::Default);

        let html = br#"<meta charset="klingon"><meta charset="utf-8">"#;
        assert_eq!(get_encoding(html), "windows-1252");
    }

    #[test]
    fn test_declaration_past_limit_is_ignored() {
        let mut html = b"<html>".to_vec();
        html.resize(1100, b' ');
        html.extend_from_slice(br#"<meta charset="utf-8">"#);
        assert_eq!(sniff(&html).source, Source::Default);

        let config = SnifferConfig::builder().prescan_limit(2048).build().unwrap();
        let resolver = AliasResolver::new();
        assert_eq!(sniff_with(&html, &config, &resolver).charset, Charset::Utf8);
    }

    #[test]
    fn test_custom_default() {
        let config = SnifferConfig::builder()
            .default_charset(Charset::Utf8)
            .build()
            .unwrap();
        let resolver = AliasResolver::new();
        assert_eq!(
            sniff_with(b"<p>hi</p>", &config, &resolver),
            SniffResult::new(Charset::Utf8, Source::Default)
        );
    }

    #[test]
    fn test_pragma_without_equals_sign() {
        let html = br#"<meta http-equiv="content-type" content="text/html; charset utf-8">"#;
        assert_eq!(get_encoding(html), "utf-8");
        assert_eq!(sniff(html).source, Source::Meta);
    }

    #[test]
    fn test_sniff_reader_borrowed_reader() {
        let html = br#"<p>x</p><meta charset="gb18030">"#;
        let mut slice: &[u8] = html;
        let result = sniff_reader(&mut slice, &SnifferConfig::default(), &AliasResolver::new());
        assert_eq!(result.unwrap().charset, Charset::Gb18030);
    }

    #[test]
    fn test_sniff_reader_reads_prefix_only() {
        let mut html = br#"<meta charset="koi8-r">"#.to_vec();
        html.extend(std::iter::repeat(b'x').take(10_000));
        let config = SnifferConfig::default();
        let result = sniff_reader(std::io::Cursor::new(html), &config, &AliasResolver::new());
        assert_eq!(result.unwrap().charset, Charset::Koi8R);
    }
}
