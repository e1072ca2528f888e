//! Basic tests for metasniff-core

use metasniff_core::*;

#[test]
fn test_bom_then_meta() {
    let html = b"\xEF\xBB\xBF<meta charset=\"iso-8859-1\">";
    assert_eq!(detect_bom(html), BomMatch::Found(Bom::Utf8));

    // The prescan itself does not care about the mark
    let label = scan_for_meta(html, DEFAULT_PRESCAN_LIMIT).unwrap();
    assert_eq!(label.as_bytes(), b"iso-8859-1");
}

#[test]
fn test_realistic_head() {
    let html = br#"<!DOCTYPE html>
<html lang="en">
<head>
  <!-- generated -->
  <title>Example &amp; test</title>
  <link rel="stylesheet" href="style.css">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta http-equiv="Content-Type" content="text/html; charset=Shift_JIS">
</head>"#;

    let label = scan_for_meta(html, DEFAULT_PRESCAN_LIMIT).unwrap();
    assert_eq!(label.as_bytes(), b"Shift_JIS");
}

#[test]
fn test_no_declaration() {
    let html = b"<html><body>plain</body></html>";
    assert!(scan_for_meta(html, DEFAULT_PRESCAN_LIMIT).is_none());
    assert!(scan_for_meta(b"", DEFAULT_PRESCAN_LIMIT).is_none());
}

#[test]
fn test_byte_at_a_time_resume() {
    let html = br#"<html><head><script src="a.js"></script><meta charset=utf-8></head>"#;

    let mut resume_at = 0;
    let mut result = None;
    for end in 1..=html.len() {
        match scan(&html[..end], resume_at) {
            ScanStep::Found { label, end: tag_end } => {
                result = Some((label.as_bytes().to_vec(), tag_end));
                break;
            }
            ScanStep::Pending { resume_at: next } => {
                assert!(next >= resume_at, "cursor must never move backwards");
                resume_at = next;
            }
        }
    }

    let (label, tag_end) = result.expect("declaration should be found");
    assert_eq!(label, b"utf-8");
    let expected = br#"<html><head><script src="a.js"></script><meta charset=utf-8>"#;
    assert_eq!(&html[..tag_end], &expected[..]);
}

#[test]
fn test_attribute_tokenizer_public_api() {
    let tag = br#"<img src="a.png" alt='x'>"#;
    let mut tokenizer = AttributeTokenizer::new(tag, 4);

    match tokenizer.next_step() {
        AttributeStep::Attribute(attr) => {
            assert!(attr.is_named(b"SRC"));
            assert_eq!(attr.value, b"a.png");
        }
        other => panic!("expected attribute, got {other:?}"),
    }
    assert!(matches!(tokenizer.next_step(), AttributeStep::Attribute(_)));
    assert_eq!(tokenizer.next_step(), AttributeStep::TagEnd);
    assert_eq!(tokenizer.position(), tag.len());
}

#[test]
fn test_charset_from_content_public_api() {
    assert_eq!(
        charset_from_content(b"text/html; charset=windows-1251"),
        Some(&b"windows-1251"[..])
    );
    assert_eq!(charset_from_content(b"text/plain"), None);
}
