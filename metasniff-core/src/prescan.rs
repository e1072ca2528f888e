//! Bounded prescan for `<meta>` charset declarations
//!
//! The scanner walks the leading bytes of a document looking for the first
//! `<meta>` tag that declares a charset, either through a `charset`
//! attribute or through `http-equiv="content-type"` with a `content` value
//! carrying `charset=`. Comments and the attributes of other tags are
//! consumed so that `<meta` text hidden inside them is not misread.
//!
//! Scanning is resumable. When the available bytes end inside a construct,
//! [`scan`] reports [`ScanStep::Pending`] with the offset where that
//! construct began; calling [`scan`] again from there once more bytes have
//! arrived gives the same answer as scanning the whole prefix from zero.

use crate::attributes::{charset_from_content, Attribute, AttributeStep, AttributeTokenizer};

/// Number of leading bytes inspected by default
pub const DEFAULT_PRESCAN_LIMIT: usize = 1024;

/// An unvalidated charset label lifted from markup.
///
/// It still has to go through an alias resolver before it means anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLabel<'a>(&'a [u8]);

impl<'a> RawLabel<'a> {
    /// Wrap raw bytes as a label
    pub fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }

    /// The label bytes exactly as they appeared
    pub fn as_bytes(&self) -> &'a [u8] {
        self.0
    }

    /// True when the label is empty or only ASCII whitespace
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(u8::is_ascii_whitespace)
    }
}

/// Outcome of one scanning pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStep<'a> {
    /// A meta tag declared `label`; `end` is the offset just past its `>`
    Found {
        /// Declared label
        label: RawLabel<'a>,
        /// Offset just past the declaring tag
        end: usize,
    },
    /// Bytes ran out before a declaration was found
    Pending {
        /// Where to resume once more bytes are available
        resume_at: usize,
    },
}

/// Scan the first `limit` bytes of a complete buffer.
///
/// Returns the label of the first `<meta>` tag that declares one. A tag cut
/// off by the limit or by the end of `bytes` does not count.
pub fn scan_for_meta(bytes: &[u8], limit: usize) -> Option<RawLabel<'_>> {
    let window = &bytes[..bytes.len().min(limit)];
    match scan(window, 0) {
        ScanStep::Found { label, .. } => Some(label),
        ScanStep::Pending { .. } => None,
    }
}

/// Scan `window` starting at `from`.
///
/// `from` must be `0` or a `resume_at` offset previously returned for a
/// prefix of the same stream.
pub fn scan(window: &[u8], from: usize) -> ScanStep<'_> {
    let mut pos = from;

    loop {
        let Some(offset) = window
            .get(pos..)
            .and_then(|rest| rest.iter().position(|&b| b == b'<'))
        else {
            return ScanStep::Pending {
                resume_at: window.len().max(from),
            };
        };
        pos += offset;

        let next = match classify(&window[pos..]) {
            Markup::NeedMore => None,
            Markup::Comment => find(&window[pos + 2..], b"-->").map(|i| pos + 2 + i + 3),
            Markup::Meta => match read_tag(window, pos + META.len()) {
                Some((declaration, end)) => {
                    if let Some(label) = declaration.label() {
                        return ScanStep::Found { label, end };
                    }
                    Some(end)
                }
                None => None,
            },
            Markup::Tag { name_at } => skip_tag(window, pos + name_at),
            Markup::Bogus => find(&window[pos + 2..], b">").map(|i| pos + 2 + i + 1),
            Markup::Text => Some(pos + 1),
        };

        match next {
            Some(next) => pos = next,
            None => return ScanStep::Pending { resume_at: pos },
        }
    }
}

const META: &[u8] = b"<meta";
const COMMENT_OPEN: &[u8] = b"<!--";

/// What a `<` introduces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Markup {
    NeedMore,
    Comment,
    Meta,
    Tag { name_at: usize },
    Bogus,
    Text,
}

fn classify(rest: &[u8]) -> Markup {
    if is_partial(rest, COMMENT_OPEN) || is_partial_ignore_case(rest, META) {
        return Markup::NeedMore;
    }
    if rest.starts_with(COMMENT_OPEN) {
        return Markup::Comment;
    }
    if rest.len() > META.len()
        && rest[..META.len()].eq_ignore_ascii_case(META)
        && (rest[META.len()].is_ascii_whitespace() || rest[META.len()] == b'/')
    {
        return Markup::Meta;
    }

    match rest.get(1..) {
        None | Some([]) => Markup::NeedMore,
        Some([b, ..]) if b.is_ascii_alphabetic() => Markup::Tag { name_at: 1 },
        Some([b'/']) => Markup::NeedMore,
        Some([b'/', b, ..]) if b.is_ascii_alphabetic() => Markup::Tag { name_at: 2 },
        Some([b'/' | b'!' | b'?', ..]) => Markup::Bogus,
        Some(_) => Markup::Text,
    }
}

/// `rest` is a strict prefix of `pattern`
fn is_partial(rest: &[u8], pattern: &[u8]) -> bool {
    rest.len() < pattern.len() && pattern.starts_with(rest)
}

fn is_partial_ignore_case(rest: &[u8], pattern: &[u8]) -> bool {
    rest.len() <= pattern.len() && pattern[..rest.len()].eq_ignore_ascii_case(rest)
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Skip a non-meta tag: its name, then all of its attributes.
fn skip_tag(window: &[u8], name_start: usize) -> Option<usize> {
    let name_len = window[name_start..]
        .iter()
        .position(|&b| b == b'>' || b.is_ascii_whitespace())?;
    read_tag(window, name_start + name_len).map(|(_, end)| end)
}

/// Consume attributes from `start` up to and including the closing `>`.
fn read_tag(window: &[u8], start: usize) -> Option<(MetaDeclaration<'_>, usize)> {
    let mut tokenizer = AttributeTokenizer::new(window, start);
    let mut declaration = MetaDeclaration::default();

    loop {
        match tokenizer.next_step() {
            AttributeStep::Attribute(attribute) => declaration.record(attribute),
            AttributeStep::TagEnd => return Some((declaration, tokenizer.position())),
            AttributeStep::Incomplete => return None,
        }
    }
}

/// Charset-relevant attributes of one tag. Only the first occurrence of
/// each name counts.
#[derive(Debug, Default)]
struct MetaDeclaration<'a> {
    charset: Option<&'a [u8]>,
    content: Option<&'a [u8]>,
    http_equiv: Option<&'a [u8]>,
}

impl<'a> MetaDeclaration<'a> {
    fn record(&mut self, attribute: Attribute<'a>) {
        let slot = if attribute.is_named(b"charset") {
            &mut self.charset
        } else if attribute.is_named(b"content") {
            &mut self.content
        } else if attribute.is_named(b"http-equiv") {
            &mut self.http_equiv
        } else {
            return;
        };
        slot.get_or_insert(attribute.value);
    }

    fn label(&self) -> Option<RawLabel<'a>> {
        if let Some(charset) = self.charset.map(RawLabel::new) {
            if !charset.is_blank() {
                return Some(charset);
            }
        }

        let pragma = self
            .http_equiv
            .is_some_and(|value| value.eq_ignore_ascii_case(b"content-type"));
        if !pragma {
            return None;
        }

        self.content
            .and_then(charset_from_content)
            .map(RawLabel::new)
            .filter(|label| !label.is_blank())
    }
}
