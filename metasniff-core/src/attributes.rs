//! Attribute tokenizer for the inside of one tag
//!
//! Works directly on bytes and never fails: anything it cannot make sense of
//! is either skipped or reported as [`AttributeStep::Incomplete`] when the
//! input runs out before the tag does.

/// One attribute as it appears in the source.
///
/// Both slices borrow from the scanned bytes. Names keep their original case;
/// compare them with [`Attribute::is_named`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Attribute name
    pub name: &'a [u8],
    /// Attribute value without surrounding quotes (empty when absent)
    pub value: &'a [u8],
}

impl Attribute<'_> {
    /// ASCII case-insensitive name comparison
    pub fn is_named(&self, name: &[u8]) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

/// Result of asking the tokenizer for the next attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeStep<'a> {
    /// An attribute was read
    Attribute(Attribute<'a>),
    /// The closing `>` was consumed
    TagEnd,
    /// Input ended inside the tag
    Incomplete,
}

#[derive(Debug, Clone, Copy)]
enum State {
    BeforeName,
    Name,
    AfterName,
    BeforeValue,
    Quoted(u8),
    Unquoted,
}

/// Tokenizer over the attribute section of a tag.
#[derive(Debug, Clone)]
pub struct AttributeTokenizer<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> AttributeTokenizer<'a> {
    /// Start tokenizing `input` at byte offset `pos` (just past the tag name).
    pub fn new(input: &'a [u8], pos: usize) -> Self {
        Self { input, pos }
    }

    /// Current byte offset into the input
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Read the next attribute.
    ///
    /// After [`AttributeStep::TagEnd`] the position points just past `>`.
    /// After [`AttributeStep::Incomplete`] the position is meaningless.
    pub fn next_step(&mut self) -> AttributeStep<'a> {
        let mut state = State::BeforeName;
        let mut name = (self.pos, self.pos);
        let mut value_start = self.pos;

        loop {
            let Some(&byte) = self.input.get(self.pos) else {
                return AttributeStep::Incomplete;
            };

            match state {
                State::BeforeName => match byte {
                    b'>' => {
                        self.pos += 1;
                        return AttributeStep::TagEnd;
                    }
                    b'/' => self.pos += 1,
                    b if b.is_ascii_whitespace() => self.pos += 1,
                    // A leading `=` belongs to the name
                    _ => {
                        name = (self.pos, self.pos + 1);
                        self.pos += 1;
                        state = State::Name;
                    }
                },
                State::Name => match byte {
                    b'=' => {
                        self.pos += 1;
                        state = State::BeforeValue;
                    }
                    b'/' | b'>' => return self.emit(name, (self.pos, self.pos)),
                    b if b.is_ascii_whitespace() => {
                        self.pos += 1;
                        state = State::AfterName;
                    }
                    _ => {
                        self.pos += 1;
                        name.1 = self.pos;
                    }
                },
                State::AfterName => match byte {
                    b'=' => {
                        self.pos += 1;
                        state = State::BeforeValue;
                    }
                    b if b.is_ascii_whitespace() => self.pos += 1,
                    // Valueless attribute; the byte starts whatever comes next
                    _ => return self.emit(name, (self.pos, self.pos)),
                },
                State::BeforeValue => match byte {
                    b'"' | b'\'' => {
                        self.pos += 1;
                        value_start = self.pos;
                        state = State::Quoted(byte);
                    }
                    b'>' => return self.emit(name, (self.pos, self.pos)),
                    b if b.is_ascii_whitespace() => self.pos += 1,
                    _ => {
                        value_start = self.pos;
                        self.pos += 1;
                        state = State::Unquoted;
                    }
                },
                State::Quoted(quote) => {
                    if byte == quote {
                        let value = (value_start, self.pos);
                        self.pos += 1;
                        return self.emit(name, value);
                    }
                    self.pos += 1;
                }
                State::Unquoted => {
                    if byte == b'>' || byte.is_ascii_whitespace() {
                        return self.emit(name, (value_start, self.pos));
                    }
                    self.pos += 1;
                }
            }
        }
    }

    fn emit(&self, name: (usize, usize), value: (usize, usize)) -> AttributeStep<'a> {
        AttributeStep::Attribute(Attribute {
            name: &self.input[name.0..name.1],
            value: &self.input[value.0..value.1],
        })
    }
}

/// Pull the `charset=` parameter out of a `content` attribute value,
/// e.g. `text/html; charset=utf-8`.
///
/// The keyword is matched case-insensitively and may be followed by an
/// optional `=` with whitespace around it, so `charset utf-8` declares
/// `utf-8` too. The label may be quoted, in which case the closing quote
/// must be present. An unquoted label runs to the next `;`, quote, whitespace or the
/// end of the value. Returns `None` when no non-empty label is found.
pub fn charset_from_content(value: &[u8]) -> Option<&[u8]> {
    const KEYWORD: &[u8] = b"charset";

    let mut pos = 0;
    loop {
        let found = value
            .get(pos..)?
            .windows(KEYWORD.len())
            .position(|w| w.eq_ignore_ascii_case(KEYWORD))?;
        pos += found + KEYWORD.len();

        // `charsetx` is some other token; look for the next occurrence
        if matches!(value.get(pos), Some(&b) if !is_keyword_boundary(b)) {
            continue;
        }
        pos = skip_whitespace(value, pos);
        if value.get(pos) == Some(&b'=') {
            pos = skip_whitespace(value, pos + 1);
        }

        let label = match *value.get(pos)? {
            quote @ (b'"' | b'\'') => {
                let start = pos + 1;
                let len = value.get(start..)?.iter().position(|&b| b == quote)?;
                &value[start..start + len]
            }
            _ => {
                let len = value[pos..]
                    .iter()
                    .position(|&b| matches!(b, b';' | b'"' | b'\'') || b.is_ascii_whitespace())
                    .unwrap_or(value.len() - pos);
                &value[pos..pos + len]
            }
        };

        return if label.is_empty() { None } else { Some(label) };
    }
}

fn is_keyword_boundary(byte: u8) -> bool {
    matches!(byte, b'=' | b'"' | b'\'') || byte.is_ascii_whitespace()
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while bytes.get(pos).is_some_and(u8::is_ascii_whitespace) {
        pos += 1;
    }
    pos
}
