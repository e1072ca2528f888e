//! Byte-order mark detection

/// A recognized byte-order mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bom {
    /// `EF BB BF`
    Utf8,
    /// `FF FE`
    Utf16Le,
    /// `FE FF`
    Utf16Be,
}

impl Bom {
    /// Length of the mark in bytes
    pub const fn len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Le | Bom::Utf16Be => 2,
        }
    }

    /// The mark's byte pattern
    pub const fn bytes(self) -> &'static [u8] {
        match self {
            Bom::Utf8 => &[0xEF, 0xBB, 0xBF],
            Bom::Utf16Le => &[0xFF, 0xFE],
            Bom::Utf16Be => &[0xFE, 0xFF],
        }
    }
}

/// Outcome of inspecting the leading bytes of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomMatch {
    /// The stream starts with this mark
    Found(Bom),
    /// The stream definitely carries no mark
    Absent,
    /// Not enough bytes to decide yet
    Pending,
}

/// Longest mark we recognize
pub const MAX_BOM_LEN: usize = 3;

/// Inspect up to the first three bytes of `bytes`.
///
/// Fewer than two bytes is always [`BomMatch::Pending`], as is a bare
/// `EF BB` that could still become a UTF-8 mark. Callers that know the
/// stream has ended treat `Pending` as `Absent`.
pub fn detect_bom(bytes: &[u8]) -> BomMatch {
    match bytes {
        [0xEF, 0xBB, 0xBF, ..] => BomMatch::Found(Bom::Utf8),
        [0xFF, 0xFE, ..] => BomMatch::Found(Bom::Utf16Le),
        [0xFE, 0xFF, ..] => BomMatch::Found(Bom::Utf16Be),
        [] | [_] | [0xEF, 0xBB] => BomMatch::Pending,
        _ => BomMatch::Absent,
    }
}
