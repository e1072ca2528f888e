//! Canonical encodings the sniffer can report

use crate::error::EngineError;
use encoding_rs::Encoding;
use std::fmt;
use std::str::FromStr;

macro_rules! charsets {
    ($($(#[$doc:meta])* $variant:ident => $name:literal, $encoding:ident;)*) => {
        /// A supported character encoding.
        ///
        /// Mirrors the WHATWG Encoding Standard minus the `replacement`
        /// encoding, which has no decoder worth handing a document to.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Charset {
            $($(#[$doc])* $variant,)*
        }

        impl Charset {
            /// Every supported charset, in declaration order
            pub const ALL: &'static [Charset] = &[$(Charset::$variant,)*];

            /// Canonical lowercase name, e.g. `"utf-8"` or `"windows-1252"`
            pub fn name(self) -> &'static str {
                match self {
                    $(Charset::$variant => $name,)*
                }
            }

            /// The `encoding_rs` encoding a decoder should use
            pub fn encoding(self) -> &'static Encoding {
                match self {
                    $(Charset::$variant => encoding_rs::$encoding,)*
                }
            }
        }
    };
}

charsets! {
    /// UTF-8
    Utf8 => "utf-8", UTF_8;
    /// UTF-16, little-endian
    Utf16Le => "utf-16le", UTF_16LE;
    /// UTF-16, big-endian
    Utf16Be => "utf-16be", UTF_16BE;
    /// IBM866
    Ibm866 => "ibm866", IBM866;
    /// ISO-8859-2
    Iso8859_2 => "iso-8859-2", ISO_8859_2;
    /// ISO-8859-3
    Iso8859_3 => "iso-8859-3", ISO_8859_3;
    /// ISO-8859-4
    Iso8859_4 => "iso-8859-4", ISO_8859_4;
    /// ISO-8859-5
    Iso8859_5 => "iso-8859-5", ISO_8859_5;
    /// ISO-8859-6
    Iso8859_6 => "iso-8859-6", ISO_8859_6;
    /// ISO-8859-7
    Iso8859_7 => "iso-8859-7", ISO_8859_7;
    /// ISO-8859-8
    Iso8859_8 => "iso-8859-8", ISO_8859_8;
    /// ISO-8859-8-I
    Iso8859_8I => "iso-8859-8-i", ISO_8859_8_I;
    /// ISO-8859-10
    Iso8859_10 => "iso-8859-10", ISO_8859_10;
    /// ISO-8859-13
    Iso8859_13 => "iso-8859-13", ISO_8859_13;
    /// ISO-8859-14
    Iso8859_14 => "iso-8859-14", ISO_8859_14;
    /// ISO-8859-15
    Iso8859_15 => "iso-8859-15", ISO_8859_15;
    /// ISO-8859-16
    Iso8859_16 => "iso-8859-16", ISO_8859_16;
    /// KOI8-R
    Koi8R => "koi8-r", KOI8_R;
    /// KOI8-U
    Koi8U => "koi8-u", KOI8_U;
    /// macintosh
    Macintosh => "macintosh", MACINTOSH;
    /// windows-874
    Windows874 => "windows-874", WINDOWS_874;
    /// windows-1250
    Windows1250 => "windows-1250", WINDOWS_1250;
    /// windows-1251
    Windows1251 => "windows-1251", WINDOWS_1251;
    /// windows-1252, also what `iso-8859-1`, `latin1` and `us-ascii` mean on the web
    Windows1252 => "windows-1252", WINDOWS_1252;
    /// windows-1253
    Windows1253 => "windows-1253", WINDOWS_1253;
    /// windows-1254
    Windows1254 => "windows-1254", WINDOWS_1254;
    /// windows-1255
    Windows1255 => "windows-1255", WINDOWS_1255;
    /// windows-1256
    Windows1256 => "windows-1256", WINDOWS_1256;
    /// windows-1257
    Windows1257 => "windows-1257", WINDOWS_1257;
    /// windows-1258
    Windows1258 => "windows-1258", WINDOWS_1258;
    /// x-mac-cyrillic
    XMacCyrillic => "x-mac-cyrillic", X_MAC_CYRILLIC;
    /// GBK
    Gbk => "gbk", GBK;
    /// gb18030
    Gb18030 => "gb18030", GB18030;
    /// Big5
    Big5 => "big5", BIG5;
    /// EUC-JP
    EucJp => "euc-jp", EUC_JP;
    /// ISO-2022-JP
    Iso2022Jp => "iso-2022-jp", ISO_2022_JP;
    /// Shift_JIS
    ShiftJis => "shift_jis", SHIFT_JIS;
    /// EUC-KR
    EucKr => "euc-kr", EUC_KR;
    /// x-user-defined
    XUserDefined => "x-user-defined", X_USER_DEFINED;
}

impl Charset {
    /// Map an `encoding_rs` encoding back to a charset.
    ///
    /// Returns `None` only for `replacement`.
    pub fn from_encoding(encoding: &'static Encoding) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|charset| charset.encoding() == encoding)
    }

    /// Whether this is one of the UTF-16 variants
    pub fn is_utf16(self) -> bool {
        matches!(self, Charset::Utf16Le | Charset::Utf16Be)
    }
}

impl Default for Charset {
    fn default() -> Self {
        Charset::Windows1252
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = EngineError;

    /// Parse any WHATWG label, uncached. Use
    /// [`AliasResolver`](crate::AliasResolver) on hot paths.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Encoding::for_label(label.as_bytes())
            .and_then(Charset::from_encoding)
            .ok_or_else(|| EngineError::UnsupportedLabel {
                label: label.to_string(),
            })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Charset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Charset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}
