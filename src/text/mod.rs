//! Character decoding and encoding for the input and output streams.
//!
//! The colorizer works on `char`s. These types turn a byte stream into
//! characters according to the active [`Encoding`] and write characters back
//! out the same way, so plain text round-trips unchanged.

mod decode;
mod encode;

pub use decode::Chars;
pub use encode::{CharSink, CharWriter};

/// How bytes map to characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid sequences are read errors.
    #[default]
    Utf8,
    /// One byte per character (Latin-1 style), never fails to decode.
    SingleByte,
}

impl Encoding {
    /// Map a locale codeset name such as `UTF-8` or `ISO-8859-1`.
    ///
    /// Returns `None` for codesets that are neither UTF-8 nor a known
    /// single-byte family.
    pub fn from_codeset(codeset: &str) -> Option<Self> {
        let normalized: String = codeset
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        const SINGLE_BYTE_PREFIXES: [&str; 7] =
            ["iso8859", "cp125", "windows125", "koi8", "latin", "tis620", "armscii8"];
        const SINGLE_BYTE_NAMES: [&str; 4] = ["ansix341968", "ascii", "usascii", "roman8"];

        if normalized == "utf8" {
            Some(Self::Utf8)
        } else if SINGLE_BYTE_NAMES.contains(&normalized.as_str())
            || SINGLE_BYTE_PREFIXES
                .iter()
                .any(|prefix| normalized.starts_with(prefix))
        {
            Some(Self::SingleByte)
        } else {
            None
        }
    }
}
