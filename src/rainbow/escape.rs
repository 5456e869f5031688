//! Approximate ANSI escape sequence detection.
//!
//! This is not a full CSI/OSC parser. A sequence starts at ESC and ends at the
//! first ASCII letter; everything in between is passed through untouched.

/// Where the current character sits relative to an escape sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeState {
    /// Plain text.
    #[default]
    Normal,
    /// Inside a sequence (ESC seen, terminator not yet seen).
    InEscape,
    /// The current character terminated a sequence. Lasts one character.
    EscapeLetterSeen,
}

const ESC: char = '\x1b';

impl EscapeState {
    /// Classify `c` given the state left by the previous character.
    pub fn next(self, c: char) -> Self {
        if c == ESC {
            return Self::InEscape;
        }
        match self {
            Self::InEscape if c.is_ascii_alphabetic() => Self::EscapeLetterSeen,
            Self::InEscape => Self::InEscape,
            Self::Normal | Self::EscapeLetterSeen => Self::Normal,
        }
    }

    /// Whether position and color bookkeeping runs for this character.
    pub fn is_normal(self) -> bool {
        self == Self::Normal
    }
}
