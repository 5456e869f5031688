//! Mutable cursor and color tracking.

use super::escape::EscapeState;

/// Cursor position and color memory for one output stream.
///
/// Shared across every source written to the same output so the rainbow
/// continues from file to file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorState {
    pub line: u64,
    pub column: u64,
    /// Index of the last color code written, `None` before the first one
    pub last_color_index: Option<i64>,
    pub escape_state: EscapeState,
}

impl ColorState {
    pub fn new() -> Self {
        Self::default()
    }
}
