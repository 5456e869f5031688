//! The colorizing transducer.

use super::escape::EscapeState;
use super::palette::RESET;
use super::settings::ColorConfig;
use super::state::ColorState;
use crate::error::TransferError;
use crate::text::CharSink;
use std::io;

/// Column width model: how far a character advances the cursor.
pub type WidthFn = fn(char) -> u64;

/// Default width model: 0 for control characters, 1 for everything else.
///
/// East-Asian wide characters and combining marks are counted as 1.
pub fn display_width(c: char) -> u64 {
    if c.is_control() {
        0
    } else {
        1
    }
}

/// Tints a character stream with a position-based rainbow.
///
/// Escape sequences already present in the input are passed through without
/// being recolored, and the rainbow color is re-asserted right after each one
/// so an embedded SGR reset does not cancel the gradient.
#[derive(Debug, Clone)]
pub struct Colorizer {
    config: ColorConfig,
    state: ColorState,
    width: WidthFn,
}

impl Colorizer {
    pub fn new(config: ColorConfig) -> Self {
        Self {
            config,
            state: ColorState::new(),
            width: display_width,
        }
    }

    /// Replace the column width model.
    pub fn with_width(mut self, width: WidthFn) -> Self {
        self.width = width;
        self
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    /// Process a single character.
    pub fn push<S: CharSink + ?Sized>(&mut self, c: char, sink: &mut S) -> io::Result<()> {
        let escape = self.state.escape_state.next(c);
        self.state.escape_state = escape;

        if escape.is_normal() {
            if c == '\n' {
                self.state.line += 1;
                self.state.column = 0;
            } else {
                self.state.column += (self.width)(c);
                let index = self.config.color_index(self.state.line, self.state.column);
                if self.state.last_color_index != Some(index) {
                    sink.put_str(&self.config.code_for(index))?;
                    self.state.last_color_index = Some(index);
                }
            }
        }

        sink.put_char(c)?;

        if escape == EscapeState::EscapeLetterSeen {
            // Nothing to re-assert before the first color is chosen
            if let Some(index) = self.state.last_color_index {
                sink.put_str(&self.config.code_for(index))?;
            }
        }
        Ok(())
    }

    /// End the current stream with an SGR reset.
    ///
    /// Position and escape state carry over to the next stream. The color
    /// memory is cleared because the reset dropped it on the terminal side.
    pub fn finish<S: CharSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        self.state.last_color_index = None;
        sink.put_str(RESET)
    }

    /// Colorize a whole character stream, then write the reset.
    ///
    /// On a read error the reset is still written before the error is
    /// returned, so the terminal is not left tinted.
    pub fn colorize<I, S>(&mut self, chars: I, sink: &mut S) -> Result<(), TransferError>
    where
        I: IntoIterator<Item = io::Result<char>>,
        S: CharSink + ?Sized,
    {
        for item in chars {
            match item {
                Ok(c) => self.push(c, sink).map_err(TransferError::Write)?,
                Err(e) => {
                    self.finish(sink).map_err(TransferError::Write)?;
                    return Err(TransferError::Read(e));
                }
            }
        }
        self.finish(sink).map_err(TransferError::Write)
    }

    /// Colorize an in-memory string (help text, diagnostics).
    pub fn colorize_str(&mut self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() * 2);
        for c in text.chars() {
            // Writing to a String cannot fail
            let _ = self.push(c, &mut out);
        }
        let _ = self.finish(&mut out);
        out
    }
}
