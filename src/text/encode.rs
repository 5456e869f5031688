//! Character output.

use super::Encoding;
use std::io::{self, Write};

/// Destination for colorized text.
///
/// Implemented for byte writers (through [`CharWriter`]) and for `String`,
/// which is handy for colorizing short messages in memory.
pub trait CharSink {
    /// Write one input character.
    fn put_char(&mut self, c: char) -> io::Result<()>;

    /// Write an ASCII control string such as an SGR sequence.
    fn put_str(&mut self, s: &str) -> io::Result<()>;
}

impl CharSink for String {
    fn put_char(&mut self, c: char) -> io::Result<()> {
        self.push(c);
        Ok(())
    }

    fn put_str(&mut self, s: &str) -> io::Result<()> {
        self.push_str(s);
        Ok(())
    }
}

/// Encodes characters onto a byte writer.
pub struct CharWriter<W> {
    inner: W,
    encoding: Encoding,
}

impl<W: Write> CharWriter<W> {
    pub fn new(inner: W, encoding: Encoding) -> Self {
        Self { inner, encoding }
    }

    /// Access the underlying writer for raw byte copies.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> CharSink for CharWriter<W> {
    fn put_char(&mut self, c: char) -> io::Result<()> {
        match (self.encoding, u8::try_from(c)) {
            (Encoding::SingleByte, Ok(byte)) => self.inner.write_all(&[byte]),
            _ => {
                let mut buf = [0u8; 4];
                self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())
            }
        }
    }

    fn put_str(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }
}
