//! Streaming byte-to-char decoding.

use super::Encoding;
use std::io::{self, BufRead};

/// Iterator over the characters of a byte stream.
///
/// Reads lazily so output can start before the input is exhausted. Decoding
/// stops at the first error; the error is yielded once and iteration ends.
pub struct Chars<R> {
    inner: R,
    encoding: Encoding,
    failed: bool,
}

impl<R: BufRead> Chars<R> {
    pub fn new(inner: R, encoding: Encoding) -> Self {
        Self {
            inner,
            encoding,
            failed: false,
        }
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = loop {
            match self.inner.fill_buf() {
                Ok(buf) => match buf.first() {
                    Some(&b) => break b,
                    None => return Ok(None),
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };
        self.inner.consume(1);
        Ok(Some(byte))
    }

    fn decode_utf8(&mut self, first: u8) -> io::Result<char> {
        let len = match first {
            0x00..=0x7f => return Ok(char::from(first)),
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(invalid_utf8()),
        };

        let mut buf = [first, 0, 0, 0];
        for slot in buf.iter_mut().take(len).skip(1) {
            match self.next_byte()? {
                Some(b) if b & 0xc0 == 0x80 => *slot = b,
                // Truncated or malformed continuation
                _ => return Err(invalid_utf8()),
            }
        }

        std::str::from_utf8(&buf[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(invalid_utf8)
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8")
}

impl<R: BufRead> Iterator for Chars<R> {
    type Item = io::Result<char>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = match self.next_byte() {
            Ok(None) => return None,
            Ok(Some(b)) => match self.encoding {
                Encoding::Utf8 => self.decode_utf8(b),
                Encoding::SingleByte => Ok(char::from(b)),
            },
            Err(e) => Err(e),
        };
        self.failed = result.is_err();
        Some(result)
    }
}
