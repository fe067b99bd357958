//! Read a calendar stream into unfolded logical lines.
//!
//! A physical line ends with CRLF (a bare LF is tolerated). Every following physical line that
//! starts with a single space or horizontal tab is a continuation: the whitespace character is
//! dropped and the rest is appended to the previous line without a separator.
//!
//! Unfolding works on raw bytes, so a fold that splits a multi-byte UTF-8 sequence is repaired
//! before the logical line is decoded.
//!
//! # Examples
//!
//! ```rust
//! let input = b"DESCRIPTION:This is a lo\r\n ng description\r\n";
//! let mut reader = calcodec::LineReader::from_slice(input);
//!
//! let line = reader.next().unwrap().unwrap();
//! assert_eq!(line.as_str(), "DESCRIPTION:This is a long description");
//! assert_eq!(line.number(), 1);
//! ```

use std::fmt;
use std::io::{self, BufRead};

/// Error arising when reading or unfolding a line
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("Line {0}: Invalid UTF-8 after unfolding.")]
    InvalidUtf8(usize),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An unfolded logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub inner: String,
    number: usize,
}

impl Line {
    /// Number of the first physical line this logical line was read from, starting at 1.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.inner)
    }
}

pub struct LineReader<R> {
    reader: R,
    number: usize,
}

impl<'a> LineReader<&'a [u8]> {
    pub fn from_slice(slice: &'a [u8]) -> Self {
        LineReader::new(slice)
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader { reader, number: 0 }
    }

    /// Append one physical line to `buf` without its terminator.
    /// Returns the number of bytes consumed from the stream.
    fn read_physical(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let start = buf.len();
        let read = self.reader.read_until(b'\n', buf)?;
        if read > 0 {
            self.number += 1;
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.len() > start && buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        Ok(read)
    }

    /// Consume the leading whitespace of the next physical line if it is a continuation.
    fn continues(&mut self) -> io::Result<bool> {
        let continued = matches!(self.reader.fill_buf()?.first(), Some(b' ' | b'\t'));
        if continued {
            self.reader.consume(1);
        }
        Ok(continued)
    }

    /// Read the next logical line. `Ok(None)` signals the end of the stream.
    pub fn next_logical_line(&mut self) -> Result<Option<Line>, LineError> {
        let mut bytes = Vec::new();
        if self.read_physical(&mut bytes)? == 0 {
            return Ok(None);
        }
        let number = self.number;

        while self.continues()? {
            self.read_physical(&mut bytes)?;
        }

        match String::from_utf8(bytes) {
            Ok(inner) => Ok(Some(Line { inner, number })),
            Err(_) => Err(LineError::InvalidUtf8(number)),
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, LineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_logical_line().transpose()
    }
}
