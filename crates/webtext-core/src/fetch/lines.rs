//! Pull-based line source over a buffered byte stream.

use std::io::{self, BufRead, Read};

/// Source of response lines, then of the remaining body bytes.
///
/// Implemented for every [`BufRead`], so a socket wrapped in a `BufReader`
/// and an in-memory `&[u8]` are interchangeable.
pub trait LineReader {
    /// Returns the next line including its `\n` terminator.
    ///
    /// `Ok(None)` means clean EOF before any byte. A final line without a
    /// terminator is returned as-is; callers decide whether that is an error.
    fn next_line(&mut self) -> io::Result<Option<String>>;

    /// Reads everything up to EOF, replacing invalid UTF-8 with U+FFFD.
    fn read_to_end_lossy(&mut self) -> io::Result<String>;
}

impl<R: BufRead> LineReader for R {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn read_to_end_lossy(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
