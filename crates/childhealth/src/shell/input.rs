//! Line and token reading over any `BufRead`.

use std::io::BufRead;

use tracing::trace;

use crate::error::{Error, Result};

/// Wraps an input stream with the two reads the shell needs.
#[derive(Debug)]
pub struct Input<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> Input<R> {
    /// Wrap `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    /// Read one full line with its terminator removed.
    ///
    /// # Errors
    ///
    /// [`Error::EndOfInput`] at end of stream, [`Error::Io`] on read failure.
    pub fn read_line(&mut self) -> Result<String> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Err(Error::EndOfInput);
        }
        let line = self
            .buf
            .strip_suffix('\n')
            .map_or(self.buf.as_str(), |l| l.strip_suffix('\r').unwrap_or(l));
        trace!(len = line.len(), "read line");
        Ok(line.to_string())
    }

    /// Read the first whitespace-separated token, skipping blank lines.
    ///
    /// Whatever follows the token on the same line is discarded.
    ///
    /// # Errors
    ///
    /// Same as [`Input::read_line`].
    pub fn read_token(&mut self) -> Result<String> {
        loop {
            let line = self.read_line()?;
            if let Some(token) = line.split_whitespace().next() {
                return Ok(token.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_line_strips_terminators() {
        let mut input = Input::new(Cursor::new("one\ntwo\r\nthree"));
        assert_eq!(input.read_line().unwrap(), "one");
        assert_eq!(input.read_line().unwrap(), "two");
        assert_eq!(input.read_line().unwrap(), "three");
        assert!(matches!(input.read_line(), Err(Error::EndOfInput)));
    }

    #[test]
    fn test_read_line_keeps_inner_whitespace() {
        let mut input = Input::new(Cursor::new("  checkup ok  \n"));
        assert_eq!(input.read_line().unwrap(), "  checkup ok  ");
    }

    #[test]
    fn test_read_line_empty_line() {
        let mut input = Input::new(Cursor::new("\nnext\n"));
        assert_eq!(input.read_line().unwrap(), "");
        assert_eq!(input.read_line().unwrap(), "next");
    }

    #[test]
    fn test_read_token_skips_blank_lines() {
        let mut input = Input::new(Cursor::new("\n   \n 42 trailing words\nafter\n"));
        assert_eq!(input.read_token().unwrap(), "42");
        assert_eq!(input.read_line().unwrap(), "after");
    }

    #[test]
    fn test_read_token_end_of_input() {
        let mut input = Input::new(Cursor::new("\n\n"));
        assert!(matches!(input.read_token(), Err(Error::EndOfInput)));
    }
}
