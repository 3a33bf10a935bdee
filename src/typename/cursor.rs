//! Character cursor over a bounded range of the input text.
//!
//! The parser and all of its sub-state-machines share one [`Cursor`] passed by
//! mutable reference; there is no other shared state between them. Positions are
//! byte offsets into the full input, so a nested parse over a captured span reports
//! offsets that are directly meaningful to the caller.

use crate::Result;

/// A cursor over the byte range `[start, end)` of a string slice.
///
/// Every position handed out lies on a `char` boundary.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    /// The complete input text
    input: &'a str,
    /// Current position within the input
    position: usize,
    /// Exclusive end of the range being parsed
    end: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor over `input[start..end]`
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if the range is reversed, exceeds the input,
    /// or does not start and end on a character boundary.
    pub fn new(input: &'a str, start: usize, end: usize) -> Result<Self> {
        if start > end
            || end > input.len()
            || !input.is_char_boundary(start)
            || !input.is_char_boundary(end)
        {
            return Err(crate::Error::OutOfBounds);
        }

        Ok(Cursor {
            input,
            position: start,
            end,
        })
    }

    /// Current position
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// The character at the current position, if any
    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.input[self.position..self.end].chars().next()
    }

    /// Move past the current character
    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.position += c.len_utf8();
        }
    }

    /// Move to the end of the range
    pub fn seek_end(&mut self) {
        self.position = self.end;
    }

    /// The text between two positions
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// The unconsumed rest of the range
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        &self.input[self.position..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_cursor_walks_range() {
        let mut cursor = Cursor::new("abcdef", 1, 4).unwrap();
        assert_eq!(cursor.peek(), Some('b'));
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.slice(1, 3), "bc");
        assert_eq!(cursor.remaining(), "d");
        cursor.advance();
        assert_eq!(cursor.peek(), None);
        cursor.advance();
        assert_eq!(cursor.pos(), 4);
    }

    #[test]
    fn test_cursor_multibyte() {
        let mut cursor = Cursor::new("äx", 0, 3).unwrap();
        assert_eq!(cursor.peek(), Some('ä'));
        cursor.advance();
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.peek(), Some('x'));
    }

    #[test]
    fn test_cursor_invalid_ranges() {
        assert_eq!(Cursor::new("abc", 2, 1).unwrap_err(), Error::OutOfBounds);
        assert_eq!(Cursor::new("abc", 0, 4).unwrap_err(), Error::OutOfBounds);
        assert_eq!(Cursor::new("äx", 1, 3).unwrap_err(), Error::OutOfBounds);
    }

    #[test]
    fn test_cursor_seek_end() {
        let mut cursor = Cursor::new("abc", 0, 3).unwrap();
        cursor.seek_end();
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.remaining(), "");
        assert_eq!(cursor.peek(), None);
    }
}
