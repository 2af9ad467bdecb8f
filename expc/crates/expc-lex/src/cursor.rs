//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains the read position
//! while the scanner walks the source. It handles UTF-8 correctly and reports
//! the end of input as `None` rather than a sentinel character, so every
//! lookahead is bounds-checked by construction.

/// A cursor for traversing source code character by character.
///
/// Positions are byte offsets into the source, always on a character
/// boundary.
///
/// # Example
///
/// ```
/// use expc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 42");
///
/// assert_eq!(cursor.current_char(), Some('x'));
/// cursor.advance();
/// assert_eq!(cursor.current_char(), Some(' '));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Advances past the current character. Does nothing at the end.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.current_char() {
            self.position += c.len_utf8();
        }
    }

    /// Consumes and returns the current character.
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the expected character if it is next.
    ///
    /// # Example
    ///
    /// ```
    /// use expc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("*/");
    /// assert!(cursor.match_char('*'));
    /// assert!(!cursor.match_char('*'));
    /// assert_eq!(cursor.current_char(), Some('/'));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Advances until the current character is `stop` or the end is reached.
    /// `stop` itself is not consumed.
    pub fn eat_until(&mut self, stop: char) {
        match self.remaining().find(stop) {
            Some(offset) => self.position += offset,
            None => self.position = self.source.len(),
        }
    }

    /// Advances past the next occurrence of `pattern`.
    ///
    /// Returns false, leaving the cursor at the end, when `pattern` does not
    /// occur in the rest of the source.
    pub fn eat_past(&mut self, pattern: &str) -> bool {
        match self.remaining().find(pattern) {
            Some(offset) => {
                self.position += offset + pattern.len();
                true
            },
            None => {
                self.position = self.source.len();
                false
            },
        }
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
