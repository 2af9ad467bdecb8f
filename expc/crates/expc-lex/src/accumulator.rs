//! Pending text between symbols.

/// Growable buffer of characters not yet classified into a token.
///
/// Owned by a single pass. The scanner drains it with [`Accumulator::take`]
/// whenever a flush boundary is reached.
#[derive(Debug, Default)]
pub struct Accumulator {
    buf: String,
}

impl Accumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one character.
    pub fn push(&mut self, c: char) {
        self.buf.push(c);
    }

    /// Returns true when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The pending text.
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Drains the buffer, returning its text if there was any.
    pub fn take(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.buf))
        }
    }
}
