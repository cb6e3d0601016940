//! Code-point cursor for word scanning.

/// Byte-position cursor over input text that only stops on `char` boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    offset: usize,
}

impl Cursor {
    /// Creates a cursor at byte offset `0`.
    pub(crate) fn new() -> Self {
        Self { offset: 0 }
    }

    /// Returns the current byte offset.
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` if the cursor is at or beyond input end.
    pub(crate) fn is_eof(&self, input: &str) -> bool {
        self.offset >= input.len()
    }

    /// Returns the unconsumed tail of `input`.
    pub(crate) fn rest<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.offset..).unwrap_or("")
    }

    /// Returns the code point at cursor position.
    pub(crate) fn peek_char(&self, input: &str) -> Option<char> {
        self.rest(input).chars().next()
    }

    /// Consumes one code point and returns it.
    pub(crate) fn advance_char(&mut self, input: &str) -> Option<char> {
        let ch = self.peek_char(input)?;
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Advances the cursor by `count` bytes, clamped to input length.
    ///
    /// Callers pass counts that land on a `char` boundary.
    pub(crate) fn advance_by(&mut self, count: usize, input: &str) {
        self.offset = self.offset.saturating_add(count).min(input.len());
    }
}
