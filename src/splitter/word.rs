//! Quote-state machine for one word.
//!
//! A word is scanned in [`WordState::Raw`]; quotes and the escape character
//! move into the other states, each of which returns to `Raw` once its
//! construct completes. Only `Raw` may finish a word.

use crate::splitter::cursor::Cursor;
use crate::splitter::error::SplitError;
use crate::splitter::options::WordRules;

/// Scanning state inside one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordState {
    /// Unquoted text; separators end the word.
    Raw,
    /// `'...'`
    Single,
    /// `"..."`
    Double,
    /// Directly after an unquoted escape character.
    Escape,
}

/// A word with quote removal applied, plus the input following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedWord<'a> {
    pub(crate) word: String,
    /// Input after the separator that ended the word.
    pub(crate) remainder: &'a str,
}

/// Parses one word from the start of `input`.
///
/// `input` must not start with a separator.
pub(crate) fn parse_word<'a>(
    input: &'a str,
    rules: WordRules<'_>,
) -> Result<ParsedWord<'a>, SplitError> {
    WordParser {
        input,
        rules,
        cursor: Cursor::new(),
        literal_start: 0,
        word: String::new(),
    }
    .run()
}

struct WordParser<'a, 'r> {
    input: &'a str,
    rules: WordRules<'r>,
    cursor: Cursor,
    /// Start of the input run that is copied into `word` verbatim on the
    /// next emit.
    literal_start: usize,
    word: String,
}

impl<'a> WordParser<'a, '_> {
    fn run(mut self) -> Result<ParsedWord<'a>, SplitError> {
        let mut state = WordState::Raw;
        loop {
            state = match state {
                WordState::Raw => match self.scan_raw() {
                    Some(next) => next,
                    None => {
                        return Ok(ParsedWord {
                            word: self.word,
                            remainder: self.cursor.rest(self.input),
                        });
                    }
                },
                WordState::Single => self.scan_single()?,
                WordState::Double => self.scan_double()?,
                WordState::Escape => self.scan_escape()?,
            };
        }
    }

    /// Copies the pending literal run up to `end` and restarts it at the
    /// cursor.
    fn emit_literal(&mut self, end: usize) {
        self.word.push_str(&self.input[self.literal_start..end]);
        self.literal_start = self.cursor.offset();
    }

    /// Returns the next state, or `None` once a separator or end of input
    /// finishes the word.
    fn scan_raw(&mut self) -> Option<WordState> {
        loop {
            let at = self.cursor.offset();
            let Some(ch) = self.cursor.advance_char(self.input) else {
                self.emit_literal(self.input.len());
                return None;
            };

            // Quotes and escapes win over separators sharing the code point.
            let next = match ch {
                c if c == self.rules.single => WordState::Single,
                c if c == self.rules.double => WordState::Double,
                c if self.rules.is_escape(c) => WordState::Escape,
                c if self.rules.is_separator(c) => {
                    self.emit_literal(at);
                    return None;
                }
                _ => continue,
            };
            self.emit_literal(at);
            return Some(next);
        }
    }

    fn scan_escape(&mut self) -> Result<WordState, SplitError> {
        match self.cursor.advance_char(self.input) {
            None => return Err(SplitError::UnterminatedEscape),
            // Line continuation.
            Some('\n') => {}
            Some(ch) => self.word.push(ch),
        }
        self.literal_start = self.cursor.offset();
        Ok(WordState::Raw)
    }

    fn scan_single(&mut self) -> Result<WordState, SplitError> {
        let rest = self.cursor.rest(self.input);
        let Some(len) = rest.find(self.rules.single) else {
            return Err(SplitError::UnterminatedSingleQuote);
        };
        self.word.push_str(&rest[..len]);
        self.cursor.advance_by(len + self.rules.single.len_utf8(), self.input);
        self.literal_start = self.cursor.offset();
        Ok(WordState::Raw)
    }

    fn scan_double(&mut self) -> Result<WordState, SplitError> {
        loop {
            let at = self.cursor.offset();
            let Some(ch) = self.cursor.advance_char(self.input) else {
                return Err(SplitError::UnterminatedDoubleQuote);
            };

            if ch == self.rules.double {
                self.emit_literal(at);
                return Ok(WordState::Raw);
            }
            if !self.rules.is_escape(ch) {
                continue;
            }

            // The escaped code point is consumed either way; when it is not
            // in the double-escape set both characters stay in the literal
            // run.
            let Some(escaped) = self.cursor.advance_char(self.input) else {
                return Err(SplitError::UnterminatedDoubleQuote);
            };
            if self.rules.escapes_in_double(escaped) {
                self.emit_literal(at);
                if escaped != '\n' {
                    self.word.push(escaped);
                }
            }
        }
    }
}
