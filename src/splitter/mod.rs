//! POSIX-shell-style word splitting.
//!
//! The driver here skips separators and line continuations between words,
//! applies the word limit, and hands each word body to the quote-state
//! machine in `word`.

pub mod charset;
pub mod error;
pub mod options;

mod cursor;
mod word;

use crate::splitter::cursor::Cursor;
use crate::splitter::word::parse_word;

pub use charset::CharSet;
pub use error::SplitError;
pub use options::{
    DEFAULT_DOUBLE_CHAR, DEFAULT_DOUBLE_ESCAPE_CHARS, DEFAULT_ESCAPE_CHAR, DEFAULT_SINGLE_CHAR,
    DEFAULT_SPLIT_CHARS, SplitOptions,
};

/// Splits `input` with default options and no word limit.
pub fn split(input: &str) -> Result<Vec<String>, SplitError> {
    split_with_options(input, &SplitOptions::default())
}

/// Splits `input` into at most `n` words; a negative `n` means unlimited.
///
/// The last word of a limited split is the rest of the input with
/// surrounding whitespace trimmed and no quote processing.
pub fn split_n(input: &str, n: isize) -> Result<Vec<String>, SplitError> {
    split_with_options(input, &SplitOptions::default().with_signed_limit(n))
}

/// Splits `input` the way `/bin/sh` splits words, without expansion.
///
/// Single quotes, double quotes, and escapes are removed from the returned
/// words. Unterminated constructs fail the whole call.
pub fn split_with_options(input: &str, options: &SplitOptions) -> Result<Vec<String>, SplitError> {
    let rules = options.rules();

    match options.limit {
        Some(0) => {
            tracing::trace!(limit = 0, "word limit short-circuit");
            return Ok(Vec::new());
        }
        Some(1) => {
            tracing::trace!(limit = 1, "word limit short-circuit");
            let whole = rules.trim_separators(input);
            if whole.is_empty() {
                return Ok(Vec::new());
            }
            return Ok(vec![whole.to_string()]);
        }
        _ => {}
    }

    let mut words = Vec::new();
    let mut cursor = Cursor::new();

    while !cursor.is_eof(input) {
        let word_start = cursor;
        let Some(ch) = cursor.advance_char(input) else {
            break;
        };
        if rules.is_separator(ch) {
            continue;
        }
        if rules.is_escape(ch) {
            match cursor.advance_char(input) {
                None => {
                    tracing::debug!(words = words.len(), "trailing escape character");
                    return Err(SplitError::UnterminatedEscape);
                }
                Some('\n') => continue,
                Some(_) => {}
            }
        }

        cursor = word_start;
        let rest = cursor.rest(input);
        let parsed = parse_word(rest, rules).inspect_err(|error| {
            tracing::debug!(%error, words = words.len(), "word scan failed");
        })?;
        cursor.advance_by(rest.len() - parsed.remainder.len(), input);
        words.push(parsed.word);

        if options.limit == Some(words.len() + 1) {
            let tail = trim_ascii_whitespace(cursor.rest(input));
            tracing::trace!(
                limit = words.len() + 1,
                tail_bytes = tail.len(),
                "word limit reached"
            );
            if !tail.is_empty() {
                words.push(tail.to_string());
            }
            return Ok(words);
        }
    }

    Ok(words)
}

/// Trims space, tab, newline, carriage return, form feed, and vertical tab.
///
/// Unlike [`str::trim_ascii`] this includes vertical tab.
fn trim_ascii_whitespace(input: &str) -> &str {
    input.trim_matches(|ch: char| matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

/// Reusable splitter bound to one set of options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Splitter {
    options: SplitOptions,
}

impl Splitter {
    /// Creates a splitter for `options`.
    pub fn new(options: SplitOptions) -> Self {
        Self { options }
    }

    /// Returns the options used by this splitter.
    pub fn options(&self) -> &SplitOptions {
        &self.options
    }

    /// Splits `input` with this splitter's options.
    pub fn split(&self, input: &str) -> Result<Vec<String>, SplitError> {
        split_with_options(input, &self.options)
    }
}

impl From<SplitOptions> for Splitter {
    fn from(options: SplitOptions) -> Self {
        Self::new(options)
    }
}
