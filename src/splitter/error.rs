//! Error contracts for word splitting.

use thiserror::Error;

/// Terminal splitting failure.
///
/// Each variant names the construct that was still open when input ran out.
/// A failed split yields no words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SplitError {
    /// A `'...'` span was opened and never closed.
    #[error("unterminated single-quoted string")]
    UnterminatedSingleQuote,
    /// A `"..."` span was opened and input ended before its closing quote.
    #[error("unterminated double-quoted string")]
    UnterminatedDoubleQuote,
    /// The escape character was the last code point of the input.
    #[error("unterminated backslash-escape")]
    UnterminatedEscape,
}
