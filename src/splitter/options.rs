//! Splitting configuration.

use serde::{Deserialize, Deserializer, Serialize};

use crate::splitter::charset::CharSet;

/// Separators used when none are configured.
pub const DEFAULT_SPLIT_CHARS: &str = " \n\t";
/// Opening and closing code point of a single-quoted span.
pub const DEFAULT_SINGLE_CHAR: char = '\'';
/// Opening and closing code point of a double-quoted span.
pub const DEFAULT_DOUBLE_CHAR: char = '"';
/// Backslash-escape introducer.
pub const DEFAULT_ESCAPE_CHAR: char = '\\';
/// Code points whose escape is resolved inside double quotes.
pub const DEFAULT_DOUBLE_ESCAPE_CHARS: &str = "$`\"\n\\";

/// Word splitting options.
///
/// Every field may be overridden. Deserializing a partial table fills the
/// missing fields from [`SplitOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Code points that delimit words outside quotes.
    ///
    /// An empty set behaves as [`DEFAULT_SPLIT_CHARS`].
    pub split_chars: CharSet,
    /// Code point opening and closing a single-quoted span.
    pub single_char: char,
    /// Code point opening and closing a double-quoted span.
    pub double_char: char,
    /// Escape introducer. `None` and `Some('\0')` disable escapes.
    pub escape_char: Option<char>,
    /// Code points whose escape inside double quotes drops the escape
    /// character.
    pub double_escape_chars: CharSet,
    /// Maximum number of words. `None` means unlimited.
    ///
    /// With a limit of `n`, the `n`-th word is the untouched remainder of
    /// the input. Configuration files may use any negative integer for
    /// unlimited.
    #[serde(deserialize_with = "deserialize_signed_limit")]
    pub limit: Option<usize>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            split_chars: CharSet::new(DEFAULT_SPLIT_CHARS),
            single_char: DEFAULT_SINGLE_CHAR,
            double_char: DEFAULT_DOUBLE_CHAR,
            escape_char: Some(DEFAULT_ESCAPE_CHAR),
            double_escape_chars: CharSet::new(DEFAULT_DOUBLE_ESCAPE_CHARS),
            limit: None,
        }
    }
}

impl SplitOptions {
    /// Default options with backslash-escapes disabled.
    pub fn no_escape() -> Self {
        Self {
            escape_char: None,
            ..Self::default()
        }
    }

    /// Sets the word limit.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the word limit from a signed count where any negative value
    /// means unlimited.
    pub fn with_signed_limit(self, limit: isize) -> Self {
        self.with_limit(usize::try_from(limit).ok())
    }

    /// Sets the separator set.
    pub fn with_split_chars(mut self, split_chars: impl Into<CharSet>) -> Self {
        self.split_chars = split_chars.into();
        self
    }

    /// Sets the single-quote code point.
    pub fn with_single_char(mut self, single_char: char) -> Self {
        self.single_char = single_char;
        self
    }

    /// Sets the double-quote code point.
    pub fn with_double_char(mut self, double_char: char) -> Self {
        self.double_char = double_char;
        self
    }

    /// Sets or disables the escape introducer.
    pub fn with_escape_char(mut self, escape_char: Option<char>) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Sets the double-quote escape set.
    pub fn with_double_escape_chars(mut self, chars: impl Into<CharSet>) -> Self {
        self.double_escape_chars = chars.into();
        self
    }

    /// Resolves the options, substituting default separators for an empty set.
    pub(crate) fn rules(&self) -> WordRules<'_> {
        let split_chars = if self.split_chars.is_empty() {
            DEFAULT_SPLIT_CHARS
        } else {
            self.split_chars.as_str()
        };
        WordRules {
            split_chars,
            single: self.single_char,
            double: self.double_char,
            escape: self.escape_char.filter(|ch| *ch != '\0'),
            double_escapes: self.double_escape_chars.as_str(),
        }
    }
}

/// Reads a signed word limit, mapping negative values to unlimited.
fn deserialize_signed_limit<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let limit = Option::<i64>::deserialize(deserializer)?;
    Ok(limit.and_then(|limit| usize::try_from(limit).ok()))
}

/// Options resolved for one split call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WordRules<'a> {
    pub(crate) split_chars: &'a str,
    pub(crate) single: char,
    pub(crate) double: char,
    pub(crate) escape: Option<char>,
    pub(crate) double_escapes: &'a str,
}

impl WordRules<'_> {
    /// Returns `true` when `ch` delimits words outside quotes.
    pub(crate) fn is_separator(&self, ch: char) -> bool {
        self.split_chars.contains(ch)
    }

    /// Returns `true` when `ch` is the enabled escape character.
    pub(crate) fn is_escape(&self, ch: char) -> bool {
        self.escape == Some(ch)
    }

    /// Returns `true` when an escape before `ch` is resolved inside double
    /// quotes.
    pub(crate) fn escapes_in_double(&self, ch: char) -> bool {
        self.double_escapes.contains(ch)
    }

    /// Removes leading and trailing separators from `input`.
    pub(crate) fn trim_separators<'i>(&self, input: &'i str) -> &'i str {
        input.trim_matches(|ch: char| self.is_separator(ch))
    }
}
