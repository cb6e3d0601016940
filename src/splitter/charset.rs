//! Code-point sets used for separators and double-quote escapes.

use serde::{Deserialize, Serialize};

/// An immutable set of code points, stored as the string that declared it.
///
/// Membership is linear in the number of declared code points; the sets this
/// crate works with hold a handful of characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharSet(String);

impl CharSet {
    /// Creates a set containing every code point of `chars`.
    pub fn new(chars: impl Into<String>) -> Self {
        Self(chars.into())
    }

    /// Returns `true` when `ch` is a member of the set.
    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(ch)
    }

    /// Returns `true` when the set has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the declaring string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}

impl From<String> for CharSet {
    fn from(chars: String) -> Self {
        Self(chars)
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
