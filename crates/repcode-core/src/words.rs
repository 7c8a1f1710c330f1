//! Word map: the decoded form of one repcode line.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{BuildError, BuildResult};
use crate::value::NumericValue;

/// Canonical word order for built lines.
///
/// Every uppercase letter is a valid word; this table fixes the order they
/// are emitted in, independent of parse or insertion order.
pub const WORD_ORDER: [char; 26] = [
    'G', 'M', 'X', 'Y', 'Z', 'E', 'F', 'I', 'J', 'A', 'B', 'C', 'D', 'H', 'K', 'L', 'N', 'O', 'P',
    'Q', 'R', 'S', 'T', 'U', 'V', 'W',
];

/// Whether `letter` is one of the 26 recognized word letters.
pub fn is_valid_word(letter: char) -> bool {
    letter.is_ascii_uppercase()
}

/// A mapping from word letter to numeric value, unique keys by construction.
///
/// Produced by one `parse` call or assembled by a caller for `build`; there
/// is no mutation API beyond insertion, and lookups for absent letters return
/// `None` rather than panicking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMap {
    words: BTreeMap<char, NumericValue>,
}

impl WordMap {
    /// Create an empty word map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, validating the letter against the 26-letter table.
    ///
    /// Lowercase letters are rejected: decoded maps always hold uppercase
    /// keys, and callers assembling a map by hand must do the same. Inserting
    /// an already-present letter replaces its value.
    pub fn insert(&mut self, letter: char, value: NumericValue) -> BuildResult<()> {
        if !is_valid_word(letter) {
            return Err(BuildError::UnknownWord { letter });
        }
        self.words.insert(letter, value);
        Ok(())
    }

    /// Build a map from `(letter, value)` pairs, validating every letter.
    pub fn from_entries<I>(entries: I) -> BuildResult<Self>
    where
        I: IntoIterator<Item = (char, NumericValue)>,
    {
        let mut map = Self::new();
        for (letter, value) in entries {
            map.insert(letter, value)?;
        }
        Ok(map)
    }

    /// Look up the value for a word letter; `None` if the word is absent.
    pub fn get(&self, letter: char) -> Option<&NumericValue> {
        self.words.get(&letter)
    }

    /// Whether the map holds a value for `letter`.
    pub fn contains(&self, letter: char) -> bool {
        self.words.contains_key(&letter)
    }

    /// Number of words in the map.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the map holds no words at all.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over `(letter, value)` pairs in alphabetical letter order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &NumericValue)> {
        self.words.iter().map(|(&letter, value)| (letter, value))
    }

    // The parser only produces uppercase A-Z letters, which are all valid.
    pub(crate) fn insert_unchecked(&mut self, letter: char, value: NumericValue) {
        debug_assert!(is_valid_word(letter));
        self.words.insert(letter, value);
    }
}
