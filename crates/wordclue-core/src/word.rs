// Word: the normalized token shared by the corpus, validator and session

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::character::{ALLOWED_SINGLE_LETTERS, is_word_char};

/// Error returned when a string cannot become a [`Word`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WordError {
    #[error("empty word")]
    Empty,
    #[error("word {word:?} contains non-letter character {ch:?}")]
    InvalidChar { word: String, ch: char },
}

/// An immutable lowercase alphabetic token matching `[a-z]+`.
///
/// `Word` borrows as `str`, so sets of words can be queried with plain
/// string slices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a word from text that is already normalized.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some(ch) = text.chars().find(|&c| !is_word_char(c)) {
            return Err(WordError::InvalidChar { word: text, ch });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in letters (always equal to the byte length).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this is one of the single-letter words "a", "i" or "o".
    pub fn is_allowed_single_letter(&self) -> bool {
        ALLOWED_SINGLE_LETTERS.contains(&self.0.as_str())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}
