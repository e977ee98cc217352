// Reference wordlist (e.g. /usr/share/dict/words)
//
// Only entries made entirely of lowercase ASCII letters are kept. This is
// what rejects proper nouns ("Paris"), possessives ("cat's") and other junk
// that pronouncing dictionaries happily list.

use std::path::Path;

use hashbrown::HashSet;
use wordclue_core::character::is_word;

use crate::CorpusError;

/// Default location of the system wordlist.
pub const SYSTEM_WORDLIST: &str = "/usr/share/dict/words";

#[derive(Debug, Clone, Default)]
pub struct ReferenceWordlist {
    words: HashSet<String>,
}

impl ReferenceWordlist {
    /// Keep the lowercase alphabetic entries of `words`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter(|w| is_word(w.as_ref()))
            .map(|w| w.as_ref().to_string())
            .collect();
        Self { words }
    }

    /// Parse whitespace-separated wordlist text.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.split_whitespace())
    }

    /// Read a wordlist file. Failure to read it aborts corpus construction.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        Ok(Self::parse(&text))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
