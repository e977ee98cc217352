// Word frequency lookup on the Zipf scale
//
// Zipf values are log10 of occurrences per billion words: ~7 for "the",
// ~3 for everyday words, below 1 for rarities. A word the source has never
// seen scores 0.0.

use std::path::Path;

use hashbrown::HashMap;

use crate::CorpusError;

/// Source of word popularity scores.
pub trait FrequencySource {
    /// Zipf frequency of `word`; 0.0 when unknown.
    fn zipf(&self, word: &str) -> f64;
}

impl<F> FrequencySource for F
where
    F: Fn(&str) -> f64,
{
    fn zipf(&self, word: &str) -> f64 {
        self(word)
    }
}

/// Precomputed frequency table, one `word zipf` pair per line.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    scores: HashMap<String, f64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: impl Into<String>, zipf: f64) {
        self.scores.insert(word.into(), zipf);
    }

    /// Parse table text. Blank lines and `#` comments are skipped; words are
    /// lowercased. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CorpusError> {
        let mut table = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = || CorpusError::MalformedFrequency {
                path: origin.to_path_buf(),
                line: idx + 1,
                text: raw.to_string(),
            };
            let mut fields = line.split_whitespace();
            let (Some(word), Some(score), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(malformed());
            };
            let zipf: f64 = score.parse().map_err(|_| malformed())?;
            if !zipf.is_finite() {
                return Err(malformed());
            }
            table.insert(word.to_lowercase(), zipf);
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        Self::parse(&text, path)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl FrequencySource for FrequencyTable {
    fn zipf(&self, word: &str) -> f64 {
        self.scores.get(word).copied().unwrap_or(0.0)
    }
}
