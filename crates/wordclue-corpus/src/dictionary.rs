// CMU Pronouncing Dictionary loader
//
// Line format:
//   word  PH1 PH2 ...
//   word(2)  PH1 PH2 ...     alternate reading of the same word
//   ;;; comment
//
// Words are lowercased on load. Entries are not filtered here; deciding
// which words are eligible is the job of `filter`.

use std::collections::BTreeMap;
use std::path::Path;

use wordclue_core::{Phoneme, Pronunciation};

use crate::CorpusError;

/// Map from (lowercased) dictionary headword to all of its readings.
///
/// Headwords are kept verbatim apart from lowercasing, so entries such as
/// `"ok"` or `"'bout"` survive loading and are rejected later by the
/// candidate rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PronouncingDictionary {
    entries: BTreeMap<String, Vec<Pronunciation>>,
}

impl PronouncingDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, reading)` pairs. Repeated words accumulate readings.
    pub fn from_entries<I, W>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, Pronunciation)>,
        W: AsRef<str>,
    {
        let mut dict = Self::new();
        for (word, pron) in entries {
            dict.insert(word.as_ref(), pron);
        }
        dict
    }

    /// Add one reading. Empty readings are ignored so every stored entry has
    /// at least one phoneme sequence.
    pub fn insert(&mut self, word: &str, pron: Pronunciation) {
        if pron.is_empty() {
            return;
        }
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pron);
    }

    /// Parse dictionary text. `origin` is only used in error messages.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CorpusError> {
        let mut dict = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            // Entries may carry a trailing "# comment".
            let line = raw.split_once('#').map_or(raw, |(entry, _)| entry).trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut fields = line.split_whitespace();
            let Some(head) = fields.next() else {
                continue;
            };
            let pron = Pronunciation::new(fields.map(Phoneme::new).collect());
            if pron.is_empty() {
                return Err(CorpusError::MalformedPronunciation {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }
            dict.insert(strip_variant_marker(head), pron);
        }
        Ok(dict)
    }

    /// Read and parse a dictionary file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        Self::parse(&text, path)
    }

    pub fn get(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Iterate entries in ascending headword order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.entries
            .iter()
            .map(|(w, p)| (w.as_str(), p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// `"read(2)"` -> `"read"`. Anything else is returned unchanged.
fn strip_variant_marker(head: &str) -> &str {
    match head.find('(') {
        Some(open) if head.ends_with(')') => {
            let inner = &head[open + 1..head.len() - 1];
            if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit()) {
                &head[..open]
            } else {
                head
            }
        }
        _ => head,
    }
}
