// WordCorpus: the persisted set of eligible words
//
// On disk the corpus is a newline-delimited, ascending list of lowercase
// words with no header. It is the single contract between the filter that
// produces it and every consumer that checks words against it.

use std::collections::BTreeSet;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use wordclue_core::Word;

use crate::CorpusError;

/// Set of eligible words, iterated in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    words: BTreeSet<Word>,
}

impl WordCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a corpus from already-validated words.
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Self {
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Build a corpus from string slices, rejecting any that are not valid
    /// words.
    pub fn try_from_strs<I, S>(words: I) -> Result<Self, wordclue_core::WordError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|w| Word::new(w.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()
            .map(|words| Self { words })
    }

    pub fn insert(&mut self, word: Word) -> bool {
        self.words.insert(word)
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

    /// Words in ascending lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Parse corpus text: whitespace-separated words.
    pub fn parse(text: &str, origin: &Path) -> Result<Self, CorpusError> {
        let mut corpus = Self::new();
        for (idx, line) in text.lines().enumerate() {
            for entry in line.split_whitespace() {
                let word = Word::new(entry).map_err(|source| CorpusError::InvalidCorpusWord {
                    path: origin.to_path_buf(),
                    line: idx + 1,
                    source,
                })?;
                corpus.insert(word);
            }
        }
        Ok(corpus)
    }

    /// Load a corpus file.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|e| CorpusError::io(path, e))?;
        let corpus = Self::parse(&text, path)?;
        tracing::debug!(path = %path.display(), words = corpus.len(), "loaded word corpus");
        Ok(corpus)
    }

    /// Write one word per line, ascending.
    pub fn write_to<W: Write>(&self, mut out: W) -> std::io::Result<()> {
        for word in &self.words {
            writeln!(out, "{word}")?;
        }
        out.flush()
    }

    /// Atomically replace `path` with this corpus.
    pub fn save(&self, path: &Path) -> Result<(), CorpusError> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| CorpusError::io(parent, e))?;

        let temp = NamedTempFile::new_in(parent).map_err(|e| CorpusError::io(parent, e))?;
        self.write_to(BufWriter::new(&temp))
            .map_err(|e| CorpusError::io(temp.path(), e))?;
        temp.persist(path)
            .map_err(|e| CorpusError::io(path, e.error))?;

        tracing::info!(path = %path.display(), words = self.len(), "wrote word corpus");
        Ok(())
    }
}

impl<'a> IntoIterator for &'a WordCorpus {
    type Item = &'a Word;
    type IntoIter = std::collections::btree_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

impl FromIterator<Word> for WordCorpus {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(words: &[&str]) -> WordCorpus {
        WordCorpus::try_from_strs(words).unwrap()
    }

    #[test]
    fn contains_by_str() {
        let c = corpus(&["cat", "dog", "a"]);
        assert!(c.contains("cat"));
        assert!(c.contains("a"));
        assert!(!c.contains("cats"));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn iteration_is_sorted_and_deduplicated() {
        let c = corpus(&["dog", "cat", "dog", "ant"]);
        let words: Vec<&str> = c.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["ant", "cat", "dog"]);
    }

    #[test]
    fn try_from_strs_rejects_invalid() {
        assert!(WordCorpus::try_from_strs(["cat", "Dog"]).is_err());
    }

    #[test]
    fn write_to_is_sorted_newline_delimited() {
        let c = corpus(&["sun", "cat", "dog"]);
        let mut buf = Vec::new();
        c.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "cat\ndog\nsun\n");
    }

    #[test]
    fn parse_reports_line_of_bad_word() {
        let err = WordCorpus::parse("cat\ndog\nCow\n", Path::new("words.txt")).unwrap_err();
        match err {
            CorpusError::InvalidCorpusWord { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_ignores_blank_lines() {
        let c = WordCorpus::parse("\ncat\n\n  dog  \n", Path::new("words.txt")).unwrap();
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("words.txt");
        let c = corpus(&["tree", "bird", "sky"]);
        c.save(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "bird\nsky\ntree\n");
        assert_eq!(WordCorpus::load(&path).unwrap(), c);
    }

    #[test]
    fn load_missing_is_io_error() {
        let err = WordCorpus::load(Path::new("/nonexistent/words.txt")).unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }
}
