// Eligible-word filter
//
// A word enters the corpus when it
//   1. is purely alphabetic, at least two letters long (or one of "a", "i",
//      "o"), and present in the reference wordlist;
//   2. has at least one pronunciation with exactly one syllable;
//   3. scores at least `min_zipf` on the frequency scale.
//
// Rule 2 is disjunctive: "fire" (F AY1 ER0 / F AY1 R) is admitted because
// one of its readings is monosyllabic.

use std::path::PathBuf;

use wordclue_core::Word;
use wordclue_core::character::{is_allowed_single_letter, is_word};
use wordclue_core::phonetics::any_monosyllabic;

use crate::CorpusError;
use crate::corpus::WordCorpus;
use crate::dictionary::PronouncingDictionary;
use crate::frequency::{FrequencySource, FrequencyTable};
use crate::reference::{ReferenceWordlist, SYSTEM_WORDLIST};

/// Default minimum Zipf frequency.
pub const MIN_ZIPF: f64 = 2.0;

/// Locations of the corpus build inputs and the frequency threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusBuildConfig {
    /// CMU Pronouncing Dictionary text file.
    pub dictionary_path: PathBuf,
    /// `word zipf` frequency table.
    pub frequency_path: PathBuf,
    /// Reference wordlist used to reject proper nouns and junk.
    pub reference_path: PathBuf,
    pub min_zipf: f64,
}

impl Default for CorpusBuildConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from("cmudict.dict"),
            frequency_path: PathBuf::from("frequencies.tsv"),
            reference_path: PathBuf::from(SYSTEM_WORDLIST),
            min_zipf: MIN_ZIPF,
        }
    }
}

/// Stage counts collected while building a corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    /// Lowercase alphabetic words in the reference wordlist.
    pub reference_words: usize,
    /// Candidates with a one-syllable reading, before the frequency cut.
    pub one_syllable: usize,
    /// Words that made it into the corpus.
    pub admitted: usize,
}

/// Candidate admission: alphabetic, long enough, and a real lowercase word.
pub fn is_candidate(word: &str, reference: &ReferenceWordlist) -> bool {
    if !is_word(word) {
        return false;
    }
    if word.len() == 1 && !is_allowed_single_letter(word) {
        return false;
    }
    reference.contains(word)
}

/// Build the corpus of common one-syllable words.
pub fn build_corpus<F: FrequencySource + ?Sized>(
    dictionary: &PronouncingDictionary,
    frequency: &F,
    reference: &ReferenceWordlist,
    min_zipf: f64,
) -> WordCorpus {
    build_corpus_with_stats(dictionary, frequency, reference, min_zipf).0
}

/// [`build_corpus`] plus the per-stage counts.
pub fn build_corpus_with_stats<F: FrequencySource + ?Sized>(
    dictionary: &PronouncingDictionary,
    frequency: &F,
    reference: &ReferenceWordlist,
    min_zipf: f64,
) -> (WordCorpus, CorpusStats) {
    let one_syllable: Vec<&str> = dictionary
        .iter()
        .filter(|(word, _)| is_candidate(word, reference))
        .filter(|(_, readings)| any_monosyllabic(readings))
        .map(|(word, _)| word)
        .collect();

    // Word shape was already checked by `is_candidate`.
    let corpus: WordCorpus = one_syllable
        .iter()
        .filter(|word| frequency.zipf(word) >= min_zipf)
        .filter_map(|word| Word::new(*word).ok())
        .collect();

    let stats = CorpusStats {
        reference_words: reference.len(),
        one_syllable: one_syllable.len(),
        admitted: corpus.len(),
    };
    tracing::info!(
        reference_words = stats.reference_words,
        one_syllable = stats.one_syllable,
        admitted = stats.admitted,
        min_zipf,
        "built word corpus"
    );
    (corpus, stats)
}

/// Load every input named by `config` and build the corpus.
pub fn build_corpus_from_config(
    config: &CorpusBuildConfig,
) -> Result<(WordCorpus, CorpusStats), CorpusError> {
    let reference = ReferenceWordlist::load(&config.reference_path)?;
    tracing::debug!(
        path = %config.reference_path.display(),
        words = reference.len(),
        "loaded reference wordlist"
    );
    let dictionary = PronouncingDictionary::load(&config.dictionary_path)?;
    tracing::debug!(
        path = %config.dictionary_path.display(),
        entries = dictionary.len(),
        "loaded pronouncing dictionary"
    );
    let frequency = FrequencyTable::load(&config.frequency_path)?;
    tracing::debug!(
        path = %config.frequency_path.display(),
        entries = frequency.len(),
        "loaded frequency table"
    );
    Ok(build_corpus_with_stats(
        &dictionary,
        &frequency,
        &reference,
        config.min_zipf,
    ))
}
