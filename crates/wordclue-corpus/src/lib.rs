//! Eligible-word filter: builds the corpus of common one-syllable words.
//!
//! # Architecture
//!
//! - [`dictionary`] -- CMU Pronouncing Dictionary parsing
//! - [`frequency`] -- Zipf frequency lookup
//! - [`reference`] -- reference wordlist used to reject proper nouns and junk
//! - [`filter`] -- the admission rules and [`build_corpus`]
//! - [`corpus`] -- the persisted [`WordCorpus`]

pub mod corpus;
pub mod dictionary;
pub mod filter;
pub mod frequency;
pub mod reference;

use std::path::PathBuf;

pub use corpus::WordCorpus;
pub use dictionary::PronouncingDictionary;
pub use filter::{
    CorpusBuildConfig, CorpusStats, MIN_ZIPF, build_corpus, build_corpus_from_config,
    build_corpus_with_stats, is_candidate,
};
pub use frequency::{FrequencySource, FrequencyTable};
pub use reference::ReferenceWordlist;

/// Failure to read or make sense of a data source needed to build or load
/// the corpus.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}:{line}: malformed frequency entry {text:?}", path.display())]
    MalformedFrequency {
        path: PathBuf,
        line: usize,
        text: String,
    },
    #[error("{}:{line}: malformed pronunciation entry {text:?}", path.display())]
    MalformedPronunciation {
        path: PathBuf,
        line: usize,
        text: String,
    },
    #[error("{}:{line}: invalid corpus word: {source}", path.display())]
    InvalidCorpusWord {
        path: PathBuf,
        line: usize,
        #[source]
        source: wordclue_core::WordError,
    },
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
