//! Puzzle validation for one-syllable word-guessing puzzles.
//!
//! # Architecture
//!
//! - [`variants`] -- inflectional variants of a secret, for leakage checks
//! - [`tokenizer`] -- letter-run tokens of clue text
//! - [`record`] -- the [`PuzzleRecord`] model and file parsing
//! - [`validator`] -- per-puzzle checks producing diagnostics
//! - [`ledger`] -- cross-file duplicate-secret fold
//! - [`report`] -- whole-set verification
//! - [`files`] -- puzzle directory discovery
//! - [`bundle`] -- JSON export for the web front end
//! - [`session`] -- the guessing game state machine

pub mod bundle;
pub mod files;
pub mod ledger;
pub mod record;
pub mod report;
pub mod session;
pub mod tokenizer;
pub mod validator;
pub mod variants;

use std::path::PathBuf;

pub use record::{EXPECTED_LINES, PuzzleRecord, StructuralError, parse_puzzle};
pub use report::{FileReport, SetReport, verify_dir, verify_set};
pub use validator::{check_lines, validate};
pub use variants::{VariantSet, variants_of};

/// Hard failures: something that prevents a report from being produced.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid puzzle bundle: {0}")]
    Bundle(#[from] serde_json::Error),
}

impl PuzzleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PuzzleError::Io {
            path: path.into(),
            source,
        }
    }
}
