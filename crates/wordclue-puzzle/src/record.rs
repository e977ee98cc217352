// Puzzle record model
//
// A puzzle file is one secret followed by ten clues, one per line. Lines
// are trimmed and blank lines dropped before anything is counted.

use serde::{Deserialize, Serialize};
use wordclue_core::{Diagnostic, Word, WordError};

/// Non-blank lines in a well-formed puzzle: the secret plus ten clues.
pub const EXPECTED_LINES: usize = 11;

/// A puzzle file too short to hold a secret and at least one clue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructuralError {
    #[error("Expected {EXPECTED_LINES} lines, got {count}")]
    TooFewLines { count: usize },
}

impl StructuralError {
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            StructuralError::TooFewLines { count } => Diagnostic::LineCount {
                expected: EXPECTED_LINES,
                actual: *count,
            },
        }
    }
}

/// One puzzle: a secret and its clues in file order.
///
/// The secret is lowercased but otherwise kept as written, so a malformed
/// secret can still be reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRecord")]
pub struct PuzzleRecord {
    secret: String,
    clues: Vec<String>,
}

/// Deserialized fields, normalized through [`PuzzleRecord::new`].
#[derive(Deserialize)]
struct RawRecord {
    secret: String,
    clues: Vec<String>,
}

impl From<RawRecord> for PuzzleRecord {
    fn from(raw: RawRecord) -> Self {
        Self::new(raw.secret, raw.clues)
    }
}

impl PuzzleRecord {
    pub fn new(secret: impl AsRef<str>, clues: Vec<String>) -> Self {
        Self {
            secret: secret.as_ref().trim().to_lowercase(),
            clues,
        }
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// The secret as a validated [`Word`].
    pub fn secret_word(&self) -> Result<Word, WordError> {
        Word::new(self.secret.as_str())
    }

    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Non-blank lines the record was parsed from.
    pub fn line_count(&self) -> usize {
        1 + self.clues.len()
    }
}

/// Trimmed, non-blank lines of `raw_lines`.
pub fn significant_lines<I, S>(raw_lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_lines
        .into_iter()
        .map(|l| l.as_ref().trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Build a record from raw file lines.
///
/// Any line count of two or more yields a record; the validator reports a
/// count other than [`EXPECTED_LINES`]. Fewer than two lines leaves nothing
/// to validate.
pub fn parse_puzzle<I, S>(raw_lines: I) -> Result<PuzzleRecord, StructuralError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = significant_lines(raw_lines);
    if lines.len() < 2 {
        return Err(StructuralError::TooFewLines { count: lines.len() });
    }
    let clues = lines.split_off(1);
    Ok(PuzzleRecord::new(&lines[0], clues))
}

/// [`parse_puzzle`] over the lines of `text`.
pub fn parse_puzzle_text(text: &str) -> Result<PuzzleRecord, StructuralError> {
    parse_puzzle(text.lines())
}
