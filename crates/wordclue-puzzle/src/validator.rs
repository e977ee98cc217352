// Puzzle validator
//
// Every check runs and every failure is reported, in this order:
//   1. line count
//   2. secret is alphabetic
//   3. secret is in the corpus
//   4. each clue has at least one token
//   5. each token is in the corpus
//   6. no token is the secret or one of its variants
// Steps 5 and 6 are interleaved per token so diagnostics follow clue order.

use wordclue_core::Diagnostic;
use wordclue_core::character::is_word;
use wordclue_corpus::WordCorpus;

use crate::record::{EXPECTED_LINES, PuzzleRecord, parse_puzzle};
use crate::tokenizer::clue_tokens;
use crate::variants::variants_of;

/// Check one parsed puzzle against `corpus`. An empty result means pass.
pub fn validate(record: &PuzzleRecord, corpus: &WordCorpus) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    let actual = record.line_count();
    if actual != EXPECTED_LINES {
        diagnostics.push(Diagnostic::LineCount {
            expected: EXPECTED_LINES,
            actual,
        });
    }

    let secret = record.secret();
    if !is_word(secret) {
        diagnostics.push(Diagnostic::SecretNotAlphabetic {
            secret: secret.to_string(),
        });
    }
    if !corpus.contains(secret) {
        diagnostics.push(Diagnostic::SecretNotInCorpus {
            secret: secret.to_string(),
        });
    }

    let banned = variants_of(secret);

    for (i, clue) in record.clues().iter().enumerate() {
        let index = i + 1;
        let tokens = clue_tokens(clue);
        if tokens.is_empty() {
            diagnostics.push(Diagnostic::EmptyClue { clue: index });
            continue;
        }
        for token in tokens {
            if !corpus.contains(&token.text) {
                diagnostics.push(Diagnostic::TokenNotInCorpus {
                    clue: index,
                    token: token.text.clone(),
                });
            }
            if banned.contains(&token.text) {
                diagnostics.push(Diagnostic::Leak {
                    clue: index,
                    token: token.text,
                });
            }
        }
    }

    diagnostics
}

/// Parse raw file lines and validate the result.
///
/// A file too short to parse yields only its line-count diagnostic.
pub fn check_lines<I, S>(raw_lines: I, corpus: &WordCorpus) -> Vec<Diagnostic>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    match parse_puzzle(raw_lines) {
        Ok(record) => validate(&record, corpus),
        Err(err) => vec![err.to_diagnostic()],
    }
}
