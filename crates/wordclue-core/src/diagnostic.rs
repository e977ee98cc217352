// Validation diagnostics
//
// Every failure the puzzle validator finds is a value of this type. The
// `Display` impl is the human-readable line printed under a failing file.

use std::fmt;
use std::path::PathBuf;

/// One validation failure. Clue indices are 1-based and follow file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The file could not be read as text; nothing else was checked.
    Unreadable { reason: String },
    LineCount { expected: usize, actual: usize },
    SecretNotAlphabetic { secret: String },
    SecretNotInCorpus { secret: String },
    EmptyClue { clue: usize },
    TokenNotInCorpus { clue: usize, token: String },
    Leak { clue: usize, token: String },
    DuplicateSecret { secret: String, first: PathBuf },
}

impl Diagnostic {
    /// The clue this diagnostic points at, if any.
    pub fn clue_index(&self) -> Option<usize> {
        match self {
            Diagnostic::EmptyClue { clue }
            | Diagnostic::TokenNotInCorpus { clue, .. }
            | Diagnostic::Leak { clue, .. } => Some(*clue),
            _ => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Unreadable { reason } => write!(f, "Cannot read file: {reason}"),
            Diagnostic::LineCount { expected, actual } => {
                write!(f, "Expected {expected} lines, got {actual}")
            }
            Diagnostic::SecretNotAlphabetic { secret } => {
                write!(f, "Secret word '{secret}' contains non-alpha characters")
            }
            Diagnostic::SecretNotInCorpus { secret } => {
                write!(f, "Secret word '{secret}' is not in the word corpus")
            }
            Diagnostic::EmptyClue { clue } => write!(f, "Clue {clue}: empty clue"),
            Diagnostic::TokenNotInCorpus { clue, token } => {
                write!(f, "Clue {clue}: '{token}' is not in the word corpus")
            }
            Diagnostic::Leak { clue, token } => {
                write!(f, "Clue {clue}: '{token}' is the secret or a variant of it")
            }
            Diagnostic::DuplicateSecret { secret, first } => {
                write!(f, "Duplicate secret '{secret}' (also in {})", first.display())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_message() {
        let d = Diagnostic::LineCount {
            expected: 11,
            actual: 9,
        };
        assert_eq!(d.to_string(), "Expected 11 lines, got 9");
        assert_eq!(d.clue_index(), None);
    }

    #[test]
    fn leak_message_cites_clue_and_token() {
        let d = Diagnostic::Leak {
            clue: 3,
            token: "cats".to_string(),
        };
        assert_eq!(d.to_string(), "Clue 3: 'cats' is the secret or a variant of it");
        assert_eq!(d.clue_index(), Some(3));
    }

    #[test]
    fn duplicate_message_names_first_file() {
        let d = Diagnostic::DuplicateSecret {
            secret: "cat".to_string(),
            first: PathBuf::from("puzzles/001.txt"),
        };
        assert_eq!(d.to_string(), "Duplicate secret 'cat' (also in puzzles/001.txt)");
    }

    #[test]
    fn unreadable_message_carries_reason() {
        let d = Diagnostic::Unreadable {
            reason: "stream did not contain valid UTF-8".to_string(),
        };
        assert_eq!(d.to_string(), "Cannot read file: stream did not contain valid UTF-8");
        assert_eq!(d.clue_index(), None);
    }

    #[test]
    fn secret_messages() {
        assert_eq!(
            Diagnostic::SecretNotAlphabetic {
                secret: "c4t".into()
            }
            .to_string(),
            "Secret word 'c4t' contains non-alpha characters"
        );
        assert_eq!(
            Diagnostic::SecretNotInCorpus {
                secret: "zzz".into()
            }
            .to_string(),
            "Secret word 'zzz' is not in the word corpus"
        );
    }

    #[test]
    fn clue_messages() {
        assert_eq!(Diagnostic::EmptyClue { clue: 10 }.to_string(), "Clue 10: empty clue");
        assert_eq!(
            Diagnostic::TokenNotInCorpus {
                clue: 1,
                token: "zebra".into()
            }
            .to_string(),
            "Clue 1: 'zebra' is not in the word corpus"
        );
    }
}
