// Whole-set verification
//
// Each file is validated on its own; the duplicate-secret fold runs over
// the per-file secrets afterwards and appends its diagnostics to the files
// that redeclare a secret. A file that cannot be read gets a single
// diagnostic and declares no secret.

use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use wordclue_core::Diagnostic;
use wordclue_corpus::WordCorpus;

use crate::PuzzleError;
use crate::files::{discover_puzzles, read_puzzle_lines};
use crate::ledger::find_duplicate_secrets;
use crate::record::significant_lines;
use crate::validator::check_lines;

/// Verdict for one puzzle file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: Vec<Diagnostic>,
}

impl FileReport {
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Verdicts for a whole puzzle set, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetReport {
    pub files: Vec<FileReport>,
    /// Secret -> first file that declared it.
    pub first_claims: HashMap<String, PathBuf>,
}

impl SetReport {
    pub fn total_errors(&self) -> usize {
        self.files.iter().map(|f| f.diagnostics.len()).sum()
    }

    pub fn passed(&self) -> bool {
        self.total_errors() == 0
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// The secret a file declares: its first non-blank line, lowercased.
fn declared_secret(lines: &[String]) -> Option<String> {
    significant_lines(lines)
        .into_iter()
        .next()
        .map(|s| s.to_lowercase())
}

/// Validate already-read puzzle files and check secrets for uniqueness.
pub fn verify_set(puzzles: &[(PathBuf, Vec<String>)], corpus: &WordCorpus) -> SetReport {
    let contents: Vec<(PathBuf, Result<Vec<String>, String>)> = puzzles
        .iter()
        .map(|(path, lines)| (path.clone(), Ok(lines.clone())))
        .collect();
    verify_contents(&contents, corpus)
}

fn verify_contents(
    puzzles: &[(PathBuf, Result<Vec<String>, String>)],
    corpus: &WordCorpus,
) -> SetReport {
    let mut files: Vec<FileReport> = puzzles
        .iter()
        .map(|(path, content)| FileReport {
            path: path.clone(),
            diagnostics: match content {
                Ok(lines) => check_lines(lines, corpus),
                Err(reason) => vec![Diagnostic::Unreadable {
                    reason: reason.clone(),
                }],
            },
        })
        .collect();

    let secrets: Vec<Option<String>> = puzzles
        .iter()
        .map(|(_, content)| content.as_deref().ok().and_then(declared_secret))
        .collect();
    let claims = find_duplicate_secrets(
        puzzles
            .iter()
            .zip(&secrets)
            .map(|((path, _), secret)| (path, secret.as_deref())),
    );
    for (index, diagnostic) in claims.duplicates {
        files[index].diagnostics.push(diagnostic);
    }

    for file in &files {
        tracing::debug!(
            path = %file.path.display(),
            errors = file.diagnostics.len(),
            "verified puzzle"
        );
    }

    SetReport {
        files,
        first_claims: claims.first_claims,
    }
}

/// Discover, read and verify every puzzle in `dir`. Only a missing or
/// unlistable directory is an error; unreadable files are reported per file.
pub fn verify_dir(dir: &Path, corpus: &WordCorpus) -> Result<SetReport, PuzzleError> {
    let puzzles: Vec<(PathBuf, Result<Vec<String>, String>)> = discover_puzzles(dir)?
        .into_iter()
        .map(|path| {
            let content = read_puzzle_lines(&path).map_err(|err| err.to_string());
            (path, content)
        })
        .collect();
    let report = verify_contents(&puzzles, corpus);
    tracing::info!(
        dir = %dir.display(),
        puzzles = report.len(),
        errors = report.total_errors(),
        "verified puzzle set"
    );
    Ok(report)
}
