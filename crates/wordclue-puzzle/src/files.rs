// Puzzle directory discovery and loading

use std::path::{Path, PathBuf};

use crate::PuzzleError;
use crate::record::{PuzzleRecord, parse_puzzle_text};

/// Extension of puzzle files.
pub const PUZZLE_EXTENSION: &str = "txt";

/// `*.txt` files directly inside `dir`, sorted by file name.
pub fn discover_puzzles(dir: &Path) -> Result<Vec<PathBuf>, PuzzleError> {
    let entries = std::fs::read_dir(dir).map_err(|e| PuzzleError::io(dir, e))?;
    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PuzzleError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == PUZZLE_EXTENSION) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Read a puzzle file as raw lines.
pub fn read_puzzle_lines(path: &Path) -> std::io::Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Parse every puzzle in `dir`. Files that cannot be read or are too short
/// to parse are skipped with a warning; use the validator to find out why.
pub fn load_puzzle_dir(dir: &Path) -> Result<Vec<(PathBuf, PuzzleRecord)>, PuzzleError> {
    let mut puzzles = Vec::new();
    for path in discover_puzzles(dir)? {
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable puzzle");
                continue;
            }
        };
        match parse_puzzle_text(&text) {
            Ok(record) => puzzles.push((path, record)),
            Err(err) => tracing::warn!(path = %path.display(), %err, "skipping puzzle"),
        }
    }
    tracing::debug!(dir = %dir.display(), puzzles = puzzles.len(), "loaded puzzles");
    Ok(puzzles)
}
