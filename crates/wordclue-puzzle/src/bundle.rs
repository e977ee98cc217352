// JSON bundle of a puzzle set for the web front end

use std::path::Path;

use crate::PuzzleError;
use crate::record::PuzzleRecord;

/// Serialize records as `[{"secret": ..., "clues": [...]}, ...]`.
pub fn bundle_puzzles(records: &[PuzzleRecord]) -> Result<String, PuzzleError> {
    Ok(serde_json::to_string(records)?)
}

/// Parse a bundle produced by [`bundle_puzzles`].
pub fn read_bundle(json: &str) -> Result<Vec<PuzzleRecord>, PuzzleError> {
    Ok(serde_json::from_str(json)?)
}

/// Write the bundle for `records` to `path`.
pub fn write_bundle(records: &[PuzzleRecord], path: &Path) -> Result<(), PuzzleError> {
    let json = bundle_puzzles(records)?;
    std::fs::write(path, json).map_err(|e| PuzzleError::io(path, e))?;
    tracing::info!(path = %path.display(), puzzles = records.len(), "wrote puzzle bundle");
    Ok(())
}
