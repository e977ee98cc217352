// wordclue-bundle: Export a puzzle directory as one JSON file.
//
// Writes `[{"secret": ..., "clues": [...]}, ...]` in file-name order, the
// format the web front end loads.
//
// Usage:
//   wordclue-bundle [-p PUZZLE_DIR] [-o OUTPUT]
//
// Options:
//   -p, --puzzles DIR      Puzzle directory (default: puzzles)
//   -o, --output PATH      JSON file to write (default: puzzles.json)
//   -h, --help             Print help

use wordclue_puzzle::PuzzleRecord;
use wordclue_puzzle::bundle::write_bundle;
use wordclue_puzzle::files::load_puzzle_dir;

/// Default bundle file.
const DEFAULT_OUTPUT: &str = "puzzles.json";

fn main() {
    wordclue_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordclue_cli::wants_help(&args) {
        println!("wordclue-bundle: Export a puzzle directory as one JSON file.");
        println!();
        println!("Usage: wordclue-bundle [-p PUZZLE_DIR] [-o OUTPUT]");
        println!();
        println!("Options:");
        println!("  -p, --puzzles DIR      Puzzle directory (default: puzzles)");
        println!("  -o, --output PATH      JSON file to write (default: puzzles.json)");
        println!("  -h, --help             Print this help");
        return;
    }

    let (puzzle_dir, args) = wordclue_cli::take_option(&args, "--puzzles", "-p");
    let (output, args) = wordclue_cli::take_option(&args, "--output", "-o");
    wordclue_cli::reject_unknown(&args);

    let puzzle_dir = wordclue_cli::resolve_path(
        puzzle_dir.as_deref(),
        wordclue_cli::ENV_PUZZLES,
        wordclue_cli::DEFAULT_PUZZLES,
    );
    let output = std::path::PathBuf::from(output.as_deref().unwrap_or(DEFAULT_OUTPUT));

    let records: Vec<PuzzleRecord> = load_puzzle_dir(&puzzle_dir)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()))
        .into_iter()
        .map(|(_, record)| record)
        .collect();

    write_bundle(&records, &output).unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));
    println!("wrote {} puzzles to {}", records.len(), output.display());
}
