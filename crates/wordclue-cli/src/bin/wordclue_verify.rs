// wordclue-verify: Check puzzle files against the word corpus.
//
// Every puzzle file is checked in full and every problem is reported:
//   path: OK
//   path: FAIL
//     - diagnostic
// followed by a summary line. Exit status is 1 if any error was found.
//
// Usage:
//   wordclue-verify [-c CORPUS] [-p PUZZLE_DIR]
//
// Options:
//   -c, --corpus PATH      Word corpus (default: words.txt)
//   -p, --puzzles DIR      Puzzle directory (default: puzzles)
//   -h, --help             Print help

use std::io::{self, Write};
use std::process;

use wordclue_corpus::WordCorpus;

fn main() {
    wordclue_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordclue_cli::wants_help(&args) {
        println!("wordclue-verify: Check puzzle files against the word corpus.");
        println!();
        println!("Usage: wordclue-verify [-c CORPUS] [-p PUZZLE_DIR]");
        println!();
        println!("Options:");
        println!("  -c, --corpus PATH      Word corpus (default: words.txt)");
        println!("  -p, --puzzles DIR      Puzzle directory (default: puzzles)");
        println!("  -h, --help             Print this help");
        println!();
        println!("Environment: WORDCLUE_CORPUS, WORDCLUE_PUZZLES");
        return;
    }

    let (corpus_path, args) = wordclue_cli::take_option(&args, "--corpus", "-c");
    let (puzzle_dir, args) = wordclue_cli::take_option(&args, "--puzzles", "-p");
    wordclue_cli::reject_unknown(&args);

    let corpus_path = wordclue_cli::resolve_path(
        corpus_path.as_deref(),
        wordclue_cli::ENV_CORPUS,
        wordclue_cli::DEFAULT_CORPUS,
    );
    let puzzle_dir = wordclue_cli::resolve_path(
        puzzle_dir.as_deref(),
        wordclue_cli::ENV_PUZZLES,
        wordclue_cli::DEFAULT_PUZZLES,
    );

    let corpus =
        WordCorpus::load(&corpus_path).unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));
    let report = wordclue_puzzle::verify_dir(&puzzle_dir, &corpus)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));

    if report.is_empty() {
        wordclue_cli::fatal(&format!(
            "no puzzle files found in {}",
            puzzle_dir.display()
        ));
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for file in &report.files {
        if file.passed() {
            let _ = writeln!(out, "{}: OK", file.path.display());
        } else {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}: FAIL", file.path.display());
            for diagnostic in &file.diagnostics {
                let _ = writeln!(out, "  - {diagnostic}");
            }
        }
    }

    let total_errors = report.total_errors();
    let _ = writeln!(out);
    let _ = writeln!(out, "{} puzzles checked, {total_errors} errors", report.len());
    let _ = out.flush();
    drop(out);

    process::exit(if total_errors > 0 { 1 } else { 0 });
}
