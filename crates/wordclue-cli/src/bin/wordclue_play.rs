// wordclue-play: Guess the secret one-syllable word from clues.
//
// Puzzles and their clues come in random order. Type a guess, or press
// Enter (or type "hint") for another clue. When the clues run out the
// answer is shown. End-of-input (Ctrl-D) quits and prints the score.
//
// Usage:
//   wordclue-play [-p PUZZLE_DIR] [-n COUNT] [--seed N]
//
// Options:
//   -p, --puzzles DIR      Puzzle directory (default: puzzles)
//   -n, --count N          Play at most N puzzles
//   -s, --seed N           Seed the shuffle for a repeatable session
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordclue_puzzle::files::load_puzzle_dir;
use wordclue_puzzle::session::{Reply, Session};

fn main() {
    wordclue_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordclue_cli::wants_help(&args) {
        println!("wordclue-play: Guess the secret one-syllable word from clues.");
        println!();
        println!("Usage: wordclue-play [-p PUZZLE_DIR] [-n COUNT] [--seed N]");
        println!();
        println!("Type a guess, or press Enter (or type \"hint\") for another clue.");
        println!();
        println!("Options:");
        println!("  -p, --puzzles DIR      Puzzle directory (default: puzzles)");
        println!("  -n, --count N          Play at most N puzzles");
        println!("  -s, --seed N           Seed the shuffle for a repeatable session");
        println!("  -h, --help             Print this help");
        return;
    }

    let (puzzle_dir, args) = wordclue_cli::take_option(&args, "--puzzles", "-p");
    let (count, args) = wordclue_cli::take_option(&args, "--count", "-n");
    let (seed, args) = wordclue_cli::take_option(&args, "--seed", "-s");
    wordclue_cli::reject_unknown(&args);

    let puzzle_dir = wordclue_cli::resolve_path(
        puzzle_dir.as_deref(),
        wordclue_cli::ENV_PUZZLES,
        wordclue_cli::DEFAULT_PUZZLES,
    );
    let limit: Option<usize> = count.map(|v| wordclue_cli::parse_value("--count", &v));
    let rng = match seed {
        Some(v) => StdRng::seed_from_u64(wordclue_cli::parse_value("--seed", &v)),
        None => StdRng::from_entropy(),
    };

    let puzzles = load_puzzle_dir(&puzzle_dir)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()))
        .into_iter()
        .map(|(_, record)| record)
        .collect();

    let Some(mut session) = Session::new(puzzles, limit, rng) else {
        wordclue_cli::fatal(&format!("no puzzles found in {}", puzzle_dir.display()));
    };
    tracing::debug!(puzzles = session.total(), "starting session");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    print_replies(&mut out, &session.opening());

    loop {
        let _ = write!(out, "> ");
        let _ = out.flush();

        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) => {
                let _ = writeln!(out);
                let _ = writeln!(out, "You solved {} puzzles. Bye!", session.score());
                return;
            }
            Ok(_) => {}
            Err(e) => wordclue_cli::fatal(&format!("failed to read stdin: {e}")),
        }

        print_replies(&mut out, &session.respond(&line));
        if session.is_finished() {
            return;
        }
    }
}

fn print_replies<W: Write>(out: &mut W, replies: &[Reply]) {
    for reply in replies {
        let _ = match reply {
            Reply::Puzzle { solved } => {
                writeln!(out).and_then(|_| writeln!(out, "--- Puzzle ({solved} solved) ---"))
            }
            Reply::Clue(clue) => writeln!(out, "Clue: {clue}"),
            Reply::Correct => writeln!(out, "Yes!"),
            Reply::Wrong => writeln!(out, "Nope."),
            Reply::Revealed { secret } => {
                writeln!(out, "No more clues! The word was: {secret}")
            }
            Reply::Finished { score, total } => {
                writeln!(out).and_then(|_| writeln!(out, "You solved {score} of {total} puzzles!"))
            }
        };
    }
}
