// wordclue-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;

/// Default corpus file.
pub const DEFAULT_CORPUS: &str = "words.txt";

/// Default puzzle directory.
pub const DEFAULT_PUZZLES: &str = "puzzles";

/// Environment variable overriding the corpus path.
pub const ENV_CORPUS: &str = "WORDCLUE_CORPUS";

/// Environment variable overriding the puzzle directory.
pub const ENV_PUZZLES: &str = "WORDCLUE_PUZZLES";

/// Route `tracing` output to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Resolve a path setting.
///
/// Search order:
/// 1. `flag` value (if provided)
/// 2. environment variable `env`
/// 3. `default`
pub fn resolve_path(flag: Option<&str>, env: &str, default: &str) -> PathBuf {
    if let Some(p) = flag {
        return PathBuf::from(p);
    }
    match std::env::var(env) {
        Ok(p) if !p.is_empty() => PathBuf::from(p),
        _ => PathBuf::from(default),
    }
}

/// Remove every occurrence of a valued option from `args`.
///
/// Accepts `--long=VALUE`, `--long VALUE` and `-s VALUE`. Returns
/// `(values, remaining_args)`; exits with an error if the option is given
/// without a value.
pub fn take_option_values(args: &[String], long: &str, short: &str) -> (Vec<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut values = Vec::new();
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            values.push(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                values.push(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (values, remaining)
}

/// Like [`take_option_values`], keeping the last value given.
pub fn take_option(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let (mut values, remaining) = take_option_values(args, long, short);
    (values.pop(), remaining)
}

/// Parse an option value, exiting with an error if it does not parse.
pub fn parse_value<T: std::str::FromStr>(name: &str, value: &str) -> T {
    value
        .parse()
        .unwrap_or_else(|_| fatal(&format!("invalid value for {name}: {value:?}")))
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Exit with an error naming the first argument nobody consumed.
pub fn reject_unknown(args: &[String]) {
    if let Some(arg) = args.first() {
        fatal(&format!("unexpected argument: {arg} (try --help)"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn take_option_forms() {
        let (v, rest) = take_option(&args(&["--corpus=a.txt", "x"]), "--corpus", "-c");
        assert_eq!(v.as_deref(), Some("a.txt"));
        assert_eq!(rest, args(&["x"]));

        let (v, rest) = take_option(&args(&["-c", "b.txt"]), "--corpus", "-c");
        assert_eq!(v.as_deref(), Some("b.txt"));
        assert!(rest.is_empty());

        let (v, _) = take_option(&args(&["--corpus", "c.txt"]), "--corpus", "-c");
        assert_eq!(v.as_deref(), Some("c.txt"));
    }

    #[test]
    fn last_value_wins() {
        let (v, _) = take_option(&args(&["-c", "a", "-c", "b"]), "--corpus", "-c");
        assert_eq!(v.as_deref(), Some("b"));
    }

    #[test]
    fn repeated_values_collected() {
        let (v, rest) =
            take_option_values(&args(&["--check", "cat", "-v", "--check=dog"]), "--check", "-k");
        assert_eq!(v, args(&["cat", "dog"]));
        assert_eq!(rest, args(&["-v"]));
    }

    #[test]
    fn absent_option() {
        let (v, rest) = take_option(&args(&["--help"]), "--corpus", "-c");
        assert!(v.is_none());
        assert!(wants_help(&rest));
    }

    #[test]
    fn flag_beats_default() {
        let p = resolve_path(Some("mine.txt"), "WORDCLUE_TEST_UNSET_VARIABLE", DEFAULT_CORPUS);
        assert_eq!(p, PathBuf::from("mine.txt"));
        let p = resolve_path(None, "WORDCLUE_TEST_UNSET_VARIABLE", DEFAULT_CORPUS);
        assert_eq!(p, PathBuf::from("words.txt"));
    }
}
