// wordclue-build-corpus: Build the corpus of common one-syllable words.
//
// Combines a CMU-format pronouncing dictionary, a Zipf frequency table and a
// reference wordlist, then writes the admitted words (sorted, one per line).
//
// Usage:
//   wordclue-build-corpus [OPTIONS]
//
// Options:
//   -d, --dict PATH        Pronouncing dictionary (default: cmudict.dict)
//   -f, --freq PATH        Frequency table, "word zipf" per line (default: frequencies.tsv)
//   -w, --words PATH       Reference wordlist (default: /usr/share/dict/words)
//   -o, --output PATH      Corpus file to write (default: words.txt)
//   -z, --min-zipf N       Minimum Zipf frequency (default: 2.0)
//   -k, --check WORD       Report on WORD after building (repeatable)
//   -h, --help             Print help

use std::io::{self, Write};

use wordclue_core::phonetics::any_monosyllabic;
use wordclue_corpus::{
    CorpusBuildConfig, FrequencySource, FrequencyTable, PronouncingDictionary,
    ReferenceWordlist, build_corpus_with_stats, is_candidate,
};

fn main() {
    wordclue_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordclue_cli::wants_help(&args) {
        println!("wordclue-build-corpus: Build the corpus of common one-syllable words.");
        println!();
        println!("Usage: wordclue-build-corpus [OPTIONS]");
        println!();
        println!("Options:");
        println!("  -d, --dict PATH        Pronouncing dictionary (default: cmudict.dict)");
        println!("  -f, --freq PATH        Frequency table, \"word zipf\" per line (default: frequencies.tsv)");
        println!("  -w, --words PATH       Reference wordlist (default: /usr/share/dict/words)");
        println!("  -o, --output PATH      Corpus file to write (default: words.txt)");
        println!("  -z, --min-zipf N       Minimum Zipf frequency (default: 2.0)");
        println!("  -k, --check WORD       Report on WORD after building (repeatable)");
        println!("  -h, --help             Print this help");
        println!();
        println!("Environment: WORDCLUE_DICT, WORDCLUE_FREQ, WORDCLUE_WORDS, WORDCLUE_CORPUS");
        return;
    }

    let (dict, args) = wordclue_cli::take_option(&args, "--dict", "-d");
    let (freq, args) = wordclue_cli::take_option(&args, "--freq", "-f");
    let (words, args) = wordclue_cli::take_option(&args, "--words", "-w");
    let (output, args) = wordclue_cli::take_option(&args, "--output", "-o");
    let (min_zipf, args) = wordclue_cli::take_option(&args, "--min-zipf", "-z");
    let (checks, args) = wordclue_cli::take_option_values(&args, "--check", "-k");
    wordclue_cli::reject_unknown(&args);

    let defaults = CorpusBuildConfig::default();
    let config = CorpusBuildConfig {
        dictionary_path: wordclue_cli::resolve_path(
            dict.as_deref(),
            "WORDCLUE_DICT",
            &defaults.dictionary_path.to_string_lossy(),
        ),
        frequency_path: wordclue_cli::resolve_path(
            freq.as_deref(),
            "WORDCLUE_FREQ",
            &defaults.frequency_path.to_string_lossy(),
        ),
        reference_path: wordclue_cli::resolve_path(
            words.as_deref(),
            "WORDCLUE_WORDS",
            &defaults.reference_path.to_string_lossy(),
        ),
        min_zipf: min_zipf
            .map(|v| wordclue_cli::parse_value("--min-zipf", &v))
            .unwrap_or(defaults.min_zipf),
    };
    let output = wordclue_cli::resolve_path(
        output.as_deref(),
        wordclue_cli::ENV_CORPUS,
        wordclue_cli::DEFAULT_CORPUS,
    );

    let reference = ReferenceWordlist::load(&config.reference_path)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));
    let dictionary = PronouncingDictionary::load(&config.dictionary_path)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));
    let frequency = FrequencyTable::load(&config.frequency_path)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));

    let (corpus, stats) =
        build_corpus_with_stats(&dictionary, &frequency, &reference, config.min_zipf);
    corpus
        .save(&output)
        .unwrap_or_else(|e| wordclue_cli::fatal(&e.to_string()));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let _ = writeln!(out, "Reference wordlist lowercase words: {}", stats.reference_words);
    let _ = writeln!(out, "One-syllable candidates: {}", stats.one_syllable);
    let _ = writeln!(
        out,
        "After frequency filter (zipf >= {}): {}",
        config.min_zipf, stats.admitted
    );
    let _ = writeln!(out, "Wrote {} words to {}", corpus.len(), output.display());

    for word in &checks {
        let word = word.trim().to_lowercase();
        let one_syllable = is_candidate(&word, &reference)
            && dictionary.get(&word).is_some_and(any_monosyllabic);
        let _ = writeln!(
            out,
            "  {word}: in_corpus={}, zipf={:.2}, one_syllable={one_syllable}",
            corpus.contains(&word),
            frequency.zipf(&word),
        );
    }
}
