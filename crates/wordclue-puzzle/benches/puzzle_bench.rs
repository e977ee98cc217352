// Criterion benchmarks for wordclue-puzzle.
//
// Uses a small synthetic corpus and puzzle set so no data files are needed.
//
// Run:
//   cargo bench -p wordclue-puzzle

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use wordclue_corpus::WordCorpus;
use wordclue_puzzle::{PuzzleRecord, validate, variants_of, verify_set};

const WORDS: &[&str] = &[
    "a", "bake", "baked", "bark", "cat", "dog", "fur", "has", "it", "likes", "milk", "pet",
    "purrs", "sing", "sleeps", "small", "soft", "sun", "the", "walked",
];

const CLUES: &[&str] = &[
    "a small pet",
    "it purrs",
    "it has fur",
    "it likes milk",
    "a dog likes it",
    "soft fur",
    "it sleeps",
    "the pet purrs",
    "small, soft",
    "the dog has a pet",
];

fn corpus() -> WordCorpus {
    WordCorpus::try_from_strs(WORDS).expect("valid words")
}

fn record() -> PuzzleRecord {
    PuzzleRecord::new("cat", CLUES.iter().map(|c| c.to_string()).collect())
}

/// Variant generation for every corpus word.
fn bench_variants(c: &mut Criterion) {
    c.bench_function("variants_of_20_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(variants_of(word));
            }
        });
    });
}

/// Validate one clean eleven-line puzzle.
fn bench_validate(c: &mut Criterion) {
    let corpus = corpus();
    let record = record();
    c.bench_function("validate_one_puzzle", |b| {
        b.iter(|| std::hint::black_box(validate(&record, &corpus)));
    });
}

/// Verify 500 files sharing five secrets, including the duplicate fold.
fn bench_verify_set(c: &mut Criterion) {
    let corpus = corpus();
    let secrets = ["cat", "dog", "sun", "bark", "milk"];
    let puzzles: Vec<(PathBuf, Vec<String>)> = (0..500)
        .map(|i| {
            let mut lines = vec![secrets[i % secrets.len()].to_string()];
            lines.extend(CLUES.iter().map(|c| c.to_string()));
            (PathBuf::from(format!("puzzles/{i:04}.txt")), lines)
        })
        .collect();

    c.bench_function("verify_set_500_files", |b| {
        b.iter(|| std::hint::black_box(verify_set(&puzzles, &corpus)));
    });
}

criterion_group!(benches, bench_variants, bench_validate, bench_verify_set);
criterion_main!(benches);
