//! Verification of a puzzle directory on disk.

use std::fs;
use std::path::Path;

use wordclue_corpus::WordCorpus;
use wordclue_puzzle::files::load_puzzle_dir;
use wordclue_puzzle::{PuzzleError, verify_dir};

const CORPUS: &str = "a\nand\nbark\ncat\ncats\ndog\nfur\nhas\nit\nlikes\nmilk\npet\npurrs\nsleeps\nsmall\nsoft\nthat\nthe\n";

const CAT: &str = "Cat
a small pet
it purrs
it has fur

it likes milk
a dog likes it
soft fur
it sleeps
a pet that purrs
small and soft
the dog has a pet
";

const DOG: &str = "dog
a pet
it has fur
it likes a cat
it sleeps
a bark
the pet barks
it has soft fur
a small pet
it likes milk
it purrs
";

fn write_set(dir: &Path) {
    fs::write(dir.join("001-cat.txt"), CAT).unwrap();
    fs::write(dir.join("002-dog.txt"), DOG).unwrap();
    fs::write(dir.join("003-short.txt"), "sun\n").unwrap();
    fs::write(dir.join("004-again.txt"), CAT.replace("it purrs", "the cats purr")).unwrap();
    fs::write(dir.join("notes.md"), "not a puzzle\n").unwrap();
}

fn corpus(dir: &Path) -> WordCorpus {
    let path = dir.join("words.txt");
    fs::write(&path, CORPUS).unwrap();
    WordCorpus::load(&path).unwrap()
}

#[test]
fn reports_every_file_in_order() {
    let root = tempfile::tempdir().unwrap();
    let puzzles = root.path().join("puzzles");
    fs::create_dir(&puzzles).unwrap();
    write_set(&puzzles);
    let corpus = corpus(root.path());

    let report = verify_dir(&puzzles, &corpus).unwrap();
    let names: Vec<String> = report
        .files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["001-cat.txt", "002-dog.txt", "003-short.txt", "004-again.txt"]);

    let messages = |i: usize| -> Vec<String> {
        report.files[i]
            .diagnostics
            .iter()
            .map(|d| d.to_string())
            .collect()
    };

    // clean despite the stray blank line and mixed-case secret
    assert!(report.files[0].passed(), "{:?}", messages(0));

    assert_eq!(messages(1), vec!["Clue 6: 'barks' is not in the word corpus"]);

    assert_eq!(messages(2), vec!["Expected 11 lines, got 1"]);

    let again = messages(3);
    let first = puzzles.join("001-cat.txt");

    assert_eq!(
        again,
        vec![
            "Clue 2: 'cats' is the secret or a variant of it".to_string(),
            "Clue 2: 'purr' is not in the word corpus".to_string(),
            format!("Duplicate secret 'cat' (also in {})", first.display()),
        ]
    );

    assert_eq!(report.total_errors(), 5);
    assert!(!report.passed());
    assert_eq!(report.first_claims["cat"], first);
}

#[test]
fn non_utf8_file_is_reported_and_siblings_still_checked() {
    let root = tempfile::tempdir().unwrap();
    let puzzles = root.path().join("puzzles");
    fs::create_dir(&puzzles).unwrap();
    fs::write(puzzles.join("01.txt"), DOG.replace("the pet barks", "the pet has fur")).unwrap();
    fs::write(puzzles.join("02.txt"), b"caf\xe9\na dog\n").unwrap();
    let corpus = corpus(root.path());

    let report = verify_dir(&puzzles, &corpus).unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.files[0].passed());
    let unreadable: Vec<String> = report.files[1]
        .diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(unreadable.len(), 1);
    assert!(unreadable[0].starts_with("Cannot read file: "), "{unreadable:?}");
    assert_eq!(report.total_errors(), 1);
    assert_eq!(report.first_claims.len(), 1);
}

#[test]
fn missing_directory_is_hard_error() {
    let root = tempfile::tempdir().unwrap();
    let corpus = corpus(root.path());
    let err = verify_dir(&root.path().join("nope"), &corpus).unwrap_err();
    assert!(matches!(err, PuzzleError::Io { .. }));
}

#[test]
fn loaded_records_match_files() {
    let root = tempfile::tempdir().unwrap();
    write_set(root.path());
    let loaded = load_puzzle_dir(root.path()).unwrap();
    let secrets: Vec<&str> = loaded.iter().map(|(_, r)| r.secret()).collect();
    assert_eq!(secrets, vec!["cat", "dog", "cat"]);
    assert_eq!(loaded[0].1.clues().len(), 10);
}
