// Clue tokenizer
//
// Clue text is lowercased and split into maximal runs of a-z. Everything
// else (spaces, punctuation, digits, non-ASCII letters) is a boundary.

use wordclue_core::Token;
use wordclue_core::character::is_word_char;

/// Letter-run tokens of `clue`, in order of appearance.
pub fn clue_tokens(clue: &str) -> Vec<Token> {
    let lowered = clue.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0;

    for (pos, c) in lowered.chars().enumerate() {
        if is_word_char(c) {
            if current.is_empty() {
                start = pos;
            }
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(Token::new(std::mem::take(&mut current), start));
        }
    }
    if !current.is_empty() {
        tokens.push(Token::new(current, start));
    }
    tokens
}
