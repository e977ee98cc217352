// Character classification for word and clue text

/// Single-letter words that are legitimate English words.
pub const ALLOWED_SINGLE_LETTERS: &[&str] = &["a", "i", "o"];

/// Returns `true` for the characters a [`Word`](crate::word::Word) may contain.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Returns `true` if `s` is non-empty and consists solely of `a-z`.
pub fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// Returns `true` if `s` is one of the permitted single-letter words.
pub fn is_allowed_single_letter(s: &str) -> bool {
    ALLOWED_SINGLE_LETTERS.contains(&s)
}

/// Count characters rather than bytes, so guards on word length behave the
/// same for any input the variant generator is handed.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
