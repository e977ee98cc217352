// Letter-run tokens extracted from clue text

/// A maximal run of `a-z` letters found in (lowercased) clue text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The letters of the token.
    pub text: String,

    /// Character offset of the first letter within the lowercased clue.
    pub pos: usize,

    /// Length of the token in characters.
    pub token_len: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let token_len = text.chars().count();
        Self {
            text,
            pos,
            token_len,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_new() {
        let tok = Token::new("dog", 2);
        assert_eq!(tok.text, "dog");
        assert_eq!(tok.token_len, 3);
        assert_eq!(tok.pos, 2);
    }

    #[test]
    fn token_clone() {
        let tok = Token::new("sun", 0);
        assert_eq!(tok.clone(), tok);
    }
}
