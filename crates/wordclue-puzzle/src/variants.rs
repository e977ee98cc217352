// Morphological variant generation for leakage checks
//
// A fixed rule table, not a stemmer. Generated strings need not be real
// words; the validator only compares clue tokens against them. Changing the
// suffix list or the length guards changes which existing puzzles pass.

use hashbrown::HashSet;
use wordclue_core::character::char_len;

/// Suffixes appended to the base word.
pub const ADDITIVE_SUFFIXES: &[&str] = &["s", "es", "ed", "d", "er", "ers", "est", "ing", "ly"];

/// Inflectional surface forms treated as the same word as their base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    forms: HashSet<String>,
}

impl VariantSet {
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Drop `suffix` from `word` when it is present and the word is longer than
/// `min_len` characters.
fn strip<'a>(word: &'a str, suffix: &str, min_len: usize) -> Option<&'a str> {
    if char_len(word) > min_len {
        word.strip_suffix(suffix)
    } else {
        None
    }
}

/// All forms considered equivalent to `word`, including `word` itself.
///
/// Total and deterministic for any input string.
pub fn variants_of(word: &str) -> VariantSet {
    let mut forms = HashSet::with_capacity(ADDITIVE_SUFFIXES.len() + 8);
    forms.insert(word.to_string());

    for suffix in ADDITIVE_SUFFIXES {
        forms.insert(format!("{word}{suffix}"));
    }

    // The secret may itself be inflected.
    if let Some(stem) = strip(word, "s", 2) {
        forms.insert(stem.to_string());
    }
    if let Some(stem) = strip(word, "es", 3) {
        forms.insert(stem.to_string());
    }
    if let Some(stem) = strip(word, "ed", 3) {
        forms.insert(stem.to_string());
        // baked -> bake
        if let Some(without_d) = word.strip_suffix('d') {
            forms.insert(without_d.to_string());
        }
    }
    if let Some(stem) = strip(word, "d", 2) {
        forms.insert(stem.to_string());
    }
    if let Some(stem) = strip(word, "er", 3) {
        forms.insert(stem.to_string());
    }
    if let Some(stem) = strip(word, "ing", 4) {
        forms.insert(stem.to_string());
        // baking -> bake
        forms.insert(format!("{stem}e"));
    }
    if let Some(stem) = strip(word, "ly", 3) {
        forms.insert(stem.to_string());
    }

    VariantSet { forms }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(word: &str) -> Vec<String> {
        let mut forms: Vec<String> = variants_of(word).forms.into_iter().collect();
        forms.sort();
        forms
    }

    #[test]
    fn contains_word_itself() {
        for w in ["cat", "a", "", "baked", "sing"] {
            assert!(variants_of(w).contains(w), "{w}");
        }
    }

    #[test]
    fn additive_forms() {
        let v = variants_of("cat");
        for form in [
            "cats", "cates", "cated", "catd", "cater", "caters", "catest", "cating", "catly",
        ] {
            assert!(v.contains(form), "{form}");
        }
        assert!(!v.contains("catted"));
    }

    #[test]
    fn plain_word_has_only_additive_forms() {
        // no subtractive rule applies: itself plus nine suffixed forms
        assert_eq!(variants_of("cat").len(), 10);
        assert_eq!(
            sorted("cat"),
            vec![
                "cat", "catd", "cated", "cater", "caters", "cates", "catest", "cating", "catly",
                "cats"
            ]
        );
    }

    #[test]
    fn strip_plural_s() {
        assert!(variants_of("cats").contains("cat"));
        // length guard: "is" is too short
        assert!(!variants_of("is").contains("i"));
    }

    #[test]
    fn strip_es() {
        let v = variants_of("boxes");
        assert!(v.contains("box"));
        assert!(v.contains("boxe"));
        assert!(!variants_of("yes").contains("y"));
    }

    #[test]
    fn strip_ed_and_silent_e() {
        let v = variants_of("baked");
        assert!(v.contains("bak"));
        assert!(v.contains("bake"));
        // "red" is too short for the -ed rule but long enough for -d
        let red = variants_of("red");
        assert!(!red.contains("r"));
        assert!(red.contains("re"));
    }

    #[test]
    fn strip_d() {
        assert!(variants_of("used").contains("use"));
        assert!(!variants_of("ad").contains("a"));
    }

    #[test]
    fn strip_er() {
        assert!(variants_of("faster").contains("fast"));
        assert!(!variants_of("her").contains("h"));
    }

    #[test]
    fn strip_ing_and_silent_e() {
        let v = variants_of("baking");
        assert!(v.contains("bak"));
        assert!(v.contains("bake"));
        // "sing" has exactly four letters, so the -ing rule does not apply
        let sing = variants_of("sing");
        assert!(!sing.contains("s"));
        assert!(!sing.contains("se"));
    }

    #[test]
    fn strip_ly() {
        assert!(variants_of("badly").contains("bad"));
        assert!(!variants_of("fly").contains("f"));
    }

    #[test]
    fn deterministic_across_calls() {
        for w in ["walked", "runs", "singing", "glad"] {
            assert_eq!(variants_of(w), variants_of(w));
            assert_eq!(sorted(w), sorted(w));
        }
    }

    #[test]
    fn non_ascii_input_is_total() {
        let v = variants_of("caf\u{00E9}s");
        assert!(v.contains("caf\u{00E9}"));
        assert!(v.contains("caf\u{00E9}s"));
    }
}
