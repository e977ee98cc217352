// Phoneme symbols and pronunciations
//
// Symbols follow the ARPAbet convention of the CMU Pronouncing Dictionary:
// vowels carry a trailing stress digit (AE1, AH0, ER2), consonants do not.

use std::fmt;
use std::str::FromStr;

/// One phoneme symbol, e.g. `K`, `AE1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phoneme(String);

impl Phoneme {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A symbol is vocalic (a syllable nucleus) if its last character is a
    /// decimal digit.
    pub fn is_vocalic(&self) -> bool {
        self.0.chars().last().is_some_and(|c| c.is_ascii_digit())
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One reading of a word as an ordered sequence of phonemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pronunciation {
    phonemes: Vec<Phoneme>,
}

impl Pronunciation {
    pub fn new(phonemes: Vec<Phoneme>) -> Self {
        Self { phonemes }
    }

    pub fn phonemes(&self) -> &[Phoneme] {
        &self.phonemes
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    /// Number of vocalic phonemes.
    pub fn syllable_count(&self) -> usize {
        self.phonemes.iter().filter(|p| p.is_vocalic()).count()
    }

    pub fn is_monosyllabic(&self) -> bool {
        self.syllable_count() == 1
    }
}

impl FromStr for Pronunciation {
    type Err = std::convert::Infallible;

    /// Parse whitespace-separated phoneme symbols.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split_whitespace().map(Phoneme::new).collect()))
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.phonemes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Whether any of `readings` has exactly one syllable.
///
/// A word with an alternate multi-syllable reading still qualifies.
pub fn any_monosyllabic(readings: &[Pronunciation]) -> bool {
    readings.iter().any(Pronunciation::is_monosyllabic)
}
