//! Shared types for the wordclue puzzle tools.
//!
//! - [`word`] -- the lowercase alphabetic [`Word`](word::Word) token
//! - [`phonetics`] -- phoneme symbols and pronunciations with syllable counting
//! - [`token`] -- letter runs extracted from clue text
//! - [`diagnostic`] -- itemized validation failures
//! - [`character`] -- ASCII letter classification

pub mod character;
pub mod diagnostic;
pub mod phonetics;
pub mod token;
pub mod word;

pub use diagnostic::Diagnostic;
pub use phonetics::{Phoneme, Pronunciation};
pub use token::Token;
pub use word::{Word, WordError};
