//! Word splitting and character validation
//!
//! Text accepted by the dictionaries may contain only Latin letters, the
//! hyphen, whitespace and the punctuation marks `. , ; : ?`. Words are the
//! runs of characters between delimiters; a hyphen never splits a word, so
//! `full-time` stays a single token. Hyphens at the edges of a run are
//! dropped, and a run of hyphens alone is not a word.

use crate::error::{Error, Result};
use std::sync::OnceLock;

/// Punctuation that separates words in the standard tokenizer
pub const STANDARD_DELIMITERS: [char; 5] = [',', '.', '?', ':', ';'];

/// Punctuation permitted in text besides letters, hyphen and whitespace
const PERMITTED_PUNCTUATION: [char; 5] = ['.', ',', ';', ':', '?'];

static STANDARD: OnceLock<Tokenizer> = OnceLock::new();

/// Returns true if `ch` may appear in dictionary or query text
pub fn is_permitted(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ch == '-'
        || ch.is_whitespace()
        || PERMITTED_PUNCTUATION.contains(&ch)
}

/// Finds the first character outside the permitted set
///
/// Returns the byte offset and the character.
pub fn find_illegal(text: &str) -> Option<(usize, char)> {
    text.char_indices().find(|&(_, ch)| !is_permitted(ch))
}

/// Checks that every character of `text` is permitted
pub fn validate(text: &str) -> Result<()> {
    match find_illegal(text) {
        Some((position, character)) => Err(Error::InvalidInput {
            text: text.to_string(),
            character,
            position,
        }),
        None => Ok(()),
    }
}

/// Splits `text` with the standard delimiter policy
///
/// No validation is performed; see [`Tokenizer::validated`].
pub fn tokenize(text: &str) -> Words<'_> {
    Tokenizer::standard().words(text)
}

/// Delimiter policy used to split text into words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer {
    delimiters: Box<[char]>,
    split_on_whitespace: bool,
}

impl Tokenizer {
    /// Tokenizer splitting on `, . ? : ;` and whitespace
    pub fn new() -> Self {
        Self::with_delimiters(&STANDARD_DELIMITERS, true)
    }

    /// Tokenizer with a custom delimiter set
    pub fn with_delimiters(delimiters: &[char], split_on_whitespace: bool) -> Self {
        Self {
            delimiters: delimiters.into(),
            split_on_whitespace,
        }
    }

    /// Shared instance of the standard tokenizer
    pub fn standard() -> &'static Tokenizer {
        STANDARD.get_or_init(Tokenizer::new)
    }

    /// Whether `ch` separates words under this policy
    pub fn is_delimiter(&self, ch: char) -> bool {
        (self.split_on_whitespace && ch.is_whitespace()) || self.delimiters.contains(&ch)
    }

    /// Lazily splits `text` into words, preserving their casing
    pub fn words<'a>(&'a self, text: &'a str) -> Words<'a> {
        Words {
            rest: text,
            tokenizer: self,
        }
    }

    /// Validates `text`, then splits it into words
    pub fn validated<'a>(&'a self, text: &'a str) -> Result<Words<'a>> {
        validate(text)?;
        Ok(self.words(text))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the words of a text
///
/// A clone continues independently from the current position; call
/// [`Tokenizer::words`] again to start over.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
    tokenizer: &'a Tokenizer,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let tokenizer = self.tokenizer;
        loop {
            let start = self.rest.find(|ch: char| !tokenizer.is_delimiter(ch))?;
            let rest = &self.rest[start..];
            let end = rest
                .find(|ch: char| tokenizer.is_delimiter(ch))
                .unwrap_or(rest.len());
            let (run, tail) = rest.split_at(end);
            self.rest = tail;

            let word = run.trim_matches('-');
            if !word.is_empty() {
                return Some(word);
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
