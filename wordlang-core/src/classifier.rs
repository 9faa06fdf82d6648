//! Word-overlap language scoring
//!
//! Every token of the query adds one point to each language whose
//! dictionary contains it, so a word known to several languages counts for
//! all of them. The language with the most points wins. Ties go to the
//! language whose name sorts last, and a best score of zero yields
//! [`Guess::Unknown`].

use crate::error::Result;
use crate::input::Input;
use crate::registry::DictionaryRegistry;
use crate::tokenizer::Tokenizer;
use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Text shown for a failed guess
pub const UNKNOWN: &str = "UNKNOWN";

/// Outcome of a classification
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// The best matching language
    Language(String),
    /// No registered language matched any word
    Unknown,
}

impl Guess {
    /// Language name, or `None` for an unknown guess
    pub fn language(&self) -> Option<&str> {
        match self {
            Guess::Language(name) => Some(name),
            Guess::Unknown => None,
        }
    }

    /// Whether no language matched
    pub fn is_unknown(&self) -> bool {
        matches!(self, Guess::Unknown)
    }

    /// Language name or `UNKNOWN`
    pub fn as_str(&self) -> &str {
        self.language().unwrap_or(UNKNOWN)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Guess {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// Per-language match counts for one query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<String, usize>,
}

impl Tally {
    /// Tally with every language of `registry` at zero
    pub fn for_registry(registry: &DictionaryRegistry) -> Self {
        Self {
            counts: registry.names().map(|name| (name.to_string(), 0)).collect(),
        }
    }

    /// Count for `language`, if it is part of the tally
    pub fn get(&self, language: &str) -> Option<usize> {
        self.counts.get(language).copied()
    }

    /// Number of languages in the tally
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the tally covers no language
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterate over `(language, count)` in ascending language order
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.counts.iter()
    }

    fn increment(&mut self, language: &str) {
        if let Some(count) = self.counts.get_mut(language) {
            *count += 1;
        }
    }

    /// Language with the highest count
    ///
    /// Among equal counts the greatest language name wins. Returns
    /// [`Guess::Unknown`] when the tally is empty or every count is zero.
    pub fn winner(&self) -> Guess {
        let best = self
            .counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| a.0.cmp(b.0)));

        match best {
            Some((language, &count)) if count > 0 => {
                log::debug!("Best match {language} with {count} words");
                Guess::Language(language.clone())
            }
            _ => Guess::Unknown,
        }
    }
}

/// Scores text against a registry
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    tokenizer: Tokenizer,
}

impl Classifier {
    /// Classifier using the standard tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifier splitting queries with `tokenizer`
    pub fn with_tokenizer(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    /// Tokenizer used for queries
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Count, per language, the query words found in its dictionary
    ///
    /// Query text is validated with the same character policy as corpus text.
    pub fn score(&self, text: &str, registry: &DictionaryRegistry) -> Result<Tally> {
        let mut tally = Tally::for_registry(registry);
        for word in self.tokenizer.validated(text)? {
            let word = word.to_lowercase();
            for (language, dictionary) in registry {
                if dictionary.contains(&word) {
                    log::trace!("{word:?} found in {language}");
                    tally.increment(language);
                }
            }
        }
        Ok(tally)
    }

    /// Most probable language of `text`
    pub fn guess(&self, text: &str, registry: &DictionaryRegistry) -> Result<Guess> {
        Ok(self.score(text, registry)?.winner())
    }

    /// Read `source` and guess its language
    pub fn guess_from_source(
        &self,
        source: impl Into<Input>,
        registry: &DictionaryRegistry,
    ) -> Result<Guess> {
        let text = source.into().into_text()?;
        self.guess(&text, registry)
    }
}
