//! Per-language word set

use crate::error::Result;
use crate::tokenizer::{self, Words};
use std::collections::hash_set;
use std::collections::HashSet;

/// Set of known lowercase words for one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    name: String,
    words: HashSet<String>,
}

impl Dictionary {
    /// Create an empty dictionary for the language `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            words: HashSet::new(),
        }
    }

    /// Language name of this dictionary
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a single word, ignoring case
    pub fn add(&mut self, word: &str) -> &mut Self {
        self.words.insert(word.to_lowercase());
        self
    }

    /// Add every word of `text`
    ///
    /// The whole text is validated before anything is inserted, so on
    /// [`Error::InvalidInput`](crate::Error::InvalidInput) the dictionary is
    /// left untouched.
    pub fn add_all(&mut self, text: &str) -> Result<&mut Self> {
        tokenizer::validate(text)?;
        self.insert_words(tokenizer::tokenize(text));
        Ok(self)
    }

    /// Insert already validated words
    pub(crate) fn insert_words(&mut self, words: Words<'_>) {
        let before = self.words.len();
        for word in words {
            self.add(word);
        }
        log::debug!(
            "Dictionary {} grew from {} to {} words",
            self.name,
            before,
            self.words.len()
        );
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stored (lowercase) words in no particular order
    pub fn iter(&self) -> hash_set::Iter<'_, String> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = hash_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use proptest::prelude::*;

    #[test]
    fn test_add_ignores_case() {
        let mut english = Dictionary::new("ENGLISH");
        english.add("Hello");
        assert!(english.contains("hello"));
        assert!(english.contains("HELLO"));
        assert_eq!(english.iter().collect::<Vec<_>>(), vec!["hello"]);
    }

    #[test]
    fn test_add_does_not_duplicate() {
        let mut english = Dictionary::new("ENGLISH");
        english.add("Hello").add("HELLO");
        assert_eq!(english.len(), 1);
    }

    #[test]
    fn test_add_all() {
        let mut english = Dictionary::new("ENGLISH");
        english.add_all("Hello, bob. how are you").unwrap();
        assert!(english.contains("hello"));
        assert!(english.contains("Bob"));
        assert!(english.contains("how"));
        assert_eq!(english.len(), 5);
    }

    #[test]
    fn test_add_all_keeps_hyphenated_words() {
        let mut english = Dictionary::new("ENGLISH");
        english.add_all("A full-time job").unwrap();
        assert!(english.contains("Full-Time"));
        assert!(!english.contains("full"));
    }

    #[test]
    fn test_add_all_rejects_illegal_characters() {
        let mut english = Dictionary::new("ENGLISH");
        english.add("existing");

        let err = english.add_all("Hello bob$").unwrap_err();
        assert!(matches!(err, Error::InvalidInput { character: '$', .. }));
        assert_eq!(english.len(), 1);
        assert!(!english.contains("hello"));
    }

    #[test]
    fn test_new_dictionary_is_empty() {
        let french = Dictionary::new("FRENCH");
        assert_eq!(french.name(), "FRENCH");
        assert!(french.is_empty());
        assert_eq!(french.len(), 0);
        assert!(!french.contains("bonjour"));
    }

    #[test]
    fn test_iterate_over_words() {
        let mut gaelic = Dictionary::new("GAELIC");
        gaelic.add_all("anns an Taghadh").unwrap();
        let mut words: Vec<&String> = (&gaelic).into_iter().collect();
        words.sort();
        assert_eq!(words, vec!["an", "anns", "taghadh"]);
    }

    proptest! {
        #[test]
        fn prop_contains_after_add_ignores_case(word in "[a-zA-Z]{1,12}(-[a-zA-Z]{1,12})?") {
            let mut dictionary = Dictionary::new("TEST");
            dictionary.add(&word);
            prop_assert!(dictionary.contains(&word));
            prop_assert!(dictionary.contains(&word.to_uppercase()));
            prop_assert!(dictionary.contains(&word.to_lowercase()));
        }

        #[test]
        fn prop_add_is_idempotent(word in "[a-zA-Z]{1,12}") {
            let mut dictionary = Dictionary::new("TEST");
            dictionary.add(&word);
            let size = dictionary.len();
            dictionary.add(&word);
            prop_assert_eq!(dictionary.len(), size);
        }

        #[test]
        fn prop_invalid_text_inserts_nothing(
            prefix in "[a-zA-Z ]{0,20}",
            illegal in "[0-9$#@!%&*]",
            suffix in "[a-zA-Z ]{0,20}",
        ) {
            let mut dictionary = Dictionary::new("TEST");
            dictionary.add("seed");
            let text = format!("{prefix}{illegal}{suffix}");
            prop_assert!(dictionary.add_all(&text).is_err());
            prop_assert_eq!(dictionary.len(), 1);
        }
    }
}
