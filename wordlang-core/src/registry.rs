//! Collection of language dictionaries indexed by language name

use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::seeds;
use crate::tokenizer;
use std::collections::btree_map::{self, BTreeMap};
use std::path::Path;

/// All known dictionaries, at most one per language name
///
/// Languages iterate in ascending name order.
#[derive(Debug, Clone, Default)]
pub struct DictionaryRegistry {
    languages: BTreeMap<String, Dictionary>,
}

impl DictionaryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(language, text)` seed pairs
    ///
    /// Pairs naming the same language extend a single dictionary. The first
    /// invalid text aborts the build.
    pub fn build_from_seeds<I, N, T>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, T)>,
        N: Into<String>,
        T: AsRef<str>,
    {
        let mut registry = Self::new();
        for (name, text) in sources {
            registry.add_words_to_language(name, text.as_ref())?;
        }
        Ok(registry)
    }

    /// Discover, read and ingest every seed corpus under the configured directory
    pub fn from_seed_dir(config: &Config) -> Result<Self> {
        let sources = seeds::load(config)?;
        let registry = Self::build_from_seeds(
            sources
                .into_iter()
                .map(|corpus| (corpus.language, corpus.text)),
        )?;
        log::info!(
            "Built {} language dictionaries from {}",
            registry.len(),
            config.seeds_dir().display()
        );
        Ok(registry)
    }

    /// Add the words of `text` to the dictionary for `name`
    ///
    /// The dictionary is created on first use. Empty text is skipped and
    /// returns `Ok(None)` without creating an entry. Invalid text fails
    /// before any dictionary is created or modified.
    pub fn add_words_to_language(
        &mut self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<Option<&Dictionary>> {
        let name = name.into();
        if text.is_empty() {
            log::debug!("Skipping empty text for {name}");
            return Ok(None);
        }

        tokenizer::validate(text)?;

        let dictionary = match self.languages.entry(name) {
            btree_map::Entry::Occupied(entry) => entry.into_mut(),
            btree_map::Entry::Vacant(entry) => {
                log::debug!("Creating dictionary for {}", entry.key());
                let dictionary = Dictionary::new(entry.key().clone());
                entry.insert(dictionary)
            }
        };
        dictionary.insert_words(tokenizer::tokenize(text));
        Ok(Some(&*dictionary))
    }

    /// Add the words read from `source` to the dictionary for `name`
    ///
    /// An empty source is skipped.
    pub fn add_words_from_source(
        &mut self,
        name: impl Into<String>,
        source: impl Into<Input>,
    ) -> Result<Option<&Dictionary>> {
        let text = source.into().into_text()?;
        self.add_words_to_language(name, &text)
    }

    /// Add the words of a corpus file, naming the language after the file
    ///
    /// `seeds/ENGLISH.2` extends the `ENGLISH` dictionary. Empty files are
    /// skipped.
    pub fn add_words_from_file(&mut self, path: impl AsRef<Path>) -> Result<Option<&Dictionary>> {
        let path = path.as_ref();
        let name = seeds::language_name(path).ok_or_else(|| {
            Error::Configuration(format!(
                "cannot derive a language name from {}",
                path.display()
            ))
        })?;
        self.add_words_from_source(name, Input::from_file(path))
    }

    /// Look up the dictionary for `name`
    pub fn get(&self, name: &str) -> Option<&Dictionary> {
        self.languages.get(name)
    }

    /// Whether a dictionary exists for `name`
    pub fn contains(&self, name: &str) -> bool {
        self.languages.contains_key(name)
    }

    /// Number of registered languages
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Whether no language is registered
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Registered language names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Iterate over `(name, dictionary)` pairs in ascending name order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Dictionary> {
        self.languages.iter()
    }
}

impl<'a> IntoIterator for &'a DictionaryRegistry {
    type Item = (&'a String, &'a Dictionary);
    type IntoIter = btree_map::Iter<'a, String, Dictionary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
