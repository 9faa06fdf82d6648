//! Registry and classifier bundled behind one handle

use crate::classifier::{Classifier, Guess, Tally};
use crate::config::Config;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::input::Input;
use crate::registry::DictionaryRegistry;
use std::path::Path;

/// Owns the known dictionaries and answers language guesses
///
/// Build it once, then share it by reference for read-only queries. Wrap
/// it in an `RwLock` if it must be extended while queries are running.
#[derive(Debug, Clone, Default)]
pub struct LanguageIdentifier {
    registry: DictionaryRegistry,
    classifier: Classifier,
}

impl LanguageIdentifier {
    /// Identifier with no known languages
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier over an existing registry
    pub fn with_registry(registry: DictionaryRegistry, classifier: Classifier) -> Self {
        Self {
            registry,
            classifier,
        }
    }

    /// Identifier built from the seed corpora described by `config`
    pub fn build_with_seeds(config: &Config) -> Result<Self> {
        Ok(Self::with_registry(
            DictionaryRegistry::from_seed_dir(config)?,
            Classifier::new(),
        ))
    }

    /// Known dictionaries
    pub fn languages(&self) -> &DictionaryRegistry {
        &self.registry
    }

    /// Classifier used for guesses
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Add the words of `text` to the language `name`
    pub fn add_words_to_language(
        &mut self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<Option<&Dictionary>> {
        self.registry.add_words_to_language(name, text)
    }

    /// Add the words of a corpus file named after its language
    pub fn add_words_from_file(&mut self, path: impl AsRef<Path>) -> Result<Option<&Dictionary>> {
        self.registry.add_words_from_file(path)
    }

    /// Per-language match counts for `text`
    pub fn score(&self, text: &str) -> Result<Tally> {
        self.classifier.score(text, &self.registry)
    }

    /// Most probable language of `text`
    pub fn guess_language_for_str(&self, text: &str) -> Result<Guess> {
        self.classifier.guess(text, &self.registry)
    }

    /// Most probable language of the file at `path`
    pub fn guess_language_for_file(&self, path: impl AsRef<Path>) -> Result<Guess> {
        self.classifier
            .guess_from_source(Input::from_file(path), &self.registry)
    }

    /// Give back the registry
    pub fn into_registry(self) -> DictionaryRegistry {
        self.registry
    }
}
