//! Dictionary-based natural language identification
//!
//! Each known language is a set of words collected from sample corpora. A
//! text is attributed to the language whose dictionary contains the most
//! of its words; when no dictionary knows any of them the answer is
//! `UNKNOWN`.
//!
//! # Architecture
//!
//! - **Tokenizer**: character validation and word splitting
//! - **Dictionary**: the lowercase word set of one language
//! - **DictionaryRegistry**: all dictionaries, indexed by language name
//! - **Classifier**: scores a text against the registry and picks a winner
//!
//! # Example
//!
//! ```rust
//! use wordlang_core::{Classifier, DictionaryRegistry};
//!
//! let registry = DictionaryRegistry::build_from_seeds([
//!     ("ENGLISH", "Some English word here"),
//!     ("FRENCH", "On vous donne un certain nombre de fichiers"),
//! ])
//! .unwrap();
//!
//! let guess = Classifier::new().guess("un certain nombre", &registry).unwrap();
//! assert_eq!(guess.to_string(), "FRENCH");
//! ```

pub mod classifier;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod identifier;
pub mod input;
pub mod registry;
pub mod seeds;
pub mod tokenizer;

pub use classifier::{Classifier, Guess, Tally, UNKNOWN};
pub use config::{Config, ConfigBuilder};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use identifier::LanguageIdentifier;
pub use input::Input;
pub use registry::DictionaryRegistry;
pub use seeds::{SeedCorpus, SeedSource};
pub use tokenizer::{tokenize, validate, Tokenizer, Words};
