//! Output formatting module

use anyhow::Result;
use serde::Serialize;
use wordlang_core::{Guess, Tally};

/// Classification result for one query target
#[derive(Debug, Clone, Serialize)]
pub struct GuessRecord {
    /// Where the text came from
    pub source: String,
    /// Winning language or UNKNOWN
    pub language: Guess,
    /// Number of query words found per language
    pub tally: Tally,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single result
    fn format_guess(&mut self, record: &GuessRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
