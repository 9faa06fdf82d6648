//! Error types for language identification

use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of characters of offending text shown in error messages
const EXCERPT_CHARS: usize = 40;

/// Error type for dictionary building and classification
#[derive(Debug, Error)]
pub enum Error {
    /// Text contains a character outside the permitted set
    #[error("illegal character {character:?} at byte {position} in {:?}", excerpt(.text))]
    InvalidInput {
        /// The full text that failed validation
        text: String,
        /// The first illegal character
        character: char,
        /// Byte offset of `character` within `text`
        position: usize,
    },

    /// A named source could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path of the source
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Source content was not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether this error came from character validation
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput { .. })
    }
}

/// Shortens long corpus text so messages stay readable
fn excerpt(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

/// Result type for wordlang operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let error = Error::InvalidInput {
            text: "Hello bob$".to_string(),
            character: '$',
            position: 9,
        };
        assert_eq!(
            error.to_string(),
            "illegal character '$' at byte 9 in \"Hello bob$\""
        );
        assert!(error.is_invalid_input());
    }

    #[test]
    fn test_invalid_input_display_truncates_long_text() {
        let text = format!("{}1", "a".repeat(100));
        let error = Error::InvalidInput {
            text,
            character: '1',
            position: 100,
        };
        let message = error.to_string();
        assert!(message.contains(&format!("{}...", "a".repeat(EXCERPT_CHARS))));
        assert!(!message.contains(&"a".repeat(EXCERPT_CHARS + 1)));
    }

    #[test]
    fn test_io_error_display() {
        let error = Error::Io {
            path: PathBuf::from("seeds/ENGLISH.1"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(error.to_string(), "failed to read seeds/ENGLISH.1: not found");
        assert!(!error.is_invalid_input());
    }

    #[test]
    fn test_configuration_error_display() {
        let error = Error::Configuration("seeds_dir must not be empty".into());
        assert_eq!(
            error.to_string(),
            "configuration error: seeds_dir must not be empty"
        );
    }
}
