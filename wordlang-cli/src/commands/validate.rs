//! Validate command implementation

use crate::input::{resolve_patterns, FileReader};
use anyhow::Result;
use clap::Args;
use wordlang_core::tokenizer;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Corpus files or patterns to check for illegal characters
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,
}

/// Outcome of checking one corpus text
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Every character is permitted
    Valid {
        /// Number of words the text tokenizes into
        words: usize,
    },
    /// First illegal character found
    Invalid {
        /// The offending character
        character: char,
        /// 1-based line number
        line: usize,
        /// 1-based column, counted in characters
        column: usize,
    },
}

/// Check a text the way dictionary ingestion would
pub fn check_text(text: &str) -> Verdict {
    match tokenizer::find_illegal(text) {
        None => Verdict::Valid {
            words: tokenizer::tokenize(text).count(),
        },
        Some((position, character)) => {
            let before = &text[..position];
            let line = before.matches('\n').count() + 1;
            let line_start = before.rfind('\n').map_or(0, |i| i + 1);
            let column = before[line_start..].chars().count() + 1;
            Verdict::Invalid {
                character,
                line,
                column,
            }
        }
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let targets = resolve_patterns(&self.input)?;
        let mut invalid = 0;

        for target in &targets {
            let text = FileReader::read_target(target)?;
            match check_text(&text) {
                Verdict::Valid { words } => {
                    println!("✓ {target}: {words} words");
                }
                Verdict::Invalid {
                    character,
                    line,
                    column,
                } => {
                    invalid += 1;
                    println!(
                        "✗ {target}: illegal character {character:?} (U+{:04X}) at line {line}, column {column}",
                        character as u32
                    );
                }
            }
        }

        log::info!("Checked {} corpora, {} invalid", targets.len(), invalid);
        if invalid > 0 {
            anyhow::bail!("Validation failed: {invalid} of {} corpora invalid", targets.len());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_text() {
        assert_eq!(
            check_text("Some English word here.\nAnother line"),
            Verdict::Valid { words: 6 }
        );
        assert_eq!(check_text(""), Verdict::Valid { words: 0 });
    }

    #[test]
    fn test_check_reports_line_and_column() {
        assert_eq!(
            check_text("first line\nsecond 2nd"),
            Verdict::Invalid {
                character: '2',
                line: 2,
                column: 8,
            }
        );
    }

    #[test]
    fn test_check_counts_columns_in_characters() {
        assert_eq!(
            check_text("Καλημέρα"),
            Verdict::Invalid {
                character: 'Κ',
                line: 1,
                column: 1,
            }
        );
        assert_eq!(
            check_text("caf\u{e9}"),
            Verdict::Invalid {
                character: 'é',
                line: 1,
                column: 4,
            }
        );
    }

    #[test]
    fn test_execute() {
        let temp_dir = TempDir::new().unwrap();
        let good = temp_dir.path().join("ENGLISH.1");
        let bad = temp_dir.path().join("NUMBERS.1");
        fs::write(&good, "Some English word here").unwrap();
        fs::write(&bad, "one 2 three").unwrap();

        let args = ValidateArgs {
            input: vec![good.to_string_lossy().to_string()],
        };
        assert!(args.execute().is_ok());

        let args = ValidateArgs {
            input: vec![
                good.to_string_lossy().to_string(),
                bad.to_string_lossy().to_string(),
            ],
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("1 of 2 corpora invalid"));
    }
}
