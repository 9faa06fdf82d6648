//! Query text reading

use super::QueryTarget;
use anyhow::{Context, Result};
use std::io;
use std::path::Path;
use wordlang_core::Input;

/// Reads query text with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = Input::from_file(path)
            .into_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read all of standard input as UTF-8 text
    pub fn read_stdin() -> Result<String> {
        Input::from_reader(io::stdin())
            .into_text()
            .context("Failed to read standard input")
    }

    /// Read the text of a query target
    pub fn read_target(target: &QueryTarget) -> Result<String> {
        match target {
            QueryTarget::Stdin => Self::read_stdin(),
            QueryTarget::File(path) => Self::read_text(path),
        }
    }
}
