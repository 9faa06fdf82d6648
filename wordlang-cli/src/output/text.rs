//! Plain text output formatter

use super::{GuessRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs `source: LANGUAGE` per line
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            show_source: true,
        }
    }

    /// Print only the language, without the source prefix
    pub fn language_only(mut self) -> Self {
        self.show_source = false;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_guess(&mut self, record: &GuessRecord) -> Result<()> {
        if self.show_source {
            writeln!(self.writer, "{}: {}", record.source, record.language)?;
        } else {
            writeln!(self.writer, "{}", record.language)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
