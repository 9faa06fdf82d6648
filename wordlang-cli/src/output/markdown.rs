//! Markdown output formatter

use super::{GuessRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a markdown table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    count: usize,
    unknown: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            count: 0,
            unknown: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_guess(&mut self, record: &GuessRecord) -> Result<()> {
        if self.count == 0 {
            writeln!(self.writer, "| Source | Language | Matched words |")?;
            writeln!(self.writer, "|---|---|---|")?;
        }
        self.count += 1;
        if record.language.is_unknown() {
            self.unknown += 1;
        }

        let matched = record
            .language
            .language()
            .and_then(|name| record.tally.get(name))
            .unwrap_or(0);
        writeln!(
            self.writer,
            "| {} | {} | {} |",
            record.source, record.language, matched
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total files: {}, unknown: {}*",
            self.count, self.unknown
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::sample_records;

    #[test]
    fn test_markdown_output() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        for record in sample_records() {
            formatter.format_guess(&record).unwrap();
        }
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("| Source | Language | Matched words |\n|---|---|---|\n"));
        assert!(output.contains("| english.txt | ENGLISH | 3 |"));
        assert!(output.contains("| chinese.txt | UNKNOWN | 0 |"));
        assert!(output.ends_with("---\n*Total files: 2, unknown: 1*\n"));
    }
}
