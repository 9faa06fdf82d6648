//! List command implementation

use crate::seed_source::SeedArgs;
use anyhow::Result;
use clap::Subcommand;
use std::io::Write;
use wordlang_core::DictionaryRegistry;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List languages built from the seed corpora
    Languages(SeedArgs),

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        match self {
            ListCommands::Languages(seeds) => {
                let file_config = seeds.load_config()?;
                let source = seeds.resolve(&file_config)?;
                let identifier = source.build_identifier()?;
                writeln!(out, "Languages ({}):", source.display_name())?;
                write_languages(&mut out, identifier.languages())?;
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                writeln!(out, "  text     - Language per input (default)")?;
                writeln!(out, "  json     - JSON array with per-language word counts")?;
                writeln!(out, "  markdown - Markdown table")?;
            }
        }
        Ok(())
    }
}

/// One line per language with its dictionary size
fn write_languages(out: &mut impl Write, registry: &DictionaryRegistry) -> Result<()> {
    if registry.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for (name, dictionary) in registry {
        writeln!(out, "  {name:<12} {} words", dictionary.len())?;
    }
    Ok(())
}
