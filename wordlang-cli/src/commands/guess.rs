//! Guess command implementation

use crate::config::CliConfig;
use crate::input::{resolve_patterns, FileReader, QueryTarget};
use crate::output::{GuessRecord, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use crate::seed_source::SeedArgs;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordlang_core::LanguageIdentifier;

/// Arguments for the guess command
#[derive(Debug, Args)]
pub struct GuessArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub input: Vec<String>,

    /// Classify this text instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    #[command(flatten)]
    pub seeds: SeedArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: text, or the config file's default_format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Classify files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `source: LANGUAGE`, one per line
    Text,
    /// JSON array with per-language tallies
    Json,
    /// Markdown table
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "markdown" | "md" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}

impl GuessArgs {
    /// Execute the guess command
    pub fn execute(&self) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let file_config = self.seeds.load_config()?;
        let source = self.seeds.resolve(&file_config)?;
        let identifier = source.build_identifier()?;
        log::info!(
            "Loaded {} languages: {}",
            identifier.languages().len(),
            identifier.languages().names().collect::<Vec<_>>().join(", ")
        );

        let records = match &self.text {
            Some(text) => vec![Self::classify_text(&identifier, "<text>", text)?],
            None => self.classify_targets(&identifier)?,
        };

        let format = self.output_format(&file_config)?;
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text if self.text.is_some() => {
                Box::new(TextFormatter::new(writer).language_only())
            }
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::new(writer).pretty(file_config.output.pretty_json))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for record in &records {
            formatter.format_guess(record)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Command-line format, then config file format, then text
    fn output_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }
        let name = &file_config.output.default_format;
        OutputFormat::from_name(name)
            .ok_or_else(|| crate::CliError::ConfigError(format!("unknown output format: {name}")))
            .map_err(Into::into)
    }

    fn classify_targets(&self, identifier: &LanguageIdentifier) -> Result<Vec<GuessRecord>> {
        let targets = resolve_patterns(&self.input)?;
        log::info!("Classifying {} inputs", targets.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_targets(targets.len() as u64);

        let classify = |target: &QueryTarget| -> Result<GuessRecord> {
            let text = FileReader::read_target(target)?;
            let record = Self::classify_text(identifier, &target.to_string(), &text)?;
            if progress.is_active() {
                progress.target_completed(&record.source, record.language.as_str());
            } else {
                log::info!("{}: {}", record.source, record.language);
            }
            Ok(record)
        };

        let records = if self.parallel {
            targets.par_iter().map(classify).collect::<Result<Vec<_>>>()
        } else {
            targets.iter().map(classify).collect::<Result<Vec<_>>>()
        };
        progress.finish();

        records
    }

    fn classify_text(
        identifier: &LanguageIdentifier,
        source: &str,
        text: &str,
    ) -> Result<GuessRecord> {
        let tally = identifier
            .score(text)
            .with_context(|| format!("Failed to classify {source}"))?;
        let language = tally.winner();
        log::debug!("{source}: {language} {tally:?}");

        Ok(GuessRecord {
            source: source.to_string(),
            language,
            tally,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_name() {
        assert_eq!(OutputFormat::from_name("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_name("md"), Some(OutputFormat::Markdown));
        assert_eq!(OutputFormat::from_name("text"), Some(OutputFormat::Text));
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn test_command_line_format_wins() {
        let args = GuessArgs {
            input: vec!["a.txt".to_string()],
            text: None,
            seeds: SeedArgs::default(),
            output: None,
            format: Some(OutputFormat::Markdown),
            parallel: false,
            quiet: true,
        };
        let mut config = CliConfig::default();
        config.output.default_format = "json".to_string();
        assert_eq!(args.output_format(&config).unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_config_format_used_as_default() {
        let args = GuessArgs {
            input: vec!["a.txt".to_string()],
            text: None,
            seeds: SeedArgs::default(),
            output: None,
            format: None,
            parallel: false,
            quiet: true,
        };
        let mut config = CliConfig::default();
        config.output.default_format = "json".to_string();
        assert_eq!(args.output_format(&config).unwrap(), OutputFormat::Json);

        config.output.default_format = "yaml".to_string();
        assert!(args.output_format(&config).is_err());
    }

    #[test]
    fn test_classify_targets_in_order() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "un certain nombre").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "Zhao Shang Hao").unwrap();

        let mut identifier = LanguageIdentifier::new();
        identifier
            .add_words_to_language("FRENCH", "un certain nombre")
            .unwrap();

        for quiet in [true, false] {
            let args = GuessArgs {
                input: vec![temp_dir.path().join("*.txt").to_string_lossy().to_string()],
                text: None,
                seeds: SeedArgs::default(),
                output: None,
                format: None,
                parallel: true,
                quiet,
            };
            let records = args.classify_targets(&identifier).unwrap();
            let languages: Vec<_> = records.iter().map(|r| r.language.as_str()).collect();
            assert_eq!(languages, ["FRENCH", "UNKNOWN"]);
        }
    }

    #[test]
    fn test_classify_text() {
        let mut identifier = LanguageIdentifier::new();
        identifier
            .add_words_to_language("FRENCH", "un certain nombre")
            .unwrap();

        let record = GuessArgs::classify_text(&identifier, "query", "un nombre").unwrap();
        assert_eq!(record.source, "query");
        assert_eq!(record.language, "FRENCH");
        assert_eq!(record.tally.get("FRENCH"), Some(2));

        let err = GuessArgs::classify_text(&identifier, "query", "100 nombres").unwrap_err();
        assert!(err.to_string().contains("Failed to classify query"));
    }
}
