//! Seed corpus selection for CLI commands

use crate::config::CliConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordlang_core::{Config, LanguageIdentifier};

/// Where the seed corpora come from
#[derive(Debug, Clone, Default, Args)]
pub struct SeedArgs {
    /// Directory containing seed corpora such as ENGLISH.1 or FRENCH.2
    #[arg(short, long, value_name = "DIR", env = "WORDLANG_SEEDS")]
    pub seeds: Option<PathBuf>,

    /// File name pattern for seed corpora (regular expression)
    #[arg(long, value_name = "REGEX")]
    pub seed_pattern: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Resolved origin of the seed configuration
#[derive(Debug, Clone)]
pub enum SeedSource {
    /// Directory given on the command line or through the environment
    Directory(Config),
    /// `[seeds]` section of a configuration file
    ConfigFile {
        /// Path to the configuration file
        path: PathBuf,
        /// Seed configuration read from it
        config: Config,
    },
}

impl SeedSource {
    /// Seed configuration to build from
    pub fn config(&self) -> &Config {
        match self {
            SeedSource::Directory(config) => config,
            SeedSource::ConfigFile { config, .. } => config,
        }
    }

    /// Get the display name for the seed source
    pub fn display_name(&self) -> String {
        match self {
            SeedSource::Directory(config) => {
                format!("Directory: {}", config.seeds_dir().display())
            }
            SeedSource::ConfigFile { path, config } => format!(
                "Config: {} (seeds: {})",
                path.display(),
                config.seeds_dir().display()
            ),
        }
    }

    /// Build the identifier from this source's seed corpora
    pub fn build_identifier(&self) -> Result<LanguageIdentifier> {
        log::info!("Loading seed corpora from {}", self.display_name());
        LanguageIdentifier::build_with_seeds(self.config()).with_context(|| {
            format!(
                "Failed to build dictionaries from {}",
                self.config().seeds_dir().display()
            )
        })
    }
}

impl SeedArgs {
    /// Load the configuration file, if one was given
    pub fn load_config(&self) -> Result<CliConfig> {
        match &self.config {
            Some(path) => CliConfig::from_file(path),
            None => Ok(CliConfig::default()),
        }
    }

    /// Resolve the seed source; command-line values override the config file
    pub fn resolve(&self, file_config: &CliConfig) -> Result<SeedSource> {
        let from_file = file_config.seeds.as_ref();

        let seeds_dir = match (&self.seeds, from_file) {
            (Some(dir), _) => dir.clone(),
            (None, Some(config)) => config.seeds_dir.clone(),
            (None, None) => return Err(CliError::MissingSeeds.into()),
        };

        let mut builder = Config::builder().seeds_dir(seeds_dir);
        if let Some(pattern) = self
            .seed_pattern
            .as_ref()
            .or(from_file.map(|config| &config.seed_pattern))
        {
            builder = builder.seed_pattern(pattern.clone());
        }
        let config = builder
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(match (&self.seeds, &self.config) {
            (None, Some(path)) => SeedSource::ConfigFile {
                path: path.clone(),
                config,
            },
            _ => SeedSource::Directory(config),
        })
    }
}
