//! Seed corpus configuration

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default configuration constants
pub mod defaults {
    /// File names treated as seed corpora: uppercase letters, a dot, a digit
    pub const SEED_PATTERN: &str = r"^[A-Z]+\.\d";

    pub(crate) fn seed_pattern() -> String {
        SEED_PATTERN.to_string()
    }
}

/// Where seed corpora live and which files qualify
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned for seed corpora
    pub seeds_dir: PathBuf,
    /// Regular expression a file name must match to be ingested
    #[serde(default = "defaults::seed_pattern")]
    pub seed_pattern: String,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Configuration for `seeds_dir` with the default seed pattern
    pub fn new(seeds_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::builder().seeds_dir(seeds_dir).build()
    }

    /// Directory scanned for seed corpora
    pub fn seeds_dir(&self) -> &Path {
        &self.seeds_dir
    }

    /// Compiled seed file name pattern
    pub fn seed_regex(&self) -> Result<Regex> {
        Regex::new(&self.seed_pattern).map_err(|e| {
            Error::Configuration(format!("invalid seed pattern {:?}: {e}", self.seed_pattern))
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.seeds_dir.as_os_str().is_empty() {
            return Err(Error::Configuration("seeds_dir must not be empty".into()));
        }

        self.seed_regex()?;
        Ok(())
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    seeds_dir: Option<PathBuf>,
    seed_pattern: Option<String>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the seed corpus directory
    pub fn seeds_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.seeds_dir = Some(dir.into());
        self
    }

    /// Set the file name pattern for seed corpora
    pub fn seed_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.seed_pattern = Some(pattern.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let seeds_dir = self
            .seeds_dir
            .ok_or_else(|| Error::Configuration("seeds_dir is required".into()))?;

        let config = Config {
            seeds_dir,
            seed_pattern: self.seed_pattern.unwrap_or_else(defaults::seed_pattern),
        };

        config.validate()?;
        Ok(config)
    }
}
