//! Seed corpus discovery
//!
//! A seeds directory holds one or more files per language, named after the
//! language with a numeric extension (`ENGLISH.1`, `ENGLISH.2`, `FRENCH.1`).
//! Files whose names do not match the configured pattern are ignored.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::Input;
use std::path::{Path, PathBuf};

/// A discovered seed corpus file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSource {
    /// Language name derived from the file name
    pub language: String,
    /// Path of the corpus file
    pub path: PathBuf,
}

/// A seed corpus read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCorpus {
    /// Language name derived from the file name
    pub language: String,
    /// Path the text was read from
    pub path: PathBuf,
    /// Corpus text
    pub text: String,
}

/// Language name for a corpus file: its file name minus the last extension
pub fn language_name(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
}

/// List the seed corpus files of the configured directory, sorted by file name
pub fn discover(config: &Config) -> Result<Vec<SeedSource>> {
    let pattern = config.seed_regex()?;
    let dir = config.seeds_dir();
    let entries = std::fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut sources = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !pattern.is_match(file_name) {
            log::trace!("Ignoring {file_name}: not a seed corpus");
            continue;
        }

        if let Some(language) = language_name(&path) {
            sources.push(SeedSource { language, path });
        }
    }

    sources.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(sources)
}

/// Read every discovered seed corpus, skipping empty files
pub fn load(config: &Config) -> Result<Vec<SeedCorpus>> {
    let mut corpora = Vec::new();
    for source in discover(config)? {
        let text = Input::from_file(&source.path).into_text()?;
        if text.is_empty() {
            log::warn!("Skipping empty seed corpus {}", source.path.display());
            continue;
        }
        corpora.push(SeedCorpus {
            language: source.language,
            path: source.path,
            text,
        });
    }
    log::info!(
        "Loaded {} seed corpora from {}",
        corpora.len(),
        config.seeds_dir().display()
    );
    Ok(corpora)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn seeds_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("FRENCH.1"), "On vous donne un certain nombre").unwrap();
        fs::write(dir.join("ENGLISH.2"), "Add More words here.").unwrap();
        fs::write(dir.join("ENGLISH.1"), "Some English here. ").unwrap();
        fs::write(dir.join("GAELIC.1"), "").unwrap();
        fs::write(dir.join("README.md"), "Not a corpus #1").unwrap();
        fs::write(dir.join("notes.1"), "lowercase name").unwrap();
        fs::create_dir(dir.join("SPANISH.1")).unwrap();
        temp_dir
    }

    #[test]
    fn test_language_name_strips_extension() {
        assert_eq!(
            language_name(Path::new("lib/seeds/ENGLISH.1")).as_deref(),
            Some("ENGLISH")
        );
        assert_eq!(language_name(Path::new("FRENCH")).as_deref(), Some("FRENCH"));
        assert_eq!(language_name(Path::new("/")), None);
    }

    #[test]
    fn test_discover_filters_and_sorts() {
        let temp_dir = seeds_dir();
        let config = Config::new(temp_dir.path()).unwrap();

        let sources = discover(&config).unwrap();
        let names: Vec<_> = sources
            .iter()
            .map(|s| s.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["ENGLISH.1", "ENGLISH.2", "FRENCH.1", "GAELIC.1"]);
        assert_eq!(sources[1].language, "ENGLISH");
    }

    #[test]
    fn test_load_skips_empty_files() {
        let temp_dir = seeds_dir();
        let config = Config::new(temp_dir.path()).unwrap();

        let corpora = load(&config).unwrap();
        let languages: Vec<_> = corpora.iter().map(|c| c.language.as_str()).collect();
        assert_eq!(languages, vec!["ENGLISH", "ENGLISH", "FRENCH"]);
        assert_eq!(corpora[0].text, "Some English here. ");
    }

    #[test]
    fn test_custom_pattern() {
        let temp_dir = seeds_dir();
        let config = Config::builder()
            .seeds_dir(temp_dir.path())
            .seed_pattern(r"^[a-z]+\.\d$")
            .build()
            .unwrap();

        let sources = discover(&config).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].language, "notes");
    }

    #[test]
    fn test_missing_directory() {
        let config = Config::new("/nonexistent/seeds").unwrap();
        assert!(matches!(discover(&config), Err(Error::Io { .. })));
    }
}
