//! Query target resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::fmt;
use std::path::PathBuf;

/// Pattern standing for standard input
pub const STDIN_MARKER: &str = "-";

/// Something to classify
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum QueryTarget {
    /// Read the text from standard input
    Stdin,
    /// Read the text from a file
    File(PathBuf),
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryTarget::Stdin => f.write_str("<stdin>"),
            QueryTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolve file patterns to query targets, sorted and deduplicated
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<QueryTarget>> {
    let mut targets = Vec::new();

    for pattern in patterns {
        if pattern == STDIN_MARKER {
            targets.push(QueryTarget::Stdin);
            continue;
        }

        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                targets.push(QueryTarget::File(path));
            }
        }
    }

    if targets.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    targets.sort();
    targets.dedup();
    log::debug!("Resolved {} query targets", targets.len());

    Ok(targets)
}
