//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordlang_core::config::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Seeds directory written into the template
    #[arg(short, long, value_name = "DIR", default_value = "seeds")]
    pub seeds: PathBuf,

    /// Output file path (default: print to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = self.generate_template();
        let Some(output) = &self.output else {
            print!("{template}");
            return Ok(());
        };

        println!("Generating configuration template...");
        println!("  Seeds directory: {}", self.seeds.display());
        println!("  Output file: {}", output.display());

        fs::write(output, template)
            .with_context(|| format!("Failed to write to {}", output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Put seed corpora such as ENGLISH.1 in the seeds directory");
        println!("2. Check them for illegal characters:");
        println!("   wordlang validate -i '{}/*'", self.seeds.display());
        println!("3. Use the configuration to guess languages:");
        println!("   wordlang guess -i input.txt --config {}", output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        let seeds_dir = self.seeds.display().to_string().replace('\\', "/");
        format!(
            r#"# wordlang configuration

[seeds]
# Directory holding the seed corpora; each file name is LANGUAGE.N
seeds_dir = "{seeds_dir}"

# Regular expression a file name must match to be loaded as a corpus.
# The language name is the file name without its last extension.
seed_pattern = '{pattern}'

[output]
# One of "text", "json" or "markdown"
default_format = "text"

# Indent JSON output
pretty_json = true
"#,
            pattern = defaults::SEED_PATTERN
        )
    }
}
