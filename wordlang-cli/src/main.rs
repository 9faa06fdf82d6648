//! wordlang command-line entry point

use clap::Parser;
use wordlang_cli::commands::Commands;
use wordlang_cli::CliResult;

/// Guess the language of text from seed word lists
#[derive(Debug, Parser)]
#[command(name = "wordlang", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.command.execute()
}
