//! Wordle Reload - CLI
//!
//! Terminal word-guessing game with timed three- and five-letter boards.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_reload::commands::run_play;
use wordle_reload::wordlists::WordCatalog;

#[derive(Parser)]
#[command(
    name = "wordle_reload",
    about = "Guess the randomly selected word before the attempts and the timer run out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    words: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,
}

/// Load the word catalog based on the -w flag
///
/// - "builtin": the curated list embedded at build time
/// - "<path>": load a custom word list from file
fn load_catalog(words_mode: &str) -> Result<WordCatalog> {
    match words_mode {
        "builtin" => Ok(WordCatalog::builtin()),
        path => WordCatalog::from_file(path)
            .with_context(|| format!("failed to open word list '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.words)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&catalog).map_err(|e| anyhow::anyhow!(e)),
    }
}
