//! Hangman - CLI
//!
//! Terminal word-guessing game with TUI and text modes and a persistent
//! leaderboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{clear_scores, run_simple, show_scores},
    config::GameConfig,
    core::Category,
    leaderboard::Leaderboard,
    output::print_how_to_play,
    wordlists::WordCatalog,
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word before the hangman is drawn",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of <category>.txt word lists (overrides the built-in lists)
    #[arg(short = 'w', long, global = true)]
    words_dir: Option<PathBuf>,

    /// Leaderboard file (defaults to scores.json in the data directory)
    #[arg(short, long, global = true)]
    scores: Option<PathBuf>,

    /// Config file (defaults to config.toml in the data directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple text menu without the TUI
    Simple,

    /// Print the leaderboard
    Scores {
        /// Only show this category (easy, hard, animals, countries, movies, mixed)
        #[arg(short = 'k', long)]
        category: Option<Category>,

        /// Show every score instead of the top 10
        #[arg(short, long)]
        all: bool,
    },

    /// Delete every leaderboard score
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print how to play
    Rules,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let mut config = GameConfig::load(cli.config.as_deref())?;
    if let Some(dir) = cli.words_dir {
        config.words_dir = Some(dir);
    }
    if let Some(path) = cli.scores {
        config.scores_path = Some(path);
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Rules => {
            print_how_to_play();
            Ok(())
        }
        Commands::Scores { category, all } => {
            let board = Leaderboard::load(config.scores_path());
            show_scores(&board, category, all);
            Ok(())
        }
        Commands::Clear { yes } => {
            let mut board = Leaderboard::load(config.scores_path());
            clear_scores(&mut board, yes)?;
            Ok(())
        }
        Commands::Simple => {
            let catalog = load_catalog(config.words_dir.as_deref());
            let mut board = Leaderboard::load(config.scores_path());
            run_simple(&catalog, config.rules, &mut board)
        }
        Commands::Play => {
            use hangman::interactive::{App, run_tui};

            let catalog = load_catalog(config.words_dir.as_deref());
            let mut board = Leaderboard::load(config.scores_path());
            let app = App::new(&catalog, config.rules, &mut board);
            run_tui(app)
        }
    }
}

fn load_catalog(words_dir: Option<&Path>) -> WordCatalog {
    words_dir.map_or_else(WordCatalog::embedded, WordCatalog::load)
}

/// Log to `hangman.log` in the data directory so the TUI screen stays clean
///
/// Falls back to stderr if the log file cannot be opened.
fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let log_path = GameConfig::log_path();
    let log_file = log_path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(&log_path));

    match log_file {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    }
}
