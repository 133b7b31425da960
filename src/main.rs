//! Wordy - CLI
//!
//! Word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordy::{
    commands::{check_guess, run_simple},
    config::Config,
    interactive::{App, run_tui},
    logging::{LogTarget, init_tracing},
    output::print_feedback,
};

#[derive(Parser)]
#[command(
    name = "wordy",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (TOML); missing file means defaults
    #[arg(short, long, global = true, default_value = "wordy.toml")]
    config: PathBuf,

    /// Wordlist: 'embedded' (default), 'remote', a URL, or path to file
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for reproducible secret words
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file (level from WORDY_LOG_LEVEL)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words, no TUI)
    Simple,

    /// Show the feedback a guess gets against a secret
    Check {
        /// The secret word
        secret: String,

        /// The guessed word
        guess: String,
    },
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config)
        .with_context(|| format!("could not load config from {}", cli.config.display()))?;

    if let Some(wordlist) = &cli.wordlist {
        config.words.source.clone_from(wordlist);
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    let tui = matches!(command, Commands::Play);
    init_tracing(&LogTarget::select(cli.log_file.as_deref(), tui))?;

    let config = load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple(&config),
        Commands::Check { secret, guess } => run_check_command(secret, guess),
    }
}

fn run_play_command(config: &Config) -> Result<()> {
    let app = App::new(config);
    run_tui(app)
}

fn run_check_command(secret: &str, guess: &str) -> Result<()> {
    let result = check_guess(secret, guess).context("invalid word")?;
    print_feedback(&result.guess, &result.secret, &result.feedback);
    Ok(())
}
