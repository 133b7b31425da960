//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a whole word per turn.

use crate::config::Config;
use crate::game::{GameError, GameEvent, GameState, GameStatus, GuessEngine, Statistics};
use crate::output::{print_board, print_outcome, print_statistics};
use crate::wordlists::{PendingWordList, Vocabulary, WordSource};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::time::Duration;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the word list cannot be loaded or if there's an I/O
/// error reading user input.
pub fn run_simple(config: &Config) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordy - Simple Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let vocabulary = load_with_spinner(config)?;
    let mut engine =
        GuessEngine::with_source(vocabulary, config.game.max_attempts, config.game.seed)
            .context("could not start a game")?;
    let mut stats = Statistics::new(engine.max_attempts());

    println!(
        "Guess the five-letter word in {} tries.",
        engine.max_attempts()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        print_board(engine.board());

        let turn = engine.state().map_or(0, GameState::active_row) + 1;
        let Some(input) = get_user_input(&format!("Guess {turn}/{}", engine.max_attempts()))?
        else {
            break;
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "new" | "n" => {
                engine.restart()?;
                println!("\n🔄 New game started!\n");
                continue;
            }
            "" => continue,
            _ => {}
        }

        match submit_word(&mut engine, &input).as_ref().map(GameEvent::finished) {
            Ok(Some(status)) => {
                let Some(state) = engine.state() else {
                    continue;
                };
                print_board(engine.board());
                print_outcome(state, engine.board());
                if status == GameStatus::Won {
                    stats.record_win(state.attempts_used());
                } else {
                    stats.record_loss();
                }
                print_statistics(&stats);

                match get_user_input("Play again? (yes/no)")?
                    .unwrap_or_default()
                    .to_lowercase()
                    .as_str()
                {
                    "yes" | "y" | "" => {
                        engine.restart()?;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => break,
                }
            }
            Ok(_) => {}
            Err(GameError::InvalidWord(_)) => println!("❌ Not a valid word!"),
            Err(err) => println!("❌ {err}"),
        }
    }

    if stats.total_games > 0 {
        print_statistics(&stats);
    }
    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Type `text` into the active row and submit it
///
/// On any error the row is cleared again so the next word starts fresh.
///
/// # Errors
///
/// Returns the first `GameError` the engine reports.
pub fn submit_word<S: WordSource>(
    engine: &mut GuessEngine<S>,
    text: &str,
) -> Result<GameEvent, GameError> {
    let result = text
        .trim()
        .chars()
        .try_for_each(|letter| engine.append_letter(letter).map(drop))
        .and_then(|()| engine.submit_guess());

    if result.is_err() {
        while engine.delete_letter().is_ok() {}
    }
    result
}

/// Load the configured word list, showing a spinner meanwhile
fn load_with_spinner(config: &Config) -> Result<Vocabulary> {
    let source = config.words.source();
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(format!("Loading word list from {source}..."));
    pb.enable_steady_tick(Duration::from_millis(100));

    let result = PendingWordList::spawn(source.clone(), config.words.fetch_timeout()).wait();
    pb.finish_and_clear();

    let vocabulary =
        result.with_context(|| format!("could not load word list from {source}"))?;
    println!("Loaded {} words.", vocabulary.len());
    Ok(vocabulary)
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
