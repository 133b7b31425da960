//! Display functions for command results

use super::formatters::{colored_guess, colored_row, create_progress_bar};
use crate::core::{Board, CellColor, Feedback, Word};
use crate::game::{GameState, GameStatus, Statistics};
use colored::Colorize;

/// Print a single evaluated guess with its share squares
pub fn print_feedback(guess: &Word, secret: &Word, feedback: &Feedback) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}  Guess: {}",
        secret.to_string().bright_yellow().bold(),
        guess.to_string().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}", colored_guess(guess, feedback), feedback.to_emoji());
    println!(
        "\n  Correct: {}  Present: {}  Absent: {}",
        feedback.count(CellColor::Correct).to_string().green(),
        feedback.count(CellColor::Present).to_string().yellow(),
        feedback.count(CellColor::Absent).to_string().bright_black()
    );
}

/// Print every row of the board, filled or not
pub fn print_board(board: &Board) {
    println!();
    for row in board.rows() {
        println!("  {}", colored_row(row));
    }
    println!();
}

/// Print the win/loss banner for a finished game
pub fn print_outcome(state: &GameState, board: &Board) {
    println!("{}", "═".repeat(50).bright_cyan());
    match state.status() {
        GameStatus::Won => {
            let attempts = state.attempts_used();
            println!(
                "  {} Solved in {} {}",
                "Game Won!".bright_green().bold(),
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            println!(
                "  {} The word was {}",
                "Game Lost!".bright_red().bold(),
                state.secret().to_string().bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n  Share:");
    for row in board.rows().iter().filter(|r| r.is_evaluated()) {
        let squares: String = row.cells().iter().map(|c| c.color.emoji()).collect();
        println!("    {squares}");
    }
    println!();
}

/// Print session statistics with a guess distribution chart
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "Statistics:".bright_cyan().bold());
    println!(
        "   Played: {}  Win %: {:.0}  Streak: {}  Best: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    );

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        println!("   {:>2}: {} {count}", i + 1, bar.green());
    }
    println!();
}
