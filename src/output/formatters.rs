//! Formatting utilities for terminal output

use crate::core::{CellColor, Feedback, Row, Word};
use colored::{ColoredString, Colorize};

/// A single letter as a colored tile
#[must_use]
pub fn tile(letter: char, color: CellColor) -> ColoredString {
    let text = format!(" {letter} ");
    match color {
        CellColor::Correct => text.black().on_green().bold(),
        CellColor::Present => text.black().on_yellow().bold(),
        CellColor::Absent => text.white().on_bright_black().bold(),
        CellColor::Unset => text.bold(),
    }
}

/// A guess as a row of colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: &Feedback) -> String {
    feedback
        .colors()
        .iter()
        .enumerate()
        .map(|(i, &color)| tile(guess.char_at(i), color).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A board row; unfilled cells show as `_`
#[must_use]
pub fn colored_row(row: &Row) -> String {
    row.cells()
        .iter()
        .map(|cell| match cell.letter {
            Some(letter) => tile(letter, cell.color).to_string(),
            None => " _ ".bright_black().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn guess_tiles_show_uppercase_letters() {
        plain();
        let guess = Word::new("trace").unwrap();
        let secret = Word::new("crane").unwrap();
        let text = colored_guess(&guess, &Feedback::evaluate(&guess, &secret));
        assert_eq!(text, " T   R   A   C   E ");
    }

    #[test]
    fn empty_row_shows_placeholders() {
        plain();
        let board = Board::new(1);
        assert_eq!(colored_row(&board.rows()[0]), " _   _   _   _   _ ");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
