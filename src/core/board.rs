//! Board of letter tiles
//!
//! The board has one row per allowed attempt and one cell per letter.
//! Rows are filled left to right and colored when submitted.

use super::feedback::{CellColor, Feedback};
use super::word::{WORD_LEN, Word};
use rustc_hash::FxHashMap;

/// A single tile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<char>,
    pub color: CellColor,
}

/// One attempt's worth of tiles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Row {
    cells: [Cell; WORD_LEN],
}

impl Row {
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LEN] {
        &self.cells
    }

    /// The word spelled by this row, if every cell holds a letter
    #[must_use]
    pub fn word(&self) -> Option<Word> {
        let mut letters = [' '; WORD_LEN];
        for (slot, cell) in letters.iter_mut().zip(&self.cells) {
            *slot = cell.letter?;
        }
        Word::from_letters(letters).ok()
    }

    /// Whether the row has been colored by a submission
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.cells.iter().all(|c| c.color != CellColor::Unset)
    }

    pub(crate) fn set_letter(&mut self, col: usize, letter: Option<char>) {
        self.cells[col].letter = letter;
    }

    pub(crate) fn apply(&mut self, feedback: &Feedback) {
        for (cell, &color) in self.cells.iter_mut().zip(feedback.colors()) {
            cell.color = color;
        }
    }
}

/// Grid of rows, one per attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Row>,
}

impl Board {
    /// Create an empty board with `attempts` rows
    #[must_use]
    pub fn new(attempts: usize) -> Self {
        Self {
            rows: vec![Row::default(); attempts],
        }
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut Row {
        &mut self.rows[index]
    }

    /// Best known color for every letter guessed so far
    ///
    /// Used to tint the on-screen keyboard. Keys are uppercase letters.
    #[must_use]
    pub fn letter_states(&self) -> FxHashMap<char, CellColor> {
        let mut states: FxHashMap<char, CellColor> = FxHashMap::default();
        for cell in self.rows.iter().flat_map(|row| row.cells.iter()) {
            let Some(letter) = cell.letter else { continue };
            if cell.color == CellColor::Unset {
                continue;
            }
            let entry = states.entry(letter).or_default();
            if cell.color.rank() > entry.rank() {
                *entry = cell.color;
            }
        }
        states
    }
}

#[cfg(test)]
mod tests {
    use super::CellColor::{Absent, Correct, Present};
    use super::*;

    fn letters(row: &Row) -> String {
        row.cells().iter().filter_map(|c| c.letter).collect()
    }

    fn fill(row: &mut Row, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            row.set_letter(i, Some(ch));
        }
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.rows().len(), 6);
        assert!(board.rows().iter().all(|r| letters(r).is_empty() && r.word().is_none()));
        assert!(board.letter_states().is_empty());
    }

    #[test]
    fn row_word_requires_all_cells() {
        let mut row = Row::default();
        fill(&mut row, "TRAC");
        assert_eq!(letters(&row), "TRAC");
        assert_eq!(row.word(), None);

        row.set_letter(4, Some('E'));
        assert_eq!(row.word(), Some(Word::new("trace").unwrap()));
    }

    #[test]
    fn apply_colors_row() {
        let mut row = Row::default();
        fill(&mut row, "TRACE");
        assert!(!row.is_evaluated());

        row.apply(&Feedback::new([Absent, Correct, Correct, Present, Correct]));
        assert!(row.is_evaluated());
        assert_eq!(row.cells()[3].color, Present);
    }

    #[test]
    fn letter_states_keep_best_color() {
        let mut board = Board::new(6);
        fill(board.row_mut(0), "EERIE");
        board
            .row_mut(0)
            .apply(&Feedback::new([Present, Absent, Absent, Absent, Correct]));
        fill(board.row_mut(1), "RAISE");
        board
            .row_mut(1)
            .apply(&Feedback::new([Absent, Present, Absent, Absent, Correct]));
        // Unsubmitted letters don't count
        fill(board.row_mut(2), "Z");

        let states = board.letter_states();
        assert_eq!(states.get(&'E'), Some(&Correct));
        assert_eq!(states.get(&'A'), Some(&Present));
        assert_eq!(states.get(&'R'), Some(&Absent));
        assert_eq!(states.get(&'Z'), None);
    }
}
