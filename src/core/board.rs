//! Board of guess cells
//!
//! The board is a row-major grid of [`MAX_GUESSES`] rows by [`WORD_LENGTH`]
//! columns. Rows past the active one stay empty.

use super::{BOARD_SIZE, Feedback, MAX_GUESSES, Score, WORD_LENGTH, Word};

/// One letter slot with its scoring flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<u8>,
    pub in_word: bool,
    pub in_place: bool,
}

impl Cell {
    pub const EMPTY: Self = Self {
        letter: None,
        in_word: false,
        in_place: false,
    };

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.letter.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        Feedback {
            in_word: self.in_word,
            in_place: self.in_place,
        }
    }
}

/// Fixed grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An all-empty board
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_SIZE],
        }
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [Cell::EMPTY; BOARD_SIZE];
    }

    /// Cell at `(row, column)`
    ///
    /// # Panics
    /// Panics if the position is outside the board
    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        &self.row(row)[column]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        &mut self.row_mut(row)[column]
    }

    /// The cells of one row
    ///
    /// # Panics
    /// Panics if `row >= MAX_GUESSES`
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < MAX_GUESSES, "row {row} out of range");
        let start = row * WORD_LENGTH;
        &self.cells[start..start + WORD_LENGTH]
    }

    fn row_mut(&mut self, row: usize) -> &mut [Cell] {
        assert!(row < MAX_GUESSES, "row {row} out of range");
        let start = row * WORD_LENGTH;
        &mut self.cells[start..start + WORD_LENGTH]
    }

    /// Letters typed into a row so far, skipping gaps
    #[must_use]
    pub fn row_text(&self, row: usize) -> String {
        self.row(row)
            .iter()
            .filter_map(|c| c.letter.map(char::from))
            .collect()
    }

    /// The row as a word, if every cell holds a letter
    #[must_use]
    pub fn row_word(&self, row: usize) -> Option<Word> {
        let letters: Vec<Option<u8>> = self.row(row).iter().map(|c| c.letter).collect();
        Word::from_letters(&letters)
    }

    /// Copy scoring flags into a row
    pub(crate) fn apply_score(&mut self, row: usize, score: &Score) {
        for (cell, feedback) in self.row_mut(row).iter_mut().zip(score.feedback()) {
            cell.in_word = feedback.in_word;
            cell.in_place = feedback.in_place;
        }
    }

    /// Overwrite a row with the letters of `word`, clearing flags
    pub(crate) fn reveal(&mut self, row: usize, word: &Word) {
        for (cell, &letter) in self.row_mut(row).iter_mut().zip(word.chars()) {
            *cell = Cell {
                letter: Some(letter),
                ..Cell::EMPTY
            };
        }
    }

    /// True when no cell holds a letter or a flag
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| *c == Cell::EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_blank() {
        let board = Board::new();
        assert!(board.is_blank());
        assert_eq!(board.row(MAX_GUESSES - 1).len(), WORD_LENGTH);
    }

    #[test]
    fn row_addressing_is_row_major() {
        let mut board = Board::new();
        board.cell_mut(2, 3).letter = Some(b'x');
        assert_eq!(board.row(2)[3].letter, Some(b'x'));
        assert_eq!(board.cell(2, 3).letter, Some(b'x'));
        assert_eq!(board.row_text(2), "x");
        assert_eq!(board.row_text(1), "");
    }

    #[test]
    fn row_word_requires_full_row() {
        let mut board = Board::new();
        for (i, &ch) in b"cran".iter().enumerate() {
            board.cell_mut(0, i).letter = Some(ch);
        }
        assert_eq!(board.row_word(0), None);

        board.cell_mut(0, 4).letter = Some(b'e');
        assert_eq!(board.row_word(0), Word::new("crane").ok());
    }

    #[test]
    fn apply_score_sets_flags() {
        let mut board = Board::new();
        let guess = Word::new("trace").unwrap();
        let answer = Word::new("crane").unwrap();
        board.reveal(0, &guess);
        board.apply_score(0, &Score::calculate(&guess, &answer));

        assert!(!board.cell(0, 0).in_word);
        assert!(board.cell(0, 1).in_place);
        assert!(board.cell(0, 3).in_word && !board.cell(0, 3).in_place);
    }

    #[test]
    fn reveal_overwrites_and_clears_flags() {
        let mut board = Board::new();
        board.cell_mut(5, 0).in_place = true;
        board.reveal(5, &Word::new("slate").unwrap());
        assert_eq!(board.row_text(5), "slate");
        assert_eq!(board.cell(5, 0).feedback(), Feedback::ABSENT);
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = Board::new();
        board.reveal(3, &Word::new("crane").unwrap());
        board.clear();
        assert!(board.is_blank());
    }
}
