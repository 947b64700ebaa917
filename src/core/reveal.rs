//! Per-position reveal state and the record of guessed letters

use super::Word;
use std::collections::BTreeSet;
use std::fmt;

/// One letter position of the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Hidden,
    Revealed(char),
}

/// Hidden/revealed status of every position of a target word
///
/// Cells only ever move from `Hidden` to `Revealed`; there is no way to hide a
/// cell again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealState {
    cells: Vec<Cell>,
}

impl RevealState {
    /// All-hidden state sized for `target`
    #[must_use]
    pub fn new(target: &Word) -> Self {
        Self {
            cells: vec![Cell::Hidden; target.len()],
        }
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Reveal every occurrence of `letter` in `target`
    ///
    /// Returns the positions of the letter (already revealed ones included).
    pub fn reveal_letter(&mut self, target: &Word, letter: char) -> Vec<usize> {
        let positions = target.positions_of(letter).to_vec();
        for &i in &positions {
            self.cells[i] = Cell::Revealed(target.char_at(i));
        }
        positions
    }

    /// Reveal every position
    pub fn reveal_all(&mut self, target: &Word) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            *cell = Cell::Revealed(target.char_at(i));
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| matches!(c, Cell::Revealed(_)))
    }

    /// Indices of the cells still hidden
    #[must_use]
    pub fn hidden_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Hidden)
            .map(|(i, _)| i)
            .collect()
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.len() - self.hidden_positions().len()
    }
}

impl fmt::Display for RevealState {
    /// Uppercase letters for revealed cells, `_` for hidden ones
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Cell::Hidden => f.write_str("_")?,
                Cell::Revealed(c) => write!(f, "{}", c.to_ascii_uppercase())?,
            }
        }
        Ok(())
    }
}

/// Letters guessed so far in a level, kept in alphabetical order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessRecord {
    letters: BTreeSet<char>,
}

impl GuessRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter; returns false if it was already recorded
    pub fn insert(&mut self, letter: char) -> bool {
        self.letters.insert(letter.to_ascii_lowercase())
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter.to_ascii_lowercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}
