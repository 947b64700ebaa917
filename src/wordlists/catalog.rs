//! Categorised word catalog and per-session decks

use super::embedded;
use super::loader::{load_from_file, words_from_slice};
use crate::core::{Category, GameMode, Word};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;

/// Error raised when no word can be drawn
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no words left in the {0} category")]
    Empty(Category),
}

/// All word lists, keyed by category
///
/// The catalog is immutable once loaded; sessions draw from their own `WordDeck`.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    lists: FxHashMap<Category, Vec<Word>>,
}

/// Size and difficulty figures for one category, shown in the category menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategorySummary {
    pub word_count: usize,
    pub average_length: f64,
    /// 1 (easiest) to 5 (hardest)
    pub rating: u8,
}

impl WordCatalog {
    /// Catalog built from the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_lists(Category::ALL.map(|c| (c, words_from_slice(embedded_list(c)))))
    }

    /// Load `<dir>/<stem>.txt` for every category
    ///
    /// A category whose file is missing or unreadable falls back to its embedded
    /// list. A file that exists but holds no valid words leaves the category empty.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let mut lists = FxHashMap::default();

        for category in Category::ALL {
            let path = dir.join(format!("{}.txt", category.stem()));
            let words = match load_from_file(&path) {
                Ok(words) => {
                    if words.is_empty() {
                        tracing::warn!(path = %path.display(), "word list has no usable words");
                    }
                    words
                }
                Err(e) => {
                    if e.kind() == io::ErrorKind::NotFound {
                        tracing::info!(path = %path.display(), "word list not found, using built-in words");
                    } else {
                        tracing::warn!(path = %path.display(), "failed to read word list, using built-in words: {e}");
                    }
                    words_from_slice(embedded_list(category))
                }
            };
            lists.insert(category, words);
        }

        Self { lists }
    }

    /// Catalog from in-memory lists; categories not given are missing
    pub fn from_lists<I>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<Word>)>,
    {
        Self {
            lists: lists.into_iter().collect(),
        }
    }

    /// Words of a category (empty if the category is missing)
    #[must_use]
    pub fn words(&self, category: Category) -> &[Word] {
        self.lists.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Fresh deck for one session of `mode`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if the mode's category is missing or has no words.
    pub fn deck(&self, mode: GameMode) -> Result<WordDeck, CatalogError> {
        let category = mode.category();
        let words = self.words(category);
        if words.is_empty() {
            return Err(CatalogError::Empty(category));
        }

        Ok(WordDeck {
            category,
            remaining: words.to_vec(),
        })
    }

    /// Word count, average length and difficulty rating of a category
    #[must_use]
    pub fn summary(&self, category: Category) -> CategorySummary {
        let words = self.words(category);
        let word_count = words.len();
        let average_length = if word_count == 0 {
            0.0
        } else {
            words.iter().map(Word::len).sum::<usize>() as f64 / word_count as f64
        };

        CategorySummary {
            word_count,
            average_length,
            rating: difficulty_rating(average_length, word_count),
        }
    }
}

/// Rate a word pool from 1 to 5
///
/// Longer words score higher, and so do smaller pools, whose words tend to be
/// more obscure.
#[must_use]
pub fn difficulty_rating(average_length: f64, word_count: usize) -> u8 {
    let length_score: i32 = if average_length < 4.0 {
        1
    } else if average_length < 5.0 {
        2
    } else if average_length < 6.0 {
        3
    } else if average_length < 8.0 {
        4
    } else {
        5
    };

    let count_adjustment = match word_count {
        n if n > 500 => -1,
        n if n > 200 => 0,
        n if n > 100 => 1,
        _ => 2,
    };

    (length_score + count_adjustment).clamp(1, 5) as u8
}

const fn embedded_list(category: Category) -> &'static [&'static str] {
    match category {
        Category::Easy => embedded::EASY,
        Category::Hard => embedded::HARD,
        Category::Animals => embedded::ANIMALS,
        Category::Countries => embedded::COUNTRIES,
        Category::Movies => embedded::MOVIES,
        Category::Mixed => embedded::MIXED,
    }
}

/// Words still available to one session, drawn without replacement
#[derive(Debug, Clone)]
pub struct WordDeck {
    category: Category,
    remaining: Vec<Word>,
}

impl WordDeck {
    /// Draw a word uniformly at random from the words not yet drawn
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` once every word has been drawn.
    pub fn select<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Word, CatalogError> {
        if self.remaining.is_empty() {
            return Err(CatalogError::Empty(self.category));
        }
        let index = rng.random_range(0..self.remaining.len());
        Ok(self.remaining.swap_remove(index))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}
