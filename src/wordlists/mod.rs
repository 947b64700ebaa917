//! Word lists for hangman
//!
//! Provides the built-in category lists compiled into the binary, file loading,
//! and the catalog sessions draw their words from.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, CategorySummary, WordCatalog, WordDeck, difficulty_rating};
pub use embedded::{
    ANIMALS, ANIMALS_COUNT, COUNTRIES, COUNTRIES_COUNT, EASY, EASY_COUNT, HARD, HARD_COUNT, MIXED,
    MIXED_COUNT, MOVIES, MOVIES_COUNT,
};

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_LISTS: [(&str, &[&str], usize); 6] = [
        ("easy", EASY, EASY_COUNT),
        ("hard", HARD, HARD_COUNT),
        ("animals", ANIMALS, ANIMALS_COUNT),
        ("countries", COUNTRIES, COUNTRIES_COUNT),
        ("movies", MOVIES, MOVIES_COUNT),
        ("mixed", MIXED, MIXED_COUNT),
    ];

    #[test]
    fn counts_match_consts() {
        for (name, list, count) in ALL_LISTS {
            assert_eq!(list.len(), count, "{name} count mismatch");
        }
    }

    #[test]
    fn embedded_lists_are_valid_words() {
        // All entries should be lowercase ASCII letters
        for (name, list, _) in ALL_LISTS {
            assert!(!list.is_empty(), "{name} is empty");
            for &word in list {
                assert!(
                    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' in {name} contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn embedded_lists_have_no_duplicates() {
        for (name, list, _) in ALL_LISTS {
            let unique: std::collections::HashSet<_> = list.iter().collect();
            assert_eq!(unique.len(), list.len(), "{name} has duplicate words");
        }
    }
}
