//! Word list loading utilities
//!
//! Word list files are plain text, one word per line. Lines are trimmed and
//! lowercased; empty lines are skipped and so are lines that are not a single
//! alphabetic word.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns the valid, de-duplicated words in file order.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/animals.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);

    tracing::debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Parse newline-delimited word list content
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    let mut seen = FxHashSet::default();

    content
        .lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    tracing::warn!(line = line_no + 1, entry = trimmed, "skipping word: {e}");
                    None
                }
            }
        })
        .filter(|word| seen.insert(word.text().to_string()))
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::ANIMALS;
///
/// let words = words_from_slice(ANIMALS);
/// assert_eq!(words.len(), ANIMALS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["cat", "Dog", "zebra"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
        assert_eq!(words[2].text(), "zebra");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["cat", "sea lion", "", "r2d2", "zebra"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "zebra");
    }

    #[test]
    fn parse_words_normalizes_and_skips_blank_lines() {
        let content = "  Tiger \n\n\nLION\r\n   \nzebra";
        let words = parse_words(content);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["tiger", "lion", "zebra"]);
    }

    #[test]
    fn parse_words_drops_duplicates() {
        let words = parse_words("cat\nCAT\ndog\ncat\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "France\n\ngermany\nnew zealand\nItaly").unwrap();

        let words = load_from_file(file.path()).unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["france", "germany", "italy"]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_from_file(dir.path().join("nope.txt")).is_err());
    }
}
