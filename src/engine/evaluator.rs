//! Guess classification and evaluation
//!
//! Turns one raw input line into a `Guess` and applies it to the reveal state of
//! the level being played.

use crate::core::{GuessRecord, RevealState, Word};
use rand::Rng;

/// Input that requests a hint
pub const HINT_COMMAND: &str = "hint";
/// Input that stops the session
pub const QUIT_COMMAND: &str = "stp";

/// A classified player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
    Hint,
    Quit,
}

/// Input rejected without any state change or penalty
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    #[error("invalid input '{0}': guess a single letter, the full word, or type 'hint'")]
    InvalidInput(String),
    #[error("letter '{}' was already guessed", .0.to_ascii_uppercase())]
    AlreadyGuessed(char),
}

/// Result of one accepted input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Letter is in the word; every position it occupies
    CorrectLetter(Vec<usize>),
    WrongLetter,
    /// Correct full-word guess
    WordSolved { first_attempt: bool },
    WrongWordGuess,
    HintGranted(char),
    NoHintsAvailable,
    Quit,
}

impl Outcome {
    /// Whether this outcome costs an attempt
    #[must_use]
    pub const fn is_miss(&self) -> bool {
        matches!(self, Self::WrongLetter | Self::WrongWordGuess)
    }
}

impl Guess {
    /// Classify raw input for a target word of `target_len` letters
    ///
    /// Commands take precedence over word guesses. Input is case-insensitive and
    /// surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `GuessError::InvalidInput` for empty input, anything containing
    /// non-letters, or a multi-letter guess whose length differs from the target.
    pub fn parse(input: &str, target_len: usize) -> Result<Self, GuessError> {
        let normalized = input.trim().to_ascii_lowercase();

        match normalized.as_str() {
            HINT_COMMAND => return Ok(Self::Hint),
            QUIT_COMMAND => return Ok(Self::Quit),
            _ => {}
        }

        let invalid = || GuessError::InvalidInput(input.trim().to_string());

        if normalized.is_empty() || !normalized.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(invalid());
        }

        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Ok(Self::Letter(letter)),
            _ if normalized.len() == target_len => Ok(Self::Word(normalized)),
            _ => Err(invalid()),
        }
    }
}

/// Apply a letter or full-word guess to the level state
///
/// `first_guess` is true when no letter or word has been guessed in this level yet.
/// Hints and quitting belong to the session; see `reveal_hint`.
///
/// # Errors
///
/// Returns `GuessError::AlreadyGuessed` for a letter already in `record`, and
/// `GuessError::InvalidInput` if called with a command.
pub fn evaluate(
    target: &Word,
    reveal: &mut RevealState,
    record: &mut GuessRecord,
    guess: &Guess,
    first_guess: bool,
) -> Result<Outcome, GuessError> {
    match guess {
        Guess::Letter(letter) => {
            if !record.insert(*letter) {
                return Err(GuessError::AlreadyGuessed(*letter));
            }
            if target.has_letter(*letter) {
                Ok(Outcome::CorrectLetter(reveal.reveal_letter(target, *letter)))
            } else {
                Ok(Outcome::WrongLetter)
            }
        }
        Guess::Word(word) => {
            if target.matches(word) {
                reveal.reveal_all(target);
                Ok(Outcome::WordSolved {
                    first_attempt: first_guess,
                })
            } else {
                Ok(Outcome::WrongWordGuess)
            }
        }
        Guess::Hint => Err(GuessError::InvalidInput(HINT_COMMAND.to_string())),
        Guess::Quit => Err(GuessError::InvalidInput(QUIT_COMMAND.to_string())),
    }
}

/// Reveal a random still-hidden letter (all its occurrences)
///
/// The letter is added to `record`. Returns `None` if nothing is hidden.
pub fn reveal_hint<R: Rng + ?Sized>(
    target: &Word,
    reveal: &mut RevealState,
    record: &mut GuessRecord,
    rng: &mut R,
) -> Option<char> {
    let hidden = reveal.hidden_positions();
    if hidden.is_empty() {
        return None;
    }

    let position = hidden[rng.random_range(0..hidden.len())];
    let letter = target.char_at(position);
    reveal.reveal_letter(target, letter);
    record.insert(letter);
    Some(letter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn level(word: &str) -> (Word, RevealState, GuessRecord) {
        let target = Word::new(word).unwrap();
        let reveal = RevealState::new(&target);
        (target, reveal, GuessRecord::new())
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Guess::parse("hint", 6), Ok(Guess::Hint));
        assert_eq!(Guess::parse(" HINT ", 6), Ok(Guess::Hint));
        assert_eq!(Guess::parse("stp", 6), Ok(Guess::Quit));
        // Commands win even when the target has the same length
        assert_eq!(Guess::parse("hint", 4), Ok(Guess::Hint));
    }

    #[test]
    fn parse_letters_and_words() {
        assert_eq!(Guess::parse("P", 6), Ok(Guess::Letter('p')));
        assert_eq!(Guess::parse("Python", 6), Ok(Guess::Word("python".to_string())));
    }

    #[test]
    fn parse_rejects_malformed_input() {
        for input in ["", "   ", "1", "py thon", "pyth0n", "é", "pyth"] {
            assert!(
                matches!(Guess::parse(input, 6), Err(GuessError::InvalidInput(_))),
                "'{input}' should be invalid"
            );
        }
    }

    #[test]
    fn correct_letter_reveals_all_occurrences() {
        let (target, mut reveal, mut record) = level("banana");

        let outcome = evaluate(&target, &mut reveal, &mut record, &Guess::Letter('a'), true);

        assert_eq!(outcome, Ok(Outcome::CorrectLetter(vec![1, 3, 5])));
        assert_eq!(reveal.to_string(), "_A_A_A");
        assert!(record.contains('a'));
    }

    #[test]
    fn every_letter_of_every_word_reveals_every_occurrence() {
        for word in ["banana", "mississippi", "python", "aaa", "committee"] {
            let target = Word::new(word).unwrap();
            for letter in word.chars() {
                let mut reveal = RevealState::new(&target);
                let mut record = GuessRecord::new();
                evaluate(&target, &mut reveal, &mut record, &Guess::Letter(letter), true).unwrap();

                for (i, c) in word.chars().enumerate() {
                    let expected = if c == letter { Cell::Revealed(c) } else { Cell::Hidden };
                    assert_eq!(reveal.cells()[i], expected, "{word}/{letter} at {i}");
                }
            }
        }
    }

    #[test]
    fn wrong_letter() {
        let (target, mut reveal, mut record) = level("python");
        let outcome = evaluate(&target, &mut reveal, &mut record, &Guess::Letter('z'), true);
        assert_eq!(outcome, Ok(Outcome::WrongLetter));
        assert!(outcome.unwrap().is_miss());
        assert_eq!(reveal.revealed_count(), 0);
        assert!(record.contains('z'));
    }

    #[test]
    fn repeated_letter_is_rejected_without_change() {
        let (target, mut reveal, mut record) = level("python");
        evaluate(&target, &mut reveal, &mut record, &Guess::Letter('p'), true).unwrap();
        let before = reveal.clone();

        let again = evaluate(&target, &mut reveal, &mut record, &Guess::Letter('p'), false);
        assert_eq!(again, Err(GuessError::AlreadyGuessed('p')));
        assert_eq!(reveal, before);

        let wrong_twice = evaluate(&target, &mut reveal, &mut record, &Guess::Letter('z'), false);
        assert_eq!(wrong_twice, Ok(Outcome::WrongLetter));
        let wrong_again = evaluate(&target, &mut reveal, &mut record, &Guess::Letter('z'), false);
        assert_eq!(wrong_again, Err(GuessError::AlreadyGuessed('z')));
    }

    #[test]
    fn full_word_guess() {
        let (target, mut reveal, mut record) = level("python");

        let guess = Guess::Word("pylons".into());
        let wrong = evaluate(&target, &mut reveal, &mut record, &guess, true);
        assert_eq!(wrong, Ok(Outcome::WrongWordGuess));
        assert_eq!(reveal.revealed_count(), 0);

        let guess = Guess::Word("python".into());
        let right = evaluate(&target, &mut reveal, &mut record, &guess, false);
        assert_eq!(right, Ok(Outcome::WordSolved { first_attempt: false }));
        assert!(reveal.is_complete());
    }

    #[test]
    fn full_word_on_first_guess_is_flagged() {
        let (target, mut reveal, mut record) = level("cat");
        let outcome = evaluate(&target, &mut reveal, &mut record, &Guess::Word("cat".into()), true);
        assert_eq!(outcome, Ok(Outcome::WordSolved { first_attempt: true }));
    }

    #[test]
    fn hint_reveals_one_hidden_letter_everywhere() {
        let (target, mut reveal, mut record) = level("banana");
        reveal.reveal_letter(&target, 'a');
        let mut rng = StdRng::seed_from_u64(3);

        let letter = reveal_hint(&target, &mut reveal, &mut record, &mut rng).unwrap();

        assert!(letter == 'b' || letter == 'n');
        assert!(record.contains(letter));
        for &i in target.positions_of(letter) {
            assert_eq!(reveal.cells()[i], Cell::Revealed(letter));
        }
    }

    #[test]
    fn hint_on_complete_word_is_none() {
        let (target, mut reveal, mut record) = level("cat");
        reveal.reveal_all(&target);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(reveal_hint(&target, &mut reveal, &mut record, &mut rng), None);
        assert!(record.is_empty());
    }
}
