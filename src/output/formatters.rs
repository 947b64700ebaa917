//! Formatting utilities for terminal output

use crate::core::{Cell, RevealState};
use crate::engine::{LETTER_POINTS, MISS_PENALTY, Outcome};

/// Gallows drawings, from empty to fully hanged
pub const GALLOWS_STAGES: [&str; 7] = [
    "  +---+\n  |   |\n      |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n      |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n  |   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|   |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n      |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n /    |\n      |\n=========",
    "  +---+\n  |   |\n  O   |\n /|\\  |\n / \\  |\n      |\n=========",
];

/// Gallows drawing for `wrong` misses out of `max_attempts`
///
/// Other attempt limits are scaled onto the seven drawings; the last one only
/// appears once every attempt is used.
#[must_use]
pub fn gallows(wrong: u32, max_attempts: u32) -> &'static str {
    let last = GALLOWS_STAGES.len() - 1;
    if max_attempts == 0 || wrong >= max_attempts {
        return GALLOWS_STAGES[last];
    }

    // Cast is safe: the ratio is below 1, so the stage is below `last`
    let stage = (u64::from(wrong) * last as u64 / u64::from(max_attempts)) as usize;
    GALLOWS_STAGES[stage]
}

/// Masked word with letters spaced out: `P _ T _ O N`
#[must_use]
pub fn spaced_word(reveal: &RevealState) -> String {
    reveal
        .cells()
        .iter()
        .map(|cell| match cell {
            Cell::Hidden => '_',
            Cell::Revealed(c) => c.to_ascii_uppercase(),
        })
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Five-star rating string for a category difficulty of 1-5
#[must_use]
pub fn rating_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Cut `text` to `width` characters, ending in `...` when shortened
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Rank label with a medal for the podium
#[must_use]
pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "1🥇".to_string(),
        2 => "2🥈".to_string(),
        3 => "3🥉".to_string(),
        n => n.to_string(),
    }
}

/// One-line feedback for a guess outcome
#[must_use]
pub fn outcome_message(outcome: &Outcome) -> String {
    match outcome {
        Outcome::CorrectLetter(positions) if positions.len() == 1 => {
            format!("Correct! 1 letter revealed (+{LETTER_POINTS})")
        }
        Outcome::CorrectLetter(positions) => {
            format!("Correct! {} letters revealed (+{LETTER_POINTS})", positions.len())
        }
        Outcome::WrongLetter => format!("Wrong guess (-{MISS_PENALTY})"),
        Outcome::WordSolved { .. } => format!("You guessed the word! (+{LETTER_POINTS})"),
        Outcome::WrongWordGuess => format!("That's not the word (-{MISS_PENALTY})"),
        Outcome::HintGranted(letter) => {
            format!("Hint: the word contains '{}'", letter.to_ascii_uppercase())
        }
        Outcome::NoHintsAvailable => "No hints left!".to_string(),
        Outcome::Quit => "Game stopped.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn gallows_stages_for_default_attempts() {
        assert_eq!(gallows(0, 6), GALLOWS_STAGES[0]);
        assert_eq!(gallows(3, 6), GALLOWS_STAGES[3]);
        assert_eq!(gallows(6, 6), GALLOWS_STAGES[6]);
        assert_eq!(gallows(9, 6), GALLOWS_STAGES[6]);
    }

    #[test]
    fn gallows_scales_other_limits() {
        assert_eq!(gallows(0, 3), GALLOWS_STAGES[0]);
        assert_eq!(gallows(1, 3), GALLOWS_STAGES[2]);
        assert_eq!(gallows(2, 3), GALLOWS_STAGES[4]);
        assert_eq!(gallows(3, 3), GALLOWS_STAGES[6]);
        // Only the final miss completes the figure
        assert_ne!(gallows(9, 10), GALLOWS_STAGES[6]);
    }

    #[test]
    fn spaced_word_masks_hidden_cells() {
        let word = Word::new("python").unwrap();
        let mut reveal = RevealState::new(&word);
        reveal.reveal_letter(&word, 'p');
        reveal.reveal_letter(&word, 'o');
        assert_eq!(spaced_word(&reveal), "P _ _ _ O _");
    }

    #[test]
    fn stars() {
        assert_eq!(rating_stars(0), "☆☆☆☆☆");
        assert_eq!(rating_stars(3), "★★★☆☆");
        assert_eq!(rating_stars(9), "★★★★★");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 6.0, 6);
        assert_eq!(bar, "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(6.0, 6.0, 6);
        assert_eq!(bar, "██████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(3.0, 6.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn truncate_long_names() {
        assert_eq!(truncate("Ada", 17), "Ada");
        assert_eq!(truncate("Bartholomew-the-Third", 10), "Barthol...");
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(&Outcome::CorrectLetter(vec![1, 3])),
            "Correct! 2 letters revealed (+10)"
        );
        assert_eq!(outcome_message(&Outcome::WrongLetter), "Wrong guess (-5)");
        assert_eq!(
            outcome_message(&Outcome::HintGranted('q')),
            "Hint: the word contains 'Q'"
        );
    }

    #[test]
    fn podium_ranks() {
        assert_eq!(rank_label(1), "1🥇");
        assert_eq!(rank_label(4), "4");
    }
}
