//! How-to-play text shared by both front-ends

use crate::engine::{FIRST_ATTEMPT_BONUS, HINT_COMMAND, LETTER_POINTS, MISS_PENALTY, QUIT_COMMAND};

/// A titled block of help lines
pub struct HelpSection {
    pub title: &'static str,
    pub lines: Vec<String>,
}

/// Rules, scoring, difficulties and tips
#[must_use]
pub fn how_to_play() -> Vec<HelpSection> {
    vec![
        HelpSection {
            title: "GAME RULES",
            lines: vec![
                "A random word is chosen based on your selected difficulty.".to_string(),
                "Guess one letter at a time or try to solve the whole word.".to_string(),
                "Each incorrect guess adds a piece to the hangman figure.".to_string(),
                "Complete the word before the hangman is fully drawn!".to_string(),
                format!("Type '{HINT_COMMAND}' to reveal a letter (limited hints available)."),
                format!("Type '{QUIT_COMMAND}' to stop the game at any time."),
            ],
        },
        HelpSection {
            title: "SCORING",
            lines: vec![
                format!("+{LETTER_POINTS} points for each correct letter or correct word guess"),
                format!("-{MISS_PENALTY} points for each incorrect guess (minimum score is 0)"),
                format!("+{FIRST_ATTEMPT_BONUS} bonus for solving a word with your very first guess"),
                "+1 hint for completing a word (carries over to the next level)".to_string(),
            ],
        },
        HelpSection {
            title: "DIFFICULTY",
            lines: vec![
                "Normal: common, everyday words".to_string(),
                "Hard: longer, uncommon words".to_string(),
                "Custom: choose a category (animals, countries, movies, mixed)".to_string(),
            ],
        },
        HelpSection {
            title: "TIPS",
            lines: vec![
                "Start with common vowels: E, A, O, I, U".to_string(),
                "Then try common consonants: T, N, S, R, H, L, D".to_string(),
                "Save rare letters (J, Q, X, Z) for last".to_string(),
                "Keep hints for when you are truly stuck".to_string(),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_section_uses_live_constants() {
        let sections = how_to_play();
        let scoring = sections.iter().find(|s| s.title == "SCORING").unwrap();
        assert!(scoring.lines[0].starts_with("+10 "));
        assert!(scoring.lines[2].contains("+50"));
    }
}
