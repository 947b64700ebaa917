//! Scoring rules, hint pool and level counter

use super::evaluator::Outcome;

/// Points for a correct letter guess (per guess, not per revealed occurrence)
pub const LETTER_POINTS: u32 = 10;
/// Points lost for a wrong letter or wrong full-word guess
pub const MISS_PENALTY: u32 = 5;
/// Bonus for winning a level on its very first guess
pub const FIRST_ATTEMPT_BONUS: u32 = 50;
/// Hints earned for every completed level
pub const HINTS_PER_LEVEL: u32 = 1;

/// Running score, hint pool and level number of one session
///
/// Score is unsigned and penalties saturate, so it can never drop below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLedger {
    score: u32,
    hints: u32,
    level: u32,
    levels_completed: u32,
}

impl ScoreLedger {
    #[must_use]
    pub const fn new(starting_hints: u32) -> Self {
        Self {
            score: 0,
            hints: starting_hints,
            level: 1,
            levels_completed: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> u32 {
        self.hints
    }

    #[inline]
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[inline]
    #[must_use]
    pub const fn levels_completed(&self) -> u32 {
        self.levels_completed
    }

    /// Apply the points of a guess outcome; returns the signed score change
    ///
    /// A correct full-word guess scores like a correct letter. The first-attempt
    /// bonus is granted separately by `complete_level`.
    pub fn apply(&mut self, outcome: &Outcome) -> i64 {
        let before = self.score;
        match outcome {
            Outcome::CorrectLetter(_) | Outcome::WordSolved { .. } => {
                self.score += LETTER_POINTS;
            }
            Outcome::WrongLetter | Outcome::WrongWordGuess => {
                self.score = self.score.saturating_sub(MISS_PENALTY);
            }
            Outcome::HintGranted(_) | Outcome::NoHintsAvailable | Outcome::Quit => {}
        }
        i64::from(self.score) - i64::from(before)
    }

    /// Take one hint from the pool; false if the pool is empty
    pub fn take_hint(&mut self) -> bool {
        if self.hints == 0 {
            return false;
        }
        self.hints -= 1;
        true
    }

    /// Credit a won level: level number and hint pool go up by one, plus the
    /// bonus if the level was won on its first guess
    ///
    /// Returns the bonus awarded.
    pub fn complete_level(&mut self, first_attempt: bool) -> u32 {
        let bonus = if first_attempt { FIRST_ATTEMPT_BONUS } else { 0 };
        self.score += bonus;
        self.hints += HINTS_PER_LEVEL;
        self.levels_completed += 1;
        self.level += 1;
        bonus
    }
}
