//! The game session state machine
//!
//! One `GameSession` is one play-through: difficulty (and category) selection,
//! then levels until the player loses, quits, or the category runs out of words.
//! All mutation goes through the transition methods, which keep the session
//! invariants (score floor, non-increasing attempts, level only rising on a win).

use super::evaluator::{self, Guess, GuessError, Outcome};
use super::ledger::ScoreLedger;
use crate::config::Rules;
use crate::core::{Category, Cell, Difficulty, GameMode, GuessRecord, RevealState, Word};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, LeaderboardError};
use crate::wordlists::{CatalogError, WordCatalog, WordDeck};
use rand::Rng;
use rand::rngs::StdRng;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingDifficulty,
    AwaitingCategory,
    InLevel,
    LevelWon,
    LevelLost,
    SessionEnded(EndReason),
}

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    Lost,
    Quit,
    CatalogExhausted,
}

/// Session errors; none of them end the session
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("invalid choice '{0}'")]
    InvalidChoice(String),

    #[error("cannot {action} in phase {phase:?}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error(transparent)]
    Guess(#[from] GuessError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),

    #[error("this session's result was already recorded")]
    AlreadyRecorded,

    #[error("player name must not be empty")]
    EmptyName,
}

/// Letter status for the alphabet tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Unused,
    Hit,
    Miss,
}

/// The level currently being played
#[derive(Debug, Clone)]
struct Level {
    target: Word,
    reveal: RevealState,
    record: GuessRecord,
    attempts_remaining: u32,
    /// Accepted letter and word guesses so far; hints are not counted
    guesses: u32,
}

impl Level {
    fn new(target: Word, max_attempts: u32) -> Self {
        let reveal = RevealState::new(&target);
        Self {
            target,
            reveal,
            record: GuessRecord::new(),
            attempts_remaining: max_attempts,
            guesses: 0,
        }
    }
}

/// Read-only view of the session for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub mode: Option<GameMode>,
    pub level: u32,
    pub levels_completed: u32,
    pub score: u32,
    pub hints: u32,
    pub attempts_remaining: u32,
    pub max_attempts: u32,
    pub reveal: Option<RevealState>,
    pub guessed: Vec<char>,
    pub last_outcome: Option<Outcome>,
    /// Bonus awarded for the level just won
    pub last_bonus: u32,
    /// The target word, once the level is over
    pub answer: Option<String>,
    pub recorded: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub const fn wrong_guesses(&self) -> u32 {
        self.max_attempts.saturating_sub(self.attempts_remaining)
    }

    /// Whether `letter` was guessed, and if so whether it is in the word
    ///
    /// Correct letters are always revealed, so a guessed letter that shows up in
    /// the reveal state is a hit.
    #[must_use]
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        let letter = letter.to_ascii_lowercase();
        if !self.guessed.contains(&letter) {
            return LetterStatus::Unused;
        }
        let revealed = self
            .reveal
            .as_ref()
            .is_some_and(|r| r.cells().contains(&Cell::Revealed(letter)));
        if revealed {
            LetterStatus::Hit
        } else {
            LetterStatus::Miss
        }
    }
}

/// One play-through
pub struct GameSession<'a, R: Rng = StdRng> {
    catalog: &'a WordCatalog,
    rules: Rules,
    rng: R,
    phase: Phase,
    mode: Option<GameMode>,
    deck: Option<WordDeck>,
    ledger: ScoreLedger,
    max_attempts: u32,
    level: Option<Level>,
    last_outcome: Option<Outcome>,
    last_bonus: u32,
    recorded: bool,
}

impl<'a, R: Rng> GameSession<'a, R> {
    /// New session waiting for a difficulty
    pub fn new(catalog: &'a WordCatalog, rules: Rules, rng: R) -> Self {
        Self {
            catalog,
            rules,
            rng,
            phase: Phase::AwaitingDifficulty,
            mode: None,
            deck: None,
            ledger: ScoreLedger::new(0),
            max_attempts: 0,
            level: None,
            last_outcome: None,
            last_bonus: 0,
            recorded: false,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn mode(&self) -> Option<GameMode> {
        self.mode
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.ledger.score()
    }

    /// True once no further play is possible (lost, quit or out of words)
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::LevelLost | Phase::SessionEnded(_))
    }

    /// Answer the difficulty menu: `1`/`easy`/`normal`, `2`/`hard`, `3`/`custom`
    ///
    /// Easy and Hard start the first level straight away; Custom asks for a
    /// category next.
    ///
    /// # Errors
    ///
    /// `InvalidChoice` for an unknown answer, `Catalog` if the mode has no words
    /// (the session stays in difficulty selection), `WrongPhase` otherwise.
    pub fn choose_difficulty(&mut self, input: &str) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::AwaitingDifficulty, "choose a difficulty")?;

        match Difficulty::from_choice(input) {
            Some(Difficulty::Easy) => self.start(GameMode::easy()),
            Some(Difficulty::Hard) => self.start(GameMode::hard()),
            Some(Difficulty::Custom) => {
                self.phase = Phase::AwaitingCategory;
                tracing::debug!("custom play selected, awaiting category");
                Ok(self.phase)
            }
            None => Err(SessionError::InvalidChoice(input.trim().to_string())),
        }
    }

    /// Answer the category menu: `1`-`4` or a custom category name; `b` goes back
    ///
    /// # Errors
    ///
    /// `InvalidChoice` for an unknown answer, `Catalog` if the category has no
    /// words (the session stays in category selection), `WrongPhase` otherwise.
    pub fn choose_category(&mut self, input: &str) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::AwaitingCategory, "choose a category")?;

        let choice = input.trim();
        if choice.eq_ignore_ascii_case("b") {
            self.phase = Phase::AwaitingDifficulty;
            return Ok(self.phase);
        }

        let category = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Category::CUSTOM.get(i).copied())
            .or_else(|| Category::from_name(choice))
            .and_then(GameMode::custom)
            .ok_or_else(|| SessionError::InvalidChoice(choice.to_string()))?;

        self.start(category)
    }

    /// Feed one raw input line to the level in play
    ///
    /// # Errors
    ///
    /// `Guess` for malformed or repeated guesses (nothing changes), `WrongPhase`
    /// outside a level.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, SessionError> {
        self.expect_phase(Phase::InLevel, "guess")?;
        let Some(level) = self.level.as_mut() else {
            return Err(SessionError::WrongPhase {
                action: "guess",
                phase: self.phase,
            });
        };

        let guess = Guess::parse(input, level.target.len())?;
        let first_guess = level.guesses == 0;

        let outcome = match guess {
            Guess::Quit => {
                self.phase = Phase::SessionEnded(EndReason::Quit);
                tracing::debug!(score = self.ledger.score(), "player quit");
                Outcome::Quit
            }
            Guess::Hint => {
                if self.ledger.hints() == 0 {
                    Outcome::NoHintsAvailable
                } else if let Some(letter) = evaluator::reveal_hint(
                    &level.target,
                    &mut level.reveal,
                    &mut level.record,
                    &mut self.rng,
                ) {
                    self.ledger.take_hint();
                    Outcome::HintGranted(letter)
                } else {
                    Outcome::NoHintsAvailable
                }
            }
            guess @ (Guess::Letter(_) | Guess::Word(_)) => {
                let outcome = evaluator::evaluate(
                    &level.target,
                    &mut level.reveal,
                    &mut level.record,
                    &guess,
                    first_guess,
                )?;
                level.guesses += 1;
                self.ledger.apply(&outcome);
                if outcome.is_miss() {
                    level.attempts_remaining = level.attempts_remaining.saturating_sub(1);
                }
                outcome
            }
        };

        if self.phase == Phase::InLevel {
            if level.reveal.is_complete() {
                // A hint that finishes the word never earns the first-guess bonus
                let solved_by_guess = !matches!(outcome, Outcome::HintGranted(_));
                let won_level = self.ledger.level();
                self.last_bonus = self.ledger.complete_level(first_guess && solved_by_guess);
                self.phase = Phase::LevelWon;
                tracing::debug!(
                    level = won_level,
                    score = self.ledger.score(),
                    bonus = self.last_bonus,
                    "level won"
                );
            } else if level.attempts_remaining == 0 {
                self.phase = Phase::LevelLost;
                tracing::debug!(level = self.ledger.level(), "level lost");
            }
        }

        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    /// Move from a won level to the next one
    ///
    /// Ends the session with `EndReason::CatalogExhausted` if no words are left.
    ///
    /// # Errors
    ///
    /// `WrongPhase` unless the last level was won.
    pub fn next_level(&mut self) -> Result<Phase, SessionError> {
        self.expect_phase(Phase::LevelWon, "start the next level")?;

        match self.begin_level() {
            Ok(()) => Ok(self.phase),
            Err(CatalogError::Empty(category)) => {
                tracing::info!(%category, "no words left, ending session");
                self.phase = Phase::SessionEnded(EndReason::CatalogExhausted);
                Ok(self.phase)
            }
        }
    }

    /// Hand the final result to the leaderboard
    ///
    /// Only valid once play is over and only once per session. A lost level
    /// moves to `SessionEnded(Lost)`.
    ///
    /// # Errors
    ///
    /// `EmptyName` leaves the session untouched so the name can be
    /// asked again. `Leaderboard(StoreUnavailable)` is returned after the session
    /// has ended and the entry is on the in-memory board.
    pub fn record(&mut self, player: &str, board: &mut Leaderboard) -> Result<(), SessionError> {
        if !self.is_over() {
            return Err(SessionError::WrongPhase {
                action: "record the result",
                phase: self.phase,
            });
        }
        if self.recorded {
            return Err(SessionError::AlreadyRecorded);
        }

        let category = self.mode.map_or(Category::Easy, GameMode::category);
        let entry = LeaderboardEntry::new(
            player,
            category,
            self.ledger.score(),
            self.ledger.levels_completed(),
        )
        .map_err(|e| match e {
            LeaderboardError::EmptyName => SessionError::EmptyName,
            other => SessionError::Leaderboard(other),
        })?;

        self.recorded = true;
        if self.phase == Phase::LevelLost {
            self.phase = Phase::SessionEnded(EndReason::Lost);
        }

        board.record(entry)?;
        Ok(())
    }

    /// Read-only view for the presentation layer
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let level_over = !matches!(self.phase, Phase::InLevel);

        SessionSnapshot {
            phase: self.phase,
            mode: self.mode,
            level: self.ledger.level(),
            levels_completed: self.ledger.levels_completed(),
            score: self.ledger.score(),
            hints: self.ledger.hints(),
            attempts_remaining: self.level.as_ref().map_or(0, |l| l.attempts_remaining),
            max_attempts: self.max_attempts,
            reveal: self.level.as_ref().map(|l| l.reveal.clone()),
            guessed: self
                .level
                .as_ref()
                .map(|l| l.record.iter().collect())
                .unwrap_or_default(),
            last_outcome: self.last_outcome.clone(),
            last_bonus: self.last_bonus,
            answer: self
                .level
                .as_ref()
                .filter(|_| level_over)
                .map(|l| l.target.text().to_string()),
            recorded: self.recorded,
        }
    }

    fn start(&mut self, mode: GameMode) -> Result<Phase, SessionError> {
        let deck = self.catalog.deck(mode)?;
        let rules = self.rules.for_difficulty(mode.difficulty());

        self.mode = Some(mode);
        self.deck = Some(deck);
        self.ledger = ScoreLedger::new(rules.starting_hints);
        self.max_attempts = rules.max_attempts;
        self.begin_level()?;

        tracing::debug!(%mode, hints = rules.starting_hints, "session started");
        Ok(self.phase)
    }

    fn begin_level(&mut self) -> Result<(), CatalogError> {
        let deck = self
            .deck
            .as_mut()
            .ok_or(CatalogError::Empty(Category::Easy))?;
        let word = deck.select(&mut self.rng)?;

        self.level = Some(Level::new(word, self.max_attempts));
        self.last_outcome = None;
        self.last_bonus = 0;
        self.phase = Phase::InLevel;
        Ok(())
    }

    fn expect_phase(&self, expected: Phase, action: &'static str) -> Result<(), SessionError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SessionError::WrongPhase {
                action,
                phase: self.phase,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DifficultyRules;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    fn catalog(category: Category, words: &[&str]) -> WordCatalog {
        WordCatalog::from_lists([(category, words_from_slice(words))])
    }

    fn session(catalog: &WordCatalog) -> GameSession<'_> {
        GameSession::new(catalog, Rules::default(), StdRng::seed_from_u64(42))
    }

    fn target(session: &GameSession<'_>) -> String {
        session.level.as_ref().unwrap().target.text().to_string()
    }

    #[test]
    fn python_scenario() {
        let catalog = catalog(Category::Animals, &["python"]);
        let mut session = session(&catalog);

        assert_eq!(session.choose_difficulty("3").unwrap(), Phase::AwaitingCategory);
        assert_eq!(session.choose_category("1").unwrap(), Phase::InLevel);
        let start = session.snapshot();
        assert_eq!(start.attempts_remaining, 6);
        assert_eq!(start.hints, 2);

        assert_eq!(session.submit("P").unwrap(), Outcome::CorrectLetter(vec![0]));
        assert_eq!(session.score(), 10);

        assert_eq!(session.submit("Z").unwrap(), Outcome::WrongLetter);
        let snap = session.snapshot();
        assert_eq!(snap.score, 5);
        assert_eq!(snap.attempts_remaining, 5);

        assert_eq!(session.submit("PYTHON").unwrap(), Outcome::WordSolved { first_attempt: false });
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::LevelWon);
        assert_eq!(snap.score, 15);
        assert_eq!(snap.last_bonus, 0);
        assert_eq!(snap.hints, 3);
        assert_eq!(snap.level, 2);
        assert_eq!(snap.levels_completed, 1);
        assert_eq!(snap.answer.as_deref(), Some("python"));

        // The only word is used up, the level number stays where the win left it
        assert_eq!(
            session.next_level().unwrap(),
            Phase::SessionEnded(EndReason::CatalogExhausted)
        );
        assert_eq!(session.snapshot().level, 2);
    }

    #[test]
    fn cat_first_guess_bonus() {
        let catalog = catalog(Category::Easy, &["cat"]);
        let mut session = session(&catalog);
        session.choose_difficulty("easy").unwrap();

        assert_eq!(session.submit("CAT").unwrap(), Outcome::WordSolved { first_attempt: true });
        let snap = session.snapshot();
        assert_eq!(snap.score, 60);
        assert_eq!(snap.last_bonus, 50);
        assert_eq!(snap.hints, 4);
    }

    #[test]
    fn full_word_after_any_guess_has_no_bonus() {
        let catalog = catalog(Category::Easy, &["cat"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();

        session.submit("c").unwrap();
        session.submit("cat").unwrap();
        assert_eq!(session.score(), 20);
        assert_eq!(session.snapshot().last_bonus, 0);
    }

    #[test]
    fn full_word_after_hint_keeps_bonus() {
        let catalog = catalog(Category::Easy, &["python"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();

        assert!(matches!(session.submit("hint").unwrap(), Outcome::HintGranted(_)));
        assert_eq!(session.submit("python").unwrap(), Outcome::WordSolved { first_attempt: true });
        let snap = session.snapshot();
        assert_eq!(snap.phase, Phase::LevelWon);
        assert_eq!(snap.score, 60);
        assert_eq!(snap.last_bonus, 50);
    }

    #[test]
    fn single_letter_solve_on_first_guess_earns_bonus() {
        let catalog = catalog(Category::Easy, &["aaa"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();

        assert_eq!(session.submit("a").unwrap(), Outcome::CorrectLetter(vec![0, 1, 2]));
        assert_eq!(session.phase(), Phase::LevelWon);
        assert_eq!(session.score(), 60);
    }

    #[test]
    fn level_increments_on_win_without_repeat() {
        let catalog = catalog(Category::Hard, &["jazz", "onyx"]);
        let mut session = session(&catalog);
        session.choose_difficulty("2").unwrap();
        assert_eq!(session.snapshot().level, 1);

        let first = target(&session);
        session.submit(&first).unwrap();
        assert_eq!(session.phase(), Phase::LevelWon);
        assert_eq!(session.snapshot().level, 2);

        assert_eq!(session.next_level().unwrap(), Phase::InLevel);
        let snap = session.snapshot();
        assert_eq!(snap.level, 2);
        assert_eq!(snap.attempts_remaining, 6);
        assert!(snap.guessed.is_empty());
        assert_ne!(target(&session), first);

        let second = target(&session);
        session.submit(&second).unwrap();
        assert_eq!(
            session.next_level().unwrap(),
            Phase::SessionEnded(EndReason::CatalogExhausted)
        );
        let snap = session.snapshot();
        assert_eq!(snap.levels_completed, 2);
        assert_eq!(snap.level, 3);
    }

    #[test]
    fn hint_consumes_one_and_changes_nothing_else() {
        let catalog = catalog(Category::Easy, &["banana"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();
        session.submit("b").unwrap();
        session.submit("x").unwrap();
        let before = session.snapshot();

        let outcome = session.submit("hint").unwrap();
        let after = session.snapshot();

        let Outcome::HintGranted(letter) = outcome else {
            panic!("expected a hint, got {outcome:?}");
        };
        assert!(letter == 'a' || letter == 'n');
        assert_eq!(after.hints, before.hints - 1);
        assert_eq!(after.score, before.score);
        assert_eq!(after.attempts_remaining, before.attempts_remaining);

        let newly_revealed = after.reveal.as_ref().unwrap().revealed_count()
            - before.reveal.as_ref().unwrap().revealed_count();
        assert_eq!(newly_revealed, if letter == 'a' { 3 } else { 2 });
        assert_eq!(after.letter_status(letter), LetterStatus::Hit);
    }

    #[test]
    fn hint_with_empty_pool_changes_nothing() {
        let catalog = catalog(Category::Hard, &["rhythm"]);
        let rules = Rules {
            hard: DifficultyRules {
                max_attempts: 6,
                starting_hints: 0,
            },
            ..Rules::default()
        };
        let mut session = GameSession::new(&catalog, rules, StdRng::seed_from_u64(1));
        session.choose_difficulty("hard").unwrap();
        let before = session.snapshot();

        assert_eq!(session.submit("hint").unwrap(), Outcome::NoHintsAvailable);

        let after = session.snapshot();
        assert_eq!(after.hints, 0);
        assert_eq!(after.reveal, before.reveal);
        assert_eq!(after.score, before.score);
        assert_eq!(after.phase, Phase::InLevel);
    }

    #[test]
    fn hint_completing_word_wins_without_bonus() {
        let catalog = catalog(Category::Easy, &["aaa"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();

        assert_eq!(session.submit("hint").unwrap(), Outcome::HintGranted('a'));
        assert_eq!(session.phase(), Phase::LevelWon);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn repeat_and_invalid_guesses_change_nothing() {
        let catalog = catalog(Category::Easy, &["python"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();
        session.submit("p").unwrap();
        session.submit("q").unwrap();
        let before = session.snapshot();

        for input in ["p", "Q", "", "12", "py", "pythons"] {
            assert!(matches!(session.submit(input), Err(SessionError::Guess(_))));
        }
        let after = session.snapshot();
        assert_eq!(after.score, before.score);
        assert_eq!(after.attempts_remaining, before.attempts_remaining);
        assert_eq!(after.reveal, before.reveal);
        assert_eq!(after.phase, Phase::InLevel);
    }

    #[test]
    fn running_out_of_attempts_loses_and_records() {
        let catalog = catalog(Category::Easy, &["cat"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();
        session.submit("c").unwrap();

        let mut attempts = Vec::new();
        for letter in ["b", "d", "e", "f", "g", "h"] {
            session.submit(letter).unwrap();
            attempts.push(session.snapshot().attempts_remaining);
        }
        assert_eq!(attempts, vec![5, 4, 3, 2, 1, 0]);
        assert_eq!(session.phase(), Phase::LevelLost);
        assert_eq!(session.score(), 0);
        assert_eq!(session.snapshot().answer.as_deref(), Some("cat"));
        assert!(matches!(session.submit("a"), Err(SessionError::WrongPhase { .. })));

        let mut board = Leaderboard::in_memory();
        assert!(matches!(session.record("  ", &mut board), Err(SessionError::EmptyName)));
        assert_eq!(session.phase(), Phase::LevelLost);

        session.record("Ada", &mut board).unwrap();
        assert_eq!(session.phase(), Phase::SessionEnded(EndReason::Lost));
        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].category(), Category::Easy);
        assert!(matches!(
            session.record("Ada", &mut board),
            Err(SessionError::AlreadyRecorded)
        ));
    }

    #[test]
    fn quit_ends_session() {
        let catalog = catalog(Category::Movies, &["jaws"]);
        let mut session = session(&catalog);
        session.choose_difficulty("custom").unwrap();
        session.choose_category("movies").unwrap();
        session.submit("j").unwrap();

        assert_eq!(session.submit("stp").unwrap(), Outcome::Quit);
        assert_eq!(session.phase(), Phase::SessionEnded(EndReason::Quit));

        let mut board = Leaderboard::in_memory();
        session.record("Bo", &mut board).unwrap();
        let entry = &board.entries()[0];
        assert_eq!(entry.score(), 10);
        assert_eq!(entry.category(), Category::Movies);
        assert_eq!(entry.levels_completed(), 0);
    }

    #[test]
    fn record_before_end_is_wrong_phase() {
        let catalog = catalog(Category::Easy, &["cat"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();
        let mut board = Leaderboard::in_memory();
        assert!(matches!(
            session.record("Ada", &mut board),
            Err(SessionError::WrongPhase { .. })
        ));
        assert!(board.is_empty());
    }

    #[test]
    fn difficulty_and_category_menus() {
        let catalog = catalog(Category::Animals, &["lion"]);
        let mut session = session(&catalog);

        assert!(matches!(
            session.choose_difficulty("9"),
            Err(SessionError::InvalidChoice(_))
        ));
        assert!(matches!(
            session.choose_category("1"),
            Err(SessionError::WrongPhase { .. })
        ));

        session.choose_difficulty("3").unwrap();
        assert!(matches!(
            session.choose_category("easy"),
            Err(SessionError::InvalidChoice(_))
        ));
        assert!(matches!(
            session.choose_category("5"),
            Err(SessionError::InvalidChoice(_))
        ));
        assert_eq!(session.choose_category("b").unwrap(), Phase::AwaitingDifficulty);

        session.choose_difficulty("3").unwrap();
        assert_eq!(session.choose_category("Animals").unwrap(), Phase::InLevel);
        assert_eq!(session.mode(), GameMode::custom(Category::Animals));
    }

    #[test]
    fn empty_category_keeps_selection_phase() {
        let catalog = catalog(Category::Animals, &["lion"]);
        let mut session = session(&catalog);

        assert!(matches!(
            session.choose_difficulty("2"),
            Err(SessionError::Catalog(CatalogError::Empty(Category::Hard)))
        ));
        assert_eq!(session.phase(), Phase::AwaitingDifficulty);

        session.choose_difficulty("3").unwrap();
        assert!(matches!(
            session.choose_category("2"),
            Err(SessionError::Catalog(_))
        ));
        assert_eq!(session.phase(), Phase::AwaitingCategory);
    }

    #[test]
    fn letter_status_tracks_hits_and_misses() {
        let catalog = catalog(Category::Easy, &["cat"]);
        let mut session = session(&catalog);
        session.choose_difficulty("1").unwrap();
        session.submit("c").unwrap();
        session.submit("z").unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.letter_status('C'), LetterStatus::Hit);
        assert_eq!(snap.letter_status('z'), LetterStatus::Miss);
        assert_eq!(snap.letter_status('a'), LetterStatus::Unused);
        assert_eq!(snap.wrong_guesses(), 1);
        assert!(snap.answer.is_none());
    }
}
