//! Game engine: guess evaluation, scoring and the session state machine
//!
//! Nothing in here touches the terminal. Front-ends feed raw input lines to a
//! `GameSession` and render its `SessionSnapshot`.

mod evaluator;
mod ledger;
mod session;

pub use evaluator::{
    Guess, GuessError, HINT_COMMAND, Outcome, QUIT_COMMAND, evaluate, reveal_hint,
};
pub use ledger::{FIRST_ATTEMPT_BONUS, HINTS_PER_LEVEL, LETTER_POINTS, MISS_PENALTY, ScoreLedger};
pub use session::{EndReason, GameSession, LetterStatus, Phase, SessionError, SessionSnapshot};
