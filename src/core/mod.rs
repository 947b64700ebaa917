//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure, testable, and enforce their invariants at construction.

mod mode;
mod reveal;
mod word;

pub use mode::{Category, Difficulty, GameMode};
pub use reveal::{Cell, GuessRecord, RevealState};
pub use word::{Word, WordError};
