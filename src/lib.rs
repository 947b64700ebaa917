//! Hangman
//!
//! A terminal word-guessing game with levels, word categories, a hint economy
//! and a persistent leaderboard. The engine is UI-free: front-ends write raw
//! input lines into a `GameSession` and render its snapshot.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::config::Rules;
//! use hangman::engine::{GameSession, Outcome, Phase};
//! use hangman::wordlists::WordCatalog;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let catalog = WordCatalog::embedded();
//! let mut session = GameSession::new(&catalog, Rules::default(), StdRng::seed_from_u64(7));
//!
//! session.choose_difficulty("normal").unwrap();
//! assert_eq!(session.phase(), Phase::InLevel);
//!
//! let outcome = session.submit("e").unwrap();
//! assert!(matches!(outcome, Outcome::CorrectLetter(_) | Outcome::WrongLetter));
//! ```

// Core domain types
pub mod core;

// Guess evaluation, scoring and the session state machine
pub mod engine;

// Word lists
pub mod wordlists;

// Persistent scores
pub mod leaderboard;

// Settings file and per-difficulty rules
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
