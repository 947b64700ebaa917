//! Terminal output formatting
//!
//! Display utilities for the text front-end and formatting helpers shared with
//! the TUI.

pub mod display;
pub mod formatters;
pub mod help;

pub use display::{
    print_banner, print_category_menu, print_game_state, print_how_to_play, print_leaderboard,
};
