//! Non-interactive leaderboard commands

use super::simple::get_user_input;
use crate::core::Category;
use crate::leaderboard::{Leaderboard, Scope, TOP_N};
use crate::output::print_leaderboard;
use anyhow::{Context, Result};
use colored::Colorize;

/// Print the leaderboard, optionally for one category and without the top-N cut
pub fn show_scores(board: &Leaderboard, category: Option<Category>, all: bool) {
    let scope = if all { Scope::AllTime } else { Scope::TopN(TOP_N) };
    print_leaderboard(board, category, scope);
}

/// Clear the leaderboard, asking first unless `confirmed`
///
/// Returns whether the board was cleared.
///
/// # Errors
///
/// Returns an error if the prompt cannot be read or the store cannot be written.
pub fn clear_scores(board: &mut Leaderboard, confirmed: bool) -> Result<bool> {
    if !confirmed && !confirm_clear()? {
        println!("{}", "Leaderboard reset cancelled.".yellow());
        return Ok(false);
    }

    board.clear().context("Failed to clear the leaderboard")?;
    println!("{}", "Leaderboard cleared.".green().bold());
    Ok(true)
}

/// Ask for a `yes` before wiping every score
pub(super) fn confirm_clear() -> Result<bool> {
    println!(
        "{}",
        "⚠️  This will delete every score on the leaderboard!".red().bold()
    );
    let answer = get_user_input("Are you sure? (yes/no)")?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}
