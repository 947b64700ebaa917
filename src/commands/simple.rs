//! Simple interactive CLI mode
//!
//! Line-based menus and game loop without the TUI

use super::scores::confirm_clear;
use crate::config::Rules;
use crate::core::Category;
use crate::engine::{EndReason, GameSession, Outcome, Phase, SessionError};
use crate::leaderboard::{Leaderboard, Scope, TOP_N};
use crate::output::formatters::{outcome_message, spaced_word};
use crate::output::{
    print_banner, print_category_menu, print_game_state, print_how_to_play, print_leaderboard,
};
use crate::wordlists::WordCatalog;
use anyhow::{Result, bail};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the text menu until the player exits
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(catalog: &WordCatalog, rules: Rules, board: &mut Leaderboard) -> Result<()> {
    print_banner("H A N G M A N");

    loop {
        println!("{}", "MAIN MENU".bright_cyan().bold());
        println!("  1. Start Game");
        println!("  2. View Leaderboard");
        println!("  3. Clear Leaderboard");
        println!("  4. How to Play");
        println!("  5. Exit\n");

        match get_user_input("Enter your choice (1-5)")?.as_str() {
            "1" => play_session(catalog, rules, board)?,
            "2" => leaderboard_menu(board)?,
            "3" => {
                if confirm_clear()? {
                    match board.clear() {
                        Ok(()) => println!("{}\n", "Leaderboard cleared.".green().bold()),
                        Err(e) => println!("{}\n", format!("❌ {e}").red()),
                    }
                } else {
                    println!("{}\n", "Leaderboard reset cancelled.".yellow());
                }
            }
            "4" => {
                print_how_to_play();
                get_user_input("Press Enter to return to the main menu")?;
            }
            "5" | "q" | "quit" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            _ => println!("{}\n", "❌ Please enter a number between 1 and 5.".red()),
        }
    }
}

/// Play one session from difficulty selection to the recorded result
fn play_session(catalog: &WordCatalog, rules: Rules, board: &mut Leaderboard) -> Result<()> {
    let mut session = GameSession::new(catalog, rules, StdRng::from_os_rng());

    loop {
        match session.phase() {
            Phase::AwaitingDifficulty => {
                println!("{}", "Choose a difficulty:".bright_cyan().bold());
                println!("  1. Normal");
                println!("  2. Hard");
                println!("  3. Custom\n");
                let input = get_user_input("Difficulty (1-3)")?;
                report(session.choose_difficulty(&input));
            }
            Phase::AwaitingCategory => {
                print_category_menu(catalog);
                let input = get_user_input("Category (1-4, b to go back)")?;
                report(session.choose_category(&input));
            }
            Phase::InLevel => {
                print_game_state(&session.snapshot());
                let input = get_user_input("Your guess")?;
                match session.submit(&input) {
                    Ok(outcome) => print_outcome(&outcome),
                    Err(e) => println!("{}", format!("❌ {e}").red()),
                }
            }
            Phase::LevelWon => {
                let snapshot = session.snapshot();
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    format!("    🎉  LEVEL {} COMPLETE!  🎉", snapshot.levels_completed)
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());
                if let Some(answer) = &snapshot.answer {
                    println!("\n  The word was {}", answer.to_uppercase().bright_white().bold());
                }
                if snapshot.last_bonus > 0 {
                    println!(
                        "  {}",
                        format!("First-guess bonus: +{}", snapshot.last_bonus).bright_yellow()
                    );
                }
                println!("  Score: {}  |  Hints: {}\n", snapshot.score, snapshot.hints);

                get_user_input("Press Enter for the next level")?;
                if session.next_level()? == Phase::SessionEnded(EndReason::CatalogExhausted) {
                    println!(
                        "\n{}",
                        "🏆 You have guessed every word in this category!".bright_green().bold()
                    );
                }
            }
            Phase::LevelLost | Phase::SessionEnded(_) => {
                finish_session(&mut session, board)?;
                return Ok(());
            }
        }
    }
}

/// Show the final result and ask for a name until it is recorded
fn finish_session(session: &mut GameSession<'_>, board: &mut Leaderboard) -> Result<()> {
    let snapshot = session.snapshot();
    if snapshot.phase == Phase::LevelLost {
        print_game_state(&snapshot);
        println!("{}", "💀 GAME OVER".red().bold());
        if let Some(answer) = &snapshot.answer {
            println!("  The word was {}", answer.to_uppercase().bright_white().bold());
        }
    } else if let Some(reveal) = &snapshot.reveal {
        println!("  Word so far: {}", spaced_word(reveal));
    }
    println!(
        "\n  Final score: {}  |  Levels completed: {}\n",
        snapshot.score.to_string().bright_cyan().bold(),
        snapshot.levels_completed
    );

    loop {
        let name = get_user_input("Enter your name for the leaderboard")?;
        match session.record(&name, board) {
            Ok(()) => {
                println!("{}\n", "Score saved!".green().bold());
                return Ok(());
            }
            Err(SessionError::EmptyName) => {
                println!("{}", "❌ Name cannot be empty.".red());
            }
            Err(e) => {
                println!("{}\n", format!("⚠️  {e}; the score is kept for this run only").yellow());
                return Ok(());
            }
        }
    }
}

fn leaderboard_menu(board: &Leaderboard) -> Result<()> {
    let mut category: Option<Category> = None;
    let mut scope = Scope::TopN(TOP_N);

    loop {
        print_leaderboard(board, category, scope);

        let categories = board.categories();
        println!("{}", "OPTIONS:".bright_cyan().bold());
        println!("  1. Return to Main Menu");
        println!("  2. Toggle all scores / top {TOP_N}");
        println!("  3. All categories");
        for (i, c) in categories.iter().enumerate() {
            println!("  {}. {c} only", i + 4);
        }
        println!();

        let input = get_user_input("Enter your choice")?;
        match input.parse::<usize>() {
            Ok(1) => return Ok(()),
            Ok(2) => {
                scope = match scope {
                    Scope::AllTime => Scope::TopN(TOP_N),
                    Scope::TopN(_) => Scope::AllTime,
                };
            }
            Ok(3) => category = None,
            Ok(n) if n >= 4 && n - 4 < categories.len() => category = Some(categories[n - 4]),
            _ => println!("{}\n", "❌ Invalid choice.".red()),
        }
    }
}

fn print_outcome(outcome: &Outcome) {
    let message = outcome_message(outcome);
    match outcome {
        Outcome::CorrectLetter(_) | Outcome::WordSolved { .. } => {
            println!("{}", format!("✅ {message}").green().bold());
        }
        Outcome::WrongLetter | Outcome::WrongWordGuess => {
            println!("{}", format!("❌ {message}").red());
        }
        Outcome::HintGranted(_) => println!("{}", format!("💡 {message}").bright_yellow()),
        Outcome::NoHintsAvailable | Outcome::Quit => println!("{}", message.yellow()),
    }
}

fn report(result: Result<Phase, SessionError>) {
    if let Err(e) = result {
        println!("{}\n", format!("❌ {e}").red());
    }
}

/// Get user input with a prompt
pub(super) fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("input closed");
    }

    Ok(input.trim().to_string())
}
