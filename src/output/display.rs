//! Display functions for the text front-end

use super::formatters::{
    create_progress_bar, gallows, rank_label, rating_stars, spaced_word, truncate,
};
use super::help::how_to_play;
use crate::core::{Category, GameMode};
use crate::engine::{HINT_COMMAND, LetterStatus, QUIT_COMMAND, SessionSnapshot};
use crate::leaderboard::{Leaderboard, Scope};
use crate::wordlists::WordCatalog;
use colored::{Color, Colorize};

/// Print a boxed title
pub fn print_banner(title: &str) {
    let width = 62;
    println!("\n╔{}╗", "═".repeat(width));
    println!("║{:^width$}║", title);
    println!("╚{}╝\n", "═".repeat(width));
}

/// Print the board of the level in play
pub fn print_game_state(snapshot: &SessionSnapshot) {
    let border = "═".repeat(60);
    let mode = snapshot
        .mode
        .map_or_else(|| "-".to_string(), |m| m.to_string());

    println!("\n{}", border.cyan());
    println!(
        "{}",
        format!(
            "  LEVEL: {}  |  {}  |  HINTS: {}",
            snapshot.level, mode, snapshot.hints
        )
        .cyan()
        .bold()
    );
    println!("{}", border.cyan());

    let drawing: Vec<&str> = gallows(snapshot.wrong_guesses(), snapshot.max_attempts)
        .lines()
        .collect();
    let bar = create_progress_bar(
        f64::from(snapshot.attempts_remaining),
        f64::from(snapshot.max_attempts),
        snapshot.max_attempts as usize,
    );
    let side = [
        format!("SCORE:    {}", snapshot.score),
        format!(
            "ATTEMPTS: {} {}/{}",
            bar, snapshot.attempts_remaining, snapshot.max_attempts
        ),
        format!("WRONG:    {}", snapshot.wrong_guesses()),
    ];
    for (i, line) in drawing.iter().enumerate() {
        let right = if i == 0 { None } else { side.get(i - 1) };
        match right {
            Some(text) => println!("{line:<14}{}", text.bright_white()),
            None => println!("{line}"),
        }
    }

    if let Some(reveal) = &snapshot.reveal {
        println!("\n{}", " WORD TO GUESS:".cyan().bold());
        println!("  {}", spaced_word(reveal).bright_white().bold());
    }

    println!("\n{}", " LETTERS TRIED:".cyan().bold());
    print!(" ");
    for letter in 'A'..='Z' {
        let cell = format!(" {letter} ");
        match snapshot.letter_status(letter) {
            LetterStatus::Hit => print!("{}", cell.green().bold()),
            LetterStatus::Miss => print!("{}", cell.red()),
            LetterStatus::Unused => print!("{}", cell.bright_black()),
        }
        if letter == 'M' {
            print!("\n ");
        }
    }
    println!();

    println!("\n{}", border.cyan());
    println!(" Guess a letter, type the full word, or use '{HINT_COMMAND}' for help");
    println!("{}", format!(" Type '{QUIT_COMMAND}' to stop the game at any time").yellow());
    println!("{}\n", border.cyan());
}

/// Print the custom category menu with word counts and ratings
pub fn print_category_menu(catalog: &WordCatalog) {
    println!("{}", "Choose a category:".bright_cyan().bold());
    for (i, category) in Category::CUSTOM.iter().enumerate() {
        let summary = catalog.summary(*category);
        println!(
            "  {}. {:<10} {} {}",
            i + 1,
            category.name(),
            rating_stars(summary.rating).yellow(),
            format!(
                "({} words, avg {:.1} letters)",
                summary.word_count, summary.average_length
            )
            .bright_black()
        );
    }
    println!("  b. Back\n");
}

/// Print the ranked leaderboard with its summary line
pub fn print_leaderboard(board: &Leaderboard, category: Option<Category>, scope: Scope) {
    let title = category.map_or_else(
        || "HALL OF FAME".to_string(),
        |c| format!("{} LEADERBOARD", GameMode::for_category(c).to_string().to_uppercase()),
    );
    println!("\n{}", "═".repeat(64).yellow());
    println!("{}", format!(" {title}").bright_cyan().bold());
    println!("{}", "═".repeat(64).yellow());

    let Some(stats) = board.stats(category) else {
        match category {
            Some(c) => println!("\nNo scores recorded for {c} yet!"),
            None => println!("\nThe leaderboard is empty. Be the first to set a high score!"),
        }
        println!();
        return;
    };

    println!(
        " RECORDS: {} | HIGHEST: {} | AVERAGE: {:.1}",
        stats.records, stats.highest, stats.average
    );

    let ranked = board.query(category, scope);
    if let Some(champion) = ranked.first() {
        println!(
            "\n {} {} - {} points",
            "REIGNING CHAMPION:".bright_yellow().bold(),
            champion.name(),
            champion.score()
        );
    }

    println!("\n┌─────┬────────────────────┬────────────┬─────────────────────────┐");
    println!(
        "│{:<5}│ {:<19}│ {:<11}│ {:<24}│",
        " RANK", "PLAYER", "SCORE", "MODE"
    );
    println!("├─────┼────────────────────┼────────────┼─────────────────────────┤");
    for (i, entry) in ranked.iter().enumerate() {
        let rank = i + 1;
        let color = match rank {
            1 => Color::Yellow,
            2 => Color::Cyan,
            3 => Color::Red,
            _ => Color::White,
        };
        let row = format!(
            "│ {:<4}│ {:<19}│ {:<11}│ {:<24}│",
            rank_label(rank),
            truncate(entry.name(), 17),
            format!("{} pts", entry.score()),
            truncate(&GameMode::for_category(entry.category()).to_string(), 23)
        );
        println!("{}", row.color(color));
    }

    let total = stats.records;
    if ranked.len() < total {
        println!(
            "│     │ ... and {} more ...{}│",
            total - ranked.len(),
            " ".repeat(39)
        );
    }
    println!("└─────┴────────────────────┴────────────┴─────────────────────────┘\n");
}

/// Print the rules, scoring and tips
pub fn print_how_to_play() {
    print_banner("HOW TO PLAY");
    for section in how_to_play() {
        println!("{}", section.title.yellow().bold());
        println!("{}", "─".repeat(60).yellow());
        for line in &section.lines {
            println!("  {line}");
        }
        println!();
    }
}
