//! TUI rendering with ratatui
//!
//! One layout per screen, sharing the header, message log and status bar.

use super::app::{App, MENU_ITEMS, MessageStyle, Screen};
use crate::core::{Category, GameMode};
use crate::engine::{HINT_COMMAND, LetterStatus, QUIT_COMMAND, SessionSnapshot};
use crate::output::formatters::{gallows, rank_label, rating_stars, spaced_word, truncate};
use crate::output::help::how_to_play;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    match app.screen {
        Screen::MainMenu => render_main_menu(f, app, main_chunks[0]),
        Screen::Difficulty => render_difficulty(f, main_chunks[0]),
        Screen::Category => render_category(f, app, main_chunks[0]),
        Screen::Playing | Screen::LevelWon | Screen::NameEntry => {
            if let Some(session) = &app.session {
                render_game(f, &session.snapshot(), main_chunks[0]);
            }
        }
        Screen::Leaderboard => render_leaderboard(f, app, main_chunks[0]),
        Screen::ConfirmClear => render_confirm_clear(f, main_chunks[0]),
        Screen::HowToPlay => render_how_to_play(f, main_chunks[0]),
    }

    render_side_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn titled(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("H A N G M A N")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_menu(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = MENU_ITEMS
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = format!(" {}. {item}", i + 1);
            let style = if i == app.menu_index {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(text).style(style)
        })
        .collect();

    f.render_widget(List::new(items).block(titled(" Main Menu ")), area);
}

fn render_difficulty(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            " 1. Normal",
            Style::default().fg(Color::Green),
        )),
        Line::from("    Common, everyday words"),
        Line::from(""),
        Line::from(Span::styled(" 2. Hard", Style::default().fg(Color::Red))),
        Line::from("    Longer, uncommon words"),
        Line::from(""),
        Line::from(Span::styled(" 3. Custom", Style::default().fg(Color::Yellow))),
        Line::from("    Pick a category"),
    ];
    f.render_widget(
        Paragraph::new(content).block(titled(" Choose a Difficulty ")),
        area,
    );
}

fn render_category(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = Category::CUSTOM
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let summary = app.catalog.summary(*category);
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {}. {:<10} ", i + 1, category.name())),
                Span::styled(
                    rating_stars(summary.rating),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(
                    format!(
                        "  {} words, avg {:.1} letters",
                        summary.word_count, summary.average_length
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(titled(" Choose a Category ")), area);
}

fn render_game(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Gallows and word
            Constraint::Length(4), // Alphabet
            Constraint::Length(3), // Attempts gauge
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(16), Constraint::Min(10)])
        .split(chunks[0]);

    let color = if snapshot.wrong_guesses() * 2 >= snapshot.max_attempts {
        Color::Red
    } else {
        Color::White
    };
    let drawing = Paragraph::new(gallows(snapshot.wrong_guesses(), snapshot.max_attempts))
        .style(Style::default().fg(color))
        .block(titled(" Gallows "));
    f.render_widget(drawing, top[0]);

    let mut word_lines = vec![Line::from("")];
    if let Some(reveal) = &snapshot.reveal {
        word_lines.push(Line::from(Span::styled(
            spaced_word(reveal),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if let Some(answer) = &snapshot.answer {
        word_lines.push(Line::from(""));
        word_lines.push(Line::from(format!("The word was {}", answer.to_uppercase())));
    }
    let word = Paragraph::new(word_lines)
        .alignment(Alignment::Center)
        .block(titled(" Word to Guess "))
        .wrap(Wrap { trim: false });
    f.render_widget(word, top[1]);

    render_alphabet(f, snapshot, chunks[1]);

    let ratio = if snapshot.max_attempts == 0 {
        0.0
    } else {
        f64::from(snapshot.attempts_remaining) / f64::from(snapshot.max_attempts)
    };
    let gauge = Gauge::default()
        .block(titled(" Attempts Left "))
        .gauge_style(Style::default().fg(if ratio > 0.5 {
            Color::Green
        } else {
            Color::Red
        }))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!(
            "{}/{}",
            snapshot.attempts_remaining, snapshot.max_attempts
        ));
    f.render_widget(gauge, chunks[2]);
}

fn render_alphabet(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let row = |letters: std::ops::RangeInclusive<char>| {
        Line::from(
            letters
                .map(|letter| {
                    let style = match snapshot.letter_status(letter) {
                        LetterStatus::Hit => Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::BOLD),
                        LetterStatus::Miss => Style::default().fg(Color::Red),
                        LetterStatus::Unused => Style::default().fg(Color::DarkGray),
                    };
                    Span::styled(format!(" {letter} "), style)
                })
                .collect::<Vec<_>>(),
        )
    };

    let alphabet = Paragraph::new(vec![row('A'..='M'), row('N'..='Z')])
        .alignment(Alignment::Center)
        .block(titled(" Letters Tried "));
    f.render_widget(alphabet, area);
}

fn render_leaderboard(f: &mut Frame, app: &App, area: Rect) {
    let title = app.board_filter.map_or_else(
        || " Hall of Fame ".to_string(),
        |c| format!(" {} ", GameMode::for_category(c)),
    );

    let Some(stats) = app.board.stats(app.board_filter) else {
        let empty = Paragraph::new("No scores yet. Be the first champion!")
            .alignment(Alignment::Center)
            .block(titled(&title));
        f.render_widget(empty, area);
        return;
    };

    let mut items = vec![
        ListItem::new(format!(
            " Records: {} | Highest: {} | Average: {:.1}",
            stats.records, stats.highest, stats.average
        ))
        .style(Style::default().fg(Color::Cyan)),
        ListItem::new(""),
    ];

    for (i, entry) in app
        .board
        .query(app.board_filter, app.board_scope)
        .into_iter()
        .enumerate()
    {
        let rank = i + 1;
        let style = match rank {
            1 => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            2 => Style::default().fg(Color::Cyan),
            3 => Style::default().fg(Color::Red),
            _ => Style::default(),
        };
        items.push(
            ListItem::new(format!(
                " {:<4} {:<18} {:>6} pts  {}",
                rank_label(rank),
                truncate(entry.name(), 17),
                entry.score(),
                GameMode::for_category(entry.category())
            ))
            .style(style),
        );
    }

    f.render_widget(List::new(items).block(titled(&title)), area);
}

fn render_confirm_clear(f: &mut Frame, area: Rect) {
    let warning = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "This will delete every score on the leaderboard!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press 'y' to confirm or 'n' to cancel."),
    ])
    .alignment(Alignment::Center)
    .block(titled(" Clear Leaderboard "));
    f.render_widget(warning, area);
}

fn render_how_to_play(f: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for section in how_to_play() {
        lines.push(Line::from(Span::styled(
            section.title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(section.lines.into_iter().map(|l| Line::from(format!("  {l}"))));
        lines.push(Line::from(""));
    }

    let help = Paragraph::new(lines)
        .block(titled(" How to Play "))
        .wrap(Wrap { trim: false });
    f.render_widget(help, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(5)])
        .split(area);

    render_stats(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(session) = &app.session {
        let snapshot = session.snapshot();
        let mode = snapshot
            .mode
            .map_or_else(|| "-".to_string(), |m| m.to_string());
        vec![
            Line::from(format!("Mode:   {mode}")),
            Line::from(format!("Level:  {}", snapshot.level)),
            Line::from(vec![
                Span::raw("Score:  "),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!("Hints:  {}", snapshot.hints)),
            Line::from(format!("Solved: {}", snapshot.levels_completed)),
        ]
    } else {
        vec![
            Line::from(format!("Scores on board: {}", app.board.entries().len())),
            Line::from(format!(
                "Words: {}",
                Category::ALL
                    .iter()
                    .map(|c| app.catalog.words(*c).len())
                    .sum::<usize>()
            )),
        ]
    };

    f.render_widget(Paragraph::new(content).block(titled(" Stats ")), area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::Playing => (
            format!(" Guess a letter or the word | '{HINT_COMMAND}' for a hint | '{QUIT_COMMAND}' to stop "),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        Screen::NameEntry => (
            " Enter your name for the leaderboard ".to_string(),
            app.input_buffer.as_str(),
            Color::Cyan,
        ),
        Screen::LevelWon => (
            " Level complete! Press Enter for the next level ".to_string(),
            "",
            Color::Green,
        ),
        _ => (" Input ".to_string(), "", Color::DarkGray),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.screen {
        Screen::MainMenu => "↑/↓: Select | Enter: Open | 1-5: Shortcut | q: Quit",
        Screen::Difficulty => "1-3: Choose | Esc: Main Menu",
        Screen::Category => "1-4: Choose | Esc: Back",
        Screen::Playing => "Enter: Submit | Backspace: Delete | Ctrl+C: Quit",
        Screen::LevelWon => "Enter: Next Level",
        Screen::NameEntry => "Enter: Save Score | Esc: Skip",
        Screen::Leaderboard => "←/→: Filter | a: All/Top 10 | Esc: Main Menu",
        Screen::ConfirmClear => "y: Clear | n: Cancel",
        Screen::HowToPlay => "Any key: Main Menu",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
