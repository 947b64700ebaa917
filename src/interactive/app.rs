//! TUI application state and logic

use crate::config::Rules;
use crate::core::Category;
use crate::engine::{EndReason, GameSession, Outcome, Phase, SessionError};
use crate::leaderboard::{Leaderboard, Scope, TOP_N};
use crate::output::formatters::outcome_message;
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest name accepted on the name entry screen
const MAX_NAME_LEN: usize = 20;

/// Main menu entries, in display order
pub const MENU_ITEMS: [&str; 5] = [
    "Start Game",
    "View Leaderboard",
    "Clear Leaderboard",
    "How to Play",
    "Exit",
];

/// Application state
pub struct App<'a> {
    pub catalog: &'a WordCatalog,
    pub rules: Rules,
    pub board: &'a mut Leaderboard,
    pub session: Option<GameSession<'a>>,
    pub screen: Screen,
    pub menu_index: usize,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub board_filter: Option<Category>,
    pub board_scope: Scope,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Difficulty,
    Category,
    Playing,
    LevelWon,
    NameEntry,
    Leaderboard,
    ConfirmClear,
    HowToPlay,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a WordCatalog, rules: Rules, board: &'a mut Leaderboard) -> Self {
        Self {
            catalog,
            rules,
            board,
            session: None,
            screen: Screen::MainMenu,
            menu_index: 0,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Save the hangman by guessing the word.".to_string(),
                style: MessageStyle::Info,
            }],
            board_filter: None,
            board_scope: Scope::TopN(TOP_N),
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Route one key press to the current screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::MainMenu => self.handle_menu_key(key.code),
            Screen::Difficulty => match key.code {
                KeyCode::Esc => self.abandon_session(),
                KeyCode::Char(c) => self.choose_difficulty(c),
                _ => {}
            },
            Screen::Category => match key.code {
                KeyCode::Esc => self.choose_category('b'),
                KeyCode::Char(c) => self.choose_category(c),
                _ => {}
            },
            Screen::Playing => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
            Screen::LevelWon => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ' | 'n')) {
                    self.next_level();
                }
            }
            Screen::NameEntry => match key.code {
                KeyCode::Char(c) if !c.is_control() && self.input_buffer.len() < MAX_NAME_LEN => {
                    self.input_buffer.push(c);
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.record_result(),
                KeyCode::Esc => self.skip_record(),
                _ => {}
            },
            Screen::Leaderboard => match key.code {
                KeyCode::Char('a') => {
                    self.board_scope = match self.board_scope {
                        Scope::AllTime => Scope::TopN(TOP_N),
                        Scope::TopN(_) => Scope::AllTime,
                    };
                }
                KeyCode::Right | KeyCode::Tab => self.cycle_filter(1),
                KeyCode::Left | KeyCode::BackTab => self.cycle_filter(-1),
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                    self.screen = Screen::MainMenu;
                }
                _ => {}
            },
            Screen::ConfirmClear => match key.code {
                KeyCode::Char('y' | 'Y') => self.clear_board(),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                    self.add_message("Leaderboard reset cancelled.", MessageStyle::Info);
                    self.screen = Screen::MainMenu;
                }
                _ => {}
            },
            Screen::HowToPlay => self.screen = Screen::MainMenu,
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => {
                self.menu_index = self.menu_index.checked_sub(1).unwrap_or(MENU_ITEMS.len() - 1);
            }
            KeyCode::Down => self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len(),
            KeyCode::Enter => self.activate_menu_item(self.menu_index),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => {
                if let Some(index) = c.to_digit(10).and_then(|d| (d as usize).checked_sub(1))
                    && index < MENU_ITEMS.len()
                {
                    self.menu_index = index;
                    self.activate_menu_item(index);
                }
            }
            _ => {}
        }
    }

    fn activate_menu_item(&mut self, index: usize) {
        match index {
            0 => self.start_session(),
            1 => {
                self.board_filter = None;
                self.board_scope = Scope::TopN(TOP_N);
                self.screen = Screen::Leaderboard;
            }
            2 => self.screen = Screen::ConfirmClear,
            3 => self.screen = Screen::HowToPlay,
            _ => self.should_quit = true,
        }
    }

    pub fn start_session(&mut self) {
        self.session = Some(GameSession::new(
            self.catalog,
            self.rules,
            StdRng::from_os_rng(),
        ));
        self.input_buffer.clear();
        self.messages.clear();
        self.add_message("New game! Choose a difficulty.", MessageStyle::Info);
        self.sync_screen();
    }

    fn abandon_session(&mut self) {
        self.session = None;
        self.screen = Screen::MainMenu;
    }

    fn choose_difficulty(&mut self, choice: char) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.choose_difficulty(&choice.to_string());
        self.after_choice(result);
    }

    fn choose_category(&mut self, choice: char) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let result = session.choose_category(&choice.to_string());
        self.after_choice(result);
    }

    fn after_choice(&mut self, result: Result<Phase, SessionError>) {
        match result {
            Ok(Phase::InLevel) => {
                if let Some(mode) = self.session.as_ref().and_then(GameSession::mode) {
                    self.add_message(&format!("{mode} mode - good luck!"), MessageStyle::Info);
                }
            }
            Ok(_) => {}
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.sync_screen();
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.submit(&input) {
            Ok(outcome) => {
                let style = match outcome {
                    Outcome::CorrectLetter(_)
                    | Outcome::WordSolved { .. }
                    | Outcome::HintGranted(_) => MessageStyle::Success,
                    Outcome::WrongLetter | Outcome::WrongWordGuess => MessageStyle::Error,
                    Outcome::NoHintsAvailable | Outcome::Quit => MessageStyle::Info,
                };
                self.add_message(&outcome_message(&outcome), style);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.sync_screen();
    }

    fn next_level(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.next_level() {
            Ok(Phase::SessionEnded(EndReason::CatalogExhausted)) => self.add_message(
                "You have guessed every word in this category!",
                MessageStyle::Success,
            ),
            Ok(_) => self.add_message("Next level!", MessageStyle::Info),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.sync_screen();
    }

    pub fn record_result(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let category = session.mode().map(crate::core::GameMode::category);

        match session.record(&self.input_buffer, self.board) {
            Ok(()) => self.add_message("Score saved!", MessageStyle::Success),
            Err(SessionError::EmptyName) => {
                self.add_message("Name cannot be empty.", MessageStyle::Error);
                return;
            }
            Err(e) => self.add_message(
                &format!("{e}; the score is kept for this run only"),
                MessageStyle::Error,
            ),
        }

        self.input_buffer.clear();
        self.session = None;
        self.board_filter = category;
        self.board_scope = Scope::TopN(TOP_N);
        self.screen = Screen::Leaderboard;
    }

    /// Leave the finished session without a leaderboard entry
    fn skip_record(&mut self) {
        self.input_buffer.clear();
        self.session = None;
        self.add_message("Score not recorded.", MessageStyle::Info);
        self.screen = Screen::MainMenu;
    }

    fn clear_board(&mut self) {
        match self.board.clear() {
            Ok(()) => self.add_message("Leaderboard cleared.", MessageStyle::Success),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
        self.screen = Screen::MainMenu;
    }

    /// Step through "all categories" and each category that has scores
    fn cycle_filter(&mut self, step: isize) {
        let mut filters: Vec<Option<Category>> = vec![None];
        filters.extend(self.board.categories().into_iter().map(Some));

        let current = filters
            .iter()
            .position(|f| *f == self.board_filter)
            .unwrap_or(0);
        let len = filters.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.board_filter = filters[next];
    }

    /// Point the screen at whatever the session phase calls for
    fn sync_screen(&mut self) {
        let Some(session) = &self.session else {
            self.screen = Screen::MainMenu;
            return;
        };

        let screen = match session.phase() {
            Phase::AwaitingDifficulty => Screen::Difficulty,
            Phase::AwaitingCategory => Screen::Category,
            Phase::InLevel => Screen::Playing,
            Phase::LevelWon => Screen::LevelWon,
            Phase::LevelLost | Phase::SessionEnded(_) => Screen::NameEntry,
        };
        if screen != self.screen {
            self.input_buffer.clear();
        }
        self.screen = screen;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI failed: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn catalog() -> WordCatalog {
        WordCatalog::from_lists([
            (Category::Easy, words_from_slice(&["cat"])),
            (Category::Animals, words_from_slice(&["owl"])),
        ])
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn full_game_through_keys() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Difficulty);

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Playing);

        type_text(&mut app, "CAT");
        assert_eq!(app.input_buffer, "cat");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::LevelWon);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::NameEntry);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::NameEntry);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );

        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Leaderboard);
        assert_eq!(app.board_filter, Some(Category::Easy));
        assert!(app.session.is_none());
        drop(app);

        assert_eq!(board.entries().len(), 1);
        assert_eq!(board.entries()[0].score(), 60);
    }

    #[test]
    fn custom_category_and_back() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::Category);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen, Screen::Difficulty);

        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Category);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );

        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.screen, Screen::Playing);
    }

    #[test]
    fn quitting_a_level_asks_for_name() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "stp");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::NameEntry);
    }

    #[test]
    fn skipping_name_entry_records_nothing() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('1'));
        type_text(&mut app, "stp");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.screen, Screen::MainMenu);
        assert!(app.session.is_none());
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Info));
        drop(app);

        assert!(board.is_empty());
    }

    #[test]
    fn menu_navigation_wraps() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Up);
        assert_eq!(app.menu_index, MENU_ITEMS.len() - 1);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.menu_index, 0);

        press(&mut app, KeyCode::Char('5'));
        assert!(app.should_quit);
    }

    #[test]
    fn confirm_clear_empties_board() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        board
            .record(crate::leaderboard::LeaderboardEntry::new("Bo", Category::Easy, 10, 0).unwrap())
            .unwrap();
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.screen, Screen::ConfirmClear);
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.screen, Screen::MainMenu);
        drop(app);

        assert!(board.is_empty());
    }

    #[test]
    fn leaderboard_filter_cycles() {
        let catalog = catalog();
        let mut board = Leaderboard::in_memory();
        for (name, category) in [("A", Category::Hard), ("B", Category::Movies)] {
            board
                .record(crate::leaderboard::LeaderboardEntry::new(name, category, 5, 0).unwrap())
                .unwrap();
        }
        let mut app = App::new(&catalog, Rules::default(), &mut board);

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.screen, Screen::Leaderboard);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.board_filter, Some(Category::Hard));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.board_filter, Some(Category::Movies));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.board_filter, None);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.board_filter, Some(Category::Movies));

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.board_scope, Scope::AllTime);
    }
}
