//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, MENU_ITEMS, Message, MessageStyle, Screen, run_tui};
