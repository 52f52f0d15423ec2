//! # Key Bindings
//!
//! Maps raw crossterm key events to [`Action`]s. Resolution depends on the
//! active screen: on [`Screen::Search`] printable characters are text input,
//! so only `Ctrl+C` quits there and `F1` stands in for `?`.

use crate::app::state::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions a key press can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Return to the previous screen
    Back,
    /// Move selection up
    Up,
    /// Move selection down
    Down,
    /// Confirm selection / submit search
    Select,
    /// Toggle between short and full help
    ToggleHelp,
    /// Open the coin whitepaper in the browser
    OpenLink,
    /// Append a character to the search query
    Input(char),
    /// Delete the last character of the search query
    Backspace,
    /// No action
    None,
}

/// A key binding as shown in the help line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHelp {
    pub keys: &'static str,
    pub description: &'static str,
}

const fn help(keys: &'static str, description: &'static str) -> KeyHelp {
    KeyHelp { keys, description }
}

pub const HELP_UP: KeyHelp = help("↑/k", "move up");
pub const HELP_DOWN: KeyHelp = help("↓/j", "move down");
pub const HELP_SELECT: KeyHelp = help("enter", "select");
pub const HELP_SUBMIT: KeyHelp = help("enter", "search");
pub const HELP_TOGGLE: KeyHelp = help("?", "toggle help");
pub const HELP_TOGGLE_F1: KeyHelp = help("f1", "toggle help");
pub const HELP_BACK: KeyHelp = help("esc", "back");
pub const HELP_QUIT: KeyHelp = help("q", "quit");
pub const HELP_FORCE_QUIT: KeyHelp = help("ctrl+c", "quit");
pub const HELP_OPEN: KeyHelp = help("o", "open whitepaper");

/// Convert a key event to an action for the given screen
pub fn key_to_action(key: KeyEvent, screen: Screen) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Esc => return Action::Back,
        KeyCode::Enter => return Action::Select,
        KeyCode::Up => return Action::Up,
        KeyCode::Down => return Action::Down,
        KeyCode::F(1) => return Action::ToggleHelp,
        _ => {}
    }

    if screen == Screen::Search {
        return match key.code {
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                Action::Input(c)
            }
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('k') => Action::Up,
        KeyCode::Char('j') => Action::Down,
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Char('o') if screen == Screen::CoinDetail => Action::OpenLink,
        _ => Action::None,
    }
}

/// Bindings shown in the short help line
pub fn short_help(screen: Screen) -> Vec<KeyHelp> {
    match screen {
        Screen::Search => vec![HELP_SUBMIT, HELP_TOGGLE_F1, HELP_BACK, HELP_FORCE_QUIT],
        _ => vec![HELP_TOGGLE, HELP_QUIT],
    }
}

/// Bindings shown in the expanded help, grouped in columns
pub fn full_help(screen: Screen) -> Vec<Vec<KeyHelp>> {
    match screen {
        Screen::Search => vec![vec![HELP_SUBMIT, HELP_TOGGLE_F1, HELP_BACK, HELP_FORCE_QUIT]],
        Screen::CoinDetail => vec![
            vec![HELP_OPEN],
            vec![HELP_TOGGLE, HELP_BACK, HELP_QUIT],
        ],
        _ => vec![
            vec![HELP_UP, HELP_DOWN],
            vec![HELP_SELECT, HELP_TOGGLE, HELP_BACK, HELP_QUIT],
        ],
    }
}
