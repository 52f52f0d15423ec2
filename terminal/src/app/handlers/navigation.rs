//! # Navigation Handlers
//!
//! Handlers for screen changes and cursor movement.

use crate::app::state::{AppState, Screen, MENU_OPTIONS};

/// Direction of a cursor move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Move `cursor` one step within `0..len`, clamping at both ends.
pub fn move_cursor(cursor: usize, len: usize, direction: Direction) -> usize {
    if len == 0 {
        return 0;
    }
    match direction {
        Direction::Up => cursor.saturating_sub(1),
        Direction::Down => (cursor + 1).min(len - 1),
    }
}

/// Move the menu highlight; never wraps.
pub(crate) fn move_menu_selection(state: &mut AppState, direction: Direction) {
    state.menu_selection = move_cursor(state.menu_selection, MENU_OPTIONS.len(), direction);
}

/// Move the trending table cursor.
pub(crate) fn move_trending_cursor(state: &mut AppState, direction: Direction) {
    state.trending_cursor = move_cursor(state.trending_cursor, state.trending_rows.len(), direction);
}

/// Move the search results cursor.
pub(crate) fn move_results_cursor(state: &mut AppState, direction: Direction) {
    state.results_cursor = move_cursor(state.results_cursor, state.search_results.len(), direction);
}

/// Handle Back: coin detail returns to the results, every other non-menu
/// screen returns to the menu, and Back on the menu does nothing.
pub(crate) fn go_back(state: &mut AppState) {
    let from = state.screen;
    let to = match from {
        Screen::Menu => return,
        Screen::CoinDetail => Screen::ResultsList,
        Screen::Trending | Screen::Search | Screen::ResultsList => Screen::Menu,
    };

    state.selected_coin = None;
    state.screen = to;
    tracing::debug!(from = ?from, to = ?to, "Navigated back");
}
