//! # Search Handlers
//!
//! Editing of the search query buffer.

use crate::app::state::AppState;

/// Append a typed character.
pub(crate) fn push_char(state: &mut AppState, c: char) {
    state.search_query.push(c);
}

/// Remove the last character, if any.
pub(crate) fn pop_char(state: &mut AppState) {
    state.search_query.pop();
}

/// Query sent to the API on submit.
pub fn submitted_query(state: &AppState) -> String {
    state.search_query.trim().to_string()
}
