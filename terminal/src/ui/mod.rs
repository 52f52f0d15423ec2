//! # Terminal Rendering
//!
//! Pure rendering of [`AppState`] into a ratatui [`Buffer`]. Rendering never
//! mutates state: scroll positions are derived from the cursors on every
//! frame, so rendering the same state twice yields the same buffer.
//!
//! - [`render`]: draw into any buffer (used by tests)
//! - [`draw`]: draw into a live [`Frame`]
//! - [`render_to_string`]: plain-text snapshot of a frame

pub mod screens;
pub mod theme;
pub mod widgets;

use crate::app::{AppState, Screen};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Padding};
use ratatui::Frame;
use theme::Theme;

/// Render the current screen into `buf`.
pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let area = Block::default().padding(Padding::new(2, 2, 1, 1)).inner(area);

    match state.screen {
        Screen::Menu => screens::menu::render(state, theme, area, buf),
        Screen::Trending => screens::trending::render(state, theme, area, buf),
        Screen::Search => screens::search::render(state, theme, area, buf),
        Screen::ResultsList => screens::results::render(state, theme, area, buf),
        Screen::CoinDetail => screens::coin_detail::render(state, theme, area, buf),
    }
}

/// Render the current screen into a terminal frame.
pub fn draw(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();
    render(state, theme, area, frame.buffer_mut());
}

/// Render into an off-screen buffer of `width` x `height` and return its text,
/// one line per row with trailing blanks trimmed.
pub fn render_to_string(state: &AppState, theme: &Theme, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(state, theme, area, &mut buf);
    buffer_to_string(&buf)
}

fn buffer_to_string(buf: &Buffer) -> String {
    let width = usize::from(buf.area.width.max(1));
    buf.content
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{CoinDetail, CoinSummary, FetchKind, TrendingRow};
    use crate::core::error::AppError;
    use ratatui::style::Color;

    const WIDTH: u16 = 90;
    const HEIGHT: u16 = 24;

    fn snapshot(state: &AppState) -> String {
        render_to_string(state, &Theme::default(), WIDTH, HEIGHT)
    }

    fn trending_state() -> AppState {
        let mut state = AppState::new();
        state.screen = Screen::Trending;
        state.trending_rows = vec![
            TrendingRow {
                rank: Some(1),
                id: "btc".to_string(),
                name: "Bitcoin".to_string(),
                symbol: "btc".to_string(),
                price_btc: 1.0,
                change_24h_percent: 2.5,
            },
            TrendingRow {
                rank: None,
                id: "newcoin".to_string(),
                name: "Newcoin".to_string(),
                symbol: "new".to_string(),
                price_btc: 0.000001234,
                change_24h_percent: -3.456,
            },
        ];
        state
    }

    #[test]
    fn test_render_is_pure() {
        let state = trending_state();
        let before = state.clone();

        let first = snapshot(&state);
        let second = snapshot(&state);

        assert_eq!(first, second);
        assert_eq!(state.trending_rows, before.trending_rows);
        assert_eq!(state.trending_cursor, before.trending_cursor);
    }

    #[test]
    fn test_menu_screen() {
        let text = snapshot(&AppState::new());

        assert!(text.contains("❒ block-vision"));
        assert!(text.contains("Lighting up your crypto journey"));
        assert!(text.contains("[x] Trending"));
        assert!(text.contains("[ ] Search"));
        assert!(text.contains("? toggle help • q quit"));
    }

    #[test]
    fn test_menu_full_help() {
        let mut state = AppState::new();
        state.help_expanded = true;
        let text = snapshot(&state);

        assert!(text.contains("↑/k move up"));
        assert!(text.contains("esc back"));
    }

    #[test]
    fn test_trending_table() {
        let text = snapshot(&trending_state());

        assert!(text.contains("Rank"));
        assert!(text.contains("Price (BTC)"));
        assert!(text.contains("24h Change (USD)"));
        assert!(text.contains("Bitcoin"));
        assert!(text.contains("1.00000000"));
        assert!(text.contains("2.50%"));
        assert!(text.contains("0.00000123"));
        assert!(text.contains("-3.46%"));
    }

    /// Foreground color of the first cell of `needle` on screen
    fn color_of(state: &AppState, theme: &Theme, needle: &str) -> Option<Color> {
        let area = Rect::new(0, 0, WIDTH, HEIGHT);
        let mut buf = Buffer::empty(area);
        render(state, theme, area, &mut buf);

        buf.content.chunks(usize::from(WIDTH)).find_map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            let column = line.find(needle)?;
            Some(row[line[..column].chars().count()].fg)
        })
    }

    #[test]
    fn test_trending_change_colors() {
        let theme = Theme::default();
        let mut state = trending_state();

        // The highlighted row takes the selection colors, so check the other one
        state.trending_cursor = 1;
        assert_eq!(color_of(&state, &theme, "2.50%"), Some(theme.success));

        state.trending_cursor = 0;
        assert_eq!(color_of(&state, &theme, "-3.46%"), Some(theme.error));
        assert_eq!(color_of(&state, &theme, "2.50%"), Some(theme.selected_fg));
    }

    #[test]
    fn test_trending_error_only() {
        let mut state = trending_state();
        state.last_error = Some(AppError::Network("connection refused".to_string()));
        let text = snapshot(&state);

        assert!(text.contains("Error: failed to reach market API: connection refused"));
        assert!(!text.contains("Bitcoin"));
        assert!(!text.contains("toggle help"));
    }

    #[test]
    fn test_trending_loading() {
        let mut state = AppState::new();
        state.screen = Screen::Trending;
        state.pending = Some(FetchKind::Trending);

        assert!(snapshot(&state).contains("Fetching trending coins"));
    }

    #[test]
    fn test_search_screen() {
        let mut state = AppState::new();
        state.screen = Screen::Search;
        state.search_query = "pepe".to_string();
        let text = snapshot(&state);

        assert!(text.contains("Search coins"));
        assert!(text.contains("pepe"));
        assert!(text.contains("Type a coin name or symbol"));

        state.last_error = Some(AppError::HttpStatus { status: 429, reason: "Too Many Requests".to_string() });
        let text = snapshot(&state);
        assert!(text.contains("Error: received non-OK response: 429 Too Many Requests"));
        assert!(!text.contains("Type a coin name or symbol"));
    }

    #[test]
    fn test_results_list() {
        let mut state = AppState::new();
        state.screen = Screen::ResultsList;
        state.search_results = vec![CoinSummary {
            id: "dogecoin".to_string(),
            name: "Dogecoin".to_string(),
            symbol: "doge".to_string(),
            market_cap_rank: Some(8),
            thumbnail_url: String::new(),
        }];
        let text = snapshot(&state);

        assert!(text.contains("Dogecoin (DOGE)"));
        assert!(text.contains("dogecoin"));
        assert!(text.contains("toggle help"));
    }

    #[test]
    fn test_results_empty_is_not_an_error() {
        let mut state = AppState::new();
        state.screen = Screen::ResultsList;
        state.search_query = "doge".to_string();
        let text = snapshot(&state);

        assert!(text.contains("No coins found"));
        assert!(!text.contains("Error:"));
    }

    #[test]
    fn test_results_error_replaces_help() {
        let mut state = AppState::new();
        state.screen = Screen::ResultsList;
        state.last_error = Some(AppError::HttpStatus { status: 404, reason: "Not Found".to_string() });
        let text = snapshot(&state);

        assert!(text.contains("Error: received non-OK response: 404 Not Found"));
        assert!(!text.contains("toggle help"));
    }

    #[test]
    fn test_coin_detail() {
        let mut state = AppState::new();
        state.screen = Screen::CoinDetail;
        state.selected_coin = Some(CoinDetail {
            id: "bitcoin".to_string(),
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            current_price_usd: 67123.45,
            sentiment_up_percent: 82.5,
            sentiment_down_percent: 17.5,
            whitepaper_url: String::new(),
        });
        let text = snapshot(&state);

        assert!(text.contains("Bitcoin (BTC)"));
        assert!(text.contains("$67,123.45"));
        assert!(text.contains("▲ 82.50%"));
        assert!(text.contains("▼ 17.50%"));
        assert!(text.contains("n/a"));
        assert!(text.contains("esc to go back"));
    }
}
