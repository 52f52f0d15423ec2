//! # Event Handler
//!
//! Applies fetch completions from background tasks to the application state.
//!
//! Results are always stored. Screen transitions only happen while the user is
//! still on the screen that issued the fetch, so a late completion never pulls
//! the user away from where they navigated.

use crate::app::state::{CoinDetail, CoinSummary, Screen, TrendingRow};
use crate::app::{App, AppEvent};
use crate::core::error::AppError;
use chrono::Local;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        let kind = event.kind();
        if self.state.pending == Some(kind) {
            self.state.pending = None;
        }

        let on_origin = self.state.screen == kind.origin();
        tracing::debug!(kind = ?kind, ok = event.is_ok(), on_origin, "Handling fetch completion");

        match event {
            AppEvent::TrendingResult(Ok(rows)) => self.handle_trending_loaded(rows),
            AppEvent::SearchResult(Ok(coins)) => self.handle_search_loaded(coins, on_origin),
            AppEvent::CoinDetailResult(Ok(detail)) => self.handle_coin_detail_loaded(detail, on_origin),
            AppEvent::TrendingResult(Err(e))
            | AppEvent::SearchResult(Err(e))
            | AppEvent::CoinDetailResult(Err(e)) => self.handle_fetch_error(e),
        }
    }
}

impl App {
    fn handle_trending_loaded(&mut self, rows: Vec<TrendingRow>) {
        let state = &mut self.state;
        state.trending_cursor = state.trending_cursor.min(rows.len().saturating_sub(1));
        state.trending_rows = rows;
        state.trending_updated_at = Some(Local::now());
        state.last_error = None;
    }

    fn handle_search_loaded(&mut self, coins: Vec<CoinSummary>, on_origin: bool) {
        let state = &mut self.state;
        state.search_results = coins;
        state.results_cursor = 0;
        state.last_error = None;

        if on_origin {
            state.screen = Screen::ResultsList;
        }
    }

    fn handle_coin_detail_loaded(&mut self, detail: CoinDetail, on_origin: bool) {
        let state = &mut self.state;
        state.last_error = None;

        if on_origin {
            state.selected_coin = Some(detail);
            state.screen = Screen::CoinDetail;
        } else {
            tracing::info!(
                id = %detail.id,
                name = %detail.name,
                screen = ?state.screen,
                "Discarding coin detail, user navigated away"
            );
        }
    }

    fn handle_fetch_error(&mut self, error: AppError) {
        tracing::error!(error = %error, "Fetch failed");
        self.state.last_error = Some(error);
    }
}
