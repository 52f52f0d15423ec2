//! # Application Orchestrator
//!
//! The main [`App`] struct owns the [`AppState`] and coordinates key handling,
//! background fetches and fetch completions.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Event loop (runner::run)                     │
//! │  tokio::select! over                                         │
//! │   - crossterm EventStream  → App::handle_key                 │
//! │   - event_rx (AppEvent)    → App::handle_event               │
//! │  then redraw from &AppState                                  │
//! └───────────────────────┬──────────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼──────────────────────────────────────┐
//! │              Spawned fetch tasks (tasks::market)             │
//! │  fetch_trending / fetch_search / fetch_coin_detail           │
//! │  call Arc<dyn MarketService>, send exactly one AppEvent      │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Tasks never touch the state. Every mutation happens on the loop, one event
//! at a time, so no locks are needed.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use block_vision::app::App;
//! use block_vision::core::AppConfig;
//! use block_vision::services::api::ApiClient;
//!
//! # async fn example() -> block_vision::core::Result<()> {
//! let api = Arc::new(ApiClient::new(&AppConfig::from_env())?);
//! let mut app = App::new(api);
//!
//! // Drain completed fetches without blocking
//! app.on_tick();
//! # Ok(())
//! # }
//! ```

pub mod state;
pub mod events;
pub mod input;
mod handlers;
mod tasks;
mod event_handler;
mod runner;

pub use state::*;
pub use events::AppEvent;
pub use input::{key_to_action, Action};
pub use handlers::settings::load_settings;
pub use runner::{restore_terminal, run};

use crate::core::service::MarketService;
use async_channel::{unbounded, Receiver, Sender};
use crossterm::event::KeyEvent;
use handlers::navigation::{self, Direction};
use std::sync::Arc;

/// Main application orchestrator.
pub struct App {
    /// View state, read by the renderer after every event.
    pub state: AppState,

    /// Channel receiver for fetch completions.
    pub event_rx: Receiver<AppEvent>,

    /// Cloned into every spawned fetch task.
    event_tx: Sender<AppEvent>,

    /// Market data source shared with fetch tasks.
    api: Arc<dyn MarketService>,

    /// Set by [`Action::Quit`]; the runner exits after the next redraw check.
    pub should_quit: bool,
}

impl App {
    /// Create an app on the menu screen. No fetch is issued until the user
    /// picks a menu entry.
    pub fn new(api: Arc<dyn MarketService>) -> Self {
        let (event_tx, event_rx) = unbounded();

        tracing::info!("App state initialized - event channel created");

        App {
            state: AppState::new(),
            event_rx,
            event_tx,
            api,
            should_quit: false,
        }
    }

    /// Translate a key press for the current screen and apply it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = key_to_action(key, self.state.screen);
        self.handle_action(action);
    }

    /// Apply one user action.
    ///
    /// Quit, Back and the help toggle are screen-independent and handled
    /// first; everything else is dispatched to the current screen.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => return,
            Action::Quit => {
                tracing::info!(screen = ?self.state.screen, "Quit requested");
                self.should_quit = true;
                return;
            }
            Action::Back => {
                navigation::go_back(&mut self.state);
                return;
            }
            Action::ToggleHelp => {
                self.state.help_expanded = !self.state.help_expanded;
                return;
            }
            _ => {}
        }

        match self.state.screen {
            Screen::Menu => self.handle_menu_action(action),
            Screen::Trending => self.handle_trending_action(action),
            Screen::Search => self.handle_search_action(action),
            Screen::ResultsList => self.handle_results_action(action),
            Screen::CoinDetail => self.handle_coin_detail_action(action),
        }
    }

    /// Apply one fetch completion.
    pub fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    /// Apply every completion already waiting in the channel, without
    /// blocking. Returns how many were processed.
    pub fn on_tick(&mut self) -> usize {
        let mut events_processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            events_processed += 1;
        }

        if events_processed > 0 {
            tracing::debug!(events_processed, "on_tick: processed queued fetch completions");
        }
        events_processed
    }

    // ========== Per-screen Actions ==========

    fn handle_menu_action(&mut self, action: Action) {
        match action {
            Action::Up => navigation::move_menu_selection(&mut self.state, Direction::Up),
            Action::Down => navigation::move_menu_selection(&mut self.state, Direction::Down),
            Action::Select => match self.state.menu_selection {
                0 => {
                    self.state.screen = Screen::Trending;
                    self.start_fetch(FetchKind::Trending);
                    tasks::market::fetch_trending(self.api.clone(), self.event_tx.clone());
                }
                _ => {
                    self.state.screen = Screen::Search;
                    tracing::debug!("Navigated to search");
                }
            },
            _ => {}
        }
    }

    fn handle_trending_action(&mut self, action: Action) {
        match action {
            Action::Up => navigation::move_trending_cursor(&mut self.state, Direction::Up),
            Action::Down => navigation::move_trending_cursor(&mut self.state, Direction::Down),
            _ => {}
        }
    }

    fn handle_search_action(&mut self, action: Action) {
        match action {
            Action::Input(c) => handlers::search::push_char(&mut self.state, c),
            Action::Backspace => handlers::search::pop_char(&mut self.state),
            Action::Select => {
                let query = handlers::search::submitted_query(&self.state);
                self.start_fetch(FetchKind::Search);
                tasks::market::fetch_search(self.api.clone(), self.event_tx.clone(), query);
            }
            _ => {}
        }
    }

    fn handle_results_action(&mut self, action: Action) {
        match action {
            Action::Up => navigation::move_results_cursor(&mut self.state, Direction::Up),
            Action::Down => navigation::move_results_cursor(&mut self.state, Direction::Down),
            Action::Select => {
                let Some(id) = self.state.highlighted_result().map(|coin| coin.id.clone()) else {
                    return;
                };
                self.start_fetch(FetchKind::CoinDetail);
                tasks::market::fetch_coin_detail(self.api.clone(), self.event_tx.clone(), id);
            }
            _ => {}
        }
    }

    fn handle_coin_detail_action(&mut self, action: Action) {
        if action != Action::OpenLink {
            return;
        }

        let Some(url) = self
            .state
            .selected_coin
            .as_ref()
            .map(|coin| coin.whitepaper_url.clone())
            .filter(|url| !url.is_empty())
        else {
            tracing::debug!("No whitepaper link to open");
            return;
        };

        match open::that_detached(&url) {
            Ok(()) => tracing::info!(url = %url, "Opened whitepaper"),
            Err(e) => tracing::warn!(url = %url, error = %e, "Failed to open whitepaper"),
        }
    }

    fn start_fetch(&mut self, kind: FetchKind) {
        tracing::debug!(kind = ?kind, screen = ?self.state.screen, "Issuing fetch");
        self.state.pending = Some(kind);
    }
}
