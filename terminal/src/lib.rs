//! # block-vision - Library Root
//!
//! A full-screen **terminal UI** for browsing trending cryptocurrencies and
//! looking up coin details from the public CoinGecko market API.
//! This library crate contains all modules used by the binary crate (`main.rs`).
//!
//! ## Features
//!
//! - **Trending coins**: rank, name, symbol, BTC price and 24h change
//! - **Coin search**: free-text search with a scrollable result list
//! - **Coin detail**: USD price, community sentiment and whitepaper link
//!
//! ## Architecture
//!
//! ### Technology Stack
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              block-vision (this crate)                 │
//! ├────────────────────────────────────────────────────────┤
//! │  ratatui       - Widgets, layout, buffer rendering     │
//! │  crossterm     - Raw mode and async key events         │
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  tracing       - File-based structured logging         │
//! └────────────────────────────────────────────────────────┘
//!                          │
//!                          │ HTTPS (read-only, no auth)
//!                          ▼
//!              ┌───────────────────────┐
//!              │  CoinGecko API v3     │
//!              └───────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: State machine, key bindings, fetch tasks and the event loop
//! - **core**: Errors, configuration and the [`MarketService`](crate::core::MarketService) trait
//! - **services**: `api`, the HTTP client and endpoint mapping
//! - **ui**: Pure rendering of [`app::AppState`] (screens, widgets, theme)
//! - **debug**: Log file setup and the panic hook
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug (logging, panic hook)
//!   ├── app (state, input, tasks, runner)
//!   │   └── core::service::MarketService ◄── services::api::ApiClient
//!   │
//!   └── ui (rendering)
//!       ├── screens::* (menu, trending, search, results, coin_detail)
//!       ├── widgets::* (branding, picker, help, status_bar)
//!       └── theme (palette, gradient)
//! ```
//!
//! ## Core Concepts
//!
//! ### Event-Driven Architecture
//!
//! Key presses and fetch completions are the only two event sources. Fetches
//! run on spawned Tokio tasks and report back over an `async_channel`; the
//! event loop applies one event at a time and redraws.
//!
//! ```rust,ignore
//! // Spawned task
//! let result = api.get_trending().await;
//! event_tx.send(AppEvent::TrendingResult(result)).await;
//!
//! // Event loop
//! app.handle_event(event);
//! terminal.draw(|frame| ui::draw(frame, &app.state, theme))?;
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;

pub use app::{App, AppState, Screen};
pub use crate::core::{AppConfig, AppError, MarketService};
