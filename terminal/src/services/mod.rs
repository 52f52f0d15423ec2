//! # Services Module
//!
//! External service integrations for the terminal.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! └── api/         - Market-data HTTP client
//!     ├── client.rs  (ApiClient, shared request plumbing)
//!     └── market.rs  (trending, search, coin detail)
//! ```
//!
//! ## Service Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                Terminal TUI                 │
//! │                                             │
//! │   app::tasks ──► Arc<dyn MarketService>     │
//! │                        │                    │
//! │                  ┌─────▼──────┐             │
//! │                  │ ApiClient  │             │
//! │                  └─────┬──────┘             │
//! └────────────────────────┼────────────────────┘
//!                          │ HTTPS/JSON
//!                          ▼
//!            ┌───────────────────────────┐
//!            │  CoinGecko API v3         │
//!            │  /search/trending         │
//!            │  /search?query=           │
//!            │  /coins/{id}              │
//!            └───────────────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`crate::core::Result`]. Transport failures map to
//! `AppError::Network`, non-200 responses to `AppError::HttpStatus`, and
//! schema mismatches to `AppError::Decode`. Nothing is retried.

pub mod api;
