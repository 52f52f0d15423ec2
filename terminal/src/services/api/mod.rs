//! # Market API Client Module
//!
//! HTTP client for the public market-data API.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs      - Module exports
//! ├── client.rs   - ApiClient struct and request plumbing
//! └── market.rs   - Trending, search and coin detail endpoints
//! ```

pub mod client;
pub mod market;

pub use client::ApiClient;
pub use market::*;
