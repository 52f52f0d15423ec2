//! # Data Transfer Objects (DTOs)
//!
//! Response bodies of the market-data API, decoded with `serde_json`.
//!
//! ## Module Organization
//!
//! - [`market`] - Trending list, coin search and coin detail responses
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /api/v3/search/trending
//!
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "coins": [
//!     {
//!       "item": {
//!         "id": "bitcoin",
//!         "name": "Bitcoin",
//!         "symbol": "BTC",
//!         "market_cap_rank": 1,
//!         "price_btc": 1.0,
//!         "data": { "price_change_percentage_24h": { "usd": 2.5 } }
//!       }
//!     }
//!   ]
//! }
//! ```

pub mod market;

pub use market::*;
