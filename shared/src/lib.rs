//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the terminal and the public
//! market-data API (CoinGecko v3). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::market`]**: Trending, search and coin detail response bodies
//! - **[`utils`]**: Shared formatting functions
//!   - **[`utils::format_thousands`]**: Group the integer part of a number
//!   - **[`utils::format_usd`]**: Format a USD amount for display
//!
//! ## Wire Format
//!
//! The API uses **snake_case** field names, which is the default `serde`
//! mapping. Fields the API is known to send as `null` (ranks, sentiment
//! percentages, links, `data`, `thumb`, `market_data` and per-currency map
//! entries) are `Option` or read `null` as their default; `id`, `name`,
//! `symbol` and the `coins` arrays are required so a changed schema surfaces
//! as a decode error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::market::TrendingResponse;
//! use shared::utils::format_usd;
//!
//! # async fn demo() -> Result<(), reqwest::Error> {
//! let trending: TrendingResponse = reqwest::Client::new()
//!     .get("https://api.coingecko.com/api/v3/search/trending")
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//!
//! for coin in &trending.coins {
//!     println!("{} {}", coin.item.name, format_usd(coin.item.price_btc));
//! }
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
