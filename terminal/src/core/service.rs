//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use crate::app::state::{CoinDetail, CoinSummary, TrendingRow};
use crate::core::error::Result;
use async_trait::async_trait;

/// Trait for market-data operations
///
/// Fetch tasks hold an `Arc<dyn MarketService>` so tests can swap the HTTP
/// client for an in-memory implementation.
#[async_trait]
pub trait MarketService: Send + Sync {
    /// Currently trending coins
    async fn get_trending(&self) -> Result<Vec<TrendingRow>>;

    /// Coins matching a free-text query
    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSummary>>;

    /// Full detail of one coin by API id
    async fn get_coin_detail(&self, id: &str) -> Result<CoinDetail>;
}
