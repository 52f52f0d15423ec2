//! # Market Data Tasks
//!
//! Async tasks for fetching trending coins, search results and coin detail.

use crate::app::events::AppEvent;
use crate::core::service::MarketService;
use async_channel::Sender;
use std::sync::Arc;
use std::time::Instant;
use tokio::spawn;
use tracing::{debug, info, warn};

/// Fetch trending coins and send [`AppEvent::TrendingResult`].
pub(crate) fn fetch_trending(api: Arc<dyn MarketService>, event_tx: Sender<AppEvent>) {
    spawn(async move {
        let start = Instant::now();
        let result = api.get_trending().await;

        match &result {
            Ok(rows) => info!(
                count = rows.len(),
                duration_ms = start.elapsed().as_millis(),
                "Trending fetch completed"
            ),
            Err(e) => warn!(error = %e, "Trending fetch failed"),
        }

        send(&event_tx, AppEvent::TrendingResult(result)).await;
    });
}

/// Search coins and send [`AppEvent::SearchResult`].
pub(crate) fn fetch_search(api: Arc<dyn MarketService>, event_tx: Sender<AppEvent>, query: String) {
    spawn(async move {
        let start = Instant::now();
        let result = api.search_coins(&query).await;

        match &result {
            Ok(coins) => info!(
                query = %query,
                count = coins.len(),
                duration_ms = start.elapsed().as_millis(),
                "Search completed"
            ),
            Err(e) => warn!(query = %query, error = %e, "Search failed"),
        }

        send(&event_tx, AppEvent::SearchResult(result)).await;
    });
}

/// Fetch one coin and send [`AppEvent::CoinDetailResult`].
pub(crate) fn fetch_coin_detail(api: Arc<dyn MarketService>, event_tx: Sender<AppEvent>, id: String) {
    spawn(async move {
        let start = Instant::now();
        let result = api.get_coin_detail(&id).await;

        match &result {
            Ok(_) => info!(id = %id, duration_ms = start.elapsed().as_millis(), "Coin detail fetched"),
            Err(e) => warn!(id = %id, error = %e, "Coin detail fetch failed"),
        }

        send(&event_tx, AppEvent::CoinDetailResult(result)).await;
    });
}

async fn send(event_tx: &Sender<AppEvent>, event: AppEvent) {
    let kind = event.kind();
    if event_tx.send(event).await.is_err() {
        // Receiver dropped: the app is shutting down
        debug!(kind = ?kind, "Event channel closed, dropping fetch result");
    }
}
