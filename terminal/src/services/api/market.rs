//! # Market Data Endpoints
//!
//! Trending coins, coin search and coin detail. Each function performs one
//! GET and maps the wire DTOs from [`shared::dto::market`] into the view
//! records held by [`crate::app::AppState`].

use super::client::ApiClient;
use crate::app::state::{CoinDetail, CoinSummary, TrendingRow};
use crate::core::error::Result;
use shared::dto::market::{CoinDetailResponse, SearchCoin, SearchResponse, TrendingItem, TrendingResponse};

/// Get currently trending coins.
#[tracing::instrument(skip(client))]
pub async fn get_trending(client: &ApiClient) -> Result<Vec<TrendingRow>> {
    let url = client.endpoint(&["search", "trending"])?;
    tracing::debug!("Fetching trending coins");

    let response: TrendingResponse = client.get_json(url, &[]).await?;
    let rows: Vec<TrendingRow> = response.coins.iter().map(|coin| TrendingRow::from(&coin.item)).collect();

    tracing::info!(count = rows.len(), "Trending coins fetched");
    Ok(rows)
}

/// Search coins by free text. An empty query is passed through as-is.
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search_coins(client: &ApiClient, query: &str) -> Result<Vec<CoinSummary>> {
    let url = client.endpoint(&["search"])?;
    tracing::debug!("Searching coins");

    let response: SearchResponse = client.get_json(url, &[("query", query)]).await?;
    let coins: Vec<CoinSummary> = response.coins.into_iter().map(CoinSummary::from).collect();

    tracing::info!(count = coins.len(), "Coin search completed");
    Ok(coins)
}

/// Get the detail record of one coin.
#[tracing::instrument(skip(client), fields(id = %id))]
pub async fn get_coin_detail(client: &ApiClient, id: &str) -> Result<CoinDetail> {
    let url = client.endpoint(&["coins", id])?;
    tracing::debug!("Fetching coin detail");

    let response: CoinDetailResponse = client.get_json(url, &[]).await?;
    let detail = CoinDetail::from_response(id, response);

    tracing::info!(symbol = %detail.symbol, price_usd = detail.current_price_usd, "Coin detail fetched");
    Ok(detail)
}

// ==================== DTO MAPPING ====================

impl From<&TrendingItem> for TrendingRow {
    fn from(item: &TrendingItem) -> Self {
        TrendingRow {
            rank: item.market_cap_rank,
            id: item.id.clone(),
            name: item.name.clone(),
            symbol: item.symbol.clone(),
            price_btc: item.price_btc,
            change_24h_percent: item.change_24h_usd(),
        }
    }
}

impl From<SearchCoin> for CoinSummary {
    fn from(coin: SearchCoin) -> Self {
        CoinSummary {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            market_cap_rank: coin.market_cap_rank,
            thumbnail_url: coin.thumb,
        }
    }
}

impl CoinDetail {
    fn from_response(id: &str, response: CoinDetailResponse) -> Self {
        let current_price_usd = response.current_price_usd();
        CoinDetail {
            id: id.to_string(),
            name: response.name,
            symbol: response.symbol,
            current_price_usd,
            sentiment_up_percent: response.sentiment_votes_up_percentage.unwrap_or(0.0),
            sentiment_down_percent: response.sentiment_votes_down_percentage.unwrap_or(0.0),
            whitepaper_url: response.links.whitepaper.unwrap_or_default(),
        }
    }
}
