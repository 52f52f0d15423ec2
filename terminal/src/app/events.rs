//! # Application Events
//!
//! Fetch completions sent from background tasks to the event loop.

use crate::app::state::{CoinDetail, CoinSummary, FetchKind, TrendingRow};
use crate::core::error::AppError;

/// Async task results sent to the event loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Trending fetch completed
    TrendingResult(Result<Vec<TrendingRow>, AppError>),
    /// Coin search completed
    SearchResult(Result<Vec<CoinSummary>, AppError>),
    /// Coin detail fetch completed
    CoinDetailResult(Result<CoinDetail, AppError>),
}

impl AppEvent {
    /// Fetch this event completes
    pub fn kind(&self) -> FetchKind {
        match self {
            AppEvent::TrendingResult(_) => FetchKind::Trending,
            AppEvent::SearchResult(_) => FetchKind::Search,
            AppEvent::CoinDetailResult(_) => FetchKind::CoinDetail,
        }
    }

    /// Whether the fetch succeeded
    pub fn is_ok(&self) -> bool {
        match self {
            AppEvent::TrendingResult(result) => result.is_ok(),
            AppEvent::SearchResult(result) => result.is_ok(),
            AppEvent::CoinDetailResult(result) => result.is_ok(),
        }
    }
}
