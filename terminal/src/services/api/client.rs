//! # API Client
//!
//! Main HTTP client for market-data API communication.

use crate::app::state::{CoinDetail, CoinSummary, TrendingRow};
use crate::core::config::AppConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::MarketService;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Sent on every request; the public API throttles clients without one.
const USER_AGENT: &str = concat!("block-vision/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the market-data API.
///
/// Cheap to share behind an `Arc`: the inner `reqwest::Client` keeps one
/// connection pool for all fetch tasks.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from the runtime configuration.
    ///
    /// No timeout is applied unless `BLOCK_VISION_HTTP_TIMEOUT_SECS` is set.
    /// Fails with [`AppError::Config`] if the TLS backend cannot be initialised.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.http_timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_url.clone(),
        })
    }

    /// Create a client against an explicit base URL (used by tests and mocks).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = AppConfig {
            api_url: base_url.into().trim_end_matches('/').to_string(),
            ..AppConfig::default()
        };
        Self::new(&config)
    }

    /// Get the base URL for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `{base_url}/{segments...}`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| AppError::Network(format!("invalid API URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Network(format!("API URL cannot be a base: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET `url` with `query` parameters and decode a `200 OK` JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Market API network error");
                AppError::Network(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Market API returned non-OK status"
            );
            return Err(AppError::HttpStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Failed to read response body");
            AppError::Network(format!("failed to read response body: {}", e))
        })?;

        let decoded = serde_json::from_slice::<T>(&body).map_err(|e| {
            tracing::error!(error = %e, url = %url, bytes = body.len(), "Market API response parse error");
            AppError::from(e)
        })?;

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            duration_ms = start.elapsed().as_millis(),
            "Market API request succeeded"
        );
        Ok(decoded)
    }
}

// Implement MarketService trait for ApiClient
#[async_trait::async_trait]
impl MarketService for ApiClient {
    async fn get_trending(&self) -> Result<Vec<TrendingRow>> {
        crate::services::api::market::get_trending(self).await
    }

    async fn search_coins(&self, query: &str) -> Result<Vec<CoinSummary>> {
        crate::services::api::market::search_coins(self, query).await
    }

    async fn get_coin_detail(&self, id: &str) -> Result<CoinDetail> {
        crate::services::api::market::get_coin_detail(self, id).await
    }
}
