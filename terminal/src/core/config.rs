//! # Application Configuration
//!
//! Runtime settings read once from environment variables at startup. The
//! application takes no command-line flags.

use std::path::PathBuf;
use std::time::Duration;

/// Default market-data API root
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Default theme file location, relative to the working directory
pub const DEFAULT_THEME_PATH: &str = "./block-vision-theme.json";

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL for API requests, without trailing slash
    pub api_url: String,
    /// Per-request timeout; `None` keeps the HTTP client default
    pub http_timeout: Option<Duration>,
    /// Optional JSON theme override
    pub theme_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            http_timeout: None,
            theme_path: PathBuf::from(DEFAULT_THEME_PATH),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_url = lookup("BLOCK_VISION_API_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_url);

        let http_timeout = lookup("BLOCK_VISION_HTTP_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let theme_path = lookup("BLOCK_VISION_THEME")
            .map(PathBuf::from)
            .unwrap_or(defaults.theme_path);

        Self {
            api_url,
            http_timeout,
            theme_path,
        }
    }
}
