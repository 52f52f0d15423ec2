//! # Core Abstractions
//!
//! Foundational pieces used throughout the terminal application:
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service trait for dependency injection (`MarketService`)
//! - **[`config`]**: Environment-driven runtime configuration (`AppConfig`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use block_vision::core::service::MarketService;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn MarketService> = Arc::new(ApiClient::new(&config)?);
//!
//! // In tests: an in-memory implementation
//! let api: Arc<dyn MarketService> = Arc::new(MockMarketService::default());
//! ```

pub mod config;
pub mod error;
pub mod service;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use service::MarketService;
