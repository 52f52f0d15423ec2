//! # Logging Infrastructure
//!
//! File-based structured logging for the terminal UI. stdout and stderr
//! belong to the TUI, so every log line goes to `logs/block-vision.log`
//! (daily rotation).
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Initialize at startup and hold the guard until exit
//! let _log_guard = block_vision::debug::init_logger();
//!
//! tracing::info!(endpoint = "/search/trending", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `block_vision=info,warn`)
//! - `BLOCK_VISION_LOG_DIR`: Log directory (default `logs`)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;
