//! Logging configuration from environment variables

use std::path::PathBuf;

/// Log file name inside [`DebugConfig::log_dir`]; the appender adds a date suffix
pub const LOG_FILE_NAME: &str = "block-vision.log";

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_LEVEL: &str = "block_vision=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DebugConfig {
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Log file path
    pub log_file: PathBuf,
    /// Log level filter (e.g., "block_vision=debug,info")
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        let log_dir = PathBuf::from("logs");
        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_dir,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_dir = lookup("BLOCK_VISION_LOG_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join(LOG_FILE_NAME),
            log_dir,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DebugConfig::from_lookup(|_| None);
        assert_eq!(config, DebugConfig::default());
        assert_eq!(config.log_file, PathBuf::from("logs/block-vision.log"));
        assert!(!config.is_debug_enabled());
    }

    #[test]
    fn test_overrides() {
        let config = DebugConfig::from_lookup(|key| match key {
            "BLOCK_VISION_LOG_DIR" => Some("/tmp/bv".to_string()),
            "RUST_LOG" => Some("block_vision=debug".to_string()),
            _ => None,
        });

        assert_eq!(config.log_dir, PathBuf::from("/tmp/bv"));
        assert_eq!(config.log_file, PathBuf::from("/tmp/bv/block-vision.log"));
        assert!(config.is_debug_enabled());
    }

    #[test]
    fn test_blank_log_dir_falls_back() {
        let config = DebugConfig::from_lookup(|key| (key == "BLOCK_VISION_LOG_DIR").then(|| "  ".to_string()));
        assert_eq!(config.log_dir, PathBuf::from("logs"));
    }
}
