//! # Settings Handlers
//!
//! Loading of the optional theme file.

use crate::ui::theme::ThemeConfig;
use std::path::Path;

/// Load the theme configuration at `path`, falling back to the built-in
/// palette when the file is missing or invalid.
pub fn load_settings(path: &Path) -> ThemeConfig {
    if !path.exists() {
        tracing::debug!(path = ?path, "No theme file, using built-in palette");
        return ThemeConfig::default();
    }

    match ThemeConfig::load_from_file(path) {
        Ok(config) => {
            tracing::info!("Loaded theme configuration from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load theme config from {:?}: {}. Using defaults.", path, e);
            ThemeConfig::default()
        }
    }
}
