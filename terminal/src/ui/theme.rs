//! # Terminal Theme
//!
//! Pink/violet palette for the ratatui renderer. The palette can be overridden
//! with a JSON [`ThemeConfig`] file; the resulting [`Theme`] is built once at
//! startup and shared by reference.

use crate::core::error::{AppError, Result};
use once_cell::sync::OnceCell;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use serde::{Deserialize, Serialize};
use std::path::Path;

static THEME: OnceCell<Theme> = OnceCell::new();

/// Serializable theme configuration. Missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// First color of the title gradient
    pub gradient_start: [u8; 3],
    /// Last color of the title gradient
    pub gradient_end: [u8; 3],
    /// Subtitle text
    pub subtext: [u8; 3],
    /// Unchecked picker box
    pub checkbox: [u8; 3],
    /// Checked picker box and its label
    pub checkbox_checked: [u8; 3],
    /// Table and input borders
    pub border: [u8; 3],
    /// Highlighted row text
    pub selected_fg: [u8; 3],
    /// Highlighted row background
    pub selected_bg: [u8; 3],
    /// Gains, positive sentiment
    pub success: [u8; 3],
    /// Losses, negative sentiment, error text
    pub error: [u8; 3],
    /// Help line and secondary text
    pub muted: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            gradient_start: [0xF0, 0x96, 0xDD],
            gradient_end: [0xBC, 0x52, 0xF1],
            subtext: [0xF0, 0x95, 0xDD],
            checkbox: [0xFF, 0xFF, 0xFF],
            checkbox_checked: [0xBC, 0x52, 0xF1],
            border: [88, 88, 88],
            selected_fg: [255, 255, 175],
            selected_bg: [95, 0, 255],
            success: [0, 205, 0],
            error: [205, 0, 0],
            muted: [128, 128, 128],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("invalid theme file {}: {}", path.display(), e)))
    }
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

/// Resolved color palette used by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    gradient_start: [u8; 3],
    gradient_end: [u8; 3],
    pub subtext: Color,
    pub checkbox: Color,
    pub checkbox_checked: Color,
    pub border: Color,
    pub selected_fg: Color,
    pub selected_bg: Color,
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            gradient_start: config.gradient_start,
            gradient_end: config.gradient_end,
            subtext: rgb(config.subtext),
            checkbox: rgb(config.checkbox),
            checkbox_checked: rgb(config.checkbox_checked),
            border: rgb(config.border),
            selected_fg: rgb(config.selected_fg),
            selected_bg: rgb(config.selected_bg),
            success: rgb(config.success),
            error: rgb(config.error),
            muted: rgb(config.muted),
        }
    }

    /// Install the process-wide theme. The first call wins; later calls
    /// return the already installed theme.
    pub fn init_global(config: &ThemeConfig) -> &'static Theme {
        THEME.get_or_init(|| Theme::from_config(config))
    }

    /// Style of the highlighted row or list entry
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Color along the title gradient at `t` in `[0, 1]`
    pub fn gradient_color(&self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        let channel = |i: usize| {
            let start = f64::from(self.gradient_start[i]);
            let end = f64::from(self.gradient_end[i]);
            (start + (end - start) * t).round() as u8
        };
        Color::Rgb(channel(0), channel(1), channel(2))
    }

    /// One bold span per character, colored along the gradient
    pub fn gradient_spans(&self, text: &str) -> Vec<Span<'static>> {
        let count = text.chars().count();
        text.chars()
            .enumerate()
            .map(|(i, c)| {
                let t = if count > 1 { i as f64 / (count - 1) as f64 } else { 0.0 };
                Span::styled(
                    c.to_string(),
                    Style::default().fg(self.gradient_color(t)).add_modifier(Modifier::BOLD),
                )
            })
            .collect()
    }

    /// Get color for price change percentage
    pub fn price_change_color(&self, change: f64) -> Color {
        if change > 0.0 {
            self.success
        } else {
            self.error
        }
    }

    /// Format price change with color
    pub fn format_price_change(&self, change: f64) -> (String, Color) {
        (format!("{:.2}%", change), self.price_change_color(change))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_gradient_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.gradient_color(0.0), Color::Rgb(0xF0, 0x96, 0xDD));
        assert_eq!(theme.gradient_color(1.0), Color::Rgb(0xBC, 0x52, 0xF1));
        assert_eq!(theme.gradient_color(7.0), Color::Rgb(0xBC, 0x52, 0xF1));
    }

    #[test]
    fn test_gradient_spans_one_per_char() {
        let theme = Theme::default();
        let spans = theme.gradient_spans("❒ block");
        assert_eq!(spans.len(), 7);
        assert_eq!(spans[0].content, "❒");
        assert_eq!(spans[0].style.fg, Some(theme.gradient_color(0.0)));
        assert_eq!(spans[6].style.fg, Some(theme.gradient_color(1.0)));
    }

    #[test]
    fn test_format_price_change() {
        let theme = Theme::default();
        assert_eq!(theme.format_price_change(2.5), ("2.50%".to_string(), theme.success));
        assert_eq!(theme.format_price_change(-1.234), ("-1.23%".to_string(), theme.error));
        assert_eq!(theme.format_price_change(0.0), ("0.00%".to_string(), theme.error));
    }

    #[test]
    fn test_init_global_first_call_wins() {
        let custom = ThemeConfig { muted: [1, 1, 1], ..ThemeConfig::default() };
        let first = Theme::init_global(&custom);
        let second = Theme::init_global(&ThemeConfig::default());
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"{{"gradient_start": [1, 2, 3], "muted": [9, 9, 9]}}"#).expect("write");

        let config = ThemeConfig::load_from_file(file.path()).expect("valid theme");
        assert_eq!(config.gradient_start, [1, 2, 3]);
        assert_eq!(config.muted, [9, 9, 9]);
        assert_eq!(config.border, ThemeConfig::default().border);
    }

    #[test]
    fn test_load_from_missing_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ThemeConfig::load_from_file(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
