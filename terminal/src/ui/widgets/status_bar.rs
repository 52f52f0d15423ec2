//! # Status Line
//!
//! Single-line status messages: errors, loading hints, captions.

use crate::core::error::AppError;
use crate::ui::theme::Theme;
use ratatui::style::Style;
use ratatui::text::Line;

/// `Error: <message>` in the error accent
pub fn error_line(error: &AppError, theme: &Theme) -> Line<'static> {
    Line::styled(format!("Error: {}", error), Style::default().fg(theme.error))
}

/// Dimmed informational line
pub fn muted_line(text: impl Into<String>, theme: &Theme) -> Line<'static> {
    Line::styled(text.into(), Style::default().fg(theme.muted))
}
