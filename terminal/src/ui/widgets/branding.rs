//! # Branding Components
//!
//! Title and subtitle shown at the top of the menu.

use crate::ui::theme::Theme;
use ratatui::style::Style;
use ratatui::text::Line;

/// Application title
pub const TITLE: &str = "❒ block-vision";

/// Tagline shown after the version
pub const TAGLINE: &str = "✦︎ Lighting up your crypto journey ✦︎";

/// Gradient-styled title
pub fn title_line(theme: &Theme) -> Line<'static> {
    Line::from(theme.gradient_spans(TITLE))
}

/// `• v<version>  <tagline>`
pub fn subtitle_line(theme: &Theme) -> Line<'static> {
    Line::styled(
        format!("• v{}  {}", env!("CARGO_PKG_VERSION"), TAGLINE),
        Style::default().fg(theme.subtext),
    )
}

/// Title, subtitle and a spacer line
pub fn branding_section(theme: &Theme) -> Vec<Line<'static>> {
    vec![title_line(theme), subtitle_line(theme), Line::default()]
}
