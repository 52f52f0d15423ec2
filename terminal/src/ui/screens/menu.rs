//! # Menu Screen
//!
//! Branding header and the Trending/Search picker.

use crate::app::{AppState, Screen, MENU_OPTIONS};
use crate::ui::theme::Theme;
use crate::ui::widgets::{branding, help, picker};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let mut lines = branding::branding_section(theme);
    lines.extend(picker::picker_lines(&MENU_OPTIONS, state.menu_selection, theme));
    lines.push(Line::default());
    lines.extend(help::help_lines(Screen::Menu, state.help_expanded, theme));

    Paragraph::new(lines).render(area, buf);
}
