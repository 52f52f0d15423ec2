//! # Checkbox Picker
//!
//! Vertical list of options with a `[x]` box on the highlighted one.

use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// One line per option, `selected` rendered checked
pub fn picker_lines(options: &[&str], selected: usize, theme: &Theme) -> Vec<Line<'static>> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            if i == selected {
                let checked = Style::default().fg(theme.checkbox_checked);
                Line::from(vec![
                    Span::styled("[x]", checked),
                    Span::raw(" "),
                    Span::styled(option.to_string(), checked.add_modifier(Modifier::BOLD)),
                ])
            } else {
                Line::from(vec![
                    Span::styled("[ ]", Style::default().fg(theme.checkbox)),
                    Span::raw(" "),
                    Span::raw(option.to_string()),
                ])
            }
        })
        .collect()
}
