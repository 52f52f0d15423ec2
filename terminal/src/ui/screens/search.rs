//! # Search Screen
//!
//! Query input box.

use crate::app::{AppState, FetchKind, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{help, status_bar};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

const INSTRUCTIONS: &str = "Type a coin name or symbol and press enter";

pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let help = help::help_lines(Screen::Search, state.help_expanded, theme);
    let [input, message, _, footer] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(help.len() as u16),
    ])
    .areas(area);

    let query = Line::from(vec![
        Span::raw(state.search_query.clone()),
        Span::styled("█", Style::default().fg(theme.checkbox_checked).add_modifier(Modifier::SLOW_BLINK)),
    ]);
    Paragraph::new(query)
        .block(
            Block::bordered()
                .title(" Search coins ")
                .border_style(Style::default().fg(theme.border)),
        )
        .render(input, buf);

    let message_line = match &state.last_error {
        Some(error) => status_bar::error_line(error, theme),
        None if state.is_loading(FetchKind::Search) => status_bar::muted_line("Searching…", theme),
        None => status_bar::muted_line(INSTRUCTIONS, theme),
    };
    Paragraph::new(message_line).wrap(Wrap { trim: false }).render(message, buf);

    Paragraph::new(help).render(footer, buf);
}
