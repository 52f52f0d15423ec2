//! # Search Results Screen
//!
//! Scrollable list of coins returned by the last search.

use crate::app::{AppState, FetchKind, ListItem, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{help, status_bar};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Text};
use ratatui::widgets::{List, ListItem as ListEntry, ListState, Paragraph, StatefulWidget, Widget, Wrap};

pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let footer_lines = match &state.last_error {
        Some(error) => vec![status_bar::error_line(error, theme)],
        None => help::help_lines(Screen::ResultsList, state.help_expanded, theme),
    };
    let [title, body, status, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(2),
        Constraint::Length(1),
        Constraint::Length(footer_lines.len() as u16),
    ])
    .areas(area);

    let heading = format!("{} ({})", Screen::ResultsList.title(), state.search_results.len());
    Paragraph::new(Line::styled(heading, Style::default().add_modifier(Modifier::BOLD))).render(title, buf);

    if state.search_results.is_empty() {
        let text = format!("No coins found for \"{}\"", state.search_query.trim());
        Paragraph::new(status_bar::muted_line(text, theme)).render(body, buf);
    } else {
        let entries: Vec<ListEntry> = state
            .search_results
            .iter()
            .map(|coin| {
                ListEntry::new(Text::from(vec![
                    Line::styled(coin.title(), Style::default().add_modifier(Modifier::BOLD)),
                    status_bar::muted_line(coin.subtitle(), theme),
                ]))
            })
            .collect();

        let list = List::new(entries)
            .highlight_style(theme.selected_style())
            .highlight_symbol("│ ");
        let mut list_state = ListState::default().with_selected(Some(state.results_cursor));
        StatefulWidget::render(list, body, buf, &mut list_state);
    }

    if state.is_loading(FetchKind::CoinDetail) {
        Paragraph::new(status_bar::muted_line("Loading coin…", theme)).render(status, buf);
    }

    Paragraph::new(footer_lines).wrap(Wrap { trim: false }).render(footer, buf);
}
