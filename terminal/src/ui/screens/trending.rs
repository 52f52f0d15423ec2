//! # Trending Screen
//!
//! Table of trending coins with a row cursor.

use crate::app::{AppState, FetchKind, Screen, TrendingRow};
use crate::ui::theme::Theme;
use crate::ui::widgets::{help, status_bar};
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget, Wrap};

const HEADERS: [&str; 5] = ["Rank", "Coin", "Symbol", "Price (BTC)", "24h Change (USD)"];
const WIDTHS: [Constraint; 5] = [
    Constraint::Length(4),
    Constraint::Length(20),
    Constraint::Length(10),
    Constraint::Length(15),
    Constraint::Length(20),
];

pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    // A failed fetch replaces the whole screen
    if let Some(error) = &state.last_error {
        Paragraph::new(status_bar::error_line(error, theme))
            .wrap(Wrap { trim: false })
            .render(area, buf);
        return;
    }

    let help = help::help_lines(Screen::Trending, state.help_expanded, theme);
    let [body, caption, footer] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(2),
        Constraint::Length(help.len() as u16),
    ])
    .areas(area);

    if state.trending_rows.is_empty() {
        let text = if state.is_loading(FetchKind::Trending) {
            "⠿ Fetching trending coins…"
        } else {
            "No trending coins"
        };
        Paragraph::new(status_bar::muted_line(text, theme)).render(body, buf);
    } else {
        render_table(state, theme, body, buf);
    }

    if let Some(updated_at) = state.trending_updated_at.filter(|_| !state.trending_rows.is_empty()) {
        let text = format!("Updated {}", updated_at.format("%H:%M:%S"));
        Paragraph::new(status_bar::muted_line(text, theme)).render(caption, buf);
    }

    Paragraph::new(help).render(footer, buf);
}

fn render_table(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let header = Row::new(HEADERS).style(Style::default().add_modifier(Modifier::BOLD));
    let rows = state.trending_rows.iter().map(|row| table_row(row, theme));

    let table = Table::new(rows, WIDTHS)
        .header(header)
        .block(Block::bordered().border_style(Style::default().fg(theme.border)))
        .row_highlight_style(theme.selected_style());

    let mut table_state = TableState::default().with_selected(Some(state.trending_cursor));
    StatefulWidget::render(table, area, buf, &mut table_state);
}

fn table_row(row: &TrendingRow, theme: &Theme) -> Row<'static> {
    let rank = row.rank.map(|rank| rank.to_string()).unwrap_or_else(|| "-".to_string());
    let (change, color) = theme.format_price_change(row.change_24h_percent);

    Row::new(vec![
        Cell::from(rank),
        Cell::from(row.name.clone()),
        Cell::from(row.symbol.clone()),
        Cell::from(format!("{:.8}", row.price_btc)),
        Cell::from(Span::styled(change, Style::default().fg(color))),
    ])
}
