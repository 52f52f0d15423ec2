//! # Coin Detail Screen
//!
//! Price, community sentiment and whitepaper link of the selected coin.

use crate::app::{AppState, CoinDetail, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{help, status_bar};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use shared::utils::format_usd;

const LABEL_WIDTH: usize = 12;

pub fn render(state: &AppState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    let Some(coin) = &state.selected_coin else {
        Paragraph::new(status_bar::muted_line("No coin selected", theme)).render(area, buf);
        return;
    };

    let mut lines = detail_lines(coin, theme);
    lines.push(Line::default());
    lines.push(status_bar::muted_line("Press esc to go back to the results", theme));
    lines.extend(help::help_lines(Screen::CoinDetail, state.help_expanded, theme));

    Paragraph::new(lines).wrap(Wrap { trim: false }).render(area, buf);
}

fn detail_lines(coin: &CoinDetail, theme: &Theme) -> Vec<Line<'static>> {
    let whitepaper = if coin.whitepaper_url.is_empty() {
        "n/a".to_string()
    } else {
        coin.whitepaper_url.clone()
    };

    vec![
        Line::styled(
            format!("{} ({})", coin.name, coin.symbol.to_uppercase()),
            Style::default().fg(theme.checkbox_checked).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::from(vec![label("Price"), Span::raw(format_usd(coin.current_price_usd))]),
        Line::from(vec![
            label("Sentiment"),
            Span::styled(format!("▲ {:.2}%", coin.sentiment_up_percent), Style::default().fg(theme.success)),
            Span::raw("  "),
            Span::styled(format!("▼ {:.2}%", coin.sentiment_down_percent), Style::default().fg(theme.error)),
        ]),
        Line::from(vec![label("Whitepaper"), Span::raw(whitepaper)]),
    ]
}

fn label(text: &str) -> Span<'static> {
    Span::styled(format!("{:<width$}", text, width = LABEL_WIDTH), Style::default().add_modifier(Modifier::BOLD))
}
