//! # Help Line
//!
//! Short or expanded key binding hints for the current screen.

use crate::app::input::{full_help, short_help, KeyHelp};
use crate::app::Screen;
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const SEPARATOR: &str = " • ";

/// Help lines for `screen`: one line in short form, one per binding group
/// when expanded.
pub fn help_lines(screen: Screen, expanded: bool, theme: &Theme) -> Vec<Line<'static>> {
    if expanded {
        full_help(screen)
            .iter()
            .map(|group| bindings_line(group, theme))
            .collect()
    } else {
        vec![bindings_line(&short_help(screen), theme)]
    }
}

fn bindings_line(bindings: &[KeyHelp], theme: &Theme) -> Line<'static> {
    let key_style = Style::default().fg(theme.muted).add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(theme.muted);

    let mut spans = Vec::with_capacity(bindings.len() * 4);
    for (i, binding) in bindings.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(SEPARATOR, desc_style));
        }
        spans.push(Span::styled(binding.keys, key_style));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(binding.description, desc_style));
    }
    Line::from(spans)
}
