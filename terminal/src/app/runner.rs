//! # Event Loop
//!
//! Terminal setup, the select loop over key input and fetch completions, and
//! terminal restoration.

use crate::app::{App, AppEvent};
use crate::core::error::{AppError, Result};
use crate::ui::{self, theme::Theme};
use crossterm::event::{Event, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use futures_util::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the application until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub async fn run(mut app: App, theme: &Theme) -> Result<()> {
    let mut terminal = setup_terminal()?;
    tracing::info!("Terminal initialized, entering event loop");

    let result = event_loop(&mut terminal, &mut app, theme).await;

    restore_terminal();
    if let Err(e) = terminal.show_cursor() {
        tracing::warn!(error = %e, "Failed to show cursor");
    }

    match &result {
        Ok(()) => tracing::info!("Event loop finished"),
        Err(e) => tracing::error!(error = %e, "Event loop failed"),
    }
    result
}

/// Leave raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        tracing::warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        tracing::warn!(error = %e, "Failed to leave alternate screen");
    }
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        restore_terminal();
        return Err(e.into());
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        restore_terminal();
        AppError::from(e)
    })
}

async fn event_loop(terminal: &mut Tui, app: &mut App, theme: &Theme) -> Result<()> {
    let mut input = EventStream::new();
    let completions = app.event_rx.clone();

    loop {
        terminal.draw(|frame| ui::draw(frame, &app.state, theme))?;

        tokio::select! {
            maybe_event = input.next() => match maybe_event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    tracing::trace!(code = ?key.code, modifiers = ?key.modifiers, "Key pressed");
                    app.handle_key(key);
                }
                // Resize and other input only need a redraw
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(AppError::Terminal(format!("failed to read input: {}", e))),
                None => return Err(AppError::Terminal("input stream closed".to_string())),
            },
            Ok(event) = completions.recv() => {
                handle_completion(app, event);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_completion(app: &mut App, event: AppEvent) {
    app.handle_event(event);
    // Apply anything else that finished meanwhile before the next redraw
    app.on_tick();
}
