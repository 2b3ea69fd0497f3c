//! Terminal user interface
//!
//! Pure rendering over the display channel plus a key-to-intent mapping.
//! The setup view collects a minute count, the timer view shows the
//! countdown; both are drawn from the latest `DisplaySnapshot`.

pub mod setup;
pub mod timer;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use tracing::warn;

use crate::config::Config;
use crate::state::{DisplaySnapshot, SharedState};
use crate::utils::TerminalGuard;

const MAX_MINUTES_DIGITS: usize = 4;

/// Form state local to the setup view
pub struct SetupForm {
    pub input: String,
    pub warning: Option<String>,
}

/// Run the terminal UI until the user quits
pub async fn run_ui(state: SharedState, config: &Config) -> Result<()> {
    let mut guard = TerminalGuard::enter()?;
    let mut events = EventStream::new();
    let mut display_rx = state.display_tx.subscribe();
    let mut form = SetupForm {
        input: config.minutes.to_string(),
        warning: None,
    };

    loop {
        let snapshot = state.display();
        guard.terminal.draw(|f| {
            if snapshot.active {
                timer::render(f, &snapshot);
            } else {
                setup::render(f, &form);
            }
        })?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(Event::Key(key))) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if handle_key(&state, &mut form, &snapshot, key) {
                        return Ok(());
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => warn!("Terminal event error: {}", e),
                None => return Ok(()),
            },

            changed = display_rx.changed() => {
                if changed.is_err() {
                    return Ok(());
                }
            }
        }
    }
}

/// Map a key press to a session intent; returns true when the app should exit
fn handle_key(
    state: &SharedState,
    form: &mut SetupForm,
    snapshot: &DisplaySnapshot,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if let Err(e) = state.stop() {
            warn!("Failed to stop session: {}", e);
        }
        return true;
    }

    if !snapshot.active {
        match key.code {
            // Non-digit characters are rejected at input time
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if form.input.len() < MAX_MINUTES_DIGITS {
                    form.input.push(c);
                    form.warning = None;
                }
            }
            KeyCode::Backspace => {
                form.input.pop();
            }
            KeyCode::Enter => match state.start_session(&form.input) {
                Ok(()) => form.warning = None,
                Err(message) => form.warning = Some(message),
            },
            KeyCode::Esc | KeyCode::Char('q') => return true,
            _ => {}
        }
        return false;
    }

    match key.code {
        KeyCode::Char(' ') => {
            // Pause control is disabled once the run has finished
            if !snapshot.finished {
                if let Err(e) = state.toggle_pause() {
                    warn!("Failed to toggle pause: {}", e);
                }
            }
        }
        KeyCode::Char('r') => {
            if let Err(e) = state.reset() {
                warn!("Failed to reset session: {}", e);
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            if let Err(e) = state.stop() {
                warn!("Failed to stop session: {}", e);
            }
        }
        _ => {}
    }
    false
}

/// Rect centered in `r`, sized as a percentage of it
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
