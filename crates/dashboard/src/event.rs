//! Keyboard handling for the dashboard.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::app::App;

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,

        // Slider selection
        KeyCode::Up | KeyCode::Down | KeyCode::Tab | KeyCode::BackTab => app.select_next(),
        KeyCode::Char('k') | KeyCode::Char('j') => app.select_next(),

        // Value changes
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => app.adjust(-1),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            app.adjust(1)
        }
        KeyCode::Home => app.selected_to_min(),
        KeyCode::End => app.selected_to_max(),
        KeyCode::Char('r') => app.reset(),
        _ => {}
    }
}

/// Wait up to `timeout` for a terminal event.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
