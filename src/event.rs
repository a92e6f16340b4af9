use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
/// A timeout becomes a `Tick`.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return Ok(map_event(event::read()?));
    }
    Ok(Some(AppEvent::Tick))
}

/// Only key presses reach the app. Releases, repeats, mouse and resize
/// events are dropped; the next loop iteration redraws anyway.
fn map_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
        _ => None,
    }
}

/// Runs the main event loop.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(tick_rate)? {
            app.update(event);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn key(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn key_presses_become_app_events() {
        match map_event(key(KeyCode::Char('g'), KeyEventKind::Press)) {
            Some(AppEvent::KeyPress(KeyCode::Char('g'))) => {}
            _ => panic!("expected a key press for 'g'"),
        }
    }

    #[test]
    fn releases_and_repeats_are_dropped() {
        assert!(map_event(key(KeyCode::Char('g'), KeyEventKind::Release)).is_none());
        assert!(map_event(key(KeyCode::Char('g'), KeyEventKind::Repeat)).is_none());
    }

    #[test]
    fn resize_does_not_tick() {
        assert!(map_event(Event::Resize(80, 24)).is_none());
        assert!(map_event(Event::FocusGained).is_none());
    }
}
