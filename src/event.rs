use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// How long the loop waits for input before emitting a tick. Status
/// messages expire after `STATUS_TICKS` of these (app/state.rs).
pub const TICK_RATE: Duration = Duration::from_millis(250);

/// Map a raw crossterm event to an `AppEvent`, if it is one we act on.
/// Key releases and repeats are dropped; a resize only needs the redraw
/// every event already triggers, so it maps to a tick.
fn map_event(raw: Event) -> Option<AppEvent> {
    match raw {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::KeyPress(key.code)),
        Event::Resize(_, _) => Some(AppEvent::Tick),
        _ => None,
    }
}

/// Runs the main event loop: draw a frame, wait for input, update.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if event::poll(TICK_RATE)? {
            if let Some(event) = map_event(event::read()?) {
                app.update(event);
            }
        } else {
            app.update(AppEvent::Tick);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;

    #[test]
    fn key_presses_map_and_releases_are_dropped() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(matches!(
            map_event(press),
            Some(AppEvent::KeyPress(KeyCode::Char('q')))
        ));

        let release = Event::Key(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert!(map_event(release).is_none());
    }

    #[test]
    fn resize_becomes_a_tick() {
        assert!(matches!(
            map_event(Event::Resize(80, 24)),
            Some(AppEvent::Tick)
        ));
    }
}
