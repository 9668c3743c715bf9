use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;

use crate::core::action::Action;
use crate::core::state::Screen;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from any screen
    ForceQuit,
    Quit,
    Left,
    Right,
    Up,
    Down,
    ToggleLanguage,
    /// Any other key press
    AnyKey,
    Resize(u16, u16),
}

impl TuiEvent {
    /// The action this event triggers on `screen`, if any.
    pub fn action(self, screen: Screen) -> Option<Action> {
        if let TuiEvent::Resize(width, height) = self {
            return Some(Action::Resize { width, height });
        }
        if self == TuiEvent::ForceQuit {
            return Some(Action::Quit);
        }
        match screen {
            // Any key leaves the welcome screen
            Screen::Welcome => Some(Action::DismissWelcome),
            Screen::Portfolio => match self {
                TuiEvent::Quit => Some(Action::Quit),
                TuiEvent::Left => Some(Action::PreviousTab),
                TuiEvent::Right => Some(Action::NextTab),
                TuiEvent::Up => Some(Action::ScrollUp),
                TuiEvent::Down => Some(Action::ScrollDown),
                TuiEvent::ToggleLanguage => Some(Action::ToggleLanguage),
                _ => None,
            },
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if event::poll(timeout)? {
        Ok(map_event(event::read()?))
    } else {
        Ok(None)
    }
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => map_key(key_event),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Only presses count; some terminals also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
    let event = match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => TuiEvent::ForceQuit,
        (_, KeyCode::Char('q')) => TuiEvent::Quit,
        (_, KeyCode::Left | KeyCode::Char('h')) => TuiEvent::Left,
        (_, KeyCode::Right | KeyCode::Char('l')) => TuiEvent::Right,
        (_, KeyCode::Up | KeyCode::Char('k')) => TuiEvent::Up,
        (_, KeyCode::Down | KeyCode::Char('j')) => TuiEvent::Down,
        (_, KeyCode::Tab) => TuiEvent::ToggleLanguage,
        _ => TuiEvent::AnyKey,
    };
    Some(event)
}
