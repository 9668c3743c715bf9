//! # Actions
//!
//! Everything that can happen in Termfolio becomes an `Action`.
//! A tick of the welcome timer? That's `Action::Tick`.
//! The right arrow on the portfolio? That's `Action::NextTab`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state and returns an [`Effect`] for the event loop.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::state::{App, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One welcome animation tick.
    Tick,
    Resize { width: u16, height: u16 },
    DismissWelcome,
    PreviousTab,
    NextTab,
    ScrollUp,
    ScrollDown,
    ToggleLanguage,
    /// The portfolio render reported the largest valid scroll offset.
    ScrollBoundMeasured(usize),
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Tick => {
            // Ticks only drive the welcome screen.
            if app.screen == Screen::Welcome {
                app.animation.advance();
            }
        }
        Action::Resize { width, height } => {
            app.view.width = width;
            app.view.height = height;
        }
        Action::DismissWelcome => {
            app.screen = Screen::Portfolio;
        }
        Action::PreviousTab => {
            let tab = app.view.tab.previous();
            if tab != app.view.tab {
                app.view.tab = tab;
                app.view.scroll = 0;
            }
        }
        Action::NextTab => {
            let tab = app.view.tab.next();
            if tab != app.view.tab {
                app.view.tab = tab;
                app.view.scroll = 0;
            }
        }
        Action::ScrollUp => {
            app.view.scroll = app.view.scroll.saturating_sub(1);
        }
        Action::ScrollDown => {
            if app.view.scroll < app.max_scroll {
                app.view.scroll += 1;
            }
        }
        Action::ToggleLanguage => {
            app.view.language = app.view.language.toggle();
        }
        Action::ScrollBoundMeasured(max_scroll) => {
            app.max_scroll = max_scroll;
            app.view.scroll = app.view.scroll.min(max_scroll);
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}
