//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screens,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (welcome screen): wakes every tick interval (80ms by
//!   default), advances the animation and redraws.
//! - **Idle** (portfolio): sleeps up to 500ms, only redraws on events or
//!   terminal resize.
//!
//! The hardware cursor stays hidden for the whole session; the welcome
//! animation draws its own block cursor.

mod component;
pub mod components;
pub mod content;
pub mod event;
pub mod frame;
pub mod layout;
pub mod text;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::content::{ContentProvider, PortfolioContent};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal cursor hidden");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let content = PortfolioContent;

    let mut terminal = ratatui::try_init()?;
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &mut app, &content, config.tick_interval));
    ratatui::restore();

    info!("Termfolio shutting down");
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    content: &dyn ContentProvider,
    tick_interval: Duration,
) -> std::io::Result<()> {
    let size = terminal.size()?;
    update(app, Action::Resize { width: size.width, height: size.height });

    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.screen == Screen::Welcome;

        if needs_redraw {
            let mut measured = None;
            terminal.draw(|f| measured = ui::draw_ui(f, app, content))?;
            if let Some(max_scroll) = measured {
                update(app, Action::ScrollBoundMeasured(max_scroll));
            }
            needs_redraw = false;
        }

        // Wake in time for the next tick while animating, otherwise idle
        let timeout = if animating {
            tick_interval.saturating_sub(last_tick.elapsed())
        } else {
            IDLE_POLL
        };
        let first_event = poll_event_timeout(timeout)?;

        // Process first event + drain all pending events before next draw
        let mut should_quit = false;
        let mut pending = first_event;
        while let Some(event) = pending {
            if let Some(action) = event.action(app.screen) {
                debug!("{event:?} -> {action:?}");
                if update(app, action) == Effect::Quit {
                    should_quit = true;
                    break;
                }
                needs_redraw = true;
            }
            pending = poll_event_immediate()?;
        }
        if should_quit {
            return Ok(());
        }

        if app.screen == Screen::Welcome && last_tick.elapsed() >= tick_interval {
            update(app, Action::Tick);
            last_tick = Instant::now();
            needs_redraw = true;
        }
    }
}
