use ratatui::Frame;

use crate::core::i18n::t;
use crate::core::state::{App, Screen};
use crate::tui::component::Component;
use crate::tui::components::{PortfolioScreen, WelcomeScreen};
use crate::tui::content::ContentProvider;

/// Draw the current screen. Returns the scroll bound measured by the
/// portfolio render, if it ran.
pub fn draw_ui(frame: &mut Frame, app: &App, content: &dyn ContentProvider) -> Option<usize> {
    let area = frame.area();
    match app.screen {
        Screen::Welcome => {
            let hint = t(app.view.language, "welcome_hint");
            WelcomeScreen::new(app.animation.render(), hint).render(frame, area);
            None
        }
        Screen::Portfolio => {
            let mut portfolio = PortfolioScreen::new(app.view, content);
            portfolio.render(frame, area);
            portfolio.max_scroll
        }
    }
}
