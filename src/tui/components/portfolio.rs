//! # Portfolio Screen Component
//!
//! Draws the composed frame and keeps the scroll bound it measured, so the
//! event loop can store it in the app state after the draw.

use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::state::ViewModel;
use crate::tui::component::Component;
use crate::tui::content::ContentProvider;
use crate::tui::frame::compose;

pub struct PortfolioScreen<'a> {
    view: ViewModel,
    content: &'a dyn ContentProvider,
    /// Set by `render`: largest scroll offset for this layout.
    pub max_scroll: Option<usize>,
}

impl<'a> PortfolioScreen<'a> {
    pub fn new(view: ViewModel, content: &'a dyn ContentProvider) -> Self {
        Self {
            view,
            content,
            max_scroll: None,
        }
    }
}

impl Component for PortfolioScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let composed = compose(self.view, self.content);
        frame.render_widget(&composed, area);
        self.max_scroll = Some(composed.max_scroll);
    }
}
