//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;
use ratatui::text::{Line, Span};

use crate::core::i18n::Language;
use crate::core::state::Tab;
use crate::tui::content::ContentProvider;
use crate::tui::frame::ComposedFrame;
use crate::tui::text::plain_text;

/// A content provider with plain, predictable lines.
pub struct FakeContent {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub footer: String,
}

impl FakeContent {
    /// Right panel of `count` lines reading `line 00`, `line 01`, ...
    pub fn numbered(count: usize) -> Self {
        Self::from_lines((0..count).map(|i| format!("line {i:02}")).collect())
    }

    pub fn from_lines(right: Vec<String>) -> Self {
        Self {
            left: vec!["Name".to_string(), "Bio".to_string()],
            right,
            footer: "q: Quit".to_string(),
        }
    }

    pub fn with_footer(mut self, footer: &str) -> Self {
        self.footer = footer.to_string();
        self
    }
}

impl ContentProvider for FakeContent {
    fn left_panel(&self, _lang: Language, _panel_width: usize) -> Vec<Line<'static>> {
        self.left.iter().map(|s| Line::from(s.clone())).collect()
    }

    fn tab_content(&self, _lang: Language, _tab: Tab) -> Vec<Line<'static>> {
        self.right.iter().map(|s| Line::from(s.clone())).collect()
    }

    fn site_label(&self) -> Span<'static> {
        Span::raw("site.test")
    }

    fn footer_hint(&self, _lang: Language) -> String {
        self.footer.clone()
    }
}

/// Plain text of every row of a composed frame.
pub fn frame_text(frame: &ComposedFrame) -> Vec<String> {
    frame.lines.iter().map(plain_text).collect()
}

/// Plain text of every row of a rendered buffer.
pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width.max(1))
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect()
}
