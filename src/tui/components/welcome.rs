//! # Welcome Screen Component
//!
//! Shows the typing animation with a hint below it, centered both ways.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::animation::{AnimatedLine, CURSOR_GLYPH, Cursor};
use crate::tui::component::Component;
use crate::tui::theme;

pub struct WelcomeScreen {
    line: AnimatedLine,
    hint: String,
}

impl WelcomeScreen {
    pub fn new(line: AnimatedLine, hint: impl Into<String>) -> Self {
        Self {
            line,
            hint: hint.into(),
        }
    }
}

/// Style an animation frame: bold accent text, with an overlay cursor drawn
/// as an inverted cell.
pub fn animated_line(line: &AnimatedLine) -> Line<'static> {
    let text_style = theme::title();
    let cursor = match line.cursor {
        Cursor::Trailing { visible } => {
            let glyph = if visible { CURSOR_GLYPH } else { ' ' };
            Span::styled(glyph.to_string(), text_style)
        }
        Cursor::Over { ch, visible: true } => Span::styled(ch.to_string(), theme::inverted()),
        Cursor::Over { ch, visible: false } => Span::styled(ch.to_string(), text_style),
    };
    Line::from(vec![
        Span::styled(line.typed.clone(), text_style),
        cursor,
        Span::styled(line.rest.clone(), text_style),
    ])
}

impl Component for WelcomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            animated_line(&self.line),
            Line::default(),
            Line::from(Span::styled(self.hint.clone(), theme::muted())),
        ];

        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(paragraph, text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::AnimationDriver;
    use crate::test_support::buffer_rows;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_welcome_centers_cursor_and_hint() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut screen = WelcomeScreen::new(
            AnimationDriver::default().render(),
            "Press any key to continue",
        );

        terminal
            .draw(|f| {
                screen.render(f, f.area());
            })
            .unwrap();

        let rows = buffer_rows(terminal.backend().buffer());
        let cursor_row = rows.iter().position(|r| r.contains('█')).unwrap();
        assert!(rows[cursor_row + 2].contains("Press any key to continue"));
        assert!((8..=10).contains(&cursor_row));
    }

    #[test]
    fn test_overlay_cursor_is_inverted_only_when_visible() {
        let shown = AnimatedLine {
            typed: String::new(),
            cursor: Cursor::Over { ch: 't', visible: true },
            rest: "ermfolio.dev ".to_string(),
        };
        let line = animated_line(&shown);
        assert_eq!(line.spans[1].content, "t");
        assert_eq!(line.spans[1].style, theme::inverted());

        let hidden = AnimatedLine {
            cursor: Cursor::Over { ch: 't', visible: false },
            ..shown
        };
        assert_eq!(animated_line(&hidden).spans[1].style, theme::title());
    }
}
