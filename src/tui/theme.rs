//! Colors and text styles.

use ratatui::style::{Color, Modifier, Style};

/// Blue accent used for titles, borders and the animation.
pub const PRIMARY: Color = Color::Rgb(0x01, 0x74, 0xDF);
pub const TEXT: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const MUTED: Color = Color::Rgb(0x66, 0x66, 0x66);
pub const NAV_BACKGROUND: Color = Color::Rgb(0x1A, 0x1A, 0x1A);
pub const INVERTED_TEXT: Color = Color::Rgb(0x00, 0x00, 0x00);

pub fn title() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn content() -> Style {
    Style::default().fg(TEXT)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn border() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn link(base: Style) -> Style {
    base.add_modifier(Modifier::UNDERLINED)
}

/// Inverted badge: block cursor and the "you're looking at it" highlight.
pub fn inverted() -> Style {
    Style::default()
        .bg(PRIMARY)
        .fg(INVERTED_TEXT)
        .add_modifier(Modifier::BOLD)
}

/// Background of the navigation tab strip.
pub fn nav_bar() -> Style {
    Style::default().bg(NAV_BACKGROUND)
}
