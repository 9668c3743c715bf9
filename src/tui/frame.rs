//! # Frame Compositor
//!
//! Builds the whole portfolio screen as a list of styled lines, one per
//! terminal row, each exactly as wide as the (clamped) terminal.
//!
//! ```text
//!   ╭──────────────╮                    ╭───────────────────────────╮
//! ╭─┤ termfolio.dev├─────┬──────────────┤ Experience Education ...  ├─╮
//! │ ╰──────────────╯     │              ╰───────────────────────────╯ │
//! │ left panel           │ right panel (scrolls)                      │
//! │ ╭────┬────╮          │                                            │
//! ╰─┤ EN │ FR ├──────────┴────────────────────────────────────────────╯
//!   ╰────┴────╯             q: Quit • ←→: Navigate • Tab: Language
//! ```
//!
//! Composition is stateless: the same [`ViewModel`] and content always give
//! the same frame. The caller owns the scroll offset; [`compose`] only
//! reports how far it may go ([`ComposedFrame::max_scroll`]).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::core::i18n::Language;
use crate::core::state::{Tab, ViewModel};
use crate::tui::content::ContentProvider;
use crate::tui::layout::{
    self, LANG_LEFT_PAD, LayoutMetrics, NAV_RIGHT_PAD, PanelWidths, SITE_LEFT_PAD,
};
use crate::tui::text::{display_width, fit_to_width, indent, repeat, spaces, styled, wrap_line};
use crate::tui::theme;

const LANG_BOX_TOP: &str = "╭────┬────╮";
const LANG_BOX_BOTTOM: &str = "╰────┴────╯";

/// Columns of left padding inside each panel.
const PANEL_PADDING: usize = 1;

#[derive(Debug, Clone)]
pub struct ComposedFrame {
    /// One line per terminal row.
    pub lines: Vec<Line<'static>>,
    pub metrics: LayoutMetrics,
    /// Scroll offset actually used, after clamping.
    pub scroll: usize,
    /// Largest valid scroll offset; the caller clamps its stored offset to it.
    pub max_scroll: usize,
}

impl Widget for &ComposedFrame {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (row, line) in self.lines.iter().enumerate().take(usize::from(area.height)) {
            buf.set_line(area.x, area.y + row as u16, line, area.width);
        }
    }
}

/// Compose the portfolio frame for `view`.
pub fn compose(view: ViewModel, content: &dyn ContentProvider) -> ComposedFrame {
    let (width, _) = layout::clamp_dimensions(view.width, view.height);
    let panels = layout::panel_widths(width);

    let left_lines = panel_block(content.left_panel(view.language, panels.left), panels.left);
    let right_lines = panel_block(content.tab_content(view.language, view.tab), panels.right);

    let metrics = LayoutMetrics::measure(view.width, view.height, right_lines.len());
    let scroll = metrics.clamp_scroll(view.scroll);

    let mut frame = header(panels, content, view.language, view.tab);
    frame.extend(body(panels, metrics.content_height, &left_lines, &right_lines, scroll));
    frame.extend(footer(panels, content, view.language));
    // Bottom margin
    frame.push(Line::default());

    let lines = frame
        .into_iter()
        .map(|line| center(line, panels.frame_width(), metrics.width))
        .collect();

    ComposedFrame {
        lines,
        metrics,
        scroll,
        max_scroll: metrics.max_scroll,
    }
}

/// Wrap a content block to a panel: one column of padding, then text.
fn panel_block(lines: Vec<Line<'static>>, panel_width: usize) -> Vec<Line<'static>> {
    let text_width = panel_width.saturating_sub(PANEL_PADDING);
    let wrapped: Vec<Line<'static>> = lines
        .iter()
        .flat_map(|line| wrap_line(line, text_width))
        .collect();
    indent(wrapped, PANEL_PADDING)
}

fn border(glyphs: impl Into<String>) -> Span<'static> {
    styled(glyphs, theme::border())
}

/// The tab strip: every tab padded by a space, the selected one highlighted,
/// on a dark background with one column of padding on each side. Cut to
/// `max_width` columns when the labels do not fit.
fn nav_bar(
    content: &dyn ContentProvider,
    lang: Language,
    selected: Tab,
    max_width: usize,
) -> Vec<Span<'static>> {
    let background = theme::nav_bar();
    let mut spans = vec![styled(" ", background)];
    for tab in Tab::ALL {
        let style = if tab == selected {
            theme::title()
        } else {
            theme::content()
        };
        let label = format!(" {} ", content.tab_label(lang, tab));
        spans.push(styled(label, background.patch(style)));
    }
    spans.push(styled(" ", background));

    let strip = Line::from(spans);
    if display_width(&strip) > max_width {
        fit_to_width(strip, max_width).spans
    } else {
        strip.spans
    }
}

/// Three header lines with the site box and the tab box sitting on the top
/// border. Box corners line up with the `┤`/`├` of the middle line, and the
/// `┬` lands on the panel divider column.
fn header(
    panels: PanelWidths,
    content: &dyn ContentProvider,
    lang: Language,
    selected: Tab,
) -> Vec<Line<'static>> {
    let site = vec![Span::raw(" "), content.site_label(), Span::raw(" ")];
    let site_width = display_width(&Line::from(site.clone()));
    let nav = nav_bar(content, lang, selected, layout::nav_max_width(panels.right));
    let nav_width = display_width(&Line::from(nav.clone()));

    let site_pad = layout::site_right_pad(panels.left, site_width);
    let nav_pad = layout::nav_left_pad(panels.right, nav_width);

    let top = Line::from(vec![
        spaces(SITE_LEFT_PAD + 1),
        border(format!("╭{}╮", repeat("─", site_width))),
        spaces(site_pad + nav_pad + 1),
        border(format!("╭{}╮", repeat("─", nav_width))),
        spaces(NAV_RIGHT_PAD + 1),
    ]);

    let mut middle = vec![border(format!("╭{}┤", repeat("─", SITE_LEFT_PAD)))];
    middle.extend(site);
    middle.push(border(format!(
        "├{}┬{}┤",
        repeat("─", site_pad),
        repeat("─", nav_pad)
    )));
    middle.extend(nav);
    middle.push(border(format!("├{}╮", repeat("─", NAV_RIGHT_PAD))));

    let bottom = Line::from(vec![
        border("│"),
        spaces(SITE_LEFT_PAD),
        border(format!("╰{}╯", repeat("─", site_width))),
        spaces(site_pad),
        border("│"),
        spaces(nav_pad),
        border(format!("╰{}╯", repeat("─", nav_width))),
        spaces(NAV_RIGHT_PAD),
        border("│"),
    ]);

    vec![top, Line::from(middle), bottom]
}

/// `content_height` rows: left line `i` beside right line `scroll + i`.
fn body(
    panels: PanelWidths,
    content_height: usize,
    left: &[Line<'static>],
    right: &[Line<'static>],
    scroll: usize,
) -> Vec<Line<'static>> {
    (0..content_height)
        .map(|row| {
            let left_line = left.get(row).cloned().unwrap_or_default();
            let right_line = right.get(scroll + row).cloned().unwrap_or_default();

            let mut spans = vec![border("│")];
            spans.extend(fit_to_width(left_line, panels.left).spans);
            spans.push(border("│"));
            spans.extend(fit_to_width(right_line, panels.right).spans);
            spans.push(border("│"));
            Line::from(spans)
        })
        .collect()
}

/// Three footer lines: the language selector embedded in the bottom border
/// and the key hint below it.
fn footer(panels: PanelWidths, content: &dyn ContentProvider, lang: Language) -> Vec<Line<'static>> {
    let lang_pad = layout::lang_right_pad(panels.left);
    let frame_width = panels.frame_width();

    let selector = |option: Language| {
        let style = if option == lang {
            theme::title()
        } else {
            theme::muted()
        };
        styled(format!(" {} ", option.code()), style)
    };

    let top = Line::from(vec![
        border("│"),
        spaces(LANG_LEFT_PAD),
        border(LANG_BOX_TOP),
        spaces(lang_pad),
        border("│"),
        spaces(panels.right),
        border("│"),
    ]);

    let middle = Line::from(vec![
        border(format!("╰{}┤", repeat("─", LANG_LEFT_PAD))),
        selector(Language::En),
        border("│"),
        selector(Language::Fr),
        border(format!(
            "├{}┴{}╯",
            repeat("─", lang_pad),
            repeat("─", panels.right)
        )),
    ]);

    let hint = styled(content.footer_hint(lang), theme::muted());
    let hint_width = display_width(&Line::from(hint.clone()));
    let start = layout::footer_start(frame_width, hint_width);
    let bottom = Line::from(vec![
        spaces(LANG_LEFT_PAD + 1),
        border(LANG_BOX_BOTTOM),
        spaces(start.saturating_sub(layout::lang_box_end())),
        hint,
        spaces(frame_width.saturating_sub(start + hint_width)),
    ]);

    vec![top, middle, bottom]
}

/// Fit a frame line to the frame width, then center it in the terminal.
fn center(line: Line<'static>, frame_width: usize, total_width: usize) -> Line<'static> {
    let (left, _) = layout::center_padding(total_width, frame_width);
    let mut spans = vec![spaces(left)];
    spans.extend(fit_to_width(line, frame_width).spans);
    fit_to_width(Line::from(spans), total_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FakeContent, frame_text};
    use crate::tui::content::PortfolioContent;
    use crate::tui::text::plain_text;

    fn view(width: u16, height: u16) -> ViewModel {
        ViewModel {
            width,
            height,
            ..ViewModel::default()
        }
    }

    #[test]
    fn test_frame_has_exact_height_and_width() {
        for (w, h) in [(80, 20), (81, 21), (100, 30), (133, 47), (240, 70)] {
            let frame = compose(view(w, h), &PortfolioContent);
            assert_eq!(frame.lines.len(), usize::from(h), "{w}x{h}");
            for line in &frame.lines {
                assert_eq!(display_width(line), usize::from(w), "{w}x{h}: {:?}", plain_text(line));
            }
        }
    }

    #[test]
    fn test_undersized_terminal_is_clamped() {
        let frame = compose(view(30, 8), &PortfolioContent);
        assert_eq!(frame.lines.len(), 20);
        assert!(frame.lines.iter().all(|l| display_width(l) == 80));
    }

    #[test]
    fn test_minimum_size_shows_thirteen_body_rows() {
        let content = FakeContent::numbered(40);
        let frame = compose(view(80, 20), &content);
        assert_eq!(frame.metrics.content_height, 13);
        assert_eq!(frame.max_scroll, 27);

        let rows = frame_text(&frame);
        let body = &rows[3..16];
        assert_eq!(body.len(), 13);
        for (i, row) in body.iter().enumerate() {
            assert!(row.contains(&format!("line {i:02}")), "row {i}: {row}");
        }
        assert!(rows[16].contains("╭────┬────╮"));
    }

    #[test]
    fn test_scroll_selects_later_lines_and_clamps() {
        let content = FakeContent::numbered(20);
        let mut v = view(80, 20);
        v.scroll = 5;
        let frame = compose(v, &content);
        assert_eq!(frame.scroll, 5);
        assert!(frame_text(&frame)[3].contains("line 05"));

        v.scroll = 500;
        let frame = compose(v, &content);
        assert_eq!(frame.max_scroll, 7);
        assert_eq!(frame.scroll, 7);
        assert!(frame_text(&frame)[15].contains("line 19"));
    }

    #[test]
    fn test_short_content_cannot_scroll() {
        let frame = compose(view(100, 40), &FakeContent::numbered(3));
        assert_eq!(frame.max_scroll, 0);
    }

    #[test]
    fn test_header_junctions_align_with_divider() {
        let frame = compose(view(100, 30), &PortfolioContent);
        let rows = frame_text(&frame);
        let cols = |row: &str, glyph: char| -> Vec<usize> {
            row.chars()
                .enumerate()
                .filter(|(_, c)| *c == glyph)
                .map(|(i, _)| i)
                .collect()
        };

        let divider = cols(&rows[3], '│')[1];
        assert_eq!(cols(&rows[1], '┬'), vec![divider]);
        assert!(cols(&rows[2], '│').contains(&divider));
        assert_eq!(cols(&rows[rows.len() - 3], '┴'), vec![divider]);

        // Site box corners sit above and below the ┤ that opens the label.
        let open = cols(&rows[1], '┤')[0];
        assert_eq!(cols(&rows[0], '╭')[0], open);
        assert_eq!(cols(&rows[2], '╰')[0], open);

        // Tab box closes where the ├ before the right corner is.
        let close = *cols(&rows[1], '├').last().unwrap();
        assert_eq!(*cols(&rows[0], '╮').last().unwrap(), close);
        assert_eq!(*cols(&rows[2], '╯').last().unwrap(), close);
    }

    #[test]
    fn test_language_selector_and_footer() {
        let frame = compose(view(80, 20), &PortfolioContent);
        let rows = frame_text(&frame);
        let bottom = &rows[rows.len() - 3];
        assert!(bottom.contains("┤ EN │ FR ├"));

        let hint_row = &rows[rows.len() - 2];
        let hint_col = hint_row.find("q: Quit").unwrap();
        let box_end = hint_row.find("╰────┴────╯").unwrap() + "╰────┴────╯".len();
        assert!(hint_col >= box_end + 2);
    }

    #[test]
    fn test_wide_footer_shifts_right_of_language_box() {
        let content = FakeContent::numbered(1).with_footer(&"x".repeat(70));
        let frame = compose(view(80, 20), &content);
        let hint_row: Vec<char> = frame_text(&frame)[18].chars().collect();
        // 1 column of centering, then the box ends at 13, then the gutter.
        assert_eq!(hint_row[1 + 15], 'x');
        assert_eq!(hint_row[1 + 14], ' ');
    }

    #[test]
    fn test_overwide_content_is_truncated_not_overflowing() {
        let content = FakeContent::from_lines(vec!["🦀".repeat(200)]);
        let frame = compose(view(80, 20), &content);
        assert!(frame.lines.iter().all(|l| display_width(l) == 80));
    }

    #[test]
    fn test_selected_tab_label_is_highlighted() {
        let mut v = view(120, 30);
        v.tab = Tab::Projects;
        let frame = compose(v, &PortfolioContent);
        let highlighted: Vec<String> = frame.lines[1]
            .spans
            .iter()
            .filter(|s| s.style.fg == Some(theme::PRIMARY) && s.content.trim() == "Projects")
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(highlighted, vec![" Projects "]);
    }

    #[test]
    fn test_french_frame_keeps_geometry() {
        let mut v = view(80, 20);
        v.language = Language::Fr;
        let frame = compose(v, &PortfolioContent);
        assert_eq!(frame.lines.len(), 20);
        assert!(frame.lines.iter().all(|l| display_width(l) == 80));
        assert!(frame_text(&frame).iter().any(|r| r.contains("Quitter")));
    }

    #[test]
    fn test_long_tab_labels_keep_the_tab_box_closed() {
        for width in [80, 86, 93] {
            let mut v = view(width, 20);
            v.language = Language::Fr;
            let frame = compose(v, &PortfolioContent);
            let rows = frame_text(&frame);

            assert!(rows[1].trim_end().ends_with("├─╮"), "{width}: {}", rows[1]);
            assert!(rows[0].trim_end().ends_with('╮'), "{width}: {}", rows[0]);
            assert!(rows[2].trim_end().ends_with("╯ │"), "{width}: {}", rows[2]);
            assert!(rows[1].contains("Expériences"));

            let width_of = |row: &str| row.chars().count();
            assert_eq!(width_of(rows[0].trim_end()) + 2, width_of(rows[1].trim_end()));
            assert_eq!(width_of(rows[2].trim_end()), width_of(rows[1].trim_end()));
        }
    }
}
