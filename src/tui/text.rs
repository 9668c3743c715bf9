//! Styled text helpers: the styling function, display widths, word wrapping
//! and exact-width fitting for `ratatui` lines.
//!
//! Every width in here is a display width (terminal columns), measured with
//! `unicode-width`. Byte and char counts never decide padding.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use textwrap::WordSeparator;
use textwrap::core::{Word, break_words};
use textwrap::wrap_algorithms::wrap_first_fit;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Render `text` with `style`. The span's display width is [`span_width`].
pub fn styled(text: impl Into<String>, style: Style) -> Span<'static> {
    Span::styled(text.into(), style)
}

pub fn span_width(span: &Span<'_>) -> usize {
    span.content.width()
}

pub fn display_width(line: &Line<'_>) -> usize {
    line.spans.iter().map(span_width).sum()
}

/// `count` copies of `glyph`.
pub fn repeat(glyph: &str, count: usize) -> String {
    glyph.repeat(count)
}

pub fn spaces(count: usize) -> Span<'static> {
    Span::raw(" ".repeat(count))
}

/// Concatenate the plain text of a line.
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

/// Word-wrap a styled line to `width` columns.
///
/// Words are split on ASCII spaces and broken when longer than `width`.
/// Styles follow their characters onto the wrapped lines. A line that already
/// fits is returned unchanged; an empty line stays a single empty line.
pub fn wrap_line(line: &Line<'_>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || display_width(line) <= width {
        return vec![to_owned(line)];
    }

    let text = plain_text(line);
    let words: Vec<Word<'_>> = break_words(WordSeparator::AsciiSpace.find_words(&text), width);
    if words.is_empty() {
        return vec![Line::default().style(line.style)];
    }

    // Words tile the source text, so their byte offsets are a running sum.
    let mut offsets = Vec::with_capacity(words.len());
    let mut cursor = 0;
    for word in &words {
        offsets.push(cursor);
        cursor += word.word.len() + word.whitespace.len();
    }

    let mut lines = Vec::new();
    let mut first = 0;
    for chunk in wrap_first_fit(&words, &[width as f64]) {
        let last = first + chunk.len() - 1;
        let start = offsets[first];
        let end = offsets[last] + words[last].word.len();
        lines.push(Line::from(slice_spans(&line.spans, start, end)).style(line.style));
        first = last + 1;
    }
    lines
}

/// Copy the parts of `spans` that fall in the byte range `[start, end)` of
/// their concatenated text.
fn slice_spans(spans: &[Span<'_>], start: usize, end: usize) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut offset = 0;
    for span in spans {
        let len = span.content.len();
        let from = start.max(offset);
        let to = end.min(offset + len);
        if from < to {
            out.push(Span::styled(
                span.content[from - offset..to - offset].to_string(),
                span.style,
            ));
        }
        offset += len;
    }
    out
}

fn to_owned(line: &Line<'_>) -> Line<'static> {
    let spans: Vec<Span<'static>> = line
        .spans
        .iter()
        .map(|s| Span::styled(s.content.to_string(), s.style))
        .collect();
    Line::from(spans).style(line.style)
}

/// Fit a line to exactly `width` columns: truncate by display width, then
/// right-pad with spaces. A wide glyph that would straddle the edge is
/// dropped and replaced by padding.
pub fn fit_to_width(line: Line<'static>, width: usize) -> Line<'static> {
    let current = display_width(&line);
    if current == width {
        return line;
    }
    if current < width {
        let mut line = line;
        line.spans.push(spaces(width - current));
        return line;
    }

    let style = line.style;
    let mut used = 0;
    let mut spans = Vec::new();
    'outer: for span in line.spans {
        if used + span_width(&span) <= width {
            used += span_width(&span);
            spans.push(span);
            continue;
        }
        let mut kept = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width {
                if !kept.is_empty() {
                    spans.push(Span::styled(kept, span.style));
                }
                break 'outer;
            }
            used += w;
            kept.push(ch);
        }
        spans.push(Span::styled(kept, span.style));
    }
    if used < width {
        spans.push(spaces(width - used));
    }
    Line::from(spans).style(style)
}

/// Prefix every line with `indent` spaces.
pub fn indent(lines: Vec<Line<'static>>, indent: usize) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .map(|mut line| {
            if indent > 0 {
                line.spans.insert(0, spaces(indent));
            }
            line
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::{Color, Style};

    #[test]
    fn test_display_width_counts_columns() {
        let line = Line::from(vec![Span::raw("ab"), Span::raw("日本"), Span::raw("é")]);
        assert_eq!(display_width(&line), 7);
        assert_eq!(plain_text(&line), "ab日本é");
    }

    #[test]
    fn test_wrap_keeps_short_lines() {
        let line = Line::from("fits fine");
        let wrapped = wrap_line(&line, 20);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(plain_text(&wrapped[0]), "fits fine");
    }

    #[test]
    fn test_wrap_splits_on_words_and_keeps_styles() {
        let red = Style::default().fg(Color::Red);
        let line = Line::from(vec![
            Span::styled("Stack:", red),
            Span::raw(" Python, Django, PostgreSQL"),
        ]);
        let wrapped = wrap_line(&line, 16);
        let texts: Vec<String> = wrapped.iter().map(plain_text).collect();
        assert_eq!(texts, vec!["Stack: Python,", "Django,", "PostgreSQL"]);
        assert_eq!(wrapped[0].spans[0].content, "Stack:");
        assert_eq!(wrapped[0].spans[0].style, red);
        assert!(wrapped.iter().all(|l| display_width(l) <= 16));
    }

    #[test]
    fn test_wrap_breaks_long_words() {
        let wrapped = wrap_line(&Line::from("abcdefghij"), 4);
        let texts: Vec<String> = wrapped.iter().map(plain_text).collect();
        assert_eq!(texts, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_line_stays_single() {
        let wrapped = wrap_line(&Line::default(), 10);
        assert_eq!(wrapped.len(), 1);
        assert_eq!(display_width(&wrapped[0]), 0);
    }

    #[test]
    fn test_fit_pads_short_lines() {
        let fitted = fit_to_width(Line::from("abc"), 6);
        assert_eq!(plain_text(&fitted), "abc   ");
    }

    #[test]
    fn test_fit_truncates_by_display_width() {
        let fitted = fit_to_width(Line::from(vec![Span::raw("ab"), Span::raw("日本語")]), 5);
        assert_eq!(plain_text(&fitted), "ab日 ");
        assert_eq!(display_width(&fitted), 5);
    }

    #[test]
    fn test_fit_to_zero_width() {
        let fitted = fit_to_width(Line::from("abc"), 0);
        assert_eq!(display_width(&fitted), 0);
    }

    #[test]
    fn test_indent_prefixes_spaces() {
        let lines = indent(vec![Line::from("x"), Line::default()], 1);
        assert_eq!(plain_text(&lines[0]), " x");
        assert_eq!(plain_text(&lines[1]), " ");
    }
}
