//! Frame geometry for the portfolio screen.
//!
//! Small pure functions so the edge cases (undersized terminal, empty
//! content, decorations overlapping) can be checked one at a time. All
//! subtraction saturates: a padding that would go negative is zero.
//!
//! ```text
//!   ╭┤ site ├────┬──────┤ tabs ├╮      header (3 lines)
//!   │ left       │ right        │      content_height rows
//!   ╰┤EN│FR├─────┴──────────────╯      footer (3 lines) + margin
//!    <- left ->   <-  right  ->
//! ```

/// Smallest terminal the layout is computed for; smaller sizes are clamped up.
pub const MIN_WIDTH: usize = 80;
pub const MIN_HEIGHT: usize = 20;

/// Columns around the frame that are not panel content.
pub const FRAME_MARGIN: usize = 4;
pub const LEFT_PANEL_PERCENT: usize = 30;
/// Header (3) + footer (3) + bottom margin (1).
pub const CHROME_ROWS: usize = 7;
/// Number of `│` glyphs on a body row.
pub const VERTICAL_BORDERS: usize = 3;

/// Dashes before the site box on the top border.
pub const SITE_LEFT_PAD: usize = 1;
/// Dashes after the tab box on the top border.
pub const NAV_RIGHT_PAD: usize = 1;
/// Dashes before the language box on the bottom border.
pub const LANG_LEFT_PAD: usize = 1;
/// `╭────┬────╮`
pub const LANG_BOX_WIDTH: usize = 11;
/// Minimum gap between the language box and the footer hint.
pub const FOOTER_GUTTER: usize = 2;

/// Clamp terminal dimensions up to the minimum frame size.
pub fn clamp_dimensions(width: u16, height: u16) -> (usize, usize) {
    (
        usize::from(width).max(MIN_WIDTH),
        usize::from(height).max(MIN_HEIGHT),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelWidths {
    pub left: usize,
    pub right: usize,
}

impl PanelWidths {
    /// Total frame width including the three vertical borders.
    pub fn frame_width(self) -> usize {
        self.left + self.right + VERTICAL_BORDERS
    }
}

/// Split the usable width 30/70, keeping one column for the divider.
pub fn panel_widths(width: usize) -> PanelWidths {
    let inner = width.saturating_sub(FRAME_MARGIN);
    let left = inner * LEFT_PANEL_PERCENT / 100 + 1;
    let right = inner.saturating_sub(left + 1);
    PanelWidths { left, right }
}

/// Rows available to panel content.
pub fn content_height(height: usize) -> usize {
    height.saturating_sub(CHROME_ROWS)
}

/// Largest scroll offset that still fills the content area.
pub fn max_scroll_offset(line_count: usize, content_height: usize) -> usize {
    line_count.saturating_sub(content_height)
}

/// Dashes to the right of the site box inside the left panel.
pub fn site_right_pad(left_panel: usize, site_width: usize) -> usize {
    // 2 for the ┤ and ├ around the label
    left_panel.saturating_sub(SITE_LEFT_PAD + 2 + site_width)
}

/// Dashes between the panel divider junction and the tab box.
pub fn nav_left_pad(right_panel: usize, nav_width: usize) -> usize {
    right_panel.saturating_sub(nav_width + 2 + NAV_RIGHT_PAD)
}

/// Widest tab strip that leaves room for its box and the right corner.
pub fn nav_max_width(right_panel: usize) -> usize {
    right_panel.saturating_sub(2 + NAV_RIGHT_PAD)
}

/// Space between the language box and the left panel divider.
pub fn lang_right_pad(left_panel: usize) -> usize {
    left_panel.saturating_sub(LANG_BOX_WIDTH + LANG_LEFT_PAD)
}

/// Column just past the language box on the bottom line.
pub fn lang_box_end() -> usize {
    LANG_LEFT_PAD + 1 + LANG_BOX_WIDTH
}

/// Start column of the footer hint: centered in the frame, unless that
/// would collide with the language box.
pub fn footer_start(frame_width: usize, footer_width: usize) -> usize {
    let centered = frame_width.saturating_sub(footer_width) / 2;
    centered.max(lang_box_end() + FOOTER_GUTTER)
}

/// Left and right padding that center `inner` inside `total`.
pub fn center_padding(total: usize, inner: usize) -> (usize, usize) {
    let slack = total.saturating_sub(inner);
    let left = slack / 2;
    (left, slack - left)
}

/// Derived metrics for one portfolio render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub width: usize,
    pub height: usize,
    pub panels: PanelWidths,
    pub content_height: usize,
    pub max_scroll: usize,
}

impl LayoutMetrics {
    /// Measure the layout for a terminal size and a right panel of
    /// `right_line_count` lines.
    pub fn measure(width: u16, height: u16, right_line_count: usize) -> Self {
        let (width, height) = clamp_dimensions(width, height);
        let panels = panel_widths(width);
        let content_height = content_height(height);
        Self {
            width,
            height,
            panels,
            content_height,
            max_scroll: max_scroll_offset(right_line_count, content_height),
        }
    }

    /// Clamp a caller-supplied scroll offset to this layout.
    pub fn clamp_scroll(&self, scroll: usize) -> usize {
        scroll.min(self.max_scroll)
    }
}
