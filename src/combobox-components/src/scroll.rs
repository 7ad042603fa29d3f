//! Viewport over a list of rows.

use crate::color_scheme::ColorScheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget};

/// Which rows of a list are on screen.
///
/// ```rust,ignore
/// let mut scroll = ScrollState::new(100, 20); // 100 rows, 20 on screen
/// scroll.ensure_visible(90);
/// assert!(scroll.visible_range().contains(&90));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollState {
    total: usize,
    visible: usize,
    offset: usize,
}

impl ScrollState {
    /// Create a viewport of `visible` rows over `total` rows, scrolled to the top.
    pub fn new(total: usize, visible: usize) -> Self {
        Self {
            total,
            visible,
            offset: 0,
        }
    }

    /// Index of the first row on screen.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Total number of rows.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Update the row count, keeping the offset in range.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_offset();
    }

    /// Update the viewport height, keeping the offset in range.
    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible;
        self.clamp_offset();
    }

    /// Jump back to the first row.
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    /// Scroll the minimum amount that brings `index` on screen.
    ///
    /// Returns true if the offset changed.
    pub fn ensure_visible(&mut self, index: usize) -> bool {
        if self.visible == 0 {
            return false;
        }
        let before = self.offset;
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.visible {
            self.offset = index + 1 - self.visible;
        }
        self.clamp_offset();
        self.offset != before
    }

    /// Whether the rows overflow the viewport.
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.visible
    }

    /// Range of row indices on screen.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = self.offset.min(self.total);
        let end = (self.offset + self.visible).min(self.total);
        start..end
    }

    fn clamp_offset(&mut self) {
        if self.total <= self.visible {
            self.offset = 0;
        } else {
            self.offset = self.offset.min(self.total - self.visible);
        }
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(0, 8)
    }
}

/// Draw a vertical scrollbar for `scroll` in a one-column `area`.
pub fn render_scrollbar(area: Rect, buf: &mut Buffer, scroll: &ScrollState, colors: &ColorScheme) {
    if !scroll.needs_scrollbar() || area.width == 0 || area.height == 0 {
        return;
    }

    let scrollable_range = scroll.total.saturating_sub(scroll.visible);
    let mut scrollbar_state = ScrollbarState::new(scrollable_range).position(scroll.offset);

    Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .track_symbol(Some("│"))
        .track_style(Style::default().fg(colors.surface_alt))
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(colors.text_muted))
        .render(area, buf, &mut scrollbar_state);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_visible_scrolls_down_minimally() {
        let mut scroll = ScrollState::new(20, 5);
        assert!(scroll.ensure_visible(7));
        assert_eq!(scroll.offset(), 3);
        assert_eq!(scroll.visible_range(), 3..8);
    }

    #[test]
    fn test_ensure_visible_scrolls_up() {
        let mut scroll = ScrollState::new(20, 5);
        scroll.ensure_visible(19);
        assert_eq!(scroll.offset(), 15);
        assert!(scroll.ensure_visible(2));
        assert_eq!(scroll.offset(), 2);
    }

    #[test]
    fn test_ensure_visible_noop_when_on_screen() {
        let mut scroll = ScrollState::new(20, 5);
        assert!(!scroll.ensure_visible(4));
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_zero_height_viewport() {
        let mut scroll = ScrollState::new(20, 0);
        assert!(!scroll.ensure_visible(10));
        assert!(scroll.visible_range().is_empty());
    }

    #[test]
    fn test_shrinking_total_clamps_offset() {
        let mut scroll = ScrollState::new(50, 5);
        scroll.ensure_visible(40);
        scroll.set_total(3);
        assert_eq!(scroll.offset(), 0);
        assert_eq!(scroll.visible_range(), 0..3);
        assert!(!scroll.visible_range().contains(&3));
    }

    #[test]
    fn test_needs_scrollbar() {
        assert!(ScrollState::new(9, 8).needs_scrollbar());
        assert!(!ScrollState::new(8, 8).needs_scrollbar());
    }
}
