//! Drawing and the [`Component`] implementation.
//!
//! Layout, top to bottom: one input row, then (while open) a bordered popup
//! with one row per visible filtered option.

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Clear, Widget};

use super::controller::Combobox;
use crate::component::{Component, ComponentResult, FocusState};
use crate::input::is_editing_key;
use crate::scroll::render_scrollbar;

/// Columns reserved at the right of the input row for the arrow glyph.
pub const ARROW_WIDTH: u16 = 3;

const MIN_WIDTH: u16 = 12;
const ARROW_OPEN: &str = "▴";
const ARROW_CLOSED: &str = "▾";
const CHECKED: &str = "[x]";
const UNCHECKED: &str = "[ ]";

impl Combobox {
    /// Rows the popup shows, never fewer than one so the empty state fits.
    fn popup_rows(&self) -> usize {
        self.filtered_options().len().min(self.max_visible).max(1)
    }

    /// Forget the last rendered layout, for a host that skips drawing this
    /// widget. Hit-testing then matches nothing.
    pub fn clear_layout(&self) {
        self.input_area.set(Rect::default());
        self.rows_area.set(Rect::default());
        self.bounds.set(Rect::default());
        self.drawn_window.set(None);
    }

    fn draw(&self, area: Rect, buf: &mut Buffer) {
        self.clear_layout();
        if area.height == 0 || area.width < MIN_WIDTH {
            return;
        }

        let input = Rect::new(area.x, area.y, area.width, 1);
        self.render_input(input, buf);
        self.input_area.set(input);

        let mut bounds = input;
        if self.is_open && area.height > 2 {
            let height = (self.popup_rows() as u16 + 2).min(area.height - 1);
            let popup = Rect::new(area.x, area.y + 1, area.width, height);
            self.render_popup(popup, buf);
            bounds = bounds.union(popup);
        }
        self.bounds.set(bounds);
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let bg = self.colors.surface_alt;
        for x in area.x..area.right() {
            buf[(x, area.y)].set_bg(bg);
        }

        let text_x = area.x + 1;
        let text_width = area.width.saturating_sub(1 + ARROW_WIDTH);

        let (text, style) = if !self.search_text().is_empty() {
            (
                self.search_text().to_string(),
                Style::default().fg(self.colors.text).bg(bg),
            )
        } else if self.store.selected().is_empty() {
            (
                self.display_placeholder(),
                Style::default().fg(self.colors.text_muted).bg(bg),
            )
        } else {
            (
                self.display_placeholder(),
                Style::default().fg(self.colors.text).bg(bg),
            )
        };
        buf.set_stringn(text_x, area.y, &text, text_width as usize, style);

        if self.focus_state() == FocusState::Editing {
            let cursor_x = text_x.saturating_add(self.search.cursor_column() as u16);
            if cursor_x < text_x + text_width {
                buf[(cursor_x, area.y)].set_bg(self.colors.accent);
            }
        }

        let arrow = if self.is_open { ARROW_OPEN } else { ARROW_CLOSED };
        let arrow_fg = if self.focus_state().has_focus() {
            self.colors.accent
        } else {
            self.colors.text_dim
        };
        buf.set_string(
            area.right().saturating_sub(2),
            area.y,
            arrow,
            Style::default().fg(arrow_fg).bg(bg),
        );
    }

    fn render_popup(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let border_fg = if self.focus_state().has_focus() {
            self.colors.border_focus
        } else {
            self.colors.border
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_fg))
            .style(Style::default().bg(self.colors.surface));
        let count = self.store.selected().len();
        if count > 0 {
            block = block.title(format!(" {count} selected "));
        }
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let filtered = self.filtered_options();
        if filtered.is_empty() {
            let message = if self.search_text().trim().is_empty() {
                "No options"
            } else {
                "No matches"
            };
            let x = inner.x + inner.width.saturating_sub(message.len() as u16) / 2;
            buf.set_string(
                x,
                inner.y,
                message,
                Style::default().fg(self.colors.text_muted),
            );
            return;
        }

        // The popup may be clipped below `max_visible` rows.
        let mut view = self.scroll.clone();
        view.set_visible(usize::from(inner.height));

        let rows = if view.needs_scrollbar() {
            let scrollbar = Rect::new(inner.right().saturating_sub(1), inner.y, 1, inner.height);
            render_scrollbar(scrollbar, buf, &view, &self.colors);
            Rect::new(inner.x, inner.y, inner.width.saturating_sub(1), inner.height)
        } else {
            inner
        };
        self.rows_area.set(rows);
        self.drawn_window
            .set(Some((view.offset(), usize::from(inner.height))));

        let highlighted = self.highlighted_index();
        for (row, index) in view.visible_range().enumerate() {
            let y = rows.y + row as u16;
            if y >= rows.bottom() {
                break;
            }
            let Some(option) = filtered.get(index) else {
                continue;
            };
            self.render_option(option, highlighted == Some(index), rows.x, y, rows.width, buf);
        }
    }

    fn render_option(
        &self,
        option: &str,
        is_highlighted: bool,
        x: u16,
        y: u16,
        width: u16,
        buf: &mut Buffer,
    ) {
        let disabled = self.store.is_disabled(option);
        let selected = self.store.is_selected(option);

        let (bg, fg) = if is_highlighted {
            (self.colors.accent, self.colors.on_accent)
        } else if disabled {
            (self.colors.surface, self.colors.text_muted)
        } else {
            (self.colors.surface, self.colors.text)
        };

        for col in x..x.saturating_add(width) {
            buf[(col, y)].set_bg(bg);
        }

        let right = x.saturating_add(width);
        let mut col = x;

        let prefix = if is_highlighted { ">" } else { " " };
        buf.set_string(col, y, prefix, Style::default().fg(fg).bg(bg));
        col += 2;

        let (check, check_fg) = match (selected, is_highlighted) {
            (true, false) => (CHECKED, self.colors.checked),
            (true, true) => (CHECKED, fg),
            (false, false) => (UNCHECKED, self.colors.text_dim),
            (false, true) => (UNCHECKED, fg),
        };
        if col + 4 > right {
            return;
        }
        buf.set_string(col, y, check, Style::default().fg(check_fg).bg(bg));
        col += 4;

        let mut name_style = Style::default().fg(fg).bg(bg);
        if disabled {
            name_style = name_style.add_modifier(Modifier::DIM);
        }
        buf.set_stringn(col, y, option, right.saturating_sub(col) as usize, name_style);
    }
}

impl Component for Combobox {
    type Output = Vec<String>;

    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.draw(area, buf);
    }

    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Vec<String>> {
        if is_editing_key(&key) {
            return self.edit_search(key);
        }
        self.navigate(key)
    }

    fn handle_click(&mut self, position: Position) -> ComponentResult<Vec<String>> {
        let input = self.input_area.get();
        if input.contains(position) {
            if position.x >= input.right().saturating_sub(ARROW_WIDTH) {
                self.toggle_dropdown();
            } else {
                self.open_dropdown();
            }
            return ComponentResult::Handled;
        }

        if let Some(index) = self.row_at(position) {
            let Some(option) = self.filtered_options().get(index).map(|s| s.to_string()) else {
                return ComponentResult::Handled;
            };
            return match self.select_option(&option) {
                Some(selection) => ComponentResult::Done(selection),
                None => ComponentResult::Handled,
            };
        }

        if self.bounds.get().contains(position) {
            ComponentResult::Handled
        } else {
            ComponentResult::NotHandled
        }
    }

    fn focus_state(&self) -> FocusState {
        match (self.focused, self.is_open && self.searchable) {
            (false, _) => FocusState::Unfocused,
            (true, true) => FocusState::Editing,
            (true, false) => FocusState::Focused,
        }
    }

    /// Losing focus closes the popup.
    fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
        if !focused {
            self.close_dropdown();
        }
    }

    fn key_hints(&self) -> Vec<(&'static str, &'static str)> {
        if self.is_open {
            vec![("↑↓", "Navigate"), ("Enter", "Toggle"), ("Esc", "Close")]
        } else if self.searchable {
            vec![("Type", "Search")]
        } else {
            vec![("Type", "Open")]
        }
    }

    fn handle_paste(&mut self, text: &str) -> bool {
        self.paste_search(text)
    }

    fn desired_height(&self) -> u16 {
        if self.is_open {
            1 + self.popup_rows() as u16 + 2
        } else {
            1
        }
    }
}

impl Widget for &Combobox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.draw(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    fn countries() -> Combobox {
        Combobox::new(["France", "Germany", "Ghana"])
            .with_disabled(["Ghana"])
            .with_placeholder("Countries")
    }

    fn draw(combobox: &Combobox) -> Buffer {
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        Component::render(combobox, area, &mut buf);
        buf
    }

    #[test]
    fn test_closed_shows_placeholder_and_arrow() {
        let combobox = countries();
        let buf = draw(&combobox);
        let input = row_text(&buf, 0);
        assert!(input.starts_with(" Countries"));
        assert_eq!(buf[(28, 0)].symbol(), ARROW_CLOSED);
        assert_eq!(combobox.bounds(), Rect::new(0, 0, 30, 1));
        assert_eq!(row_text(&buf, 1).trim(), "");
    }

    #[test]
    fn test_open_popup_lists_rows() {
        let mut combobox = countries();
        combobox.open_dropdown();
        combobox.select_option("Germany");
        combobox.arrow_down();
        let buf = draw(&combobox);

        assert_eq!(buf[(28, 0)].symbol(), ARROW_OPEN);
        assert!(row_text(&buf, 0).contains("Germany"));
        assert!(row_text(&buf, 1).starts_with("╭"));
        assert!(row_text(&buf, 1).contains("1 selected"));
        assert!(row_text(&buf, 2).contains("> [ ] France"));
        assert!(row_text(&buf, 3).contains("  [x] Germany"));
        assert!(row_text(&buf, 4).contains("[ ] Ghana"));
        assert!(buf[(8, 4)].modifier.contains(Modifier::DIM));
        assert!(row_text(&buf, 5).starts_with("╰"));
        assert_eq!(combobox.bounds(), Rect::new(0, 0, 30, 6));
        assert_eq!(combobox.desired_height(), 6);
    }

    #[test]
    fn test_empty_states() {
        let mut combobox = countries();
        combobox.on_input_change("zz");
        let buf = draw(&combobox);
        assert!(row_text(&buf, 2).contains("No matches"));

        let mut empty = Combobox::new(Vec::<String>::new());
        empty.open_dropdown();
        let buf = draw(&empty);
        assert!(row_text(&buf, 2).contains("No options"));
        assert_eq!(empty.desired_height(), 4);
    }

    #[test]
    fn test_typed_text_replaces_label() {
        let mut combobox = countries();
        combobox.on_input_change("ger");
        let buf = draw(&combobox);
        assert!(row_text(&buf, 0).starts_with(" ger "));
        assert!(row_text(&buf, 2).contains("Germany"));
        assert!(!row_text(&buf, 3).contains("France"));
    }

    #[test]
    fn test_click_row_toggles_option() {
        let mut combobox = countries();
        combobox.open_dropdown();
        draw(&combobox);

        assert_eq!(
            combobox.handle_click(Position::new(10, 3)),
            ComponentResult::Done(vec!["Germany".to_string()])
        );
        assert_eq!(combobox.handle_click(Position::new(10, 4)), ComponentResult::Handled);
        assert_eq!(combobox.selected(), ["Germany"]);
        assert_eq!(combobox.highlighted_index(), None);
        assert!(combobox.is_open());
    }

    #[test]
    fn test_click_border_does_nothing() {
        let mut combobox = countries();
        combobox.open_dropdown();
        draw(&combobox);
        assert_eq!(combobox.handle_click(Position::new(0, 3)), ComponentResult::Handled);
        assert!(combobox.selected().is_empty());
        assert_eq!(combobox.handle_click(Position::new(10, 7)), ComponentResult::NotHandled);
    }

    #[test]
    fn test_click_input_opens_and_arrow_toggles() {
        let mut combobox = countries();
        draw(&combobox);
        combobox.handle_click(Position::new(4, 0));
        assert!(combobox.is_open());

        draw(&combobox);
        combobox.handle_click(Position::new(28, 0));
        assert!(!combobox.is_open());
        combobox.handle_click(Position::new(28, 0));
        assert!(combobox.is_open());
    }

    #[test]
    fn test_scrolled_rows_follow_offset() {
        let mut combobox =
            Combobox::new((0..20).map(|i| format!("Option {i:02}"))).with_max_visible(4);
        combobox.open_dropdown();
        for _ in 0..6 {
            combobox.arrow_down();
        }
        combobox.settle();
        let buf = draw(&combobox);
        assert!(row_text(&buf, 2).contains("Option 02"));
        assert!(row_text(&buf, 5).contains("> [ ] Option 05"));

        assert_eq!(
            combobox.handle_click(Position::new(10, 2)),
            ComponentResult::Done(vec!["Option 02".to_string()])
        );
    }

    #[test]
    fn test_clipped_popup_scrolls_highlight_into_view() {
        let mut combobox = Combobox::new((0..20).map(|i| format!("Option {i:02}")));
        combobox.open_dropdown();
        for _ in 0..3 {
            combobox.arrow_down();
        }

        let area = Rect::new(0, 0, 30, 5);
        let mut buf = Buffer::empty(area);
        Component::render(&combobox, area, &mut buf);
        assert!(row_text(&buf, 2).contains("Option 00"));
        assert!(row_text(&buf, 3).contains("Option 01"));
        assert!(row_text(&buf, 4).starts_with("╰"));

        assert!(combobox.settle());
        assert_eq!(combobox.scroll().offset(), 1);

        let mut buf = Buffer::empty(area);
        Component::render(&combobox, area, &mut buf);
        assert!(row_text(&buf, 3).contains("> [ ] Option 02"));
        assert_eq!(
            combobox.handle_click(Position::new(10, 2)),
            ComponentResult::Done(vec!["Option 01".to_string()])
        );
    }

    #[test]
    fn test_clear_layout_forgets_hit_areas() {
        let mut combobox = countries();
        combobox.open_dropdown();
        draw(&combobox);
        assert_ne!(combobox.bounds(), Rect::default());

        combobox.clear_layout();
        assert_eq!(combobox.bounds(), Rect::default());
        assert_eq!(combobox.handle_click(Position::new(10, 3)), ComponentResult::NotHandled);
        assert!(combobox.selected().is_empty());
    }

    #[test]
    fn test_handle_key_routes_editing_and_navigation() {
        let mut combobox = countries();
        combobox.set_focus(true);
        let key = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(combobox.handle_key(key(KeyCode::Char('g'))), ComponentResult::Handled);
        assert!(combobox.is_open());
        assert_eq!(combobox.focus_state(), FocusState::Editing);
        combobox.handle_key(key(KeyCode::Down));
        assert_eq!(
            combobox.handle_key(key(KeyCode::Enter)),
            ComponentResult::Done(vec!["Germany".to_string()])
        );
        assert_eq!(combobox.handle_key(key(KeyCode::Esc)), ComponentResult::Cancelled);
        assert_eq!(combobox.focus_state(), FocusState::Focused);
    }

    #[test]
    fn test_unsearchable_typing_only_opens() {
        let mut combobox = countries().searchable(false);
        let typed = combobox.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(typed, ComponentResult::Handled);
        assert!(combobox.is_open());
        assert_eq!(combobox.search_text(), "");
        assert!(!combobox.handle_paste("France"));
    }

    #[test]
    fn test_losing_focus_closes() {
        let mut combobox = countries();
        combobox.set_focus(true);
        combobox.open_dropdown();
        combobox.set_focus(false);
        assert!(!combobox.is_open());
        assert_eq!(combobox.focus_state(), FocusState::Unfocused);
    }
}
