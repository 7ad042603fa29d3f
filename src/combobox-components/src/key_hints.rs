//! Key hints bar.
//!
//! One line of `key description` pairs, dropping hints that do not fit.

use crate::color_scheme::ColorScheme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

/// A single key hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    /// Key label, e.g. `"Enter"`
    pub key: String,
    /// What the key does
    pub description: String,
}

impl KeyHint {
    /// Create a key hint.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }

    fn width(&self) -> usize {
        self.key.width() + 1 + self.description.width()
    }
}

impl From<(&str, &str)> for KeyHint {
    fn from((key, description): (&str, &str)) -> Self {
        Self::new(key, description)
    }
}

/// Horizontal bar of key hints: `↑↓ Navigate · Enter Toggle · Esc Close`.
#[derive(Debug, Clone, Default)]
pub struct KeyHintsBar {
    hints: Vec<KeyHint>,
    colors: ColorScheme,
}

impl KeyHintsBar {
    /// Build from `(key, description)` pairs, as returned by
    /// [`Component::key_hints`](crate::component::Component::key_hints).
    pub fn from_tuples(hints: &[(&str, &str)]) -> Self {
        Self {
            hints: hints.iter().map(|&h| h.into()).collect(),
            colors: ColorScheme::default(),
        }
    }

    /// Append a hint.
    pub fn hint(mut self, key: impl Into<String>, description: impl Into<String>) -> Self {
        self.hints.push(KeyHint::new(key, description));
        self
    }

    /// Use a custom color scheme.
    pub fn colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    fn hints_that_fit(&self, max_width: usize) -> Vec<&KeyHint> {
        let mut fitted = Vec::new();
        let mut used = 0;
        for hint in &self.hints {
            let needed = if fitted.is_empty() {
                hint.width()
            } else {
                SEPARATOR.width() + hint.width()
            };
            if used + needed > max_width {
                break;
            }
            used += needed;
            fitted.push(hint);
        }
        fitted
    }
}

const SEPARATOR: &str = " · ";

impl Widget for KeyHintsBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width < 2 {
            return;
        }

        let bg = self.colors.surface_alt;
        buf.set_style(Rect::new(area.x, area.y, area.width, 1), Style::default().bg(bg));

        let key_style = Style::default()
            .fg(self.colors.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(self.colors.text_dim).bg(bg);

        let max_x = area.right();
        let mut x = area.x + 1;
        for (i, hint) in self.hints_that_fit(area.width as usize - 1).into_iter().enumerate() {
            if i > 0 {
                x = buf.set_stringn(x, area.y, SEPARATOR, (max_x - x) as usize, desc_style).0;
            }
            x = buf.set_stringn(x, area.y, &hint.key, (max_x - x) as usize, key_style).0;
            x = buf.set_stringn(x, area.y, " ", (max_x - x) as usize, desc_style).0;
            x = buf.set_stringn(x, area.y, &hint.description, (max_x - x) as usize, desc_style).0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_renders_hints_in_order() {
        let bar = KeyHintsBar::from_tuples(&[("Enter", "Toggle"), ("Esc", "Close")]);
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        assert!(line(&buf, 0).starts_with(" Enter Toggle · Esc Close"));
    }

    #[test]
    fn test_drops_hints_that_do_not_fit() {
        let bar = KeyHintsBar::default()
            .hint("Tab", "Next field")
            .hint("Esc", "Close");
        let fitted = bar.hints_that_fit(16);
        assert_eq!(fitted.len(), 1);
        assert_eq!(fitted[0].key, "Tab");
    }
}
