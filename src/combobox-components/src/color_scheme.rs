//! Color scheme for the combobox widgets.
//!
//! Defaults come from `combobox_core::style`; a light variant is provided for
//! terminals with a light background.

use combobox_core::style::{
    ACCENT, ACCENT_DIM, BORDER, BORDER_FOCUS, ERROR, SURFACE_0, SURFACE_1, TEXT, TEXT_DIM,
    TEXT_MUTED, VOID,
};
use ratatui::style::Color;

/// Colors used when drawing a combobox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    /// Highlighted row background, arrow glyph, cursor
    pub accent: Color,
    /// Check mark on rows that are not highlighted
    pub checked: Color,
    /// Option and search text
    pub text: Color,
    /// Labels and counters
    pub text_dim: Color,
    /// Placeholder and disabled options
    pub text_muted: Color,
    /// Popup background
    pub surface: Color,
    /// Input row background
    pub surface_alt: Color,
    /// Text drawn on top of `accent`
    pub on_accent: Color,
    /// Popup border, unfocused
    pub border: Color,
    /// Popup border, focused
    pub border_focus: Color,
    /// Error text
    pub error: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Dark palette (default).
    pub fn dark() -> Self {
        Self {
            accent: ACCENT,
            checked: ACCENT_DIM,
            text: TEXT,
            text_dim: TEXT_DIM,
            text_muted: TEXT_MUTED,
            surface: SURFACE_0,
            surface_alt: SURFACE_1,
            on_accent: VOID,
            border: BORDER,
            border_focus: BORDER_FOCUS,
            error: ERROR,
        }
    }

    /// Light palette with darker accents.
    pub fn light() -> Self {
        Self {
            accent: Color::Rgb(0, 150, 100),
            checked: Color::Rgb(0, 120, 80),
            text: Color::Rgb(30, 30, 30),
            text_dim: Color::Rgb(100, 100, 100),
            text_muted: Color::Rgb(150, 150, 150),
            surface: Color::Rgb(245, 245, 245),
            surface_alt: Color::Rgb(232, 232, 232),
            on_accent: Color::Rgb(255, 255, 255),
            border: Color::Rgb(200, 200, 200),
            border_focus: Color::Rgb(0, 150, 100),
            error: Color::Rgb(200, 40, 40),
        }
    }
}
