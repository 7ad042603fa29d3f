//! Combobox theme.
//!
//! A dark palette with a green accent. All colors are constants so widgets can
//! build styles without a theme lookup.

use ratatui::style::{Color, Modifier, Style};

// ============================================================
// ACCENT
// ============================================================

/// Primary accent - focus rings, highlighted rows, arrows
pub const ACCENT: Color = Color::Rgb(0, 255, 163); // #00FFA3

/// Darker accent for checked boxes on a plain row
pub const ACCENT_DIM: Color = Color::Rgb(0, 200, 130); // #00C882

// ============================================================
// SURFACES
// ============================================================

/// Deepest background, used as text color on accent backgrounds
pub const VOID: Color = Color::Rgb(10, 22, 40); // #0A1628

/// Popup background
pub const SURFACE_0: Color = Color::Rgb(13, 27, 42); // #0D1B2A

/// Input row background
pub const SURFACE_1: Color = Color::Rgb(27, 40, 56); // #1B2838

/// Hover / status line background
pub const SURFACE_2: Color = Color::Rgb(36, 59, 83); // #243B53

// ============================================================
// TEXT
// ============================================================

/// Primary text
pub const TEXT: Color = Color::Rgb(255, 255, 255); // #FFFFFF

/// Secondary text (labels, hints)
pub const TEXT_DIM: Color = Color::Rgb(130, 154, 177); // #829AB1

/// Placeholder and disabled text
pub const TEXT_MUTED: Color = Color::Rgb(72, 101, 129); // #486581

// ============================================================
// SEMANTIC
// ============================================================

/// Failure messages (e.g. the option list could not be loaded)
pub const ERROR: Color = Color::Rgb(255, 107, 107); // #FF6B6B

/// Neutral status messages
pub const INFO: Color = Color::Rgb(72, 202, 228); // #48CAE4

// ============================================================
// BORDERS
// ============================================================

/// Popup border when the owning widget is not focused
pub const BORDER: Color = Color::Rgb(27, 73, 101); // #1B4965

/// Popup border when the owning widget is focused
pub const BORDER_FOCUS: Color = ACCENT;

// ============================================================
// STYLE HELPERS
// ============================================================

/// Style for a field label above an input.
pub fn label() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::BOLD)
}

/// Style for an error line.
pub fn error() -> Style {
    Style::default().fg(ERROR)
}
