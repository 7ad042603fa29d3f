//! The `Component` trait shared by interactive widgets.
//!
//! A component owns its state, draws itself into a buffer and interprets the
//! key and pointer events routed to it by the host.

use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};

/// What a component did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentResult<T = ()> {
    /// The event changed component state.
    Handled,
    /// The event is not for this component; the host may use it.
    NotHandled,
    /// The component produced a value for the host.
    Done(T),
    /// The component was dismissed (e.g. Escape).
    Cancelled,
}

impl<T> ComponentResult<T> {
    /// Returns true if the component consumed the event.
    pub fn is_handled(&self) -> bool {
        !matches!(self, ComponentResult::NotHandled)
    }
}

/// Focus state of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    /// Not focused
    #[default]
    Unfocused,
    /// Focused but not taking text input
    Focused,
    /// Focused and taking text input
    Editing,
}

impl FocusState {
    /// Returns true for either focused state.
    pub fn has_focus(&self) -> bool {
        !matches!(self, FocusState::Unfocused)
    }
}

/// Interface every interactive widget implements.
///
/// ```rust,ignore
/// impl Component for Toggle {
///     type Output = bool;
///
///     fn render(&self, area: Rect, buf: &mut Buffer) { /* ... */ }
///
///     fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<bool> {
///         match key.code {
///             KeyCode::Char(' ') => {
///                 self.on = !self.on;
///                 ComponentResult::Done(self.on)
///             }
///             _ => ComponentResult::NotHandled,
///         }
///     }
///
///     fn focus_state(&self) -> FocusState { self.focus }
///     fn set_focus(&mut self, focused: bool) { /* ... */ }
///     fn key_hints(&self) -> Vec<(&'static str, &'static str)> { vec![("Space", "Toggle")] }
/// }
/// ```
pub trait Component {
    /// Value emitted through [`ComponentResult::Done`].
    type Output;

    /// Draw into `buf` within `area`.
    fn render(&self, area: Rect, buf: &mut Buffer);

    /// Handle a key routed to this component because it has focus.
    fn handle_key(&mut self, key: KeyEvent) -> ComponentResult<Self::Output>;

    /// Handle a pointer press that landed on this component.
    ///
    /// Default implementation ignores pointers.
    fn handle_click(&mut self, _position: Position) -> ComponentResult<Self::Output> {
        ComponentResult::NotHandled
    }

    /// Current focus state.
    fn focus_state(&self) -> FocusState;

    /// Gain or lose focus.
    fn set_focus(&mut self, focused: bool);

    /// `(key, description)` pairs for the hints bar.
    fn key_hints(&self) -> Vec<(&'static str, &'static str)>;

    /// Handle pasted text. Returns true if handled.
    fn handle_paste(&mut self, _text: &str) -> bool {
        false
    }

    /// Rows this component wants in its current state.
    fn desired_height(&self) -> u16 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_not_handled_passes_through() {
        assert!(ComponentResult::<()>::Handled.is_handled());
        assert!(ComponentResult::Done(1).is_handled());
        assert!(ComponentResult::<()>::Cancelled.is_handled());
        assert!(!ComponentResult::<()>::NotHandled.is_handled());
    }

    #[test]
    fn test_focus_state() {
        assert!(!FocusState::Unfocused.has_focus());
        assert!(FocusState::Focused.has_focus());
        assert!(FocusState::Editing.has_focus());
    }
}
