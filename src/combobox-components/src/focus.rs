//! Focus cycling across several widgets.

/// Direction of focus movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    /// Tab
    Forward,
    /// Shift+Tab
    Backward,
}

/// A focus move from one index to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    /// Index that lost focus
    pub from: usize,
    /// Index that gained focus
    pub to: usize,
}

/// Tracks which of `count` widgets has focus. Movement wraps around.
///
/// ```rust,ignore
/// let mut focus = FocusManager::new(3);
/// focus.move_focus(FocusDirection::Backward);
/// assert_eq!(focus.current(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FocusManager {
    current: usize,
    count: usize,
}

impl FocusManager {
    /// Focus the first of `count` widgets.
    pub fn new(count: usize) -> Self {
        Self { current: 0, count }
    }

    /// Index of the focused widget.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of focusable widgets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether `index` has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.count > 0 && self.current == index
    }

    /// Focus `index` directly. Returns the change, or `None` if `index` is
    /// out of range or already focused.
    pub fn set(&mut self, index: usize) -> Option<FocusChange> {
        if index >= self.count || index == self.current {
            return None;
        }
        let change = FocusChange {
            from: self.current,
            to: index,
        };
        self.current = index;
        Some(change)
    }

    /// Move focus one step, wrapping at either end.
    pub fn move_focus(&mut self, direction: FocusDirection) -> Option<FocusChange> {
        if self.count < 2 {
            return None;
        }
        let to = match direction {
            FocusDirection::Forward => (self.current + 1) % self.count,
            FocusDirection::Backward if self.current == 0 => self.count - 1,
            FocusDirection::Backward => self.current - 1,
        };
        self.set(to)
    }
}
