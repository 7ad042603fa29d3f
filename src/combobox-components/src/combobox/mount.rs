//! Attaching a combobox to a document event hub.

use std::cell::{Ref, RefCell, RefMut};
use std::rc::{Rc, Weak};

use combobox_core::{DocumentEvents, DocumentListener, Subscription};

use super::controller::Combobox;

/// A combobox registered with a [`DocumentEvents`] hub.
///
/// The hub sees the widget through a weak reference. Dropping the mount
/// closes the dropdown and unsubscribes.
#[derive(Debug)]
pub struct MountedCombobox {
    widget: Rc<RefCell<Combobox>>,
    subscription: Subscription,
}

impl Combobox {
    /// Share the widget with `events` so it sees document-level pointer and
    /// key events.
    pub fn mount(self, events: &DocumentEvents) -> MountedCombobox {
        let widget = Rc::new(RefCell::new(self));
        let weak = Rc::downgrade(&widget);
        let listener: Weak<RefCell<dyn DocumentListener>> = weak;
        let subscription = events.subscribe(listener);
        tracing::debug!(key = ?subscription.key(), "combobox mounted");
        MountedCombobox {
            widget,
            subscription,
        }
    }
}

impl MountedCombobox {
    /// Borrow the widget.
    pub fn borrow(&self) -> Ref<'_, Combobox> {
        self.widget.borrow()
    }

    /// Borrow the widget mutably.
    pub fn borrow_mut(&self) -> RefMut<'_, Combobox> {
        self.widget.borrow_mut()
    }

    /// Shared handle to the widget.
    pub fn widget(&self) -> &Rc<RefCell<Combobox>> {
        &self.widget
    }

    /// The hub registration.
    pub fn subscription(&self) -> &Subscription {
        &self.subscription
    }
}

impl Drop for MountedCombobox {
    fn drop(&mut self) {
        match self.widget.try_borrow_mut() {
            Ok(mut widget) => widget.unmount(),
            Err(_) => tracing::warn!("combobox dropped while borrowed; skipping unmount"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combobox_core::DocumentEvent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::layout::{Position, Rect};

    fn key(code: KeyCode) -> DocumentEvent {
        DocumentEvent::KeyDown(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_hub_routes_keys_only_while_open() {
        let hub = DocumentEvents::new();
        let mounted = Combobox::new(["France", "Germany"]).mount(&hub);

        assert!(!hub.dispatch(key(KeyCode::Down)));
        assert_eq!(mounted.borrow().highlighted_index(), None);

        mounted.borrow_mut().open_dropdown();
        assert!(hub.dispatch(key(KeyCode::Down)));
        assert!(hub.dispatch(key(KeyCode::Enter)));
        assert_eq!(mounted.borrow().selected(), ["France"]);

        assert!(hub.dispatch(key(KeyCode::Esc)));
        assert!(!mounted.borrow().is_open());
    }

    #[test]
    fn test_hub_pointer_outside_closes_each_open_instance() {
        let hub = DocumentEvents::new();
        let first = Combobox::new(["A"]).mount(&hub);
        let second = Combobox::new(["B"]).mount(&hub);
        first.borrow().bounds.set(Rect::new(0, 0, 20, 5));
        second.borrow().bounds.set(Rect::new(0, 10, 20, 5));
        first.borrow_mut().open_dropdown();
        second.borrow_mut().open_dropdown();

        hub.dispatch(DocumentEvent::PointerDown(Position::new(3, 2)));

        assert!(first.borrow().is_open());
        assert!(!second.borrow().is_open());
    }

    #[test]
    fn test_drop_unsubscribes_and_closes() {
        let hub = DocumentEvents::new();
        let mounted = Combobox::new(["A"]).mount(&hub);
        mounted.borrow_mut().open_dropdown();
        let widget = Rc::clone(mounted.widget());
        assert_eq!(hub.len(), 1);

        drop(mounted);

        assert!(hub.is_empty());
        assert!(!widget.borrow().is_open());
    }
}
