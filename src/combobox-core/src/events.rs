//! Document-level event hub.
//!
//! Widgets that must react to input anywhere on screen (closing a popup when
//! the user clicks elsewhere, for example) register a [`DocumentListener`]
//! with a [`DocumentEvents`] hub. Registration hands back a [`Subscription`]
//! guard; the listener stays registered exactly as long as the guard lives.
//!
//! The hub only holds weak references, so a listener that is dropped without
//! unsubscribing is skipped and pruned on the next dispatch.
//!
//! # Example
//!
//! ```ignore
//! let hub = DocumentEvents::new();
//! let widget = Rc::new(RefCell::new(MyWidget::default()));
//! let weak = Rc::downgrade(&widget);
//! let listener: Weak<RefCell<dyn DocumentListener>> = weak;
//! let _subscription = hub.subscribe(listener);
//!
//! hub.dispatch(DocumentEvent::PointerDown(Position::new(3, 4)));
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crossterm::event::KeyEvent;
use ratatui::layout::Position;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Identifies one registration in a [`DocumentEvents`] hub.
    pub struct ListenerKey;
}

/// An input event observed at document level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// A pointer button went down at the given cell.
    PointerDown(Position),
    /// A key was pressed.
    KeyDown(KeyEvent),
}

/// Receives document-level events.
///
/// Both methods default to ignoring the event so a listener only implements
/// the capabilities it needs.
pub trait DocumentListener {
    /// A pointer button went down somewhere on screen.
    fn on_pointer_down(&mut self, _position: Position) {}

    /// A key was pressed. Returns true if the listener consumed it.
    fn on_key_down(&mut self, _key: KeyEvent) -> bool {
        false
    }
}

type Registry = RefCell<SlotMap<ListenerKey, Weak<RefCell<dyn DocumentListener>>>>;

/// Synchronous, single-threaded event hub.
#[derive(Default)]
pub struct DocumentEvents {
    listeners: Rc<Registry>,
}

impl DocumentEvents {
    /// Create an empty hub.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives events until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, listener: Weak<RefCell<dyn DocumentListener>>) -> Subscription {
        let key = self.listeners.borrow_mut().insert(listener);
        tracing::trace!(?key, "document listener subscribed");
        Subscription {
            key,
            registry: Rc::downgrade(&self.listeners),
        }
    }

    /// Number of registrations, including ones whose listener has been
    /// dropped but not yet pruned.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver an event to every live listener.
    ///
    /// Returns true if any listener consumed a key event. Pointer events are
    /// never consumed: every listener sees them.
    pub fn dispatch(&self, event: DocumentEvent) -> bool {
        // Snapshot the live listeners so callbacks may subscribe or
        // unsubscribe without tripping over the registry borrow.
        let live: Vec<_> = {
            let mut listeners = self.listeners.borrow_mut();
            listeners.retain(|_, listener| listener.strong_count() > 0);
            listeners.values().filter_map(Weak::upgrade).collect()
        };

        let mut consumed = false;
        for listener in live {
            let Ok(mut listener) = listener.try_borrow_mut() else {
                tracing::warn!(?event, "skipping document listener that is already borrowed");
                continue;
            };
            match event {
                DocumentEvent::PointerDown(position) => listener.on_pointer_down(position),
                DocumentEvent::KeyDown(key) => consumed |= listener.on_key_down(key),
            }
        }
        consumed
    }
}

impl fmt::Debug for DocumentEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentEvents")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Registration guard returned by [`DocumentEvents::subscribe`].
///
/// Dropping it removes the listener from the hub. Outliving the hub is fine.
#[must_use = "dropping a Subscription unsubscribes the listener immediately"]
pub struct Subscription {
    key: ListenerKey,
    registry: Weak<Registry>,
}

impl Subscription {
    /// The key this registration occupies in the hub.
    pub fn key(&self) -> ListenerKey {
        self.key
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        // A failed borrow only happens mid-dispatch; the dead entry is then
        // pruned by the next dispatch instead.
        if let Ok(mut listeners) = registry.try_borrow_mut() {
            listeners.remove(self.key);
            tracing::trace!(key = ?self.key, "document listener unsubscribed");
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("key", &self.key).finish()
    }
}
