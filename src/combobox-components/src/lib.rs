//! # Combobox Components
//!
//! Terminal widgets for the combobox application, built on ratatui.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use combobox_components::prelude::*;
//!
//! let events = DocumentEvents::new();
//! let combobox = Combobox::new(["France", "Germany", "Ghana"])
//!     .with_disabled(["Ghana"])
//!     .with_placeholder("Select countries")
//!     .on_change(|selection| tracing::info!(?selection, "selection changed"))
//!     .mount(&events);
//!
//! // Route input: document-level events first, then the focused widget.
//! events.dispatch(DocumentEvent::KeyDown(key));
//! combobox.borrow_mut().handle_key(key);
//!
//! // Draw, then apply deferred scrolling.
//! frame.render_widget(&*combobox.borrow(), area);
//! combobox.borrow_mut().settle();
//! ```
//!
//! ## Modules
//!
//! - [`combobox`] - the multi-select dropdown and its selection store
//! - [`component`] - the `Component` trait every widget implements
//! - [`input`] - grapheme-aware single-line text editing
//! - [`scroll`] - list viewport and scrollbar
//! - [`focus`] - focus cycling between widgets
//! - [`key_hints`] - key hint bar
//! - [`color_scheme`] - widget colors

pub mod color_scheme;
pub mod combobox;
pub mod component;
pub mod focus;
pub mod input;
pub mod key_hints;
pub mod scroll;

pub use color_scheme::ColorScheme;
pub use combobox::{Combobox, MountedCombobox, SelectionStore, ToggleOutcome};
pub use component::{Component, ComponentResult, FocusState};
pub use focus::{FocusChange, FocusDirection, FocusManager};
pub use input::InputState;
pub use key_hints::{KeyHint, KeyHintsBar};
pub use scroll::ScrollState;

/// Everything needed to build and drive comboboxes.
pub mod prelude {
    pub use crate::color_scheme::ColorScheme;
    pub use crate::combobox::{Combobox, MountedCombobox, SelectionStore, ToggleOutcome};
    pub use crate::component::{Component, ComponentResult, FocusState};
    pub use crate::focus::{FocusChange, FocusDirection, FocusManager};
    pub use crate::input::InputState;
    pub use crate::key_hints::KeyHintsBar;
    pub use crate::scroll::ScrollState;
    pub use combobox_core::{DocumentEvent, DocumentEvents, DocumentListener, Subscription};
}
