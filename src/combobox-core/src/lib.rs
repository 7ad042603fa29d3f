//! # Combobox Core
//!
//! Shared foundation for the combobox widget crates:
//!
//! - **Style**: the terminal colour palette every widget draws with.
//! - **Events**: the document-level event hub. Widgets subscribe to
//!   pointer-down and key-down notifications for the whole screen and
//!   unsubscribe by dropping their [`events::Subscription`].
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Host application               │
//! │   crossterm events ──► DocumentEvents        │
//! └───────────────────────────┬──────────────────┘
//!                             │ dispatch
//! ┌───────────────────────────▼──────────────────┐
//! │   DocumentListener (one per mounted widget)  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod events;
pub mod style;

pub use events::{DocumentEvent, DocumentEvents, DocumentListener, ListenerKey, Subscription};
