//! Multi-select searchable dropdown.
//!
//! - [`SelectionStore`] holds the options, the disabled set and the ordered
//!   selection.
//! - [`Combobox`] adds the open/closed lifecycle, search filtering, keyboard
//!   highlight and pointer handling, and renders itself as a [`Component`].
//! - [`MountedCombobox`] ties a combobox to a document event hub so it can
//!   dismiss itself on outside clicks.
//!
//! [`Component`]: crate::component::Component

mod controller;
mod filter;
mod mount;
mod render;
mod store;

pub use controller::{
    ChangeHandler, Combobox, DEFAULT_DISPLAY_LIMIT, DEFAULT_MAX_VISIBLE, DEFAULT_PLACEHOLDER,
};
pub use filter::filter_options;
pub use mount::MountedCombobox;
pub use render::ARROW_WIDTH;
pub use store::{SelectionStore, ToggleOutcome};
