//! Combobox interaction state.
//!
//! Owns the open/closed lifecycle, the search text, the highlighted row and
//! the viewport, and turns key and pointer input into transitions on top of a
//! [`SelectionStore`].

use std::cell::Cell;
use std::fmt;

use combobox_core::DocumentListener;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Position, Rect};

use super::filter::filter_options;
use super::store::{SelectionStore, ToggleOutcome};
use crate::color_scheme::ColorScheme;
use crate::component::ComponentResult;
use crate::input::{InputState, is_editing_key};
use crate::scroll::ScrollState;

/// Placeholder shown when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select options";

/// Characters of the joined selection shown before truncating.
pub const DEFAULT_DISPLAY_LIMIT: usize = 25;

/// Popup rows shown before scrolling.
pub const DEFAULT_MAX_VISIBLE: usize = 8;

const ELLIPSIS: &str = "...";
const SELECTION_SEPARATOR: &str = ", ";

/// Receives the full selection after every successful toggle.
pub type ChangeHandler = Box<dyn FnMut(Vec<String>)>;

/// A multi-select searchable dropdown.
///
/// ```rust,ignore
/// let mut combobox = Combobox::new(["France", "Germany", "Ghana"])
///     .with_disabled(["Ghana"])
///     .with_placeholder("Countries")
///     .on_change(|selection| tracing::info!(?selection, "changed"));
///
/// combobox.on_input_change("g");
/// combobox.arrow_down();
/// assert_eq!(combobox.enter(), Some(vec!["Germany".to_string()]));
/// ```
pub struct Combobox {
    pub(super) store: SelectionStore,
    pub(super) placeholder: String,
    pub(super) label: Option<String>,
    pub(super) searchable: bool,
    pub(super) display_limit: usize,
    pub(super) max_visible: usize,
    pub(super) search: InputState,
    pub(super) is_open: bool,
    pub(super) highlighted: Option<usize>,
    pub(super) scroll: ScrollState,
    pub(super) pending_scroll: Option<usize>,
    pub(super) focused: bool,
    pub(super) colors: ColorScheme,
    /// Input row plus popup, as last rendered.
    pub(super) bounds: Cell<Rect>,
    pub(super) input_area: Cell<Rect>,
    /// Option rows inside the popup border, as last rendered.
    pub(super) rows_area: Cell<Rect>,
    /// `(offset, rows)` of the option list as last rendered.
    pub(super) drawn_window: Cell<Option<(usize, usize)>>,
    on_change: Option<ChangeHandler>,
}

impl Combobox {
    /// Create a closed combobox over `options` with nothing selected.
    pub fn new<O>(options: O) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
    {
        let store = SelectionStore::new(options, Vec::<String>::new());
        let total = store.options().len();
        Self {
            store,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            label: None,
            searchable: true,
            display_limit: DEFAULT_DISPLAY_LIMIT,
            max_visible: DEFAULT_MAX_VISIBLE,
            search: InputState::new(),
            is_open: false,
            highlighted: None,
            scroll: ScrollState::new(total, DEFAULT_MAX_VISIBLE),
            pending_scroll: None,
            focused: false,
            colors: ColorScheme::default(),
            bounds: Cell::new(Rect::default()),
            input_area: Cell::new(Rect::default()),
            rows_area: Cell::new(Rect::default()),
            drawn_window: Cell::new(None),
            on_change: None,
        }
    }

    /// Text shown when nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Field label drawn by the host above the input.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Enable or disable filtering by typed text (enabled by default).
    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self.sync_view();
        self
    }

    /// Options that cannot be toggled.
    pub fn with_disabled<D>(mut self, disabled: D) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.store.set_disabled(disabled);
        self
    }

    /// Characters of the joined selection shown before the ellipsis.
    pub fn with_display_limit(mut self, limit: usize) -> Self {
        self.display_limit = limit;
        self
    }

    /// Popup rows shown before scrolling (at least one).
    pub fn with_max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self.scroll.set_visible(self.max_visible);
        self
    }

    /// Custom colors.
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Register the handler that receives every selection change.
    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: FnMut(Vec<String>) + 'static,
    {
        self.on_change = Some(Box::new(handler));
        self
    }

    // ------------------------------------------------------------------
    // Host updates
    // ------------------------------------------------------------------

    /// Replace the option universe and disabled set. The selection is kept.
    pub fn set_options<O, D>(&mut self, options: O, disabled: D)
    where
        O: IntoIterator,
        O::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.store.replace(options, disabled);
        self.sync_view();
        tracing::debug!(options = self.store.options().len(), "combobox options replaced");
    }

    /// Replace the option universe, keeping the disabled set.
    pub fn set_option_list<O>(&mut self, options: O)
    where
        O: IntoIterator,
        O::Item: Into<String>,
    {
        self.store.set_options(options);
        self.sync_view();
        tracing::debug!(options = self.store.options().len(), "combobox options replaced");
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    /// Options matching the current search text, in host order.
    pub fn filtered_options(&self) -> Vec<&str> {
        filter_options(self.store.options(), self.search.value(), self.searchable)
    }

    fn filtered_len(&self) -> usize {
        self.filtered_options().len()
    }

    /// Label for the closed input: the placeholder, or the joined selection
    /// truncated to the display limit.
    pub fn display_placeholder(&self) -> String {
        if self.store.selected().is_empty() {
            return self.placeholder.clone();
        }
        let joined = self.store.selected().join(SELECTION_SEPARATOR);
        if joined.chars().count() > self.display_limit {
            let mut truncated: String = joined.chars().take(self.display_limit).collect();
            truncated.push_str(ELLIPSIS);
            truncated
        } else {
            joined
        }
    }

    /// The whole joined selection, or an empty string.
    pub fn tooltip_text(&self) -> String {
        self.store.selected().join(SELECTION_SEPARATOR)
    }

    /// Highlighted row in the filtered view. A highlight left past the end
    /// of a shrunken view reads as no highlight.
    pub fn highlighted_index(&self) -> Option<usize> {
        self.highlighted.filter(|&index| index < self.filtered_len())
    }

    /// The option under the highlight.
    pub fn highlighted_option(&self) -> Option<&str> {
        let index = self.highlighted_index()?;
        self.filtered_options().get(index).copied()
    }

    /// Whether the popup is showing.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Raw search text.
    pub fn search_text(&self) -> &str {
        self.search.value()
    }

    /// Whether typed text filters the options.
    pub fn is_searchable(&self) -> bool {
        self.searchable
    }

    /// Whether `option` is selected.
    pub fn is_selected(&self, option: &str) -> bool {
        self.store.is_selected(option)
    }

    /// Whether `option` is disabled.
    pub fn is_disabled(&self, option: &str) -> bool {
        self.store.is_disabled(option)
    }

    /// The selection in selection order.
    pub fn selected(&self) -> &[String] {
        self.store.selected()
    }

    /// A fresh copy of the selection.
    pub fn current_selection(&self) -> Vec<String> {
        self.store.current_selection()
    }

    /// The option universe.
    pub fn options(&self) -> &[String] {
        self.store.options()
    }

    /// Field label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Region covered by the last render (input row plus open popup).
    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    /// Popup viewport.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Show the popup with no highlight.
    pub fn open_dropdown(&mut self) {
        self.is_open = true;
        self.highlighted = None;
        self.scroll.scroll_to_top();
        self.sync_view();
        tracing::debug!(label = ?self.label, "combobox opened");
    }

    /// Open if closed, close if open.
    pub fn toggle_dropdown(&mut self) {
        if self.is_open {
            self.close_dropdown();
        } else {
            self.open_dropdown();
        }
    }

    /// Hide the popup and drop the highlight.
    pub fn close_dropdown(&mut self) {
        if self.is_open {
            tracing::debug!(label = ?self.label, "combobox closed");
        }
        self.is_open = false;
        self.highlighted = None;
        self.pending_scroll = None;
    }

    /// Set the search text. Typing into a closed combobox opens it.
    pub fn on_input_change(&mut self, text: impl Into<String>) {
        self.search.set_value(text);
        self.search_changed();
    }

    fn search_changed(&mut self) {
        self.scroll.scroll_to_top();
        self.sync_view();
        if !self.is_open {
            self.open_dropdown();
        }
    }

    /// Final cleanup when the widget goes away.
    pub fn unmount(&mut self) {
        self.close_dropdown();
        tracing::debug!(label = ?self.label, "combobox unmounted");
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Move the highlight down, wrapping to the top. No-op on an empty view.
    pub fn arrow_down(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            return;
        }
        let next = match self.highlighted_index() {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.highlight(next);
    }

    /// Move the highlight up, wrapping to the bottom. No-op on an empty view.
    pub fn arrow_up(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            return;
        }
        let next = match self.highlighted_index() {
            Some(index) if index > 0 => index - 1,
            _ => len - 1,
        };
        self.highlight(next);
    }

    /// Toggle the highlighted option. The popup stays open.
    ///
    /// Returns the new selection if it changed.
    pub fn enter(&mut self) -> Option<Vec<String>> {
        let option = self.highlighted_option()?.to_string();
        self.select_option(&option)
    }

    fn highlight(&mut self, index: usize) {
        self.highlighted = Some(index);
        self.pending_scroll = Some(index);
    }

    /// Navigation keys while open: arrows, Enter and Escape. Everything is
    /// ignored while closed.
    pub fn navigate(&mut self, key: KeyEvent) -> ComponentResult<Vec<String>> {
        if !self.is_open {
            return ComponentResult::NotHandled;
        }
        match key.code {
            KeyCode::Down => {
                self.arrow_down();
                ComponentResult::Handled
            }
            KeyCode::Up => {
                self.arrow_up();
                ComponentResult::Handled
            }
            KeyCode::Enter => match self.enter() {
                Some(selection) => ComponentResult::Done(selection),
                None => ComponentResult::Handled,
            },
            KeyCode::Esc => {
                self.close_dropdown();
                ComponentResult::Cancelled
            }
            _ => ComponentResult::NotHandled,
        }
    }

    /// Apply a text-editing key to the search field.
    pub(super) fn edit_search(&mut self, key: KeyEvent) -> ComponentResult<Vec<String>> {
        if !self.searchable {
            if matches!(key.code, KeyCode::Char(_)) && !self.is_open {
                self.open_dropdown();
            }
            return ComponentResult::Handled;
        }
        if self.search.apply_key(key) {
            self.search_changed();
        }
        ComponentResult::Handled
    }

    /// Insert pasted text into the search field.
    pub(super) fn paste_search(&mut self, text: &str) -> bool {
        if !self.searchable {
            return false;
        }
        self.search.insert_str(text);
        self.search_changed();
        true
    }

    /// Whether `key` would be handled as search-field editing.
    pub fn is_search_key(key: &KeyEvent) -> bool {
        is_editing_key(key)
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    /// Toggle `option` and notify the change handler.
    ///
    /// Disabled options change nothing and emit nothing. Returns the new
    /// selection if it changed.
    pub fn select_option(&mut self, option: &str) -> Option<Vec<String>> {
        let outcome = self.store.toggle(option);
        if outcome == ToggleOutcome::Disabled {
            tracing::debug!(option, "ignoring toggle of disabled option");
            return None;
        }
        tracing::debug!(option, ?outcome, "combobox selection toggled");
        let selection = self.store.current_selection();
        if let Some(handler) = self.on_change.as_mut() {
            handler(selection.clone());
        }
        Some(selection)
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Document-level pointer press: closes the popup when the press lands
    /// outside the widget.
    pub fn handle_pointer_down(&mut self, position: Position) {
        if self.is_open && !self.bounds.get().contains(position) {
            tracing::debug!(?position, "pointer down outside combobox");
            self.close_dropdown();
        }
    }

    /// Filtered-view index of the popup row at `position`.
    pub(super) fn row_at(&self, position: Position) -> Option<usize> {
        let rows = self.rows_area.get();
        if !self.is_open || !rows.contains(position) {
            return None;
        }
        let offset = self
            .drawn_window
            .get()
            .map_or(self.scroll.offset(), |(offset, _)| offset);
        let index = offset + usize::from(position.y - rows.y);
        (index < self.filtered_len()).then_some(index)
    }

    // ------------------------------------------------------------------
    // Deferred scroll
    // ------------------------------------------------------------------

    /// Apply the latest scroll-into-view request. Call once the current
    /// render pass has completed.
    ///
    /// The viewport is first resized to the rows the last render actually
    /// showed. Returns true if the viewport moved. A request for a row that
    /// no longer exists is dropped.
    pub fn settle(&mut self) -> bool {
        let before = self.scroll.offset();
        if let Some((_, rows)) = self.drawn_window.get() {
            self.scroll.set_visible(rows.clamp(1, self.max_visible));
        }
        let resized = self.scroll.offset() != before;

        let Some(index) = self.pending_scroll.take() else {
            return resized;
        };
        if !self.is_open || index >= self.scroll.total() {
            tracing::trace!(index, "dropping scroll request for missing row");
            return resized;
        }
        self.scroll.ensure_visible(index) || resized
    }

    /// Re-derive everything that depends on the filtered view.
    fn sync_view(&mut self) {
        let len = self.filtered_len();
        self.scroll.set_total(len);
        match self.highlighted {
            Some(index) if index < len => self.pending_scroll = Some(index),
            Some(_) => self.highlighted = None,
            None => {}
        }
        if self.pending_scroll.is_some_and(|index| index >= len) {
            self.pending_scroll = None;
        }
    }
}

impl DocumentListener for Combobox {
    fn on_pointer_down(&mut self, position: Position) {
        self.handle_pointer_down(position);
    }

    fn on_key_down(&mut self, key: KeyEvent) -> bool {
        self.navigate(key).is_handled()
    }
}

impl fmt::Debug for Combobox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combobox")
            .field("label", &self.label)
            .field("is_open", &self.is_open)
            .field("search", &self.search.value())
            .field("highlighted", &self.highlighted)
            .field("selected", &self.store.selected())
            .field("options", &self.store.options().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn countries() -> Combobox {
        Combobox::new(["France", "Germany", "Ghana"]).with_disabled(["Ghana"])
    }

    fn recording(combobox: Combobox) -> (Combobox, Rc<RefCell<Vec<Vec<String>>>>) {
        let emitted = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&emitted);
        let combobox = combobox.on_change(move |selection| sink.borrow_mut().push(selection));
        (combobox, emitted)
    }

    #[test]
    fn test_typing_filters_and_enter_toggles_highlight() {
        let (mut combobox, emitted) = recording(countries());

        combobox.on_input_change("g");
        assert!(combobox.is_open());
        assert_eq!(combobox.filtered_options(), ["Germany", "Ghana"]);

        combobox.navigate(key(KeyCode::Down));
        assert_eq!(combobox.highlighted_index(), Some(0));
        assert_eq!(
            combobox.navigate(key(KeyCode::Enter)),
            ComponentResult::Done(vec!["Germany".to_string()])
        );

        combobox.navigate(key(KeyCode::Down));
        assert_eq!(combobox.highlighted_option(), Some("Ghana"));
        assert_eq!(combobox.navigate(key(KeyCode::Enter)), ComponentResult::Handled);

        assert_eq!(combobox.selected(), ["Germany"]);
        assert_eq!(*emitted.borrow(), vec![vec!["Germany".to_string()]]);
        assert!(combobox.is_open());
    }

    #[test]
    fn test_arrow_down_wraps_back_to_start() {
        let mut combobox = Combobox::new(["A", "B", "C", "D"]);
        combobox.open_dropdown();
        for start in 0..4 {
            combobox.highlighted = Some(start);
            for _ in 0..4 {
                combobox.arrow_down();
            }
            assert_eq!(combobox.highlighted_index(), Some(start));
        }
    }

    #[test]
    fn test_arrow_up_wraps_to_bottom() {
        let mut combobox = Combobox::new(["A", "B", "C"]);
        combobox.open_dropdown();
        combobox.arrow_up();
        assert_eq!(combobox.highlighted_index(), Some(2));
        combobox.arrow_up();
        combobox.arrow_up();
        assert_eq!(combobox.highlighted_index(), Some(0));
        combobox.arrow_up();
        assert_eq!(combobox.highlighted_index(), Some(2));
    }

    #[test]
    fn test_arrows_on_empty_view_are_noops() {
        let mut combobox = Combobox::new(["France"]);
        combobox.on_input_change("xyz");
        assert!(combobox.filtered_options().is_empty());
        combobox.arrow_down();
        combobox.arrow_up();
        assert_eq!(combobox.highlighted_index(), None);
        assert!(combobox.pending_scroll.is_none());
        assert_eq!(combobox.enter(), None);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let (mut combobox, emitted) = recording(countries());
        for code in [KeyCode::Down, KeyCode::Up, KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(combobox.navigate(key(code)), ComponentResult::NotHandled);
        }
        assert_eq!(combobox.highlighted_index(), None);
        assert!(!combobox.is_open());
        assert!(emitted.borrow().is_empty());
    }

    #[test]
    fn test_open_resets_highlight() {
        let mut combobox = countries();
        combobox.open_dropdown();
        combobox.arrow_down();
        combobox.arrow_down();
        combobox.open_dropdown();
        assert_eq!(combobox.highlighted_index(), None);

        combobox.arrow_down();
        combobox.toggle_dropdown();
        assert!(!combobox.is_open());
        combobox.toggle_dropdown();
        assert!(combobox.is_open());
        assert_eq!(combobox.highlighted_index(), None);
    }

    #[test]
    fn test_escape_closes_and_resets() {
        let mut combobox = countries();
        combobox.open_dropdown();
        combobox.arrow_down();
        assert_eq!(combobox.navigate(key(KeyCode::Esc)), ComponentResult::Cancelled);
        assert!(!combobox.is_open());
        assert_eq!(combobox.highlighted, None);
    }

    #[test]
    fn test_stale_highlight_after_filter_shrinks() {
        let (mut combobox, emitted) = recording(Combobox::new(["Chad", "Chile", "China", "Cuba"]));
        combobox.open_dropdown();
        for _ in 0..4 {
            combobox.arrow_down();
        }
        assert_eq!(combobox.highlighted_option(), Some("Cuba"));

        combobox.on_input_change("chi");
        assert_eq!(combobox.filtered_options(), ["Chile", "China"]);
        assert_eq!(combobox.highlighted_index(), None);
        assert_eq!(combobox.enter(), None);
        assert!(emitted.borrow().is_empty());

        combobox.arrow_down();
        assert_eq!(combobox.highlighted_option(), Some("Chile"));
    }

    #[test]
    fn test_highlight_survives_filter_that_keeps_it_in_range() {
        let mut combobox = Combobox::new(["Chad", "Chile", "China"]);
        combobox.open_dropdown();
        combobox.arrow_down();
        combobox.on_input_change("ch");
        assert_eq!(combobox.highlighted_index(), Some(0));
    }

    #[test]
    fn test_display_placeholder_truncates() {
        let mut combobox = Combobox::new(["Albania", "Bhutan", "Canada", "Denmark"])
            .with_placeholder("Pick countries");
        assert_eq!(combobox.display_placeholder(), "Pick countries");
        assert_eq!(combobox.tooltip_text(), "");

        for country in ["Albania", "Bhutan", "Canada"] {
            combobox.select_option(country);
        }
        assert_eq!(combobox.display_placeholder(), "Albania, Bhutan, Canada");

        combobox.select_option("Denmark");
        assert_eq!(combobox.display_placeholder(), "Albania, Bhutan, Canada, ...");
        assert_eq!(combobox.tooltip_text(), "Albania, Bhutan, Canada, Denmark");
    }

    #[test]
    fn test_display_limit_is_configurable() {
        let mut combobox = Combobox::new(["Peru", "Chile"]).with_display_limit(6);
        combobox.select_option("Peru");
        combobox.select_option("Chile");
        assert_eq!(combobox.display_placeholder(), "Peru, ...");
    }

    #[test]
    fn test_disabled_option_never_emits() {
        let (mut combobox, emitted) = recording(countries());
        assert_eq!(combobox.select_option("Ghana"), None);
        assert!(emitted.borrow().is_empty());
        assert!(combobox.is_disabled("Ghana"));
    }

    #[test]
    fn test_each_toggle_emits_fresh_copy() {
        let (mut combobox, emitted) = recording(countries());
        combobox.select_option("France");
        combobox.select_option("Germany");
        combobox.select_option("France");
        assert_eq!(
            *emitted.borrow(),
            vec![
                vec!["France".to_string()],
                vec!["France".to_string(), "Germany".to_string()],
                vec!["Germany".to_string()],
            ]
        );
    }

    #[test]
    fn test_outside_pointer_closes_inside_does_not() {
        let mut combobox = countries();
        combobox.open_dropdown();
        combobox.arrow_down();
        combobox.bounds.set(Rect::new(10, 5, 30, 6));

        combobox.handle_pointer_down(Position::new(12, 7));
        assert!(combobox.is_open());
        assert_eq!(combobox.highlighted_index(), Some(0));

        combobox.handle_pointer_down(Position::new(2, 2));
        assert!(!combobox.is_open());
        assert_eq!(combobox.highlighted_index(), None);
    }

    #[test]
    fn test_search_disabled_shows_everything() {
        let mut combobox = countries().searchable(false);
        combobox.on_input_change("zzz");
        assert_eq!(combobox.filtered_options(), ["France", "Germany", "Ghana"]);
    }

    #[test]
    fn test_empty_options_open_with_zero_rows() {
        let mut combobox = Combobox::new(Vec::<String>::new());
        combobox.open_dropdown();
        combobox.arrow_down();
        assert!(combobox.filtered_options().is_empty());
        assert_eq!(combobox.highlighted_index(), None);

        combobox.set_option_list(["Kenya", "Korea"]);
        combobox.arrow_down();
        assert_eq!(combobox.highlighted_option(), Some("Kenya"));
    }

    #[test]
    fn test_set_options_keeps_selection_and_revalidates() {
        let mut combobox = Combobox::new(["A", "B", "C"]);
        combobox.select_option("C");
        combobox.open_dropdown();
        combobox.arrow_up();
        assert_eq!(combobox.highlighted_index(), Some(2));

        combobox.set_options(["X"], ["X"]);
        assert_eq!(combobox.highlighted, None);
        assert_eq!(combobox.selected(), ["C"]);
        assert!(combobox.is_disabled("X"));
    }

    #[test]
    fn test_settle_applies_latest_request_only() {
        let mut combobox = Combobox::new((0..20).map(|i| format!("Option {i}"))).with_max_visible(5);
        combobox.open_dropdown();
        for _ in 0..7 {
            combobox.arrow_down();
        }
        assert!(combobox.pending_scroll.is_some());
        assert_eq!(combobox.scroll().offset(), 0);

        assert!(combobox.settle());
        assert_eq!(combobox.scroll().offset(), 2);
        assert!(!combobox.settle());
    }

    #[test]
    fn test_settle_drops_request_for_missing_row() {
        let mut combobox = Combobox::new((0..20).map(|i| format!("Option {i}"))).with_max_visible(5);
        combobox.open_dropdown();
        for _ in 0..15 {
            combobox.arrow_down();
        }
        combobox.on_input_change("Option 1");
        assert!(combobox.pending_scroll.is_none());
        assert!(!combobox.settle());
    }

    #[test]
    fn test_filter_change_scrolls_surviving_highlight_back_into_view() {
        let mut combobox =
            Combobox::new((0..20).map(|i| format!("Option {i:02}"))).with_max_visible(5);
        combobox.open_dropdown();
        for _ in 0..11 {
            combobox.arrow_down();
        }
        combobox.settle();
        assert_eq!(combobox.scroll().offset(), 6);

        combobox.on_input_change("option");
        assert_eq!(combobox.highlighted_index(), Some(10));
        assert_eq!(combobox.scroll().offset(), 0);
        assert!(combobox.pending_scroll.is_some());

        assert!(combobox.settle());
        assert_eq!(combobox.scroll().offset(), 6);
        assert!(combobox.scroll().visible_range().contains(&10));
    }

    #[test]
    fn test_unmount_closes() {
        let mut combobox = countries();
        combobox.open_dropdown();
        combobox.arrow_down();
        combobox.unmount();
        assert!(!combobox.is_open());
        assert!(combobox.pending_scroll.is_none());
    }

    #[test]
    fn test_with_disabled_keeps_prior_selection() {
        let mut combobox = Combobox::new(["A", "B"]);
        combobox.select_option("A");
        let combobox = combobox.with_disabled(["B"]);
        assert_eq!(combobox.selected(), ["A"]);
        assert!(combobox.is_disabled("B"));
    }
}
