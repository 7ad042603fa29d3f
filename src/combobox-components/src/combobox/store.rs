//! Canonical option universe and selection set.

use std::collections::HashSet;

/// Result of [`SelectionStore::toggle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The option was appended to the selection.
    Selected,
    /// The option was removed from the selection.
    Deselected,
    /// The option is disabled; nothing changed.
    Disabled,
}

impl ToggleOutcome {
    /// Whether the selection changed.
    pub fn changed(self) -> bool {
        !matches!(self, ToggleOutcome::Disabled)
    }
}

/// Options, disabled options and the ordered selection.
///
/// `selected` keeps insertion order and never holds duplicates. It is not
/// required to be a subset of `options`: hosts may pre-select or disable
/// strings that are not (yet) in the list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    options: Vec<String>,
    disabled: HashSet<String>,
    selected: Vec<String>,
}

impl SelectionStore {
    /// Create a store with no selection.
    pub fn new<O, D>(options: O, disabled: D) -> Self
    where
        O: IntoIterator,
        O::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            disabled: disabled.into_iter().map(Into::into).collect(),
            selected: Vec::new(),
        }
    }

    /// Replace the option universe and disabled set. The selection is kept.
    pub fn replace<O, D>(&mut self, options: O, disabled: D)
    where
        O: IntoIterator,
        O::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self.disabled = disabled.into_iter().map(Into::into).collect();
    }

    /// Replace only the option universe.
    pub fn set_options<O>(&mut self, options: O)
    where
        O: IntoIterator,
        O::Item: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
    }

    /// Replace only the disabled set.
    pub fn set_disabled<D>(&mut self, disabled: D)
    where
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.disabled = disabled.into_iter().map(Into::into).collect();
    }

    /// Add `option` to the end of the selection, or remove it if present.
    /// Disabled options are left alone.
    pub fn toggle(&mut self, option: &str) -> ToggleOutcome {
        if self.is_disabled(option) {
            return ToggleOutcome::Disabled;
        }
        match self.selected.iter().position(|s| s == option) {
            Some(index) => {
                self.selected.remove(index);
                ToggleOutcome::Deselected
            }
            None => {
                self.selected.push(option.to_string());
                ToggleOutcome::Selected
            }
        }
    }

    /// Whether `option` is selected.
    pub fn is_selected(&self, option: &str) -> bool {
        self.selected.iter().any(|s| s == option)
    }

    /// Whether `option` is disabled. Independent of the option universe.
    pub fn is_disabled(&self, option: &str) -> bool {
        self.disabled.contains(option)
    }

    /// A fresh copy of the selection, in selection order.
    pub fn current_selection(&self) -> Vec<String> {
        self.selected.clone()
    }

    /// The selection, in selection order.
    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    /// The option universe, in host order.
    pub fn options(&self) -> &[String] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> SelectionStore {
        SelectionStore::new(["France", "Germany", "Ghana"], ["Ghana"])
    }

    #[test]
    fn test_toggle_appends_in_selection_order() {
        let mut store = store();
        assert_eq!(store.toggle("Germany"), ToggleOutcome::Selected);
        assert_eq!(store.toggle("France"), ToggleOutcome::Selected);
        assert_eq!(store.selected(), ["Germany", "France"]);
    }

    #[test]
    fn test_toggle_twice_restores_selection() {
        let mut store = store();
        store.toggle("France");
        let before = store.current_selection();
        assert_eq!(store.toggle("Germany"), ToggleOutcome::Selected);
        assert_eq!(store.toggle("Germany"), ToggleOutcome::Deselected);
        assert_eq!(store.current_selection(), before);
    }

    #[test]
    fn test_deselect_preserves_remaining_order() {
        let mut store = SelectionStore::new(["A", "B", "C"], Vec::<String>::new());
        store.toggle("C");
        store.toggle("A");
        store.toggle("B");
        store.toggle("A");
        assert_eq!(store.selected(), ["C", "B"]);
    }

    #[test]
    fn test_disabled_toggle_is_noop() {
        let mut store = store();
        store.toggle("France");
        assert_eq!(store.toggle("Ghana"), ToggleOutcome::Disabled);
        assert!(!ToggleOutcome::Disabled.changed());
        assert_eq!(store.selected(), ["France"]);
        assert!(!store.is_selected("Ghana"));
    }

    #[test]
    fn test_disabled_outside_universe_is_tolerated() {
        let mut store = SelectionStore::new(["France"], ["Atlantis"]);
        assert!(store.is_disabled("Atlantis"));
        assert_eq!(store.toggle("Atlantis"), ToggleOutcome::Disabled);
    }

    #[test]
    fn test_selection_not_restricted_to_options() {
        let mut store = SelectionStore::new(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(store.toggle("Wakanda"), ToggleOutcome::Selected);
        assert!(store.is_selected("Wakanda"));
    }

    #[test]
    fn test_current_selection_is_a_copy() {
        let mut store = store();
        store.toggle("France");
        let mut copy = store.current_selection();
        copy.push("Germany".to_string());
        assert_eq!(store.selected(), ["France"]);
    }

    #[test]
    fn test_replace_keeps_selection() {
        let mut store = store();
        store.toggle("France");
        store.replace(["Chile", "Peru"], ["Peru"]);
        assert_eq!(store.options(), ["Chile", "Peru"]);
        assert!(store.is_disabled("Peru"));
        assert!(!store.is_disabled("Ghana"));
        assert_eq!(store.selected(), ["France"]);
    }
}
