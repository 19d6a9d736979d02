//! Selection state for the two picker modes
//!
//! Both types pair the picked item(s) with a free-text flag. They differ in
//! how the two interact: in single-select they exclude each other, in
//! multi-select they coexist until the picker is confirmed.

use std::collections::HashSet;

/// Single-select state: one item position or free text, never both
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelection {
    item: Option<usize>,
    free_text: bool,
}

impl SingleSelection {
    /// Empty selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            item: None,
            free_text: false,
        }
    }

    /// Selection with an item pre-selected
    #[must_use]
    pub const fn with_item(item: usize) -> Self {
        Self {
            item: Some(item),
            free_text: false,
        }
    }

    /// Select an item, clearing the free-text flag
    pub const fn select_item(&mut self, item: usize) {
        self.item = Some(item);
        self.free_text = false;
    }

    /// Select free text, clearing the selected item
    pub const fn select_free_text(&mut self) {
        self.item = None;
        self.free_text = true;
    }

    /// Reset to nothing selected
    pub const fn clear(&mut self) {
        self.item = None;
        self.free_text = false;
    }

    /// Position of the selected item in the original list
    #[must_use]
    pub const fn item(&self) -> Option<usize> {
        self.item
    }

    /// Whether free text is selected
    #[must_use]
    pub const fn is_free_text(&self) -> bool {
        self.free_text
    }

    /// Whether nothing is selected
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item.is_none() && !self.free_text
    }
}

/// Multi-select state: a set of identifiers plus an independent free-text flag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelection {
    ids: HashSet<String>,
    free_text: bool,
}

impl MultiSelection {
    /// Empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection seeded with identifiers (duplicates collapse)
    #[must_use]
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            free_text: false,
        }
    }

    /// Flip membership of `id`, returning whether it is now selected
    ///
    /// Toggling the same id twice restores the previous state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    /// Whether `id` is selected
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Set or clear the free-text flag
    pub const fn set_free_text(&mut self, selected: bool) {
        self.free_text = selected;
    }

    /// Flip the free-text flag, returning the new value
    pub const fn toggle_free_text(&mut self) -> bool {
        self.free_text = !self.free_text;
        self.free_text
    }

    /// Whether free text is selected
    #[must_use]
    pub const fn is_free_text(&self) -> bool {
        self.free_text
    }

    /// Number of selected identifiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no identifiers are selected (free text is not counted)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identifiers, in no particular order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
