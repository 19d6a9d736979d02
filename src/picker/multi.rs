//! Multi-select picker session
//!
//! A single open state (`Editing`) in which rows toggle independently,
//! ended by an explicit [`MultiSelect::confirm`] or [`MultiSelect::dismiss`].
//! The free-text flag and the identifier set are independent; when both are
//! set at confirm time, free text wins.

use super::list::ListModel;
use super::types::{FreeTextCallback, IdentifierFn, PickerOptions, PickerOutcome};
use super::view::{PickerView, Row};
use crate::engine::{MultiSelection, multi_order};
use std::collections::HashMap;

/// Lifecycle of a multi-select session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiPhase {
    /// Open; toggles allowed
    #[default]
    Editing,
    /// Finished; the outcome is available
    Closed,
}

/// Multi-select picker over items of type `T`
///
/// Items are tracked by identifier. Identifiers are expected to be unique;
/// items sharing one are checked and unchecked together (see
/// [`MultiSelect::duplicate_identifiers`]).
pub struct MultiSelect<T> {
    list: ListModel<T>,
    identifier: IdentifierFn<T>,
    ids: Vec<String>,
    selection: MultiSelection,
    phase: MultiPhase,
    options: PickerOptions,
    on_free_text: Option<FreeTextCallback>,
    outcome: Option<PickerOutcome<T>>,
}

impl<T: Clone> MultiSelect<T> {
    /// Open a session over `items`
    #[must_use]
    pub fn new(
        items: Vec<T>,
        search_key: impl Fn(&T) -> String + 'static,
        identifier: impl Fn(&T) -> String + 'static,
    ) -> Self {
        let identifier: IdentifierFn<T> = Box::new(identifier);
        let ids = items.iter().map(&identifier).collect();
        let list = ListModel::new(items, &search_key);

        Self {
            list,
            identifier,
            ids,
            selection: MultiSelection::new(),
            phase: MultiPhase::Editing,
            options: PickerOptions::default(),
            on_free_text: None,
            outcome: None,
        }
    }

    /// Pre-select items and float them to the top, in the order given
    #[must_use]
    pub fn with_initial(mut self, initial: Vec<T>) -> Self {
        self.list
            .set_order(multi_order(self.list.items(), &initial, &self.identifier));
        self.selection = MultiSelection::from_ids(initial.iter().map(&self.identifier));
        self
    }

    /// Render rows with `renderer` instead of the search key
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Fn(&T) -> String + 'static) -> Self {
        self.list.set_renderer(Box::new(renderer));
        self
    }

    /// Set presentation options
    #[must_use]
    pub fn with_options(mut self, options: PickerOptions) -> Self {
        self.options = options;
        self
    }

    /// Register a callback fired with the query when free text is checked
    #[must_use]
    pub fn on_free_text(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_free_text = Some(Box::new(callback));
        self
    }

    fn is_open(&self) -> bool {
        self.phase == MultiPhase::Editing
    }

    /// Update the query; ignored once closed or when search is disabled
    ///
    /// An empty query hides the free-text row, which also unchecks it.
    pub fn set_query(&mut self, query: &str) {
        if !self.is_open() || !self.options.search_enabled {
            return;
        }
        self.list.set_query(query);
        if query.is_empty() {
            self.selection.set_free_text(false);
        }
    }

    /// Current query
    #[must_use]
    pub fn query(&self) -> &str {
        self.list.query()
    }

    /// Items matching the query, in display order
    #[must_use]
    pub fn visible(&self) -> Vec<&T> {
        self.list.visible()
    }

    /// All items in display order
    #[must_use]
    pub fn ordered(&self) -> Vec<&T> {
        self.list.ordered()
    }

    /// Whether the free-text row is offered right now
    #[must_use]
    pub fn free_text_available(&self) -> bool {
        self.is_open() && self.options.enable_free_text && !self.list.query().is_empty()
    }

    /// Toggle the visible item at `position`
    ///
    /// Returns whether the item is checked afterwards; out-of-range positions
    /// and closed sessions return `false` without changes.
    pub fn toggle(&mut self, position: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        match self.list.item_at(position) {
            Some(idx) => self.selection.toggle(&self.ids[idx]),
            None => false,
        }
    }

    /// Toggle an identifier directly
    pub fn toggle_id(&mut self, id: &str) -> bool {
        if self.is_open() {
            self.selection.toggle(id)
        } else {
            self.selection.contains(id)
        }
    }

    /// Toggle the free-text row, returning whether it is checked afterwards
    ///
    /// Checking it fires the free-text callback with the current query.
    pub fn toggle_free_text(&mut self) -> bool {
        if !self.free_text_available() {
            return self.selection.is_free_text();
        }

        let checked = self.selection.toggle_free_text();
        if checked && let Some(callback) = self.on_free_text.as_mut() {
            callback(self.list.query());
        }
        checked
    }

    /// Whether the visible item at `position` is checked
    #[must_use]
    pub fn is_checked(&self, position: usize) -> bool {
        self.list
            .item_at(position)
            .is_some_and(|idx| self.selection.contains(&self.ids[idx]))
    }

    /// Close and produce the result
    ///
    /// Free text wins when checked; otherwise the checked items are returned
    /// in original list order, regardless of display or toggle order.
    pub fn confirm(&mut self) {
        if !self.is_open() {
            return;
        }

        let outcome = if self.selection.is_free_text() {
            PickerOutcome::FreeText(self.list.query().to_string())
        } else {
            PickerOutcome::Items(
                self.list
                    .items()
                    .iter()
                    .zip(&self.ids)
                    .filter(|(_, id)| self.selection.contains(id))
                    .map(|(item, _)| item.clone())
                    .collect(),
            )
        };
        self.outcome = Some(outcome);
        self.phase = MultiPhase::Closed;
    }

    /// Close without a result
    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.outcome = Some(PickerOutcome::Cancelled);
            self.phase = MultiPhase::Closed;
        }
    }

    /// Identifiers shared by more than one item, in first-seen order
    #[must_use]
    pub fn duplicate_identifiers(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for id in &self.ids {
            *counts.entry(id).or_default() += 1;
        }

        let mut duplicates = Vec::new();
        for id in &self.ids {
            if counts.remove(id.as_str()).is_some_and(|count| count > 1) {
                duplicates.push(id.clone());
            }
        }
        duplicates
    }

    /// Number of items that would be returned by [`MultiSelect::confirm`]
    #[must_use]
    pub fn checked_items(&self) -> usize {
        self.ids
            .iter()
            .filter(|id| self.selection.contains(id))
            .count()
    }

    /// Identifier of an item, as computed at construction
    #[must_use]
    pub fn identifier_of(&self, item: &T) -> String {
        (self.identifier)(item)
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> MultiPhase {
        self.phase
    }

    /// Current selection state
    #[must_use]
    pub const fn selection(&self) -> &MultiSelection {
        &self.selection
    }

    /// Outcome, once closed
    #[must_use]
    pub const fn outcome(&self) -> Option<&PickerOutcome<T>> {
        self.outcome.as_ref()
    }

    /// Consume the session, treating an unfinished session as cancelled
    #[must_use]
    pub fn into_outcome(self) -> PickerOutcome<T> {
        self.outcome.unwrap_or(PickerOutcome::Cancelled)
    }
}

impl<T: Clone> PickerView for MultiSelect<T> {
    fn options(&self) -> &PickerOptions {
        &self.options
    }

    fn is_multi(&self) -> bool {
        true
    }

    fn query(&self) -> &str {
        self.list.query()
    }

    fn set_query(&mut self, query: &str) {
        Self::set_query(self, query);
    }

    fn total_items(&self) -> usize {
        self.list.total_len()
    }

    fn visible_items(&self) -> usize {
        self.list.visible_len()
    }

    fn item_row(&self, position: usize) -> Option<Row> {
        let idx = self.list.item_at(position)?;
        Some(Row::item(
            self.list.label(idx),
            self.selection.contains(&self.ids[idx]),
        ))
    }

    fn free_text_row(&self) -> Option<Row> {
        self.free_text_available()
            .then(|| Row::free_text(self.list.query(), self.selection.is_free_text()))
    }

    fn shares_entry(&self, a: usize, b: usize) -> bool {
        match (self.list.item_at(a), self.list.item_at(b)) {
            (Some(first), Some(second)) => self.ids[first] == self.ids[second],
            _ => a == b,
        }
    }

    fn selected_count(&self) -> usize {
        self.checked_items()
    }

    fn activate(&mut self, index: usize) {
        if index < self.list.visible_len() {
            self.toggle(index);
        } else if index == self.list.visible_len() {
            self.toggle_free_text();
        }
    }

    fn submit(&mut self, _highlighted: Option<usize>) {
        self.confirm();
    }

    fn dismiss(&mut self) {
        Self::dismiss(self);
    }

    fn is_closed(&self) -> bool {
        self.phase == MultiPhase::Closed
    }
}

#[cfg(test)]
#[path = "multi_tests.rs"]
mod multi_tests;
