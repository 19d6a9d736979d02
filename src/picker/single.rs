//! Single-select picker session
//!
//! ```text
//! Browsing ──choose(item)────▶ ItemChosen ─────┐
//!    │                                          ├─▶ Closed
//!    ├──choose_free_text()──▶ FreeTextChosen ──┘
//!    └──dismiss()────────────────────────────────▶ Closed (cancelled)
//! ```
//!
//! Choosing is final: there is no separate apply step, so the session
//! confirms and closes as part of the choice.

use super::list::ListModel;
use super::types::{FreeTextCallback, PickerOptions, PickerOutcome, SearchKeyFn};
use super::view::{PickerView, Row};
use crate::engine::{SingleSelection, find_by_key, single_order};

/// Lifecycle of a single-select session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinglePhase {
    /// Open, nothing chosen yet
    #[default]
    Browsing,
    /// A list item was chosen
    ItemChosen,
    /// The free-text row was chosen
    FreeTextChosen,
    /// Finished; the outcome is available
    Closed,
}

/// Single-select picker over items of type `T`
pub struct SingleSelect<T> {
    list: ListModel<T>,
    search_key: SearchKeyFn<T>,
    selection: SingleSelection,
    phase: SinglePhase,
    options: PickerOptions,
    on_free_text: Option<FreeTextCallback>,
    outcome: Option<PickerOutcome<T>>,
}

impl<T: Clone> SingleSelect<T> {
    /// Open a session over `items`, matched and filtered by `search_key`
    #[must_use]
    pub fn new(items: Vec<T>, search_key: impl Fn(&T) -> String + 'static) -> Self {
        let search_key: SearchKeyFn<T> = Box::new(search_key);
        let list = ListModel::new(items, &*search_key);

        Self {
            list,
            search_key,
            selection: SingleSelection::new(),
            phase: SinglePhase::Browsing,
            options: PickerOptions::default(),
            on_free_text: None,
            outcome: None,
        }
    }

    /// Pre-select an item and float it to the top
    ///
    /// The item is located by search key. If nothing matches, the list keeps
    /// its order and nothing is pre-selected.
    #[must_use]
    pub fn with_initial(mut self, initial: Option<T>) -> Self {
        let found = initial
            .as_ref()
            .and_then(|item| find_by_key(self.list.items(), item, &self.search_key));

        self.list
            .set_order(single_order(self.list.items(), initial.as_ref(), &self.search_key));
        self.selection = found.map_or_else(SingleSelection::new, SingleSelection::with_item);
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

    /// Register a callback fired with the query when free text is chosen
    #[must_use]
    pub fn on_free_text(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_free_text = Some(Box::new(callback));
        self
    }

    /// Update the query; ignored once closed or when search is disabled
    pub fn set_query(&mut self, query: &str) {
        if self.phase == SinglePhase::Browsing && self.options.search_enabled {
            self.list.set_query(query);
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
        self.phase == SinglePhase::Browsing
            && self.options.enable_free_text
            && !self.list.query().is_empty()
    }

    /// Choose the visible item at `position`; closes the session
    ///
    /// Returns `false` (and changes nothing) if the session is closed or the
    /// position is out of range.
    pub fn choose(&mut self, position: usize) -> bool {
        if self.phase != SinglePhase::Browsing {
            return false;
        }
        let Some(idx) = self.list.item_at(position) else {
            return false;
        };

        self.selection.select_item(idx);
        self.phase = SinglePhase::ItemChosen;
        self.confirm();
        true
    }

    /// Choose the query as free text; closes the session
    ///
    /// The free-text callback fires here, before the session closes.
    pub fn choose_free_text(&mut self) -> bool {
        if !self.free_text_available() {
            return false;
        }

        self.selection.select_free_text();
        self.phase = SinglePhase::FreeTextChosen;
        if let Some(callback) = self.on_free_text.as_mut() {
            callback(self.list.query());
        }
        self.confirm();
        true
    }

    /// Close without a result
    pub fn dismiss(&mut self) {
        if self.phase != SinglePhase::Closed {
            self.outcome = Some(PickerOutcome::Cancelled);
            self.phase = SinglePhase::Closed;
        }
    }

    fn confirm(&mut self) {
        let outcome = match self.phase {
            SinglePhase::ItemChosen => self
                .selection
                .item()
                .map_or(PickerOutcome::Cancelled, |idx| {
                    PickerOutcome::Item(self.list.items()[idx].clone())
                }),
            SinglePhase::FreeTextChosen => PickerOutcome::FreeText(self.list.query().to_string()),
            SinglePhase::Browsing | SinglePhase::Closed => PickerOutcome::Cancelled,
        };
        self.outcome = Some(outcome);
        self.phase = SinglePhase::Closed;
    }

    /// Current lifecycle phase
    #[must_use]
    pub const fn phase(&self) -> SinglePhase {
        self.phase
    }

    /// Current selection state
    #[must_use]
    pub const fn selection(&self) -> &SingleSelection {
        &self.selection
    }

    /// The currently selected item, if any
    #[must_use]
    pub fn selected_item(&self) -> Option<&T> {
        self.selection.item().map(|idx| &self.list.items()[idx])
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

impl<T: Clone> PickerView for SingleSelect<T> {
    fn options(&self) -> &PickerOptions {
        &self.options
    }

    fn is_multi(&self) -> bool {
        false
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
        Some(Row::item(self.list.label(idx), self.selection.item() == Some(idx)))
    }

    fn free_text_row(&self) -> Option<Row> {
        self.free_text_available()
            .then(|| Row::free_text(self.list.query(), self.selection.is_free_text()))
    }

    fn selected_count(&self) -> usize {
        usize::from(!self.selection.is_empty())
    }

    fn activate(&mut self, index: usize) {
        if index < self.list.visible_len() {
            self.choose(index);
        } else if index == self.list.visible_len() {
            self.choose_free_text();
        }
    }

    fn submit(&mut self, highlighted: Option<usize>) {
        if let Some(index) = highlighted {
            self.activate(index);
        }
    }

    fn dismiss(&mut self) {
        Self::dismiss(self);
    }

    fn is_closed(&self) -> bool {
        self.phase == SinglePhase::Closed
    }
}
