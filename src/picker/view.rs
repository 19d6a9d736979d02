//! Frontend-facing view over a picker session
//!
//! Frontends (TUI, prompts, tests) drive a session only through
//! [`PickerView`], which hides the item type. Rows are numbered from the top
//! of the visible list; the free-text row, when offered, comes after the
//! last item row.

use super::types::PickerOptions;

/// A renderable row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Text to display
    pub label: String,
    /// Radio/checkbox state
    pub marked: bool,
    /// Whether this is the free-text row
    pub free_text: bool,
}

impl Row {
    /// Row for a list item
    #[must_use]
    pub fn item(label: impl Into<String>, marked: bool) -> Self {
        Self {
            label: label.into(),
            marked,
            free_text: false,
        }
    }

    /// Row offering the query as free text
    #[must_use]
    pub fn free_text(query: &str, marked: bool) -> Self {
        Self {
            label: format!("Use \"{query}\""),
            marked,
            free_text: true,
        }
    }
}

/// Type-erased interface a frontend uses to drive a picker session
pub trait PickerView {
    /// Presentation options
    fn options(&self) -> &PickerOptions;

    /// Whether rows toggle independently and need an explicit confirm
    fn is_multi(&self) -> bool;

    /// Current query
    fn query(&self) -> &str;

    /// Replace the query and refilter (ignored when search is disabled)
    fn set_query(&mut self, query: &str);

    /// Number of items in the session, ignoring the query
    fn total_items(&self) -> usize;

    /// Number of items matching the query
    fn visible_items(&self) -> usize;

    /// Item row at `position` among the visible items
    fn item_row(&self, position: usize) -> Option<Row>;

    /// The free-text row, when it is currently offered
    fn free_text_row(&self) -> Option<Row>;

    /// Number of selected items (multi-select), or 0/1 (single-select)
    fn selected_count(&self) -> usize;

    /// Choose (single) or toggle (multi) the row at `index`
    fn activate(&mut self, index: usize);

    /// Enter key: choose the highlighted row (single) or confirm (multi)
    fn submit(&mut self, highlighted: Option<usize>);

    /// Close without a result
    fn dismiss(&mut self);

    /// Whether the session has closed
    fn is_closed(&self) -> bool;

    /// Whether rows `a` and `b` stand for the same entry and toggle together
    fn shares_entry(&self, a: usize, b: usize) -> bool {
        a == b
    }

    /// Total number of rows, free-text row included
    fn row_count(&self) -> usize {
        self.visible_items() + usize::from(self.free_text_row().is_some())
    }

    /// Row at `index`, item or free text
    fn row(&self, index: usize) -> Option<Row> {
        let items = self.visible_items();
        if index < items {
            self.item_row(index)
        } else if index == items {
            self.free_text_row()
        } else {
            None
        }
    }
}
