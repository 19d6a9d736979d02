//! Selected-first ordering
//!
//! The display order of a picker is computed once, from the *initial*
//! selection, when the session opens. Toggling items afterwards changes
//! check marks only; the list never jumps around under the cursor.
//!
//! Orders are expressed as permutations of positions into the original
//! item list, which keeps the original list available for result ordering.

use std::collections::HashMap;

/// Initial selection handed to [`compute_ordered_list`]
#[derive(Debug)]
pub enum InitialSelection<'a, T> {
    /// Nothing is pre-selected
    None,
    /// Single-select: one item, matched against the list by search key
    Single(&'a T),
    /// Multi-select: items matched against the list by identifier
    Multi(&'a [T]),
}

/// Find the leftmost item whose search key equals `target`'s search key
pub fn find_by_key<T>(items: &[T], target: &T, search_key: impl Fn(&T) -> String) -> Option<usize> {
    let wanted = search_key(target);
    items.iter().position(|item| search_key(item) == wanted)
}

/// Display order for a single pre-selected item
///
/// The leftmost item sharing the selected item's search key moves to the
/// front and the rest keep their relative order. Without a selection, or
/// when nothing matches, the identity order is returned.
pub fn single_order<T>(items: &[T], selected: Option<&T>, search_key: impl Fn(&T) -> String) -> Vec<usize> {
    let mut order: Vec<usize> = (0..items.len()).collect();

    if let Some(pos) = selected.and_then(|selected| find_by_key(items, selected, &search_key)) {
        order.remove(pos);
        order.insert(0, pos);
    }

    order
}

/// Display order for a set of pre-selected items
///
/// Items whose identifier appears in `initial` come first, grouped in the
/// order of `initial`; within a group (items sharing an identifier) the
/// original order is kept. All other items follow in their original order.
/// Entries of `initial` that match nothing are ignored.
pub fn multi_order<T>(items: &[T], initial: &[T], identifier: impl Fn(&T) -> String) -> Vec<usize> {
    let mut by_id: HashMap<String, Vec<usize>> = HashMap::new();
    for (idx, item) in items.iter().enumerate() {
        by_id.entry(identifier(item)).or_default().push(idx);
    }

    let mut placed = vec![false; items.len()];
    let mut order = Vec::with_capacity(items.len());

    for wanted in initial {
        // Removing the bucket also skips repeated ids in `initial`
        if let Some(positions) = by_id.remove(&identifier(wanted)) {
            for idx in positions {
                placed[idx] = true;
                order.push(idx);
            }
        }
    }

    order.extend((0..items.len()).filter(|&idx| !placed[idx]));
    order
}

/// Reorder `items` so the initial selection comes first
///
/// Multi-select matching uses `identifier` when given and falls back to
/// `search_key` otherwise. The result is always a permutation of `items`.
pub fn compute_ordered_list<T: Clone>(
    items: &[T],
    selected: InitialSelection<'_, T>,
    search_key: impl Fn(&T) -> String,
    identifier: Option<&dyn Fn(&T) -> String>,
) -> Vec<T> {
    let order = match selected {
        InitialSelection::None => (0..items.len()).collect(),
        InitialSelection::Single(item) => single_order(items, Some(item), &search_key),
        InitialSelection::Multi(initial) => match identifier {
            Some(identifier) => multi_order(items, initial, identifier),
            None => multi_order(items, initial, &search_key),
        },
    };

    order.into_iter().map(|idx| items[idx].clone()).collect()
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod order_tests;
