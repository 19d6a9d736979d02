//! Item list model shared by both picker sessions
//!
//! Holds the original items, their cached search keys, the fixed display
//! order and the currently visible subset of that order.

use super::types::ItemRenderer;
use crate::engine::filter_positions;

pub(crate) struct ListModel<T> {
    items: Vec<T>,
    keys: Vec<String>,
    renderer: Option<ItemRenderer<T>>,
    /// Permutation of item positions, fixed once the session is set up
    order: Vec<usize>,
    /// Item positions matching the query, in display order
    visible: Vec<usize>,
    query: String,
}

impl<T> ListModel<T> {
    pub(crate) fn new(items: Vec<T>, search_key: &dyn Fn(&T) -> String) -> Self {
        let keys = items.iter().map(search_key).collect();
        let order: Vec<usize> = (0..items.len()).collect();
        let visible = order.clone();

        Self {
            items,
            keys,
            renderer: None,
            order,
            visible,
            query: String::new(),
        }
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn set_order(&mut self, order: Vec<usize>) {
        debug_assert_eq!(order.len(), self.items.len());
        self.order = order;
        self.refilter();
    }

    pub(crate) fn set_renderer(&mut self, renderer: ItemRenderer<T>) {
        self.renderer = Some(renderer);
    }

    pub(crate) fn query(&self) -> &str {
        &self.query
    }

    pub(crate) fn set_query(&mut self, query: &str) {
        if self.query != query {
            self.query = query.to_string();
            self.refilter();
        }
    }

    /// Recompute the visible subset from the full order
    fn refilter(&mut self) {
        let keys = &self.keys;
        self.visible = filter_positions(&self.order, &self.query, |idx: &usize| keys[*idx].clone())
            .into_iter()
            .map(|pos| self.order[pos])
            .collect();
    }

    pub(crate) fn total_len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Original position of the item shown at `position`
    pub(crate) fn item_at(&self, position: usize) -> Option<usize> {
        self.visible.get(position).copied()
    }

    pub(crate) fn visible(&self) -> Vec<&T> {
        self.visible.iter().map(|&idx| &self.items[idx]).collect()
    }

    pub(crate) fn ordered(&self) -> Vec<&T> {
        self.order.iter().map(|&idx| &self.items[idx]).collect()
    }

    pub(crate) fn label(&self, idx: usize) -> String {
        match &self.renderer {
            Some(render) => render(&self.items[idx]),
            None => self.keys[idx].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> ListModel<&'static str> {
        ListModel::new(vec!["apple", "banana", "cherry"], &|s: &&str| s.to_string())
    }

    #[test]
    fn test_refilter_from_full_order() {
        let mut list = model();
        list.set_order(vec![1, 0, 2]);

        list.set_query("a");
        assert_eq!(list.visible(), vec![&"banana", &"apple"]);

        list.set_query("ap");
        assert_eq!(list.visible(), vec![&"apple"]);

        // Deleting characters widens the view again
        list.set_query("a");
        assert_eq!(list.visible(), vec![&"banana", &"apple"]);

        list.set_query("");
        assert_eq!(list.visible(), vec![&"banana", &"apple", &"cherry"]);
    }

    #[test]
    fn test_item_at_maps_to_original_position() {
        let mut list = model();
        list.set_order(vec![2, 0, 1]);
        list.set_query("r");
        // "cherry" is the only match and lives at original position 2
        assert_eq!(list.item_at(0), Some(2));
        assert_eq!(list.item_at(1), None);
    }

    #[test]
    fn test_label_uses_renderer() {
        let mut list = model();
        assert_eq!(list.label(0), "apple");
        list.set_renderer(Box::new(|s: &&str| s.to_uppercase()));
        assert_eq!(list.label(0), "APPLE");
    }
}
