//! Integration tests for pickr
//!
//! These tests drive picker sessions through the public API the way a host
//! application or the `pickr` binary does, without a terminal.

use pickr::engine::{InitialSelection, compute_ordered_list, filter};
use pickr::entry::{Entry, read_entries};
use pickr::output::outcome_lines;
use pickr::picker::{MultiSelect, PickerOptions, PickerOutcome, PickerView, SingleSelect};
use pickr::ui::{PickerFrontend, Result, pick_many, pick_one};
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u32,
    name: &'static str,
}

fn fruit() -> Vec<String> {
    ["apple", "banana", "cherry"].iter().map(ToString::to_string).collect()
}

fn letters() -> Vec<Item> {
    vec![
        Item { id: 1, name: "A" },
        Item { id: 2, name: "B" },
        Item { id: 3, name: "C" },
    ]
}

/// Frontend that types a query and then presses Enter on a row
struct TypeAndPick {
    query: &'static str,
    row: Option<usize>,
}

impl PickerFrontend for TypeAndPick {
    fn run(&self, view: &mut dyn PickerView) -> Result<()> {
        view.set_query(self.query);
        view.submit(self.row);
        Ok(())
    }
}

/// Frontend that presses Esc
struct Escape;

impl PickerFrontend for Escape {
    fn run(&self, view: &mut dyn PickerView) -> Result<()> {
        view.dismiss();
        Ok(())
    }
}

#[test]
fn test_scenario_a_filter_by_substring() {
    let ordered = compute_ordered_list(&fruit(), InitialSelection::None, String::clone, None);
    assert_eq!(filter(&ordered, "an", String::clone), ["banana"]);

    let mut picker = SingleSelect::new(fruit(), String::clone);
    picker.set_query("an");
    assert_eq!(picker.visible(), [&"banana".to_string()]);
}

#[test]
fn test_scenario_b_selected_first() {
    let picker = SingleSelect::new(fruit(), String::clone).with_initial(Some("banana".to_string()));

    let ordered: Vec<&str> = picker.ordered().into_iter().map(String::as_str).collect();
    assert_eq!(ordered, ["banana", "apple", "cherry"]);
    assert_eq!(picker.visible(), picker.ordered());
}

#[test]
fn test_scenario_c_multi_confirm_keeps_input_order() {
    let mut picker = MultiSelect::new(letters(), |item: &Item| item.name.to_string(), |item: &Item| {
        item.id.to_string()
    })
    .with_initial(vec![Item { id: 2, name: "B" }]);

    assert!(picker.toggle_id("3"));
    picker.confirm();

    let outcome = picker.into_outcome();
    assert_eq!(
        outcome,
        PickerOutcome::Items(vec![Item { id: 2, name: "B" }, Item { id: 3, name: "C" }])
    );
}

#[test]
fn test_scenario_d_free_text_through_frontend() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);

    let picker = SingleSelect::new(fruit(), String::clone)
        .with_options(PickerOptions::new("Fruit").with_free_text(true))
        .on_free_text(move |text| log.borrow_mut().push(text.to_string()));

    // No item matches, so the free-text row is row 0
    let outcome = pick_one(&TypeAndPick { query: "xyz", row: Some(0) }, picker).unwrap();

    assert_eq!(outcome, PickerOutcome::FreeText("xyz".to_string()));
    assert_eq!(*seen.borrow(), ["xyz"]);
}

#[test]
fn test_scenario_e_empty_list() {
    let mut picker = MultiSelect::new(Vec::<String>::new(), String::clone, String::clone);
    assert_eq!(picker.row_count(), 0);
    assert_eq!(picker.total_items(), 0);

    picker.confirm();
    assert_eq!(picker.into_outcome(), PickerOutcome::Items(Vec::new()));
}

#[test]
fn test_escape_cancels() {
    let picker = SingleSelect::new(fruit(), String::clone);
    assert!(pick_one(&Escape, picker).unwrap().is_cancelled());

    let picker = MultiSelect::new(fruit(), String::clone, String::clone).with_initial(fruit());
    assert!(pick_many(&Escape, picker).unwrap().is_cancelled());
}

#[test]
fn test_enter_on_filtered_row() {
    let picker = SingleSelect::new(fruit(), String::clone);
    let outcome = pick_one(&TypeAndPick { query: "ERR", row: Some(0) }, picker).unwrap();
    assert_eq!(outcome, PickerOutcome::Item("cherry".to_string()));
}

#[test]
fn test_multi_enter_confirms_hidden_selections() {
    let picker = MultiSelect::new(fruit(), String::clone, String::clone)
        .with_initial(vec!["cherry".to_string(), "apple".to_string()]);

    // The query hides both checked items; Enter still confirms them
    let outcome = pick_many(&TypeAndPick { query: "ban", row: Some(0) }, picker).unwrap();
    assert_eq!(
        outcome,
        PickerOutcome::Items(vec!["apple".to_string(), "cherry".to_string()])
    );
}

#[test]
fn test_entries_pipeline() {
    let input = Cursor::new("1\tAlice\n2\tBob\n\n3\tCarol\r\n");
    let entries = read_entries(input, Some("\t")).unwrap();
    assert_eq!(entries.len(), 3);

    let mut picker = MultiSelect::new(entries, Entry::search_key, Entry::identifier)
        .with_initial(vec![Entry::new("3", "3")]);

    // Pre-selected entry floats to the top
    assert_eq!(picker.visible()[0].label, "Carol");

    picker.set_query("ali");
    assert!(picker.toggle(0));
    picker.confirm();

    let outcome = picker.into_outcome();
    let ids = outcome_lines(&outcome, true, false).unwrap().unwrap();
    assert_eq!(ids, ["1", "3"]);

    let json = outcome_lines(&outcome, false, true).unwrap().unwrap();
    assert_eq!(
        json,
        [r#"{"kind":"items","items":[{"id":"1","label":"Alice"},{"id":"3","label":"Carol"}]}"#]
    );
}
