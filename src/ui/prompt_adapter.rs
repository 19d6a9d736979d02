//! Line-oriented picker frontend using dialoguer
//!
//! For terminals where a full-screen TUI is unwanted: the query is read as a
//! line of text, then the matching rows are offered in a dialoguer
//! `Select` (single) or `MultiSelect` (multi) prompt.

use super::error::Result;
use super::output::{OutputWriter, StderrWriter};
use super::traits::PickerFrontend;
use crate::picker::PickerView;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use std::sync::Arc;

/// Dialoguer-based picker frontend
pub struct PromptFrontend {
    theme: ColorfulTheme,
    output: Arc<dyn OutputWriter>,
}

impl PromptFrontend {
    /// Create a new prompt frontend reporting to stderr
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            output: Arc::new(StderrWriter::new()),
        }
    }

    /// Report empty lists through `output`
    #[must_use]
    pub fn with_output(mut self, output: Arc<dyn OutputWriter>) -> Self {
        self.output = output;
        self
    }

    /// Ask for the query, starting from the session's current one
    fn prompt_query(&self, view: &mut dyn PickerView) -> Result<()> {
        let decoration = &view.options().decoration;
        let label = decoration.label.as_deref().unwrap_or("Search");
        let prompt = match decoration.hint.as_deref() {
            Some(hint) => format!("{label} ({hint})"),
            None => label.to_string(),
        };

        let query = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(view.query())
            .allow_empty(true)
            .interact_text()?;
        view.set_query(&query);
        Ok(())
    }

    fn prompt_title(view: &dyn PickerView) -> String {
        let title = &view.options().title;
        if title.is_empty() {
            "Select".to_string()
        } else {
            title.clone()
        }
    }

    fn run_single(&self, view: &mut dyn PickerView) -> Result<()> {
        let (labels, marks) = row_labels(view);
        if labels.is_empty() {
            self.output.warning(empty_message(view));
            view.dismiss();
            return Ok(());
        }

        let default = marks.iter().position(|marked| *marked).unwrap_or(0);
        let choice = Select::with_theme(&self.theme)
            .with_prompt(Self::prompt_title(view))
            .items(&labels)
            .default(default)
            .interact_opt()?;

        match choice {
            Some(index) => view.activate(index),
            None => view.dismiss(),
        }
        Ok(())
    }

    fn run_multi(&self, view: &mut dyn PickerView) -> Result<()> {
        let (labels, marks) = row_labels(view);
        if labels.is_empty() {
            self.output.warning(empty_message(view));
            view.submit(None);
            return Ok(());
        }

        let chosen = MultiSelect::with_theme(&self.theme)
            .with_prompt(Self::prompt_title(view))
            .items(&labels)
            .defaults(&marks)
            .interact_opt()?;

        match chosen {
            Some(chosen) => {
                apply_checks(view, &chosen);
                view.submit(None);
            }
            None => view.dismiss(),
        }
        Ok(())
    }
}

impl Default for PromptFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerFrontend for PromptFrontend {
    fn run(&self, view: &mut dyn PickerView) -> Result<()> {
        if view.options().search_enabled {
            self.prompt_query(view)?;
        }

        if view.is_multi() {
            self.run_multi(view)
        } else {
            self.run_single(view)
        }
    }
}

/// Labels and marks of every row currently shown
fn row_labels(view: &dyn PickerView) -> (Vec<String>, Vec<bool>) {
    (0..view.row_count())
        .filter_map(|index| view.row(index))
        .map(|row| (row.label, row.marked))
        .unzip()
}

fn empty_message(view: &dyn PickerView) -> &'static str {
    if view.total_items() == 0 {
        "No records"
    } else {
        "No matches"
    }
}

/// Toggle rows until exactly the `chosen` entries are marked
///
/// A row is wanted when any row of the same entry was chosen. Marks are
/// re-read after every toggle since such rows flip together.
fn apply_checks(view: &mut dyn PickerView, chosen: &[usize]) {
    for index in 0..view.row_count() {
        let wanted = chosen.iter().any(|&pick| view.shares_entry(index, pick));
        if view.row(index).is_some_and(|row| row.marked != wanted) {
            view.activate(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{MultiSelect as MultiPicker, PickerOptions, SingleSelect};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_row_labels_include_free_text() {
        let mut picker = SingleSelect::new(words(&["apple", "grape"]), String::clone)
            .with_options(PickerOptions::default().with_free_text(true));
        picker.set_query("ap");

        let (labels, marks) = row_labels(&picker);
        assert_eq!(labels, ["apple", "grape", "Use \"ap\""]);
        assert_eq!(marks, [false, false, false]);
    }

    #[test]
    fn test_apply_checks() {
        let mut picker = MultiPicker::new(words(&["a", "b", "c"]), String::clone, String::clone)
            .with_initial(words(&["a"]));

        apply_checks(&mut picker, &[1, 2]);

        let (_, marks) = row_labels(&picker);
        assert_eq!(marks, [false, true, true]);
    }

    #[test]
    fn test_apply_checks_with_shared_identifier() {
        let items = vec![
            ("x".to_string(), "one".to_string()),
            ("x".to_string(), "two".to_string()),
        ];
        let mut picker = MultiPicker::new(
            items,
            |item: &(String, String)| item.1.clone(),
            |item: &(String, String)| item.0.clone(),
        );

        // Both rows share an id, so checking the first checks the second too
        apply_checks(&mut picker, &[0, 1]);

        let (_, marks) = row_labels(&picker);
        assert_eq!(marks, [true, true]);
    }

    #[test]
    fn test_apply_checks_one_of_shared_identifier() {
        let items = vec![
            ("x".to_string(), "one".to_string()),
            ("x".to_string(), "two".to_string()),
            ("y".to_string(), "three".to_string()),
        ];
        let mut picker = MultiPicker::new(
            items,
            |item: &(String, String)| item.1.clone(),
            |item: &(String, String)| item.0.clone(),
        );

        apply_checks(&mut picker, &[0]);

        let (_, marks) = row_labels(&picker);
        assert_eq!(marks, [true, true, false]);
        assert_eq!(picker.selected_count(), 2);
    }

    #[test]
    fn test_apply_checks_unchecks_shared_identifier() {
        let items = vec![
            ("x".to_string(), "one".to_string()),
            ("x".to_string(), "two".to_string()),
            ("y".to_string(), "three".to_string()),
        ];
        let mut picker = MultiPicker::new(
            items,
            |item: &(String, String)| item.1.clone(),
            |item: &(String, String)| item.0.clone(),
        )
        .with_initial(vec![("x".to_string(), "one".to_string())]);

        apply_checks(&mut picker, &[2]);

        let (labels, marks) = row_labels(&picker);
        assert_eq!(labels, ["one", "two", "three"]);
        assert_eq!(marks, [false, false, true]);
    }

    #[test]
    fn test_empty_message() {
        let empty = SingleSelect::new(Vec::<String>::new(), String::clone);
        assert_eq!(empty_message(&empty), "No records");

        let mut picker = SingleSelect::new(words(&["apple"]), String::clone);
        picker.set_query("zzz");
        assert_eq!(empty_message(&picker), "No matches");
    }
}
