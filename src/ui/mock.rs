//! Scripted frontend for testing
//!
//! Replays a fixed sequence of user actions against a picker view, so host
//! wiring can be tested without a terminal.

use super::error::Result;
use super::traits::PickerFrontend;
use crate::picker::PickerView;

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Replace the query
    Query(String),
    /// Activate the row at this index
    Activate(usize),
    /// Activate the free-text row, wherever it currently is
    ActivateFreeText,
    /// Press Enter with this row highlighted
    Submit(Option<usize>),
    /// Press Escape
    Dismiss,
}

/// Frontend that replays [`ScriptStep`]s and then stops
///
/// Steps after the view closes are skipped. A script that never closes the
/// view leaves it open, which callers see as a cancel.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFrontend {
    steps: Vec<ScriptStep>,
}

impl ScriptedFrontend {
    /// Create a frontend from a script
    #[must_use]
    pub fn new(steps: Vec<ScriptStep>) -> Self {
        Self { steps }
    }
}

impl PickerFrontend for ScriptedFrontend {
    fn run(&self, view: &mut dyn PickerView) -> Result<()> {
        for step in &self.steps {
            if view.is_closed() {
                break;
            }
            match step {
                ScriptStep::Query(query) => view.set_query(query),
                ScriptStep::Activate(index) => view.activate(*index),
                ScriptStep::ActivateFreeText => {
                    if view.free_text_row().is_some() {
                        view.activate(view.visible_items());
                    }
                }
                ScriptStep::Submit(highlighted) => view.submit(*highlighted),
                ScriptStep::Dismiss => view.dismiss(),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{MultiSelect, PickerOptions, PickerOutcome, SingleSelect};
    use crate::ui::{pick_many, pick_one};

    fn fruits() -> Vec<String> {
        vec!["apple".into(), "banana".into(), "cherry".into()]
    }

    #[test]
    fn test_scripted_single_choice() {
        let frontend = ScriptedFrontend::new(vec![
            ScriptStep::Query("err".into()),
            ScriptStep::Submit(Some(0)),
        ]);
        let outcome = pick_one(&frontend, SingleSelect::new(fruits(), String::clone)).unwrap();
        assert_eq!(outcome, PickerOutcome::Item("cherry".to_string()));
    }

    #[test]
    fn test_scripted_free_text() {
        let frontend = ScriptedFrontend::new(vec![
            ScriptStep::Query("kiwi".into()),
            ScriptStep::ActivateFreeText,
        ]);
        let picker = SingleSelect::new(fruits(), String::clone)
            .with_options(PickerOptions::new("Fruit").with_free_text(true));
        let outcome = pick_one(&frontend, picker).unwrap();
        assert_eq!(outcome.free_text(), Some("kiwi"));
    }

    #[test]
    fn test_scripted_multi_confirm() {
        let frontend = ScriptedFrontend::new(vec![
            ScriptStep::Activate(2),
            ScriptStep::Activate(0),
            ScriptStep::Submit(None),
            ScriptStep::Activate(1),
        ]);
        let outcome = pick_many(&frontend, MultiSelect::new(fruits(), String::clone, String::clone))
            .unwrap();
        assert_eq!(
            outcome,
            PickerOutcome::Items(vec!["apple".to_string(), "cherry".to_string()])
        );
    }

    #[test]
    fn test_unfinished_script_is_cancel() {
        let frontend = ScriptedFrontend::new(vec![ScriptStep::Activate(0)]);
        let outcome = pick_many(&frontend, MultiSelect::new(fruits(), String::clone, String::clone))
            .unwrap();
        assert!(outcome.is_cancelled());
    }

    #[test]
    fn test_dismiss() {
        let frontend = ScriptedFrontend::new(vec![ScriptStep::Dismiss, ScriptStep::Submit(Some(0))]);
        let outcome = pick_one(&frontend, SingleSelect::new(fruits(), String::clone)).unwrap();
        assert!(outcome.is_cancelled());
    }
}
