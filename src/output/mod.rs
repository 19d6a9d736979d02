//! Output formatting for picker results
//!
//! Results go to stdout one value per line, or as a single JSON object
//! with `--json`. A cancelled picker prints nothing.

use crate::entry::Entry;
use crate::picker::PickerOutcome;
use serde::Serialize;

/// JSON shape of a finished picker
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum JsonResult<'a> {
    /// Single-select chose an entry
    Item(&'a Entry),
    /// The typed query was chosen
    FreeText {
        /// The query as typed
        text: &'a str,
    },
    /// Multi-select confirmed these entries, in input order
    Items {
        /// Chosen entries
        items: &'a [Entry],
    },
}

impl<'a> JsonResult<'a> {
    /// JSON view of `outcome`, `None` when it was cancelled
    #[must_use]
    pub fn from_outcome(outcome: &'a PickerOutcome<Entry>) -> Option<Self> {
        match outcome {
            PickerOutcome::Cancelled => None,
            PickerOutcome::Item(entry) => Some(Self::Item(entry)),
            PickerOutcome::FreeText(text) => Some(Self::FreeText { text }),
            PickerOutcome::Items(items) => Some(Self::Items { items }),
        }
    }
}

/// Lines to print for `outcome`, `None` when it was cancelled
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn outcome_lines(
    outcome: &PickerOutcome<Entry>,
    print_id: bool,
    json: bool,
) -> Result<Option<Vec<String>>, serde_json::Error> {
    if json {
        return JsonResult::from_outcome(outcome)
            .map(|result| serde_json::to_string(&result).map(|line| vec![line]))
            .transpose();
    }

    let value = |entry: &Entry| {
        if print_id {
            entry.id.clone()
        } else {
            entry.label.clone()
        }
    };

    let lines = match outcome {
        PickerOutcome::Cancelled => return Ok(None),
        PickerOutcome::Item(entry) => vec![value(entry)],
        PickerOutcome::FreeText(text) => vec![text.clone()],
        PickerOutcome::Items(items) => items.iter().map(value).collect(),
    };
    Ok(Some(lines))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let outcome = PickerOutcome::Item(Entry::new("b", "banana"));
        assert_eq!(outcome_lines(&outcome, false, false).unwrap(), Some(vec!["banana".to_string()]));
        assert_eq!(outcome_lines(&outcome, true, false).unwrap(), Some(vec!["b".to_string()]));

        let outcome = PickerOutcome::Items(vec![Entry::plain("red"), Entry::plain("blue")]);
        assert_eq!(
            outcome_lines(&outcome, false, false).unwrap(),
            Some(vec!["red".to_string(), "blue".to_string()])
        );
    }

    #[test]
    fn test_free_text_ignores_print_id() {
        let outcome = PickerOutcome::FreeText("xyz".to_string());
        assert_eq!(outcome_lines(&outcome, true, false).unwrap(), Some(vec!["xyz".to_string()]));
    }

    #[test]
    fn test_cancelled_prints_nothing() {
        let outcome = PickerOutcome::<Entry>::Cancelled;
        assert_eq!(outcome_lines(&outcome, false, false).unwrap(), None);
        assert_eq!(outcome_lines(&outcome, false, true).unwrap(), None);
    }

    #[test]
    fn test_json_shapes() {
        let item = PickerOutcome::Item(Entry::new("b", "banana"));
        assert_eq!(
            outcome_lines(&item, false, true).unwrap(),
            Some(vec![r#"{"kind":"item","id":"b","label":"banana"}"#.to_string()])
        );

        let free = PickerOutcome::FreeText("xyz".to_string());
        assert_eq!(
            outcome_lines(&free, false, true).unwrap(),
            Some(vec![r#"{"kind":"free_text","text":"xyz"}"#.to_string()])
        );

        let none = PickerOutcome::<Entry>::Items(Vec::new());
        assert_eq!(
            outcome_lines(&none, false, true).unwrap(),
            Some(vec![r#"{"kind":"items","items":[]}"#.to_string()])
        );
    }
}
