//! Picker entries read from text
//!
//! The command-line tool picks from lines of text. Each line becomes an
//! [`Entry`] with an identifier (tracked by multi-select) and a label
//! (shown, searched, and matched for single-select). Without a delimiter
//! both are the whole line.

use serde::Serialize;
use std::io::BufRead;
use thiserror::Error;

/// Errors that can occur while reading entries
#[derive(Debug, Error)]
pub enum EntryError {
    /// Reading the input failed
    #[error("Failed to read entries: {0}")]
    Io(#[from] std::io::Error),

    /// An empty delimiter would split every line at position 0
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,
}

/// One selectable line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Identifier used for multi-select tracking
    pub id: String,
    /// Text shown in the list and matched by the search
    pub label: String,
}

impl Entry {
    /// Create an entry with distinct id and label
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    /// Create an entry whose id is its label
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: text.clone(),
            label: text,
        }
    }

    /// Parse one line, splitting at the first `delimiter` if given
    ///
    /// Lines without the delimiter use the whole line for both fields.
    #[must_use]
    pub fn parse_line(line: &str, delimiter: Option<&str>) -> Self {
        match delimiter.and_then(|delim| line.split_once(delim)) {
            Some((id, label)) => Self::new(id, label),
            None => Self::plain(line),
        }
    }

    /// Search key accessor for pickers
    #[must_use]
    pub fn search_key(&self) -> String {
        self.label.clone()
    }

    /// Identifier accessor for pickers
    #[must_use]
    pub fn identifier(&self) -> String {
        self.id.clone()
    }
}

/// Read entries from `reader`, one per non-blank line
///
/// # Errors
///
/// Returns `EntryError::EmptyDelimiter` for `Some("")` and
/// `EntryError::Io` if reading fails.
pub fn read_entries(reader: impl BufRead, delimiter: Option<&str>) -> Result<Vec<Entry>, EntryError> {
    if delimiter.is_some_and(str::is_empty) {
        return Err(EntryError::EmptyDelimiter);
    }

    let mut entries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        entries.push(Entry::parse_line(line, delimiter));
    }
    Ok(entries)
}

/// Build entries from values given directly (e.g. positional arguments)
///
/// # Errors
///
/// Returns `EntryError::EmptyDelimiter` for `Some("")`.
pub fn entries_from_values(values: &[String], delimiter: Option<&str>) -> Result<Vec<Entry>, EntryError> {
    if delimiter.is_some_and(str::is_empty) {
        return Err(EntryError::EmptyDelimiter);
    }

    Ok(values
        .iter()
        .filter(|value| !value.trim().is_empty())
        .map(|value| Entry::parse_line(value, delimiter))
        .collect())
}
