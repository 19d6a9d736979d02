//! Host-facing types shared by both pickers

use serde::{Deserialize, Serialize};

/// Extracts the search key of an item (filtering and single-select matching)
pub type SearchKeyFn<T> = Box<dyn Fn(&T) -> String>;

/// Extracts the identifier of an item (multi-select tracking)
pub type IdentifierFn<T> = Box<dyn Fn(&T) -> String>;

/// Renders an item as the text shown in a list row
pub type ItemRenderer<T> = Box<dyn Fn(&T) -> String>;

/// Notified with the query the moment free text is chosen
pub type FreeTextCallback = Box<dyn FnMut(&str)>;

/// Decoration for the search field
///
/// The engine never looks inside this; frontends use it for presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDecoration {
    /// Title of the search field
    #[serde(default)]
    pub label: Option<String>,
    /// Placeholder shown while the query is empty
    #[serde(default)]
    pub hint: Option<String>,
}

impl InputDecoration {
    /// Decoration with a label
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            hint: None,
        }
    }

    /// Set placeholder text
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Presentation options for a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Title shown above the list
    pub title: String,
    /// Offer the query itself as a selectable row
    pub enable_free_text: bool,
    /// Show the search field; when off the query never changes
    pub search_enabled: bool,
    /// Search field decoration
    pub decoration: InputDecoration,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            enable_free_text: false,
            search_enabled: true,
            decoration: InputDecoration::default(),
        }
    }
}

impl PickerOptions {
    /// Options with a title and defaults otherwise
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Enable or disable the free-text row
    #[must_use]
    pub const fn with_free_text(mut self, enabled: bool) -> Self {
        self.enable_free_text = enabled;
        self
    }

    /// Enable or disable searching
    #[must_use]
    pub const fn with_search(mut self, enabled: bool) -> Self {
        self.search_enabled = enabled;
        self
    }

    /// Set the search field decoration
    #[must_use]
    pub fn with_decoration(mut self, decoration: InputDecoration) -> Self {
        self.decoration = decoration;
        self
    }
}

/// What a picker yields when it closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome<T> {
    /// Closed without a choice
    Cancelled,
    /// Single-select: the chosen item
    Item(T),
    /// Either picker: the query, chosen as free text
    FreeText(String),
    /// Multi-select: the confirmed items, in original list order
    Items(Vec<T>),
}

impl<T> PickerOutcome<T> {
    /// Whether the picker was closed without a result
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The free-text result, if that is what was chosen
    #[must_use]
    pub fn free_text(&self) -> Option<&str> {
        match self {
            Self::FreeText(text) => Some(text),
            _ => None,
        }
    }

    /// Flatten item results into a list (empty for cancel and free text)
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Item(item) => vec![item],
            Self::Items(items) => items,
            Self::Cancelled | Self::FreeText(_) => Vec::new(),
        }
    }
}
