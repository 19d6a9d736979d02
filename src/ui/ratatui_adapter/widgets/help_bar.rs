//! Help bar widget for displaying keybind hints

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// A keybind hint to display in the help bar
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// Key combination (e.g., "TAB", "ctrl+u")
    pub key: String,
    /// Action description (e.g., "toggle", "clear query")
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint
    #[must_use]
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Help bar widget that displays keybind hints at the bottom
pub struct HelpBar<'a> {
    /// Hints to display
    hints: &'a [KeyHint],
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    /// Create a new help bar widget
    #[must_use]
    pub const fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for a picker
    #[must_use]
    pub fn default_hints(multi: bool, search: bool) -> Vec<KeyHint> {
        let mut hints = Vec::new();
        if multi {
            hints.push(KeyHint::new(if search { "TAB" } else { "TAB/SPACE" }, "toggle"));
            hints.push(KeyHint::new("Enter", "confirm"));
        } else {
            hints.push(KeyHint::new("Enter", "select"));
        }
        if search {
            hints.push(KeyHint::new("ctrl+u", "clear"));
        }
        hints.push(KeyHint::new("ESC", "cancel"));
        hints
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();

        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", self.theme.dimmed_style()));
            }
            spans.push(Span::styled(hint.key.as_str(), self.theme.cursor_style()));
            spans.push(Span::styled(":", self.theme.dimmed_style()));
            spans.push(Span::raw(hint.action.as_str()));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(hints: &[KeyHint]) -> Vec<&str> {
        hints.iter().map(|hint| hint.key.as_str()).collect()
    }

    #[test]
    fn test_default_hints() {
        assert_eq!(keys(&HelpBar::default_hints(false, true)), ["Enter", "ctrl+u", "ESC"]);
        assert_eq!(keys(&HelpBar::default_hints(true, true)), ["TAB", "Enter", "ctrl+u", "ESC"]);
        assert_eq!(keys(&HelpBar::default_hints(true, false)), ["TAB/SPACE", "Enter", "ESC"]);
    }
}
