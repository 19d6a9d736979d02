//! Search bar widget for query input

use crate::ui::ratatui_adapter::state::QueryInput;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with cursor
pub struct SearchBar<'a> {
    /// Query being edited
    query: &'a QueryInput,
    /// Block title, the input label when one is set
    label: &'a str,
    /// Placeholder shown while the query is empty
    hint: Option<&'a str>,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a QueryInput, theme: &'a Theme) -> Self {
        Self {
            query,
            label: "Search",
            hint: None,
            theme,
        }
    }

    /// Use `label` as the block title
    #[must_use]
    pub const fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Show `hint` while the query is empty
    #[must_use]
    pub const fn hint(mut self, hint: Option<&'a str>) -> Self {
        self.hint = hint;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.label);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));
        let mut spans = vec![Span::styled(">", self.theme.dimmed_style()), Span::raw(" ")];

        if self.query.is_empty() {
            spans.push(caret);
            if let Some(hint) = self.hint {
                spans.push(Span::styled(hint, self.theme.dimmed_style()));
            }
        } else {
            let (before, after) = self.query.text().split_at(self.query.cursor());
            spans.push(Span::raw(before));
            spans.push(caret);
            spans.push(Span::raw(after));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
