//! Item list widget for displaying the visible rows of a picker

use crate::picker::{PickerView, Row};
use crate::ui::ratatui_adapter::state::ViewState;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Item list widget that displays rows with radio or checkbox marks
pub struct ItemList<'a> {
    /// Picker session being rendered
    view: &'a dyn PickerView,
    /// Cursor and scroll position
    state: &'a ViewState,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(view: &'a dyn PickerView, state: &'a ViewState, theme: &'a Theme) -> Self {
        let visible = view.visible_items();
        let total = view.total_items();
        let name = view.options().title.as_str();
        let title = if name.is_empty() {
            format!(" Items ({visible}/{total}) ")
        } else {
            format!(" {name} ({visible}/{total}) ")
        };

        Self {
            view,
            state,
            theme,
            title,
        }
    }

    /// Placeholder shown when there is nothing to pick
    fn empty_message(&self) -> &'static str {
        if self.view.total_items() == 0 {
            "No records"
        } else {
            "No matches"
        }
    }

    /// Render a single row
    fn render_row(&self, row: Row, is_cursor: bool) -> ListItem<'a> {
        let cursor_char = if is_cursor { ">" } else { " " };
        let mark = match (self.view.is_multi(), row.marked) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            (false, true) => "(•)",
            (false, false) => "( )",
        };
        let mark_style = if row.marked {
            self.theme.mark_style()
        } else {
            self.theme.dimmed_style()
        };
        let text_style = if row.free_text {
            self.theme.free_text_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(mark, mark_style),
            Span::raw(" "),
            Span::styled(row.label, text_style),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let row_count = self.view.row_count();
        if row_count == 0 {
            Paragraph::new(Line::styled(self.empty_message(), self.theme.dimmed_style()))
                .render(inner, buf);
            return;
        }

        let start = self.state.scroll_offset;
        let end = (start + inner.height as usize).min(row_count);

        let rows: Vec<ListItem> = (start..end)
            .filter_map(|index| {
                let row = self.view.row(index)?;
                Some(self.render_row(row, index == self.state.cursor))
            })
            .collect();

        List::new(rows).render(inner, buf);
    }
}
