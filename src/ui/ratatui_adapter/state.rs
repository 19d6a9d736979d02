//! View state for the ratatui TUI
//!
//! Everything the terminal needs that is not picker state: the editable
//! query line, the list cursor and the scroll window. Picker state itself
//! lives in the session behind [`crate::picker::PickerView`].

/// Editable single-line query with a byte-offset cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    /// Start with `text`, cursor at the end
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.len(),
        }
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position (byte offset, always on a char boundary)
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor
    pub fn push(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Remove the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    /// Remove the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    /// Move the cursor one character left
    pub fn left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the cursor one character right
    pub fn right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.text.len(), |(i, _)| self.cursor + i);
        }
    }

    /// Move the cursor to the start
    pub const fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end
    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Clear the text
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    /// Delete the word before the cursor
    pub fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let trimmed = self.text[..self.cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.text.drain(start..self.cursor);
        self.cursor = start;
        true
    }
}

/// Terminal-side state of an open picker
#[derive(Debug, Clone)]
pub struct ViewState {
    /// Query being edited
    pub query: QueryInput,
    /// Highlighted row
    pub cursor: usize,
    /// First row shown in the list area
    pub scroll_offset: usize,
    /// Rows that fit in the list area (set during render)
    pub visible_height: usize,
}

impl ViewState {
    /// Create view state with an initial query
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            query: QueryInput::new(query),
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Updated during render
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down, staying within `rows`
    pub const fn cursor_down(&mut self, rows: usize) {
        if self.cursor + 1 < rows {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self, rows: usize) {
        let max_cursor = rows.saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first row
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last row
    pub const fn jump_to_end(&mut self, rows: usize) {
        self.cursor = rows.saturating_sub(1);
        self.adjust_scroll();
    }

    /// Keep the cursor inside `rows` after the row set changed
    pub fn clamp(&mut self, rows: usize) {
        if self.cursor >= rows {
            self.cursor = rows.saturating_sub(1);
        }
        self.scroll_offset = self.scroll_offset.min(self.cursor);
        self.adjust_scroll();
    }

    /// Highlighted row, if there are any rows
    #[must_use]
    pub const fn highlighted(&self, rows: usize) -> Option<usize> {
        if self.cursor < rows { Some(self.cursor) } else { None }
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }
}
