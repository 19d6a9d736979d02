//! Color theme definitions for the ratatui TUI
//!
//! Defines colors and styles used throughout the picker.

use crate::ui::output::MessageLevel;
use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for radio/checkbox marks
    pub mark: Color,
    /// Color for the free-text row
    pub free_text: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for warning messages
    pub warning: Color,
    /// Color for info messages
    pub info: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            cursor: Color::Cyan,
            mark: Color::Green,
            free_text: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            info: Color::Cyan,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for rows that are not highlighted
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a set radio/checkbox mark
    #[must_use]
    pub fn mark_style(&self) -> Style {
        Style::default().fg(self.mark).add_modifier(Modifier::BOLD)
    }

    /// Style for the free-text row label
    #[must_use]
    pub fn free_text_style(&self) -> Style {
        Style::default()
            .fg(self.free_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Style for a status message of `level`
    #[must_use]
    pub fn message_style(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => Style::default().fg(self.success),
            MessageLevel::Error => Style::default().fg(self.error),
            MessageLevel::Warning => Style::default().fg(self.warning),
            MessageLevel::Info => Style::default().fg(self.info),
            MessageLevel::Normal => self.normal_style(),
        }
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
