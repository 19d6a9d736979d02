//! Status bar widget for displaying messages

use crate::ui::output::MessageLevel;
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget showing the latest message and a selection summary
pub struct StatusBar<'a> {
    /// Most recent message, if any
    message: Option<&'a (MessageLevel, String)>,
    /// Right-hand summary, e.g. "2 selected"
    summary: &'a str,
    /// Theme for styling
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(
        message: Option<&'a (MessageLevel, String)>,
        summary: &'a str,
        theme: &'a Theme,
    ) -> Self {
        Self {
            message,
            summary,
            theme,
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
            MessageLevel::Warning => "⚠ ",
            MessageLevel::Info => "ℹ ",
            MessageLevel::Normal => "",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
            .split(inner);

        if let Some((level, text)) = self.message {
            let style = self.theme.message_style(*level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(*level), style),
                Span::styled(text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        Paragraph::new(Line::styled(self.summary, self.theme.dimmed_style()))
            .alignment(Alignment::Right)
            .render(chunks[1], buf);
    }
}
