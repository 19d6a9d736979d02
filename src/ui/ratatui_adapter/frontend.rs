//! Ratatui-based picker frontend
//!
//! Implements [`PickerFrontend`] with a full-screen TUI drawn on stderr, so
//! stdout stays free for the picked result.

use super::events::{EventResult, KeyContext, poll_and_handle};
use super::state::ViewState;
use super::theme::Theme;
use super::widgets::{HelpBar, ItemList, KeyHint, SearchBar, StatusBar};
use crate::picker::PickerView;
use crate::ui::error::{Result, UiError};
use crate::ui::output::{OutputWriter, StatusBarWriter, StderrWriter, write_at};
use crate::ui::traits::PickerFrontend;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stderr};
use std::time::{Duration, Instant};

/// Ratatui-based picker frontend
#[derive(Debug, Clone, Default)]
pub struct RatatuiFrontend {
    theme: Theme,
    /// Messages shown in the status bar, typically shared with the free-text callback
    status: Option<StatusBarWriter>,
}

impl RatatuiFrontend {
    /// Create a new ratatui frontend
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show messages written to `status` in the status bar
    #[must_use]
    pub fn with_status(mut self, status: StatusBarWriter) -> Self {
        self.status = Some(status);
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        if !io::stderr().is_terminal() {
            return Err(UiError::InvalidConfig(
                "the TUI needs a terminal on stderr, try --backend prompt".to_string(),
            ));
        }
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), LeaveAlternateScreen)?;
        Ok(())
    }

    /// Draw one frame
    fn render(
        &self,
        frame: &mut Frame,
        view: &dyn PickerView,
        state: &mut ViewState,
        hints: &[KeyHint],
    ) {
        let options = view.options();
        let search_height = if options.search_enabled { 3 } else { 0 };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(search_height), // Search bar
                Constraint::Min(3),                // Items
                Constraint::Length(3),             // Status bar
                Constraint::Length(1),             // Help bar
            ])
            .split(frame.area());

        state.visible_height = layout[1].height.saturating_sub(2) as usize;
        state.clamp(view.row_count());

        if options.search_enabled {
            let decoration = &options.decoration;
            let search_bar = SearchBar::new(&state.query, &self.theme)
                .label(decoration.label.as_deref().unwrap_or("Search"))
                .hint(decoration.hint.as_deref());
            frame.render_widget(search_bar, layout[0]);
        }

        frame.render_widget(ItemList::new(view, state, &self.theme), layout[1]);

        let message = self.status.as_ref().and_then(StatusBarWriter::latest_message);
        let summary = if view.is_multi() {
            format!("{} selected", view.selected_count())
        } else {
            String::new()
        };
        frame.render_widget(StatusBar::new(message.as_ref(), &summary, &self.theme), layout[2]);

        frame.render_widget(HelpBar::new(hints, &self.theme), layout[3]);
    }

    /// Main event loop, runs until the session closes
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        view: &mut dyn PickerView,
        last_frame: &mut Instant,
    ) -> Result<()> {
        let multi = view.is_multi();
        let search = view.options().search_enabled;
        let hints = HelpBar::default_hints(multi, search);
        let mut state = ViewState::new(view.query());

        while !view.is_closed() {
            let shown: &dyn PickerView = view;
            terminal.draw(|frame| self.render(frame, shown, &mut state, &hints))?;
            *last_frame = Instant::now();

            let rows = view.row_count();
            let ctx = KeyContext {
                multi,
                search,
                rows,
            };

            match poll_and_handle(&mut state, ctx, Duration::from_millis(50))? {
                EventResult::QueryChanged => {
                    view.set_query(state.query.text());
                    state.clamp(view.row_count());
                }
                EventResult::Submit => view.submit(state.highlighted(rows)),
                EventResult::Toggle { forward } => {
                    if let Some(index) = state.highlighted(rows) {
                        view.activate(index);
                    }
                    if forward {
                        state.cursor_down(view.row_count());
                    } else {
                        state.cursor_up();
                    }
                }
                EventResult::Abort => view.dismiss(),
                EventResult::Continue | EventResult::Ignored => {}
            }
        }

        Ok(())
    }
}

impl PickerFrontend for RatatuiFrontend {
    fn run(&self, view: &mut dyn PickerView) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let mut last_frame = Instant::now();
        let result = self.run_loop(&mut terminal, view, &mut last_frame);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        self.report_unseen(&StderrWriter::new(), last_frame);
        result
    }
}

impl RatatuiFrontend {
    /// Forward status messages written after the last drawn frame to `output`
    ///
    /// A session that closes on a keypress never draws the messages its
    /// callbacks wrote while closing.
    fn report_unseen(&self, output: &dyn OutputWriter, last_frame: Instant) {
        let Some(status) = &self.status else {
            return;
        };
        for (level, message) in status.messages_since(last_frame) {
            write_at(output, level, &message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::{PickerOptions, SingleSelect};
    use crate::ui::output::MessageLevel;

    #[test]
    fn test_report_unseen_forwards_closing_notice() {
        let status = StatusBarWriter::new();
        let frontend = RatatuiFrontend::new().with_status(status.clone());

        let notices = status.clone();
        let mut picker = SingleSelect::new(vec!["apple".to_string()], String::clone)
            .with_options(PickerOptions::default().with_free_text(true))
            .on_free_text(move |text: &str| notices.info(&format!("Free text \"{text}\" selected")));

        let last_frame = Instant::now();
        std::thread::sleep(Duration::from_millis(5));
        picker.set_query("zzz");
        picker.activate(0);
        assert!(picker.is_closed());

        let stderr = StatusBarWriter::new();
        frontend.report_unseen(&stderr, last_frame);
        assert_eq!(
            stderr.recent_messages(),
            [(MessageLevel::Info, "Free text \"zzz\" selected".to_string())]
        );
    }

    #[test]
    fn test_report_unseen_skips_drawn_messages() {
        let status = StatusBarWriter::new();
        let frontend = RatatuiFrontend::new().with_status(status.clone());
        status.warning("already on screen");

        let stderr = StatusBarWriter::new();
        frontend.report_unseen(&stderr, Instant::now());
        assert_eq!(stderr.message_count(), 0);
    }

    #[test]
    fn test_report_unseen_without_status() {
        let stderr = StatusBarWriter::new();
        RatatuiFrontend::new().report_unseen(&stderr, Instant::now());
        assert_eq!(stderr.message_count(), 0);
    }
}
