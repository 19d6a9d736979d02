//! Event handling for the ratatui TUI
//!
//! Maps keyboard and mouse events to cursor movement, query edits and
//! picker actions. Picker actions are returned to the frontend, which
//! forwards them to the session.

use super::state::ViewState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query changed, the session needs the new text
    QueryChanged,
    /// Activate the highlighted row (single) or confirm (multi)
    Submit,
    /// Toggle the highlighted row, then move the cursor
    Toggle {
        /// Move down after toggling, otherwise up
        forward: bool,
    },
    /// Close the picker without a result
    Abort,
    /// No action taken
    Ignored,
}

/// What the key handler needs to know about the open picker
#[derive(Debug, Clone, Copy)]
pub struct KeyContext {
    /// Multi-select session
    pub multi: bool,
    /// Query line is editable
    pub search: bool,
    /// Rows currently shown
    pub rows: usize,
}

/// Handle a key press
pub fn handle_key(state: &mut ViewState, key: KeyEvent, ctx: KeyContext) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Submit,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k' | 'p'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j' | 'n'), KeyModifiers::CONTROL) => {
            state.cursor_down(ctx.rows);
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down(ctx.rows);
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end(ctx.rows);
            EventResult::Continue
        }

        // Multi-select
        (KeyCode::Tab, _) if ctx.multi => EventResult::Toggle { forward: true },
        (KeyCode::BackTab, _) if ctx.multi => EventResult::Toggle { forward: false },
        (KeyCode::Char(' '), _) if ctx.multi && !ctx.search => {
            EventResult::Toggle { forward: true }
        }

        // Query editing
        _ if ctx.search => handle_query_key(state, key),

        _ => EventResult::Ignored,
    }
}

/// Handle keys that edit the query line
fn handle_query_key(state: &mut ViewState, key: KeyEvent) -> EventResult {
    let changed = |edited: bool| {
        if edited {
            EventResult::QueryChanged
        } else {
            EventResult::Ignored
        }
    };

    match (key.code, key.modifiers) {
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.query.push(c);
            EventResult::QueryChanged
        }
        (KeyCode::Backspace, _) => changed(state.query.backspace()),
        (KeyCode::Delete, _) => changed(state.query.delete()),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => changed(state.query.clear()),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => changed(state.query.delete_word()),
        (KeyCode::Left, _) => {
            state.query.left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query.right();
            EventResult::Continue
        }
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
            state.query.home();
            EventResult::Continue
        }
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            state.query.end();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
fn handle_mouse(state: &mut ViewState, mouse: MouseEvent, rows: usize) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down(rows);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    state: &mut ViewState,
    ctx: KeyContext,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => handle_key(state, key, ctx),
        Event::Mouse(mouse) => handle_mouse(state, mouse, ctx.rows),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
