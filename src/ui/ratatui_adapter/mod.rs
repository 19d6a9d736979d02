//! Ratatui-based picker frontend
//!
//! Draws a picker session as a full-screen TUI: a search bar on top, the
//! item rows with radio or checkbox marks, a status bar and a key hint line.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiFrontend                   │
//! │  (implements PickerFrontend trait)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ PickerView │ │  Ratatui  │ │ Crossterm │
//! │ (session)  │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```

mod events;
mod frontend;
mod state;
mod theme;
pub mod widgets;

pub use frontend::RatatuiFrontend;
pub use state::{QueryInput, ViewState};
pub use theme::Theme;
