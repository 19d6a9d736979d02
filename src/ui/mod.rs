//! UI abstraction layer
//!
//! Frontends drive picker sessions through the object-safe
//! [`crate::picker::PickerView`] trait, so the same frontend serves both
//! pickers and any item type.
//!
//! # Core Traits
//!
//! - **`PickerFrontend`** - Runs a picker session until it closes
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Picker Sessions                    │
//! │   (SingleSelect, MultiSelect)           │
//! └────────────────┬────────────────────────┘
//!                  │ Exposed as PickerView
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      PickerFrontend                     │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ PromptFrontend│  │ RatatuiFrontend   │
//! │ (dialoguer)   │  │ (default)         │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Frontend
//!
//! ```
//! use pickr::picker::{PickerOutcome, PickerView, SingleSelect};
//! use pickr::ui::{PickerFrontend, Result, pick_one};
//!
//! /// Always picks the first row
//! struct FirstRow;
//!
//! impl PickerFrontend for FirstRow {
//!     fn run(&self, view: &mut dyn PickerView) -> Result<()> {
//!         view.submit(Some(0));
//!         Ok(())
//!     }
//! }
//!
//! let items = vec!["apple".to_string(), "banana".to_string()];
//! let picker = SingleSelect::new(items, String::clone).with_initial(Some("banana".to_string()));
//!
//! let outcome = pick_one(&FirstRow, picker)?;
//! assert_eq!(outcome, PickerOutcome::Item("banana".to_string()));
//! # Ok::<(), pickr::ui::UiError>(())
//! ```
//!
//! ## Buffered Messages for TUI
//!
//! ```
//! use pickr::ui::output::{OutputWriter, StatusBarWriter};
//! use std::time::Duration;
//!
//! let writer = StatusBarWriter::with_ttl(Duration::from_secs(5));
//! writer.info("Free text selected");
//!
//! // Get messages for rendering in TUI
//! for (level, msg) in writer.recent_messages() {
//!     println!("{:?}: {}", level, msg);
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod output;
pub mod prompt_adapter;
pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use output::{MessageLevel, NullWriter, OutputWriter, StatusBarWriter, StderrWriter};
pub use prompt_adapter::PromptFrontend;
pub use ratatui_adapter::RatatuiFrontend;
pub use traits::{PickerFrontend, pick_many, pick_one};
pub use types::Backend;
