//! Pickr - searchable single- and multi-select pickers
//!
//! This library provides the picking engine (ordering, filtering and
//! selection state), picker sessions that hosts drive through a small API,
//! and terminal frontends (ratatui TUI, dialoguer prompts) that run those
//! sessions. The `pickr` binary wraps it all for shell pipelines.

use thiserror::Error;

pub mod cli;
pub mod completions;
pub mod config;
pub mod engine;
pub mod entry;
pub mod output;
pub mod picker;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickrError {
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Frontend failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Reading entries failed
    #[error("Entry error: {0}")]
    EntryError(#[from] entry::EntryError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serializing a result failed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
