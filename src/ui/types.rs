//! Common types for the UI layer

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which frontend drives a picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Full-screen terminal UI (ratatui)
    #[default]
    Tui,
    /// Line-oriented prompts (dialoguer)
    Prompt,
}

impl Backend {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Tui => "tui",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
