//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for pickr using the `clap` crate.
//!
//! # Commands
//!
//! - **one**: Pick a single line (default alias `s`)
//! - **many**: Pick any number of lines (alias `m`)
//! - **config**: Show or change the stored defaults
//! - **completions**: Print a shell completion script
//!
//! # Design Features
//!
//! - Items come from positional arguments, `--input FILE`, or stdin
//! - Global `--quiet` flag for scripting-friendly output
//! - Flags override the stored configuration
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use pickr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["pickr", "many", "--free-text", "red", "green"]);
//! match cli.command {
//!     Commands::Many { picker } => {
//!         assert!(picker.free_text);
//!         assert_eq!(picker.items, ["red", "green"]);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::config::PickrConfig;
use crate::picker::{InputDecoration, PickerOptions};
use crate::ui::Backend;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Flags shared by the `one` and `many` pickers
#[derive(Args, Debug, Clone, Default)]
pub struct PickerArgs {
    /// Items to pick from (otherwise read from --input or stdin)
    #[arg(value_name = "ITEM")]
    pub items: Vec<String>,

    /// Read items from a file, one per line
    #[arg(short = 'i', long = "input", value_name = "FILE", conflicts_with = "items")]
    pub input: Option<PathBuf>,

    /// Title shown above the list
    #[arg(short = 't', long = "title", default_value = "")]
    pub title: String,

    /// Offer the typed query as a choice of its own
    #[arg(long = "free-text")]
    pub free_text: bool,

    /// Hide the search field
    #[arg(long = "no-search")]
    pub no_search: bool,

    /// Initial query
    #[arg(long = "query", value_name = "TEXT")]
    pub query: Option<String>,

    /// Label of the search field
    #[arg(long = "label")]
    pub label: Option<String>,

    /// Placeholder shown while the search field is empty
    #[arg(long = "hint")]
    pub hint: Option<String>,

    /// Split each line into `id<DELIM>label`
    #[arg(short = 'd', long = "delimiter", value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Pre-select a value (label for `one`, id for `many`; repeatable)
    #[arg(short = 's', long = "selected", value_name = "VALUE")]
    pub selected: Vec<String>,

    /// Frontend to use (overrides config)
    #[arg(short = 'b', long = "backend", value_enum)]
    pub backend: Option<Backend>,

    /// Print the result as JSON
    #[arg(long = "json")]
    pub json: bool,

    /// Print ids instead of labels
    #[arg(long = "print-id")]
    pub print_id: bool,
}

impl PickerArgs {
    /// Delimiter from the flag, falling back to the config
    #[must_use]
    pub fn delimiter<'a>(&'a self, config: &'a PickrConfig) -> Option<&'a str> {
        self.delimiter.as_deref().or(config.delimiter.as_deref())
    }

    /// Backend from the flag, falling back to the config
    #[must_use]
    pub fn backend(&self, config: &PickrConfig) -> Backend {
        self.backend.unwrap_or(config.backend)
    }

    /// Picker options with config defaults filled in
    #[must_use]
    pub fn options(&self, config: &PickrConfig) -> PickerOptions {
        let decoration = InputDecoration {
            label: self.label.clone(),
            hint: self.hint.clone().or_else(|| config.hint.clone()),
        };

        PickerOptions::new(self.title.clone())
            .with_free_text(self.free_text || config.free_text)
            .with_search(config.search && !self.no_search)
            .with_decoration(decoration)
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,

    /// Print the path of the config file
    Path,

    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., backend=prompt)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "pickr")]
#[command(about = "Searchable single- and multi-select pickers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Pick exactly one item
    #[command(visible_alias = "s")]
    One {
        #[command(flatten)]
        picker: PickerArgs,
    },

    /// Pick any number of items
    #[command(visible_alias = "m")]
    Many {
        #[command(flatten)]
        picker: PickerArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Print a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
