//! Pickr CLI application entry point
//!
//! Reads lines from arguments, a file or stdin, lets the user pick one or
//! many of them, and prints the result on stdout.
//!
//! # Usage
//!
//! ```bash
//! # Pick one line
//! ls | pickr one
//! pickr s apple banana cherry
//!
//! # Pick many, with ids and labels separated by a tab
//! pickr many -d $'\t' --input users.tsv --print-id
//!
//! # Allow a value that is not in the list
//! git branch --format='%(refname:short)' | pickr one --free-text --title Branch
//!
//! # Line-oriented prompts instead of the full-screen TUI
//! pickr one --backend prompt a b c
//!
//! # JSON output
//! pickr many --json red green blue
//! ```
//!
//! A cancelled picker prints nothing and exits with status 130.
//!
//! # Configuration
//!
//! Defaults live in the user's config directory (`~/.config/pickr/config.toml`
//! on Linux) and can be overridden with `PICKR_*` environment variables.

use clap::CommandFactory;
use pickr::{
    PickrError,
    cli::{Cli, Commands, ConfigCommands, PickerArgs},
    completions,
    config::PickrConfig,
    entry::{self, Entry},
    output::outcome_lines,
    picker::{MultiSelect, PickerOutcome, SingleSelect},
    ui::{
        Backend, NullWriter, OutputWriter, PickerFrontend, PromptFrontend, RatatuiFrontend,
        StatusBarWriter, StderrWriter, pick_many, pick_one,
    },
};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal, Write};
use std::process::ExitCode;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PickrError>;

/// Exit status of a cancelled picker (128 + SIGINT)
const CANCELLED: u8 = 130;

/// Read the entries to pick from: arguments, then `--input`, then stdin
///
/// # Errors
///
/// Returns `PickrError` if the input cannot be read or no input was given.
fn load_entries(args: &PickerArgs, config: &PickrConfig) -> Result<Vec<Entry>> {
    let delimiter = args.delimiter(config);

    if !args.items.is_empty() {
        return Ok(entry::entries_from_values(&args.items, delimiter)?);
    }

    if let Some(path) = &args.input {
        let file = File::open(path)?;
        return Ok(entry::read_entries(BufReader::new(file), delimiter)?);
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(PickrError::InvalidInput(
            "No items given. Pass them as arguments, with --input FILE, or on stdin".into(),
        ));
    }
    Ok(entry::read_entries(stdin.lock(), delimiter)?)
}

/// Writer for informational output, silent in quiet mode
fn output_writer(quiet: bool) -> Arc<dyn OutputWriter> {
    if quiet {
        Arc::new(NullWriter)
    } else {
        Arc::new(StderrWriter::new())
    }
}

/// Frontend for `backend` plus the writer its free-text notices go to
///
/// The TUI owns the terminal while it runs, so its notices go to the
/// status bar instead of stderr. Notices it never drew are repeated on
/// stderr once the terminal is restored.
fn frontend(backend: Backend, quiet: bool) -> (Box<dyn PickerFrontend>, Arc<dyn OutputWriter>) {
    let output = output_writer(quiet);
    match backend {
        Backend::Tui if !quiet => {
            let status = StatusBarWriter::new();
            let notices: Arc<dyn OutputWriter> = Arc::new(status.clone());
            (Box::new(RatatuiFrontend::new().with_status(status)), notices)
        }
        Backend::Tui => (Box::new(RatatuiFrontend::new()), output),
        Backend::Prompt => (Box::new(PromptFrontend::new().with_output(output.clone())), output),
    }
}

/// Free-text callback reporting through `notices`
fn free_text_notice(notices: Arc<dyn OutputWriter>) -> impl FnMut(&str) + 'static {
    move |text: &str| notices.info(&format!("Free text \"{text}\" selected"))
}

/// Print `outcome` on stdout
///
/// # Errors
///
/// Returns `PickrError` if serialization or writing fails.
fn print_outcome(outcome: &PickerOutcome<Entry>, args: &PickerArgs) -> Result<ExitCode> {
    let Some(lines) = outcome_lines(outcome, args.print_id, args.json)? else {
        return Ok(ExitCode::from(CANCELLED));
    };

    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Handle the `one` command
///
/// # Errors
///
/// Returns `PickrError` if reading entries, running the frontend or printing fails.
fn handle_one_command(args: &PickerArgs, config: &PickrConfig, quiet: bool) -> Result<ExitCode> {
    let entries = load_entries(args, config)?;
    let (frontend, notices) = frontend(args.backend(config), quiet);

    if args.selected.len() > 1 {
        notices.warning("Only the first --selected value is used when picking one item");
    }

    let mut picker = SingleSelect::new(entries, Entry::search_key)
        .with_initial(args.selected.first().map(|label| Entry::plain(label.as_str())))
        .with_options(args.options(config))
        .on_free_text(free_text_notice(notices));
    if let Some(query) = &args.query {
        picker.set_query(query);
    }

    let outcome = pick_one(&*frontend, picker)?;
    print_outcome(&outcome, args)
}

/// Handle the `many` command
///
/// # Errors
///
/// Returns `PickrError` if reading entries, running the frontend or printing fails.
fn handle_many_command(args: &PickerArgs, config: &PickrConfig, quiet: bool) -> Result<ExitCode> {
    let entries = load_entries(args, config)?;
    let (frontend, notices) = frontend(args.backend(config), quiet);
    let initial = args.selected.iter().map(|id| Entry::new(id.as_str(), id.as_str())).collect();

    let mut picker = MultiSelect::new(entries, Entry::search_key, Entry::identifier)
        .with_initial(initial)
        .with_options(args.options(config))
        .on_free_text(free_text_notice(notices));

    let duplicates = picker.duplicate_identifiers();
    if !duplicates.is_empty() {
        output_writer(quiet).warning(&format!(
            "Duplicate ids are toggled together: {}",
            duplicates.join(", ")
        ));
    }

    if let Some(query) = &args.query {
        picker.set_query(query);
    }

    let outcome = pick_many(&*frontend, picker)?;
    print_outcome(&outcome, args)
}

/// Handle configuration commands
///
/// # Errors
///
/// Returns `PickrError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
fn handle_config_command(mut config: PickrConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => {
            println!("{}", PickrConfig::config_path()?.display());
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PickrError::InvalidInput("Invalid format. Use: pickr config set key=value".into())
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set(key, value)?;
            config.save()?;
            output_writer(quiet).success(&format!("Set {key} = {value}"));
        }
        ConfigCommands::Get { key } => {
            let value = config.get(key).ok_or_else(|| {
                PickrError::InvalidInput(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    PickrConfig::KEYS.join(", ")
                ))
            })?;
            println!("{value}");
        }
    }
    Ok(())
}

/// Main entry point for the pickr application
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `PickrError` if configuration loading fails or any command
/// handler returns an error.
fn main() -> Result<ExitCode> {
    let config = PickrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    match &cli.command {
        Commands::One { picker } => handle_one_command(picker, &config, quiet),
        Commands::Many { picker } => handle_many_command(picker, &config, quiet),
        Commands::Config { command } => {
            handle_config_command(config, command, quiet)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Completions { shell } => {
            completions::generate_static(*shell, &mut Cli::command(), &mut io::stdout());
            Ok(ExitCode::SUCCESS)
        }
    }
}
