//! Shell completion support for pickr
//!
//! Static completions only: subcommands, flags and enum values such as
//! `--backend` are known to clap, so `clap_complete` can emit a complete
//! script for each shell.

use clap::Command;
use clap_complete::Shell;
use std::io::Write;

/// Generate static shell completions into `buf`
///
/// # Arguments
/// * `shell` - Target shell (bash, zsh, fish, powershell, elvish)
/// * `cmd` - The clap Command to generate completions for
pub fn generate_static<W: Write>(shell: Shell, cmd: &mut Command, buf: &mut W) {
    clap_complete::generate(shell, cmd, cmd.get_name().to_string(), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::CommandFactory;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        generate_static(shell, &mut Cli::command(), &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_bash_script_mentions_subcommands() {
        let script = script(Shell::Bash);
        assert!(script.contains("pickr"));
        assert!(script.contains("many"));
        assert!(script.contains("--free-text"));
    }

    #[test]
    fn test_fish_script_lists_backends() {
        let script = script(Shell::Fish);
        assert!(script.contains("prompt"));
    }
}
