//! Completions command - generate shell completion scripts.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io;

/// Arguments for the completions command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotebook completions bash > ~/.local/share/bash-completion/completions/quotebook\n    \
    quotebook completions zsh > ~/.zfunc/_quotebook\n    \
    quotebook completions fish > ~/.config/fish/completions/quotebook.fish")]
pub struct Args {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Writes completions for `cmd` to stdout.
///
/// Called from main.rs, which owns the top-level `Cli` command.
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    generate(shell, cmd, "quotebook", &mut io::stdout());
}
