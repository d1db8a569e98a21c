//! Shell completions generation.
//!
//! The `cobra_example completion` command generates shell completion scripts.

use anyhow::Context;
use clap_complete::Shell;

use crate::cli::args::{build_command_tree, CompletionArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completion command implementation.
pub struct CompletionCommand {
    args: CompletionArgs,
}

impl CompletionCommand {
    /// Create a new completion command.
    pub fn new(args: CompletionArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell`.
pub fn completion_script(shell: Shell) -> Result<String> {
    let mut cmd = build_command_tree();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "cobra_example", &mut buf);
    let script = String::from_utf8(buf).context("completion script is not valid UTF-8")?;
    Ok(script)
}

impl Command for CompletionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let script = completion_script(self.args.shell)?;
        ui.message(script.trim_end());
        Ok(CommandResult::success())
    }
}
