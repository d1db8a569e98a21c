//! Root command implementation.
//!
//! Runs when `cobra_example` is invoked without a subcommand.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The root command implementation.
#[derive(Debug, Default)]
pub struct RootCommand;

impl RootCommand {
    /// Create a new root command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for RootCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message("run cobra_example success!");
        ui.message("");
        Ok(CommandResult::success())
    }
}
