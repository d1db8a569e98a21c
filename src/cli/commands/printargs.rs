//! Printargs command implementation.
//!
//! The `cobra_example printargs` command echoes its arguments on one line.

use crate::cli::args::PrintArgsArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The printargs command implementation.
pub struct PrintArgsCommand {
    args: PrintArgsArgs,
}

impl PrintArgsCommand {
    /// Create a new printargs command.
    pub fn new(args: PrintArgsArgs) -> Self {
        Self { args }
    }

    fn render(&self) -> String {
        format!("args: {}", self.args.args.join(" "))
    }
}

impl Command for PrintArgsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&self.render());
        Ok(CommandResult::success())
    }
}
