//! Version command implementation.
//!
//! The `cobra_example version` command prints the build-time version.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    version: String,
}

impl VersionCommand {
    /// Create a new version command reporting `version`.
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
        }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("cobra_example is on version {}", self.version));
        Ok(CommandResult::success())
    }
}
