//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for resolving an argument vector to a command
//!   and running it

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{ExampleError, Result};
use crate::ui::UserInterface;

use super::completion::CompletionCommand;
use super::printargs::PrintArgsCommand;
use super::root::RootCommand;
use super::version::VersionCommand;

/// Trait for command implementations.
///
/// Each node of the command tree implements this trait to provide its action.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Outcome of resolving an argument vector.
#[derive(Debug)]
pub enum Invocation {
    /// A command was resolved and should be dispatched.
    Dispatch(Cli),
    /// Nothing to dispatch: help was shown or parsing failed.
    Exit(CommandResult),
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: AppConfig,
}

impl CommandDispatcher {
    /// Create a new dispatcher with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Get the dispatcher configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Resolve an argument vector (program name first) against the command tree.
    ///
    /// Help and similar informational output is written as a message and
    /// ends the invocation successfully. Parse errors are written to the
    /// error stream and end it with exit code 1.
    pub fn parse<I, T>(&self, argv: I, ui: &mut dyn UserInterface) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(argv) {
            Ok(cli) => Invocation::Dispatch(cli),
            Err(err) if !err.use_stderr() => {
                ui.message(err.render().to_string().trim_end());
                Invocation::Exit(CommandResult::success())
            }
            Err(err) => {
                debug!(kind = ?err.kind(), "argument parsing failed");
                ui.error(&ExampleError::from(err).to_string());
                Invocation::Exit(CommandResult::failure(1))
            }
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand selects the root command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        debug!(
            command = cli.command.as_ref().map_or("<root>", Commands::name),
            "dispatching"
        );

        match &cli.command {
            Some(Commands::PrintArgs(args)) => {
                let cmd = PrintArgsCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Version(_)) => {
                let cmd = VersionCommand::new(self.config.version());
                cmd.execute(ui)
            }
            Some(Commands::Completion(args)) => {
                let cmd = CompletionCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => RootCommand::new().execute(ui),
        }
    }

    /// Dispatch a resolved command, reporting any error on the error stream.
    pub fn execute(&self, cli: &Cli, ui: &mut dyn UserInterface) -> CommandResult {
        match self.dispatch(cli, ui) {
            Ok(result) => result,
            Err(e) => {
                ui.error(&format!("Error: {}", e));
                CommandResult::failure(1)
            }
        }
    }

    /// Resolve and run a full invocation.
    pub fn run<I, T>(&self, argv: I, ui: &mut dyn UserInterface) -> CommandResult
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.parse(argv, ui) {
            Invocation::Dispatch(cli) => self.execute(&cli, ui),
            Invocation::Exit(result) => result,
        }
    }
}
