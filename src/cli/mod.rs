//! Command-line interface for cobra_example.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Command tree definitions using clap derive macros
//! - [`commands`] - Command implementations and dispatch

pub mod args;
pub mod commands;

pub use args::{build_command_tree, Cli, Commands, CompletionArgs, PrintArgsArgs, VersionArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, Invocation};
