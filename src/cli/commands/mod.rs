//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the
//! parsed invocation to its implementation:
//! - no subcommand runs [`root::RootCommand`]
//! - `printargs`, `version` and `completion` run their own command types

pub mod completion;
pub mod dispatcher;
pub mod printargs;
pub mod root;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, Invocation};
