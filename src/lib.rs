//! cobra_example - a small command tree with subcommands.
//!
//! A root command plus two subcommands: `printargs` echoes its arguments and
//! `version` prints the version baked in at build time.
//!
//! # Modules
//!
//! - [`cli`] - Command tree, argument parsing and command dispatch
//! - [`config`] - Build-time configuration
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output and a capturing mock for tests
//!
//! # Example
//!
//! ```
//! use cobra_example::cli::CommandDispatcher;
//! use cobra_example::config::AppConfig;
//! use cobra_example::ui::MockUI;
//!
//! let dispatcher = CommandDispatcher::new(AppConfig::with_version("1.2.3"));
//! let mut ui = MockUI::new();
//!
//! let result = dispatcher.run(["cobra_example", "printargs", "a", "b"], &mut ui);
//! assert_eq!(result.exit_code, 0);
//! assert_eq!(ui.messages(), ["args: a b"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{ExampleError, Result};
