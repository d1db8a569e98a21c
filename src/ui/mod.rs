//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to the process's stdout and stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use cobra_example::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("args: a b");
//! assert_eq!(ui.messages(), ["args: a b"]);
//! ```

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, ExampleTheme};

/// Trait for user interface interactions.
///
/// This trait allows capturing command output in tests.
pub trait UserInterface {
    /// Display a line on standard output.
    fn message(&mut self, msg: &str);

    /// Display a line on the error stream.
    fn error(&mut self, msg: &str);
}
