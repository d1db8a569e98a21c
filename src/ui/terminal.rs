//! Terminal UI.

use console::Term;
use std::ffi::OsStr;
use std::io::Write;

use super::{should_use_colors, ExampleTheme, UserInterface};

/// UI backed by the process's stdout and stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ExampleTheme,
}

impl TerminalUI {
    /// Create a new terminal UI, colored when the error stream allows it.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ExampleTheme::new()
        } else {
            ExampleTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI for a raw argument vector.
    ///
    /// `--no-color` anywhere before a `--` separator selects the plain
    /// theme, so parse errors are uncolored too.
    pub fn for_args<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        if requests_no_color(argv) {
            Self::plain()
        } else {
            Self::new()
        }
    }

    /// Create a terminal UI that never emits color codes.
    pub fn plain() -> Self {
        Self::with_theme(ExampleTheme::plain())
    }

    fn with_theme(theme: ExampleTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

fn requests_no_color<I, T>(argv: I) -> bool
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    argv.into_iter()
        .map(|arg| arg.as_ref().to_owned())
        .take_while(|arg| arg != "--")
        .any(|arg| arg == "--no-color")
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}
