//! Error types for cobra_example.
//!
//! This module defines [`ExampleError`], the error type returned by command
//! dispatch, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ExampleError::Dispatch` when the argument parser cannot resolve
//!   or parse an invocation
//! - Use `anyhow::Error` (via `ExampleError::Other`) for unexpected errors
//! - Every error is printed once at the top level and maps to exit status 1

use thiserror::Error;

/// Core error type for command dispatch.
#[derive(Debug, Error)]
pub enum ExampleError {
    /// The argument parser could not resolve or parse the invocation.
    #[error("{}", render_parse_error(.0))]
    Dispatch(#[from] clap::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn render_parse_error(err: &clap::Error) -> String {
    err.render().to_string().trim_end().to_string()
}

/// Result type alias for cobra_example operations.
pub type Result<T> = std::result::Result<T, ExampleError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn dispatch_error_displays_parser_message() {
        let clap_err = clap::Error::raw(ErrorKind::InvalidSubcommand, "unknown command \"foo\"\n");
        let err: ExampleError = clap_err.into();
        assert!(matches!(err, ExampleError::Dispatch(_)));
        assert!(err.to_string().contains("unknown command \"foo\""));
        assert!(!err.to_string().ends_with('\n'));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: ExampleError = anyhow::anyhow!("something broke").into();
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(anyhow::anyhow!("test").into())
        }
        assert!(returns_error().is_err());
    }
}
