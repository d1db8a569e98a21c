//! CLI argument definitions.
//!
//! This module defines the command tree using clap's derive macros.
//! The main entry point is the [`Cli`] struct; [`build_command_tree`]
//! returns the same tree as a `clap::Command`.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

const ROOT_LONG_ABOUT: &str = "\
An example for the usage of a command-line parsing library: a root command
with a couple of subcommands, generated help and shell completions.";

/// cobra_example is a simple example for the usage of a command-line parsing library.
#[derive(Debug, Parser)]
#[command(name = "cobra_example")]
#[command(long_about = ROOT_LONG_ABOUT)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the given arguments separated by spaces
    #[command(name = "printargs")]
    PrintArgs(PrintArgsArgs),

    /// print the version of cobra_example
    #[command(long_about = "All software has version, here is cobra_example's")]
    Version(VersionArgs),

    /// Generate shell completions
    Completion(CompletionArgs),
}

impl Commands {
    /// Name the command is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::PrintArgs(_) => "printargs",
            Commands::Version(_) => "version",
            Commands::Completion(_) => "completion",
        }
    }
}

/// Arguments for the `printargs` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PrintArgsArgs {
    /// Arguments to print
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

/// Arguments for the `version` command.
///
/// Extra positionals are accepted and ignored.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VersionArgs {
    #[arg(hide = true, value_name = "IGNORED")]
    pub ignored: Vec<String>,
}

/// Arguments for the `completion` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Build the full command tree: the root command and every subcommand.
pub fn build_command_tree() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_tree_is_valid() {
        build_command_tree().debug_assert();
    }

    #[test]
    fn subcommand_names_are_unique() {
        let tree = build_command_tree();
        let mut names: Vec<&str> = tree.get_subcommands().map(|c| c.get_name()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn registers_expected_subcommands() {
        let tree = build_command_tree();
        for name in ["printargs", "version", "completion"] {
            assert!(
                tree.find_subcommand(name).is_some(),
                "missing subcommand {name}"
            );
        }
    }

    #[test]
    fn tree_has_depth_two() {
        let tree = build_command_tree();
        for sub in tree.get_subcommands() {
            assert_eq!(sub.get_subcommands().count(), 0, "{}", sub.get_name());
        }
    }

    #[test]
    fn empty_invocation_selects_root() {
        let cli = Cli::try_parse_from(["cobra_example"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn printargs_receives_the_tail() {
        let cli = Cli::try_parse_from(["cobra_example", "printargs", "a", "b", "c"]).unwrap();
        match cli.command {
            Some(Commands::PrintArgs(args)) => assert_eq!(args.args, ["a", "b", "c"]),
            other => panic!("Expected printargs, got {:?}", other),
        }
    }

    #[test]
    fn printargs_takes_hyphenated_values_after_separator() {
        let cli = Cli::try_parse_from(["cobra_example", "printargs", "--", "-x", "y"]).unwrap();
        match cli.command {
            Some(Commands::PrintArgs(args)) => assert_eq!(args.args, ["-x", "y"]),
            other => panic!("Expected printargs, got {:?}", other),
        }
    }

    #[test]
    fn version_selects_version_command() {
        let cli = Cli::try_parse_from(["cobra_example", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version(_))));
    }

    #[test]
    fn version_accepts_and_ignores_extra_arguments() {
        let cli = Cli::try_parse_from(["cobra_example", "version", "extra", "more"]).unwrap();
        match cli.command {
            Some(Commands::Version(args)) => assert_eq!(args.ignored, ["extra", "more"]),
            other => panic!("Expected version, got {:?}", other),
        }
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        let err = Cli::try_parse_from(["cobra_example", "bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidSubcommand);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["cobra_example", "printargs", "--nope"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["cobra_example", "version", "--debug"]).unwrap();
        assert!(cli.debug);
    }

    #[test]
    fn command_names_match_registration() {
        let tree = build_command_tree();
        let parsed = [
            Commands::PrintArgs(PrintArgsArgs::default()),
            Commands::Version(VersionArgs::default()),
            Commands::Completion(CompletionArgs { shell: Shell::Bash }),
        ];
        for cmd in parsed {
            assert!(tree.find_subcommand(cmd.name()).is_some());
        }
    }
}
