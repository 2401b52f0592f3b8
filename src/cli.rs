//! Command-line arguments for the `recman` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::logging::Verbosity;

/// recman - create, view, edit and delete form records in the terminal
///
/// Records live only for the lifetime of the session.
#[derive(Debug, Parser)]
#[command(name = "recman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Returns the verbosity requested by flags, or `None` to defer to the
    /// configured level.
    pub fn verbosity(&self) -> Option<Verbosity> {
        match (self.quiet, self.verbose) {
            (true, _) => Some(Verbosity::Quiet),
            (false, 0) => None,
            (false, 1) => Some(Verbosity::Verbose),
            (false, _) => Some(Verbosity::Trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("recman").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_defers_to_config() {
        let cli = parse(&[]);
        assert_eq!(cli.verbosity(), None);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn verbose_counts() {
        assert_eq!(parse(&["-v"]).verbosity(), Some(Verbosity::Verbose));
        assert_eq!(parse(&["-vv"]).verbosity(), Some(Verbosity::Trace));
        assert_eq!(parse(&["-vvv"]).verbosity(), Some(Verbosity::Trace));
    }

    #[test]
    fn quiet_flag() {
        assert_eq!(parse(&["-q"]).verbosity(), Some(Verbosity::Quiet));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["recman", "-q", "-v"]).is_err());
    }

    #[test]
    fn paths_are_parsed() {
        let cli = parse(&["--config", "/etc/recman.toml", "--log-file", "/tmp/r.log"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/recman.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/r.log")));
    }
}
