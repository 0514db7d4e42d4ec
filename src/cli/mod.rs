//! Command-line definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::format::OutputFormat;

/// Household task, wish and reward tracker driven by a command log
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the record files (overrides config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Process a command log (default if no subcommand given)
    Run {
        /// Command file (defaults to commands.file from config)
        file: Option<PathBuf>,
    },

    /// Load every store and report record counts and skipped lines
    Check {
        /// Report format: text or json
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["chore-tracker"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log, "2");
        assert!(!cli.verbose);
    }

    #[test]
    fn run_with_file_and_global_flags() {
        let cli = Cli::try_parse_from([
            "chore-tracker",
            "run",
            "today.txt",
            "--data-dir",
            "/srv/chores",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/chores")));
        assert!(cli.verbose);
        match cli.command {
            Some(Command::Run { file }) => assert_eq!(file, Some(PathBuf::from("today.txt"))),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn check_format_defaults_to_text() {
        let cli = Cli::try_parse_from(["chore-tracker", "check"]).unwrap();
        match cli.command {
            Some(Command::Check { format }) => assert_eq!(format, OutputFormat::Text),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn check_format() {
        let cli = Cli::try_parse_from(["chore-tracker", "check", "--format", "json"]).unwrap();
        match cli.command {
            Some(Command::Check { format }) => assert_eq!(format, OutputFormat::Json),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(Cli::try_parse_from(["chore-tracker", "check", "--format", "xml"]).is_err());
    }
}
