// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};

/// Command-line arguments for `scrapeops`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scrapeops",
    version,
    about = "Scratch-directory state and collection export/import for the scraper.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the settings file (TOML).
    ///
    /// If omitted, `ScrapeOps.toml` in the current directory is used when it
    /// exists, built-in defaults otherwise.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SCRAPEOPS_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Also append logs to `<package-name>.log` in the scratch directory.
    ///
    /// Not accepted with `reset`, which deletes that file.
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Empty the scratch directory, recreate the state files, drop the log.
    Reset,

    /// Set the current status label (default: Idle).
    Status {
        #[arg(value_name = "LABEL")]
        label: Option<String>,
    },

    /// Record the last-updated time (default: now).
    Touch {
        /// Epoch seconds to record instead of the current time.
        #[arg(long, value_name = "EPOCH")]
        at: Option<i64>,
    },

    /// Print the current status and last-updated records.
    Show,

    /// Export a collection (singular name) to the scratch directory.
    Export {
        #[arg(value_name = "COLLECTION")]
        collection: String,
    },

    /// Import a JSON file into a collection (singular name), upserting.
    Import {
        #[arg(value_name = "COLLECTION")]
        collection: String,

        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliArgs {
    /// Cross-argument checks that `conflicts_with` cannot express for a
    /// global flag.
    pub fn validate(&self) -> Result<(), clap::Error> {
        if self.log_file && matches!(self.command, Command::Reset) {
            return Err(CliArgs::command().error(
                ErrorKind::ArgumentConflict,
                "--log-file cannot be used with `reset`: reset removes the log file",
            ));
        }
        Ok(())
    }
}

/// Parse and validate the process arguments, exiting with a usage error on
/// failure.
pub fn parse() -> CliArgs {
    let args = CliArgs::parse();
    if let Err(e) = args.validate() {
        e.exit();
    }
    args
}
