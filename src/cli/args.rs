//! CLI argument definitions using clap
//!
//! Commands:
//! - expense-tracker serve [--config <path>] [--port <port>] ...
//! - expense-tracker init [--data-file <path>]
//!
//! Running with no subcommand is the same as `serve`.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Personal expense tracker: JSON API and web UI over a single JSON file
#[derive(Parser, Debug)]
#[command(name = "expense-tracker")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Used for `serve` when no subcommand is given
    #[command(flatten)]
    pub serve: ServerArgs,
}

impl Cli {
    /// The command to run, defaulting to `serve`
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve(self.serve))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve(ServerArgs),

    /// Create the data file with an empty collection if it does not exist
    Init(ServerArgs),
}

/// Settings shared by every command. Anything given here overrides the
/// config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON document holding the expenses
    #[arg(long, env = "EXPENSES_FILE")]
    pub data_file: Option<PathBuf>,

    /// Directory with the web UI
    #[arg(long)]
    pub public_dir: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
