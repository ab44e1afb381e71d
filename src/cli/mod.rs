//! CLI module for the expense tracker
//!
//! - serve: open the data file and start the HTTP server (default)
//! - init: create the data file

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command, ServerArgs};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
