//! CLI command implementations

use crate::http_server::{HttpServer, ServerConfig};
use crate::store::JsonFileStore;

use super::args::{Command, ServerArgs};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.into_command())
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve(args) => serve(&args),
        Command::Init(args) => init(&args),
    }
}

/// Build the effective configuration.
///
/// Precedence: command line / environment, then the config file, then
/// built-in defaults.
pub fn resolve_config(args: &ServerArgs) -> CliResult<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path).map_err(CliError::config_error)?,
        None => ServerConfig::default(),
    };

    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_file) = &args.data_file {
        config.data_file = data_file.clone();
    }
    if let Some(public_dir) = &args.public_dir {
        config.public_dir = public_dir.clone();
    }

    config.validate().map_err(CliError::config_error)?;
    Ok(config)
}

/// Create the data file if it is missing. An existing file is left as is.
pub fn init(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let store = JsonFileStore::open(&config.data_file)?;
    println!("Expense data file ready at {}", store.path().display());
    Ok(())
}

/// Open the data file and serve the API and UI until the process is stopped
pub fn serve(args: &ServerArgs) -> CliResult<()> {
    let config = resolve_config(args)?;
    let server = HttpServer::from_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })
}
