//! HTTP Server Configuration
//!
//! Host, port, data file location, static UI directory and CORS settings.
//! Values come from an optional JSON config file; the CLI and environment
//! override them (see `cli::commands`).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable set by the serverless host. Its presence moves the
/// data file to ephemeral storage.
pub const SERVERLESS_ENV: &str = "VERCEL";

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 3001)
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON document holding the expenses
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Directory served for every non-API GET request
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,

    /// CORS allowed origins. Empty allows any origin.
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3001
}

fn default_data_file() -> PathBuf {
    data_file_for(std::env::var_os(SERVERLESS_ENV).is_some())
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("public")
}

/// Default data file: persistent next to the working directory, or under
/// `/tmp` on a serverless deployment.
pub fn data_file_for(serverless: bool) -> PathBuf {
    if serverless {
        PathBuf::from("/tmp/expenses.json")
    } else {
        PathBuf::from("expenses.json")
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            public_dir: default_public_dir(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;

        let config: ServerConfig =
            serde_json::from_str(&content).map_err(|e| format!("Invalid config JSON: {}", e))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.data_file.as_os_str().is_empty() {
            return Err("data_file must not be empty".to_string());
        }
        Ok(())
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Entry document for the single-page UI
    pub fn index_file(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}
