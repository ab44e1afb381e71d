//! # HTTP Server
//!
//! Combines the API, health and static UI routes into one Axum router.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use super::config::ServerConfig;
use super::expense_routes::expense_routes;
use super::observability_routes::{health_routes, log_requests};
use crate::expense::ExpenseService;
use crate::observability::Logger;
use crate::store::{JsonFileStore, StoreResult};

/// HTTP server for the expense tracker
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server backed by the JSON file named in `config`.
    ///
    /// The file is created with an empty collection if it does not exist.
    pub fn from_config(config: ServerConfig) -> StoreResult<Self> {
        let store = JsonFileStore::open(&config.data_file)?;
        let service = Arc::new(ExpenseService::new(Arc::new(store)));
        Ok(Self::with_service(config, service))
    }

    /// Create a server around an existing service
    pub fn with_service(config: ServerConfig, service: Arc<ExpenseService>) -> Self {
        let router = build_router(&config, service);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        Logger::info(
            "SERVER_START",
            &[
                ("addr", &addr.to_string()),
                ("data_file", &self.config.data_file.display().to_string()),
                ("public_dir", &self.config.public_dir.display().to_string()),
            ],
        );

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Build the combined router with all endpoints.
///
/// Any GET that no route claims is served from the public directory, falling
/// back to `index.html` so client-side routes load the UI. That includes
/// `GET /api/expenses/:id`.
pub fn build_router(config: &ServerConfig, service: Arc<ExpenseService>) -> Router {
    let ui_entry = ServeFile::new(config.index_file());
    let static_files = ServeDir::new(&config.public_dir).fallback(ui_entry.clone());

    Router::new()
        .merge(health_routes())
        .nest("/api", expense_routes(service, ui_entry))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(log_requests))
                .layer(cors_layer(config)),
        )
}
