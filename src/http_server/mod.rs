//! # HTTP Server Module
//!
//! Axum server exposing the expense API and serving the web UI.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/api/expenses` - List (`?category=&month=`) and create
//! - `/api/expenses/:id` - Update and delete
//! - `/api/expenses/summary` - Totals overall and per category
//! - `/api/expenses/dashboard` - Figures shown by the UI (`?month=YYYY-MM`)
//! - anything else (GET) - static files from the public directory

pub mod config;
pub mod expense_routes;
pub mod observability_routes;
pub mod server;

pub use config::ServerConfig;
pub use server::{build_router, HttpServer};
