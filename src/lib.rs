//! expense-tracker - personal expense tracking over a single JSON file
//!
//! Records, edits and deletes spending entries, filters them by category and
//! month, and aggregates them for the summary and dashboard views.

pub mod cli;
pub mod dashboard;
pub mod expense;
pub mod http_server;
pub mod observability;
pub mod store;
