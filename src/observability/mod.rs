//! Observability for the expense tracker
//!
//! Structured JSON logging, one line per event.
//!
//! # Usage
//!
//! ```ignore
//! use expense_tracker::observability::Logger;
//!
//! Logger::info("EXPENSE_CREATED", &[("id", &expense.id)]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
