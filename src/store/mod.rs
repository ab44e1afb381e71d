//! # Expense Store
//!
//! Owns the persisted expense collection. The collection is always read and
//! written as a whole.

pub mod backend;
pub mod errors;
pub mod json_file;
pub mod memory;

pub use backend::ExpenseStore;
pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
