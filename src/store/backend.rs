//! # Expense Store Trait

use crate::expense::Expense;

use super::errors::StoreResult;

/// Persistence for the whole expense collection as one document.
///
/// There are no partial updates: callers read everything, change it, and
/// write everything back.
pub trait ExpenseStore: Send + Sync + std::fmt::Debug {
    /// Read the full collection, newest first
    fn read_all(&self) -> StoreResult<Vec<Expense>>;

    /// Replace the full collection
    fn write_all(&self, expenses: &[Expense]) -> StoreResult<()>;
}
