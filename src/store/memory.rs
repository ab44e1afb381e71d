//! # In-Memory Store
//!
//! Keeps the collection in a `Vec`. Used by tests in place of the JSON file,
//! and can be switched into a failing mode to exercise storage errors.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::expense::Expense;

use super::backend::ExpenseStore;
use super::errors::{StoreError, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: Mutex<Vec<Expense>>,
    failing: AtomicBool,
    writes: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `expenses` already stored, in the given order
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: Mutex::new(expenses),
            ..Self::default()
        }
    }

    /// Current contents, bypassing the failure switch
    pub fn snapshot(&self) -> Vec<Expense> {
        self.expenses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Make every subsequent read and write fail
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful `write_all` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store set to fail".into()));
        }
        Ok(())
    }
}

impl ExpenseStore for MemoryStore {
    fn read_all(&self) -> StoreResult<Vec<Expense>> {
        self.check_available()?;
        Ok(self.snapshot())
    }

    fn write_all(&self, expenses: &[Expense]) -> StoreResult<()> {
        self.check_available()?;
        let mut stored = self
            .expenses
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".into()))?;
        *stored = expenses.to_vec();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
