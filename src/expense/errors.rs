//! # Expense Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for expense operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;

/// Expense operation errors
#[derive(Debug, Clone, Error)]
pub enum ExpenseError {
    /// Missing or malformed request fields. The message is shown to the client.
    #[error("{0}")]
    InvalidInput(String),

    /// No expense with the given id
    #[error("Expense not found")]
    NotFound(String),

    /// The persisted document could not be read or written
    #[error("Storage failure: {0}")]
    StorageFailure(#[from] StoreError),
}

impl ExpenseError {
    /// Create an invalid input error
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        ExpenseError::InvalidInput(reason.into())
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ExpenseError::InvalidInput(_) => 400,
            ExpenseError::NotFound(_) => 404,
            ExpenseError::StorageFailure(_) => 500,
        }
    }
}
