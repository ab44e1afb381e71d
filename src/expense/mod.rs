//! # Expenses
//!
//! The expense record, its validation, filtering and aggregation, and the
//! service that performs CRUD operations against a store.

pub mod category;
pub mod errors;
pub mod filter;
pub mod model;
pub mod service;
pub mod summary;

pub use category::{category_color, Category};
pub use errors::{ExpenseError, ExpenseResult};
pub use filter::{matches, ExpenseFilter};
pub use model::{round_cents, AmountInput, Expense, ExpensePatch, NewExpense};
pub use service::ExpenseService;
pub use summary::Summary;
