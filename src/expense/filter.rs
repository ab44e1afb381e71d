//! Category and month filtering.
//!
//! `matches` is the single predicate behind both the list endpoint and the
//! dashboard figures, so the two can never disagree.

use serde::Deserialize;

use super::model::Expense;

/// True when `expense` passes both filters.
///
/// - category: exact, case-sensitive match
/// - month: `date` starts with the filter (e.g. `"2024-03"`)
///
/// A missing or empty filter matches everything.
pub fn matches(expense: &Expense, category: Option<&str>, month: Option<&str>) -> bool {
    let category_ok = match category.filter(|c| !c.is_empty()) {
        Some(category) => expense.category == category,
        None => true,
    };
    let month_ok = match month.filter(|m| !m.is_empty()) {
        Some(month) => expense.date.starts_with(month),
        None => true,
    };
    category_ok && month_ok
}

/// Query-string filters for the list endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseFilter {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}

impl ExpenseFilter {
    pub fn new(category: Option<&str>, month: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
            month: month.map(str::to_string),
        }
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        matches(expense, self.category.as_deref(), self.month.as_deref())
    }

    /// Keep the matching records, preserving their order
    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        expenses.into_iter().filter(|e| self.matches(e)).collect()
    }
}
