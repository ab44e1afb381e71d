//! Expense record and the request shapes that create or modify it.

use serde::{Deserialize, Serialize};

use super::errors::{ExpenseError, ExpenseResult};

const MISSING_FIELDS: &str = "title, amount, category, and date are required";
const INVALID_AMOUNT: &str = "amount must be a positive number";

/// A single spending entry as persisted and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// ISO calendar date, `YYYY-MM-DD`
    pub date: String,
    #[serde(default)]
    pub note: String,
    pub created_at: String,
}

/// Amount as sent by clients: either a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    /// Numeric value, if the input holds a finite number
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            AmountInput::Number(n) => *n,
            AmountInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    fn is_blank(&self) -> bool {
        matches!(self, AmountInput::Text(s) if s.trim().is_empty())
    }
}

/// Round to two fractional digits.
///
/// Values too large to scale by 100 have no fractional part left and are
/// returned as is.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExpense {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

fn present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

impl NewExpense {
    /// Check required fields and the amount.
    ///
    /// Returns the amount rounded to cents.
    pub fn validate(&self) -> ExpenseResult<f64> {
        let amount_present = self.amount.as_ref().is_some_and(|a| !a.is_blank());
        if !present(&self.title) || !amount_present || !present(&self.category) || !present(&self.date) {
            return Err(ExpenseError::invalid_input(MISSING_FIELDS));
        }

        match self.amount.as_ref().and_then(AmountInput::value) {
            Some(amount) if amount > 0.0 => Ok(round_cents(amount)),
            _ => Err(ExpenseError::invalid_input(INVALID_AMOUNT)),
        }
    }

    /// Validate and build the record that will be stored
    pub fn into_expense(self, id: String, created_at: String) -> ExpenseResult<Expense> {
        let amount = self.validate()?;

        Ok(Expense {
            id,
            title: self.title.unwrap_or_default(),
            amount,
            category: self.category.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            note: self.note.unwrap_or_default(),
            created_at,
        })
    }
}

/// Body of an update request. Absent fields keep their stored value; `id`
/// and `createdAt` are not part of the patch and are ignored if sent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpensePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl ExpensePatch {
    /// Merge the supplied fields over `expense`.
    ///
    /// Only the amount is checked, and only for being numeric. On error the
    /// record is left untouched.
    pub fn apply(self, expense: &mut Expense) -> ExpenseResult<()> {
        let amount = match &self.amount {
            Some(input) => Some(
                input
                    .value()
                    .ok_or_else(|| ExpenseError::invalid_input("amount must be a number"))?,
            ),
            None => None,
        };

        if let Some(title) = self.title {
            expense.title = title;
        }
        if let Some(amount) = amount {
            expense.amount = round_cents(amount);
        }
        if let Some(category) = self.category {
            expense.category = category;
        }
        if let Some(date) = self.date {
            expense.date = date;
        }
        if let Some(note) = self.note {
            expense.note = note;
        }

        Ok(())
    }
}
