//! Dashboard figures
//!
//! The numbers the web UI shows above the expense list: running totals,
//! count and average, per-category shares and the six-month trend. All of
//! them are computed from the full collection. Only the month total depends
//! on the selected month; the trend always ends with the current month.

use std::fmt;

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::Serialize;

use crate::expense::{category_color, filter, round_cents, Expense, ExpenseError, ExpenseResult};

/// Number of months in the trend
pub const TREND_MONTHS: u32 = 6;

/// A calendar month, written `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(YearMonth)
    }

    /// Parse a strict `YYYY-MM` string
    pub fn parse(s: &str) -> ExpenseResult<Self> {
        let invalid = || ExpenseError::invalid_input(format!("month must be YYYY-MM, got '{}'", s));

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }

    /// The current month in local time
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        YearMonth(today.with_day(1).unwrap_or(today))
    }

    /// The month `n` months before this one
    pub fn months_back(&self, n: u32) -> Self {
        self.0
            .checked_sub_months(Months::new(n))
            .map(YearMonth)
            .unwrap_or(*self)
    }

    /// The `count` months ending with this one, oldest first
    pub fn trailing(&self, count: u32) -> Vec<YearMonth> {
        (0..count).rev().map(|n| self.months_back(n)).collect()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyTotal {
    pub month: String,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub month: String,
    pub total_spent: f64,
    pub month_total: f64,
    pub transaction_count: usize,
    pub average_amount: f64,
    /// In the order each category first appears in the collection
    pub by_category: Vec<CategoryTotal>,
    /// Oldest month first
    pub monthly: Vec<MonthlyTotal>,
}

fn sum_matching(expenses: &[Expense], category: Option<&str>, month: Option<&str>) -> f64 {
    expenses
        .iter()
        .filter(|e| filter::matches(e, category, month))
        .map(|e| e.amount)
        .sum()
}

fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match totals.iter_mut().find(|t| t.category == expense.category) {
            Some(total) => total.amount += expense.amount,
            None => totals.push(CategoryTotal {
                category: expense.category.clone(),
                amount: expense.amount,
                color: category_color(&expense.category),
            }),
        }
    }

    for total in &mut totals {
        total.amount = round_cents(total.amount);
    }
    totals
}

impl Dashboard {
    /// Figures for the selected `month`, with the trend ending at `trend_end`
    pub fn compute(expenses: &[Expense], month: YearMonth, trend_end: YearMonth) -> Self {
        let selected = month.to_string();
        let total = sum_matching(expenses, None, None);
        let count = expenses.len();
        let average = if count == 0 { 0.0 } else { total / count as f64 };

        let monthly = trend_end
            .trailing(TREND_MONTHS)
            .into_iter()
            .map(|m| {
                let key = m.to_string();
                MonthlyTotal {
                    total: round_cents(sum_matching(expenses, None, Some(&key))),
                    month: key,
                }
            })
            .collect();

        Self {
            month_total: round_cents(sum_matching(expenses, None, Some(&selected))),
            month: selected,
            total_spent: round_cents(total),
            transaction_count: count,
            average_amount: round_cents(average),
            by_category: category_totals(expenses),
            monthly,
        }
    }
}
