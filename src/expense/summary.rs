//! Aggregate totals over the whole collection.

use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{round_cents, Expense};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

impl Summary {
    /// Sum every amount, overall and per category. Filters are never applied.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut total = 0.0;
        let mut by_category: BTreeMap<String, f64> = BTreeMap::new();

        for expense in expenses {
            total += expense.amount;
            *by_category.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }

        for amount in by_category.values_mut() {
            *amount = round_cents(*amount);
        }

        Self {
            total: round_cents(total),
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> Expense {
        Expense {
            id: format!("{}-{}", category, amount),
            title: "x".into(),
            amount,
            category: category.into(),
            date: "2024-03-01".into(),
            note: String::new(),
            created_at: "2024-03-01T00:00:00.000Z".into(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let summary = Summary::from_expenses(&[]);
        assert_eq!(summary.total, 0.0);
        assert!(summary.by_category.is_empty());
    }

    #[test]
    fn test_totals_are_rounded() {
        let summary = Summary::from_expenses(&[
            expense("Food", 0.1),
            expense("Food", 0.2),
            expense("Transport", 2.75),
        ]);

        assert_eq!(summary.total, 3.05);
        assert_eq!(summary.by_category["Food"], 0.3);
        assert_eq!(summary.by_category["Transport"], 2.75);
    }

    #[test]
    fn test_category_totals_add_up_to_total() {
        let expenses = vec![
            expense("Food", 12.4),
            expense("Housing", 900.0),
            expense("Food", 3.33),
            expense("Health", 45.1),
            expense("Pets", 19.99),
        ];
        let summary = Summary::from_expenses(&expenses);

        let category_sum: f64 = summary.by_category.values().sum();
        assert!((category_sum - summary.total).abs() < 0.01);
        assert_eq!(summary.by_category.len(), 4);
    }

    #[test]
    fn test_serializes_by_category_key() {
        let summary = Summary::from_expenses(&[expense("Food", 3.5)]);
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total"], 3.5);
        assert_eq!(value["byCategory"]["Food"], 3.5);
    }
}
