//! # Expense Service
//!
//! CRUD and summary operations over an [`ExpenseStore`]. The service keeps no
//! state between calls: each operation reads the whole collection, works on
//! it, and writes it back when something changed.
//!
//! Every read-modify-write cycle runs under one process-wide lock, so two
//! concurrent mutations can no longer overwrite each other's changes.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::dashboard::{Dashboard, YearMonth};
use crate::observability::Logger;
use crate::store::{ExpenseStore, StoreError};

use super::errors::{ExpenseError, ExpenseResult};
use super::filter::ExpenseFilter;
use super::model::{Expense, ExpensePatch, NewExpense};
use super::summary::Summary;

#[derive(Debug)]
pub struct ExpenseService {
    store: Arc<dyn ExpenseStore>,
    lock: Mutex<()>,
}

fn storage_failure(err: StoreError) -> ExpenseError {
    Logger::error("STORAGE_FAILURE", &[("error", &err.to_string())]);
    ExpenseError::StorageFailure(err)
}

fn rejected(operation: &str, err: ExpenseError) -> ExpenseError {
    Logger::warn(
        "EXPENSE_REJECTED",
        &[("operation", operation), ("reason", &err.to_string())],
    );
    err
}

impl ExpenseService {
    pub fn new(store: Arc<dyn ExpenseStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn read_all(&self) -> ExpenseResult<Vec<Expense>> {
        self.store.read_all().map_err(storage_failure)
    }

    fn write_all(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        self.store.write_all(expenses).map_err(storage_failure)
    }

    /// Records matching `filter`, in collection order
    pub fn list(&self, filter: &ExpenseFilter) -> ExpenseResult<Vec<Expense>> {
        let _guard = self.guard();
        Ok(filter.apply(self.read_all()?))
    }

    /// Validate `input`, then store it as the newest record
    pub fn create(&self, input: NewExpense) -> ExpenseResult<Expense> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let expense = input
            .into_expense(id, created_at)
            .map_err(|e| rejected("create", e))?;

        let _guard = self.guard();
        let mut expenses = self.read_all()?;
        expenses.insert(0, expense.clone());
        self.write_all(&expenses)?;

        Logger::info(
            "EXPENSE_CREATED",
            &[("id", &expense.id), ("category", &expense.category)],
        );
        Ok(expense)
    }

    /// Merge `patch` into the record with `id`
    pub fn update(&self, id: &str, patch: ExpensePatch) -> ExpenseResult<Expense> {
        let _guard = self.guard();
        let mut expenses = self.read_all()?;

        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| rejected("update", ExpenseError::NotFound(id.to_string())))?;
        patch.apply(expense).map_err(|e| rejected("update", e))?;
        let updated = expense.clone();

        self.write_all(&expenses)?;

        Logger::info("EXPENSE_UPDATED", &[("id", id)]);
        Ok(updated)
    }

    /// Remove the record with `id`
    pub fn delete(&self, id: &str) -> ExpenseResult<()> {
        let _guard = self.guard();
        let mut expenses = self.read_all()?;

        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(rejected("delete", ExpenseError::NotFound(id.to_string())));
        }

        self.write_all(&expenses)?;

        Logger::info("EXPENSE_DELETED", &[("id", id)]);
        Ok(())
    }

    /// Totals over the whole, unfiltered collection
    pub fn summary(&self) -> ExpenseResult<Summary> {
        let _guard = self.guard();
        Ok(Summary::from_expenses(&self.read_all()?))
    }

    /// Dashboard figures with `month` as the selected month. The trend ends
    /// with the current month.
    pub fn dashboard(&self, month: YearMonth) -> ExpenseResult<Dashboard> {
        let _guard = self.guard();
        Ok(Dashboard::compute(&self.read_all()?, month, YearMonth::current()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expense::AmountInput;
    use crate::store::MemoryStore;

    fn service_with(store: &Arc<MemoryStore>) -> ExpenseService {
        ExpenseService::new(store.clone())
    }

    fn new_expense(title: &str, amount: f64, category: &str, date: &str) -> NewExpense {
        NewExpense {
            title: Some(title.into()),
            amount: Some(AmountInput::Number(amount)),
            category: Some(category.into()),
            date: Some(date.into()),
            note: None,
        }
    }

    #[test]
    fn test_create_prepends_and_persists() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);

        let first = service.create(new_expense("Rent", 900.0, "Housing", "2024-03-01")).unwrap();
        let second = service.create(new_expense("Lunch", 12.456, "Food", "2024-03-02")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(second.amount, 12.46);
        assert!(second.created_at.ends_with('Z'));
        assert_eq!(store.snapshot(), vec![second, first]);
    }

    #[test]
    fn test_invalid_create_does_not_touch_store() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);

        let result = service.create(new_expense("Refund", -3.0, "Other", "2024-03-01"));

        assert!(matches!(result, Err(ExpenseError::InvalidInput(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_update_keeps_id_and_position() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);
        let a = service.create(new_expense("A", 1.0, "Food", "2024-03-01")).unwrap();
        let b = service.create(new_expense("B", 2.0, "Food", "2024-03-02")).unwrap();

        let patch = ExpensePatch {
            title: Some("A2".into()),
            ..ExpensePatch::default()
        };
        let updated = service.update(&a.id, patch).unwrap();

        assert_eq!(updated.id, a.id);
        assert_eq!(updated.title, "A2");
        let ids: Vec<_> = store.snapshot().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);

        let result = service.update("nope", ExpensePatch::default());

        assert!(matches!(result, Err(ExpenseError::NotFound(_))));
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);
        let a = service.create(new_expense("A", 1.0, "Food", "2024-03-01")).unwrap();
        let b = service.create(new_expense("B", 2.0, "Food", "2024-03-02")).unwrap();
        let c = service.create(new_expense("C", 3.0, "Food", "2024-03-03")).unwrap();

        service.delete(&b.id).unwrap();

        assert_eq!(store.snapshot(), vec![c, a]);
        assert!(matches!(service.delete(&b.id), Err(ExpenseError::NotFound(_))));
    }

    #[test]
    fn test_list_applies_filter() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);
        service.create(new_expense("A", 1.0, "Food", "2024-02-01")).unwrap();
        let b = service.create(new_expense("B", 2.0, "Food", "2024-03-02")).unwrap();
        service.create(new_expense("C", 3.0, "Health", "2024-03-03")).unwrap();

        let result = service.list(&ExpenseFilter::new(Some("Food"), Some("2024-03"))).unwrap();

        assert_eq!(result, vec![b]);
    }

    #[test]
    fn test_storage_failure_propagates() {
        let store = Arc::new(MemoryStore::new());
        let service = service_with(&store);
        store.set_failing(true);

        assert!(matches!(
            service.list(&ExpenseFilter::default()),
            Err(ExpenseError::StorageFailure(_))
        ));
        assert!(matches!(service.summary(), Err(ExpenseError::StorageFailure(_))));
        assert!(matches!(
            service.create(new_expense("A", 1.0, "Food", "2024-03-01")),
            Err(ExpenseError::StorageFailure(_))
        ));
    }

    #[test]
    fn test_concurrent_creates_are_not_lost() {
        let store = Arc::new(MemoryStore::new());
        let service = Arc::new(service_with(&store));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let service = service.clone();
                std::thread::spawn(move || {
                    service
                        .create(new_expense(&format!("item {}", i), 1.0, "Other", "2024-03-01"))
                        .unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.snapshot().len(), 8);
        assert_eq!(service.summary().unwrap().total, 8.0);
    }
}
