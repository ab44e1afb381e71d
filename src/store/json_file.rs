//! # JSON File Store
//!
//! The collection lives in a single JSON array on disk. Every write replaces
//! the document: the new content goes to a sibling `.tmp` file which is then
//! renamed over the document.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::expense::Expense;
use crate::observability::Logger;

use super::backend::ExpenseStore;
use super::errors::{StoreError, StoreResult};

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at `path`, creating parent directories and an empty
    /// `[]` document if nothing exists there yet.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
                }
            }
            store.write_all(&[])?;
            Logger::info(
                "STORE_INITIALIZED",
                &[("path", &store.path.display().to_string())],
            );
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("expenses.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ExpenseStore for JsonFileStore {
    fn read_all(&self) -> StoreResult<Vec<Expense>> {
        let content = fs::read_to_string(&self.path).map_err(|e| StoreError::io(&self.path, e))?;

        serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_all(&self, expenses: &[Expense]) -> StoreResult<()> {
        let content = serde_json::to_vec_pretty(expenses)?;
        let temp_path = self.temp_path();

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| StoreError::io(&temp_path, e))?;

        file.write_all(&content)
            .map_err(|e| StoreError::io(&temp_path, e))?;
        file.sync_all().map_err(|e| StoreError::io(&temp_path, e))?;

        fs::rename(&temp_path, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}
