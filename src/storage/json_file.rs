//! JSON file store.
//!
//! Each collection is one pretty-printed JSON array in the data directory:
//! `employees.json` and `wageRecords.json`. Writes go to a temporary file
//! that is then renamed over the target.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, WageRecord};

use super::traits::{EmployeeRepository, WageRecordRepository};

const EMPLOYEES_FILE: &str = "employees.json";
const WAGE_RECORDS_FILE: &str = "wageRecords.json";

/// Stores both collections as JSON files under one directory.
#[derive(Debug)]
pub struct JsonFileStore {
    data_dir: PathBuf,
    employees_lock: Mutex<()>,
    wage_records_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Opens a store rooted at `data_dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> PayrollResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).map_err(|e| {
                PayrollError::storage(format!("cannot create {}: {}", data_dir.display(), e))
            })?;
            info!(path = %data_dir.display(), "Created data directory");
        }

        Ok(Self {
            data_dir,
            employees_lock: Mutex::new(()),
            wage_records_lock: Mutex::new(()),
        })
    }

    /// The directory holding the collection files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn employees_path(&self) -> PathBuf {
        self.data_dir.join(EMPLOYEES_FILE)
    }

    fn wage_records_path(&self) -> PathBuf {
        self.data_dir.join(WAGE_RECORDS_FILE)
    }
}

fn lock(mutex: &Mutex<()>) -> PayrollResult<MutexGuard<'_, ()>> {
    mutex
        .lock()
        .map_err(|_| PayrollError::storage("file store lock poisoned"))
}

/// Reads a collection. A missing file is an empty collection.
fn read_collection<T: DeserializeOwned>(path: &Path) -> PayrollResult<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| PayrollError::storage(format!("cannot read {}: {}", path.display(), e)))?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| PayrollError::storage(format!("cannot parse {}: {}", path.display(), e)))
}

fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> PayrollResult<()> {
    let content = serde_json::to_string_pretty(items)
        .map_err(|e| PayrollError::storage(format!("cannot serialize {}: {}", path.display(), e)))?;

    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content).map_err(|e| {
        PayrollError::storage(format!("cannot write {}: {}", temp_path.display(), e))
    })?;
    fs::rename(&temp_path, path)
        .map_err(|e| PayrollError::storage(format!("cannot replace {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), count = items.len(), "Wrote collection");
    Ok(())
}

fn update_collection<T: Serialize + DeserializeOwned>(
    path: &Path,
    update: &mut dyn FnMut(&mut Vec<T>) -> PayrollResult<()>,
) -> PayrollResult<()> {
    let mut items = read_collection(path)?;
    update(&mut items)?;
    write_collection(path, &items)
}

impl EmployeeRepository for JsonFileStore {
    fn load_employees(&self) -> PayrollResult<Vec<Employee>> {
        let _guard = lock(&self.employees_lock)?;
        read_collection(&self.employees_path())
    }

    fn replace_employees(&self, employees: Vec<Employee>) -> PayrollResult<()> {
        let _guard = lock(&self.employees_lock)?;
        write_collection(&self.employees_path(), &employees)
    }

    fn update_employees(
        &self,
        update: &mut dyn FnMut(&mut Vec<Employee>) -> PayrollResult<()>,
    ) -> PayrollResult<()> {
        let _guard = lock(&self.employees_lock)?;
        update_collection(&self.employees_path(), update)
    }
}

impl WageRecordRepository for JsonFileStore {
    fn load_wage_records(&self) -> PayrollResult<Vec<WageRecord>> {
        let _guard = lock(&self.wage_records_lock)?;
        read_collection(&self.wage_records_path())
    }

    fn replace_wage_records(&self, records: Vec<WageRecord>) -> PayrollResult<()> {
        let _guard = lock(&self.wage_records_lock)?;
        write_collection(&self.wage_records_path(), &records)
    }

    fn update_wage_records(
        &self,
        update: &mut dyn FnMut(&mut Vec<WageRecord>) -> PayrollResult<()>,
    ) -> PayrollResult<()> {
        let _guard = lock(&self.wage_records_lock)?;
        update_collection(&self.wage_records_path(), update)
    }
}
