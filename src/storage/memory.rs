//! In-memory store, used by tests and for throwaway sessions.

use std::sync::{Mutex, MutexGuard};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, WageRecord};

use super::traits::{EmployeeRepository, WageRecordRepository};

/// Keeps both collections in memory behind a mutex each.
#[derive(Debug, Default)]
pub struct MemoryStore {
    employees: Mutex<Vec<Employee>>,
    wage_records: Mutex<Vec<WageRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-filled with the given collections.
    pub fn with_data(employees: Vec<Employee>, wage_records: Vec<WageRecord>) -> Self {
        Self {
            employees: Mutex::new(employees),
            wage_records: Mutex::new(wage_records),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> PayrollResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| PayrollError::storage("in-memory store lock poisoned"))
}

/// Runs `update` on a copy so a failed update leaves the original untouched.
fn update_in_place<T: Clone>(
    current: &mut Vec<T>,
    update: &mut dyn FnMut(&mut Vec<T>) -> PayrollResult<()>,
) -> PayrollResult<()> {
    let mut working = current.clone();
    update(&mut working)?;
    *current = working;
    Ok(())
}

impl EmployeeRepository for MemoryStore {
    fn load_employees(&self) -> PayrollResult<Vec<Employee>> {
        Ok(lock(&self.employees)?.clone())
    }

    fn replace_employees(&self, employees: Vec<Employee>) -> PayrollResult<()> {
        *lock(&self.employees)? = employees;
        Ok(())
    }

    fn update_employees(
        &self,
        update: &mut dyn FnMut(&mut Vec<Employee>) -> PayrollResult<()>,
    ) -> PayrollResult<()> {
        let mut guard = lock(&self.employees)?;
        update_in_place(&mut *guard, update)
    }
}

impl WageRecordRepository for MemoryStore {
    fn load_wage_records(&self) -> PayrollResult<Vec<WageRecord>> {
        Ok(lock(&self.wage_records)?.clone())
    }

    fn replace_wage_records(&self, records: Vec<WageRecord>) -> PayrollResult<()> {
        *lock(&self.wage_records)? = records;
        Ok(())
    }

    fn update_wage_records(
        &self,
        update: &mut dyn FnMut(&mut Vec<WageRecord>) -> PayrollResult<()>,
    ) -> PayrollResult<()> {
        let mut guard = lock(&self.wage_records)?;
        update_in_place(&mut *guard, update)
    }
}
