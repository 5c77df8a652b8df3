//! Repository traits over the two persisted collections.
//!
//! Each collection is loaded and stored whole. `update_*` runs a
//! modification under the store's lock so that a concurrent caller cannot
//! interleave between the load and the write.

use crate::error::PayrollResult;
use crate::models::{Employee, WageRecord};

/// Access to the `employees` collection.
pub trait EmployeeRepository: Send + Sync {
    /// Loads every employee, in stored order.
    fn load_employees(&self) -> PayrollResult<Vec<Employee>>;

    /// Replaces the whole collection.
    fn replace_employees(&self, employees: Vec<Employee>) -> PayrollResult<()>;

    /// Loads, modifies and stores the collection as one step.
    ///
    /// Nothing is written if `update` returns an error.
    fn update_employees(
        &self,
        update: &mut dyn FnMut(&mut Vec<Employee>) -> PayrollResult<()>,
    ) -> PayrollResult<()>;
}

/// Access to the `wageRecords` collection.
pub trait WageRecordRepository: Send + Sync {
    /// Loads every wage record, in stored order.
    fn load_wage_records(&self) -> PayrollResult<Vec<WageRecord>>;

    /// Replaces the whole collection.
    fn replace_wage_records(&self, records: Vec<WageRecord>) -> PayrollResult<()>;

    /// Loads, modifies and stores the collection as one step.
    ///
    /// Nothing is written if `update` returns an error.
    fn update_wage_records(
        &self,
        update: &mut dyn FnMut(&mut Vec<WageRecord>) -> PayrollResult<()>,
    ) -> PayrollResult<()>;
}

/// A store holding both collections.
pub trait PayrollStore: EmployeeRepository + WageRecordRepository {}

impl<T: EmployeeRepository + WageRecordRepository> PayrollStore for T {}
