//! Core data models for the payroll ledger.
//!
//! This module contains the domain records persisted by the store and
//! exchanged with the API.

mod employee;
mod pay_period;
mod wage_record;

pub use employee::{
    BankDetails, Branch, Employee, EmployeeDraft, PaymentMethod, max_hourly_wage,
};
pub use pay_period::{PayPeriod, parse_instant};
pub(crate) use pay_period::deserialize_optional_instant;
pub use wage_record::WageRecord;
