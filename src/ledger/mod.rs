//! The payroll ledger: pay period collision checks, batch replacement,
//! date range filtering and chart summaries over wage records.

mod records;
mod summary;

pub use records::{
    append_period, compute_period, delete_in_range, filter_in_range, has_collision,
    replace_period,
};
pub use summary::{
    EmployeeHistory, EmployeePayPoint, PeriodSummary, employee_history, summarize_by_period,
};
