//! Pay period bookkeeping over the wage record collection.
//!
//! These functions operate on an in-memory list of records; the service
//! loads and stores that list through the repositories.

use std::collections::HashMap;

use tracing::debug;

use crate::calculation::{HoursEntry, calculate_wages};
use crate::models::{Employee, PayPeriod, WageRecord};

/// Calculates one wage record per employee for `period`.
///
/// Employees missing from `hours_by_employee` are calculated with zero hours
/// and zero other deductions, as a blank row on the wage form would be.
pub fn compute_period(
    employees: &[Employee],
    hours_by_employee: &HashMap<String, HoursEntry>,
    period: PayPeriod,
) -> Vec<WageRecord> {
    employees
        .iter()
        .map(|employee| {
            let entry = hours_by_employee
                .get(&employee.id)
                .copied()
                .unwrap_or_default();
            let wages = calculate_wages(
                employee.hourly_wage,
                entry.hours_worked,
                entry.other_deductions,
            );
            WageRecord::for_employee(employee, &wages, period)
        })
        .collect()
}

/// Returns true if any record was calculated for exactly `period`.
///
/// Only identical start and end instants collide; overlapping periods do not.
pub fn has_collision(existing: &[WageRecord], period: &PayPeriod) -> bool {
    existing.iter().any(|r| r.period().same_as(period))
}

/// Appends a freshly calculated batch.
pub fn append_period(existing: &mut Vec<WageRecord>, new_records: Vec<WageRecord>) {
    existing.extend(new_records);
}

/// Replaces every record of exactly `period` with `new_records`.
///
/// Returns the number of records removed. Callers must have obtained
/// administrator confirmation first.
pub fn replace_period(
    existing: &mut Vec<WageRecord>,
    period: &PayPeriod,
    new_records: Vec<WageRecord>,
) -> usize {
    let before = existing.len();
    existing.retain(|r| !r.period().same_as(period));
    let removed = before - existing.len();
    debug!(removed, added = new_records.len(), "Replacing pay period");
    existing.extend(new_records);
    removed
}

/// Returns the records whose period lies entirely within `range`.
pub fn filter_in_range<'a>(records: &'a [WageRecord], range: &PayPeriod) -> Vec<&'a WageRecord> {
    records
        .iter()
        .filter(|r| range.contains(&r.period()))
        .collect()
}

/// Removes the records whose period lies entirely within `range`.
///
/// Returns the number of records removed.
pub fn delete_in_range(records: &mut Vec<WageRecord>, range: &PayPeriod) -> usize {
    let before = records.len();
    records.retain(|r| !range.contains(&r.period()));
    before - records.len()
}
