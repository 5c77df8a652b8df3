//! Wage record model.
//!
//! A [`WageRecord`] is the persisted outcome of one employee's pay for one
//! pay period. Records are written in batches and never edited; a
//! recalculation of the same period replaces the whole batch.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pay_period::deserialize_instant;
use super::{Employee, PayPeriod};
use crate::calculation::WageCalculation;

/// One employee's wages for one pay period.
///
/// The employee name and hourly wage are copied in at calculation time, so a
/// record still reads correctly after the employee is edited or deleted.
///
/// # Example
///
/// ```
/// use payroll_ledger::calculation::calculate_wages;
/// use payroll_ledger::models::{PayPeriod, WageRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let period = PayPeriod::from_dates(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
/// ).unwrap();
/// let wages = calculate_wages(Decimal::from(10), Decimal::from(40), Decimal::ZERO);
/// let record = WageRecord::new("emp_001", "Ravi Lal", &wages, period);
///
/// assert_eq!(record.net_pay, Decimal::from(368));
/// assert_eq!(record.period(), period);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageRecord {
    /// Id of the employee the record belongs to. Not enforced as a reference.
    pub employee_id: String,
    /// Employee name at calculation time.
    pub employee_name: String,
    /// Hourly wage at calculation time.
    pub hourly_wage: Decimal,
    /// Hours worked in the period.
    pub hours_worked: Decimal,
    /// FNPF contribution withheld.
    pub fnpf_deduction: Decimal,
    /// Any further deductions entered by the operator.
    pub other_deductions: Decimal,
    /// Hourly wage times hours worked.
    pub gross_pay: Decimal,
    /// Gross pay less all deductions; may be negative.
    pub net_pay: Decimal,
    /// Start of the pay period.
    #[serde(deserialize_with = "deserialize_instant")]
    pub date_from: DateTime<Utc>,
    /// End of the pay period.
    #[serde(deserialize_with = "deserialize_instant")]
    pub date_to: DateTime<Utc>,
}

impl WageRecord {
    /// Stamps a wage calculation with its employee and period.
    pub fn new(
        employee_id: impl Into<String>,
        employee_name: impl Into<String>,
        wages: &WageCalculation,
        period: PayPeriod,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            employee_name: employee_name.into(),
            hourly_wage: wages.hourly_wage,
            hours_worked: wages.hours_worked,
            fnpf_deduction: wages.fnpf_deduction,
            other_deductions: wages.other_deductions,
            gross_pay: wages.gross_pay,
            net_pay: wages.net_pay,
            date_from: period.start,
            date_to: period.end,
        }
    }

    /// Builds the record for `employee` from a wage calculation.
    pub fn for_employee(employee: &Employee, wages: &WageCalculation, period: PayPeriod) -> Self {
        Self::new(employee.id.clone(), employee.name.clone(), wages, period)
    }

    /// The pay period this record was calculated for.
    pub fn period(&self) -> PayPeriod {
        PayPeriod {
            start: self.date_from,
            end: self.date_to,
        }
    }
}
