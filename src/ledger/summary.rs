//! Chart series derived from stored wage records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{PayPeriod, WageRecord};

/// Total net pay for one pay period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// The pay period.
    pub period: PayPeriod,
    /// Display label, e.g. `Jan 01 - Jan 07`.
    pub label: String,
    /// Sum of net pay over the period's records.
    pub total_net_pay: Decimal,
}

/// Net pay of one employee in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayPoint {
    /// Display label of the pay period.
    pub pay_week: String,
    /// Net pay for that period.
    pub net_pay: Decimal,
}

/// An employee's net pay across periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeHistory {
    /// The employee id.
    pub employee_id: String,
    /// Name as recorded on the first record seen.
    pub employee_name: String,
    /// One point per record, in record order.
    pub points: Vec<EmployeePayPoint>,
}

/// Sums net pay per distinct pay period, in the order periods first appear.
pub fn summarize_by_period(records: &[WageRecord]) -> Vec<PeriodSummary> {
    let mut summaries: Vec<PeriodSummary> = Vec::new();
    for record in records {
        let period = record.period();
        match summaries.iter_mut().find(|s| s.period == period) {
            Some(summary) => {
                summary.total_net_pay = summary.total_net_pay.saturating_add(record.net_pay)
            }
            None => summaries.push(PeriodSummary {
                period,
                label: period.label(),
                total_net_pay: record.net_pay,
            }),
        }
    }
    summaries
}

/// Groups net pay by employee, in the order employees first appear.
pub fn employee_history<'a, I>(records: I) -> Vec<EmployeeHistory>
where
    I: IntoIterator<Item = &'a WageRecord>,
{
    let mut history: Vec<EmployeeHistory> = Vec::new();
    for record in records {
        let point = EmployeePayPoint {
            pay_week: record.period().label(),
            net_pay: record.net_pay,
        };
        match history
            .iter_mut()
            .find(|h| h.employee_id == record.employee_id)
        {
            Some(entry) => entry.points.push(point),
            None => history.push(EmployeeHistory {
                employee_id: record.employee_id.clone(),
                employee_name: record.employee_name.clone(),
                points: vec![point],
            }),
        }
    }
    history
}
