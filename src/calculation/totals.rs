//! Payroll totals.
//!
//! Summary figures shown under the wage entry table: overall net wages and
//! FNPF, net wages per branch, and the cash the branches must draw.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Branch, Employee, PaymentMethod, WageRecord};

/// Totals over a batch of wage records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Sum of net pay.
    pub total_net_wages: Decimal,
    /// Sum of FNPF deductions.
    pub total_fnpf_deduction: Decimal,
    /// Net pay of Suva employees.
    pub total_suva_wages: Decimal,
    /// Net pay of Labasa employees.
    pub total_labasa_wages: Decimal,
    /// Net pay of cash-paid employees.
    pub total_cash_wages: Decimal,
}

impl PayrollTotals {
    /// Sums `records`, looking up branch and payment method in `employees`.
    ///
    /// Records whose employee no longer exists still count towards the
    /// overall totals but towards no branch or cash total. Sums saturate at
    /// the bounds of [`Decimal`].
    pub fn from_records(records: &[WageRecord], employees: &[Employee]) -> Self {
        let by_id: HashMap<&str, &Employee> =
            employees.iter().map(|e| (e.id.as_str(), e)).collect();

        records.iter().fold(Self::default(), |mut totals, record| {
            let net = record.net_pay;
            totals.total_net_wages = totals.total_net_wages.saturating_add(net);
            totals.total_fnpf_deduction = totals
                .total_fnpf_deduction
                .saturating_add(record.fnpf_deduction);

            if let Some(employee) = by_id.get(record.employee_id.as_str()) {
                let branch_total = match employee.branch {
                    Branch::Suva => &mut totals.total_suva_wages,
                    Branch::Labasa => &mut totals.total_labasa_wages,
                };
                *branch_total = branch_total.saturating_add(net);
                if employee.payment_method == PaymentMethod::Cash {
                    totals.total_cash_wages = totals.total_cash_wages.saturating_add(net);
                }
            }
            totals
        })
    }
}
