//! Bank transfer files.
//!
//! Two fixed comma-separated layouts are supported, one per bank. Both only
//! carry employees paid by online transfer.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ExportFile, format_money};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{BankDetails, Employee, WageRecord};

const PURPOSE: &str = "Salary";

const BRED_HEADER: [&str; 6] = [
    "BIC",
    "Employee",
    "Employee",
    "Account N",
    "Amount",
    "Purpose of Note (optional)",
];

/// The bank file layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankFileFormat {
    /// No header; `bank code, account, amount, "Salary", name`.
    Bsp,
    /// Header row; `bank code, name, "", account, amount, "Salary"`.
    Bred,
}

impl BankFileFormat {
    /// The download file name, e.g. `wage_records_BSP.csv`.
    pub fn file_name(&self) -> String {
        format!("wage_records_{}.csv", self)
    }
}

impl fmt::Display for BankFileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankFileFormat::Bsp => write!(f, "BSP"),
            BankFileFormat::Bred => write!(f, "BRED"),
        }
    }
}

impl FromStr for BankFileFormat {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BSP" => Ok(BankFileFormat::Bsp),
            "BRED" => Ok(BankFileFormat::Bred),
            _ => Err(PayrollError::UnknownExportFormat {
                format: s.to_string(),
            }),
        }
    }
}

/// Renders the bank file for `records`.
///
/// A record is skipped when its employee is known to be paid in cash. A
/// record whose employee has been deleted is kept with empty bank fields.
/// Fails with [`PayrollError::NothingToExport`] when no row remains.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_wages;
/// use payroll_ledger::export::{BankFileFormat, render_bank_file};
/// use payroll_ledger::models::{Branch, Employee, EmployeeDraft, PayPeriod, PaymentMethod, WageRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee::with_id("emp_001", EmployeeDraft {
///     name: "Ravi Lal".to_string(),
///     position: "Winder".to_string(),
///     hourly_wage: "10".to_string(),
///     fnpf_no: "FN-1".to_string(),
///     bank_code: "069".to_string(),
///     bank_account_number: "123456".to_string(),
///     payment_method: PaymentMethod::Online,
///     branch: Branch::Suva,
/// }).unwrap();
/// let period = PayPeriod::from_dates(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
/// ).unwrap();
/// let wages = calculate_wages(Decimal::from(10), Decimal::from(40), Decimal::ZERO);
/// let records = vec![WageRecord::for_employee(&employee, &wages, period)];
///
/// let file = render_bank_file(BankFileFormat::Bsp, &records, &[employee]).unwrap();
/// assert_eq!(file.text().unwrap(), "069,123456,368.00,Salary,Ravi Lal\n");
/// ```
pub fn render_bank_file<'a, I>(
    format: BankFileFormat,
    records: I,
    employees: &[Employee],
) -> PayrollResult<ExportFile>
where
    I: IntoIterator<Item = &'a WageRecord>,
{
    let by_id: HashMap<&str, &Employee> =
        employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let payees: Vec<(&WageRecord, Option<BankDetails<'_>>)> = records
        .into_iter()
        .filter_map(|record| match by_id.get(record.employee_id.as_str()) {
            Some(employee) => employee.bank_details().map(|bank| (record, Some(bank))),
            None => Some((record, None)),
        })
        .collect();

    if payees.is_empty() {
        return Err(PayrollError::NothingToExport);
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    if format == BankFileFormat::Bred {
        writer.write_record(BRED_HEADER)?;
    }

    for (record, bank) in &payees {
        let (bank_code, account) = bank
            .map(|b| (b.bank_code, b.account_number))
            .unwrap_or(("", ""));
        let amount = format_money(record.net_pay);

        match format {
            BankFileFormat::Bsp => writer.write_record([
                bank_code,
                account,
                amount.as_str(),
                PURPOSE,
                record.employee_name.as_str(),
            ])?,
            BankFileFormat::Bred => writer.write_record([
                bank_code,
                record.employee_name.as_str(),
                "",
                account,
                amount.as_str(),
                PURPOSE,
            ])?,
        }
    }

    let bytes = writer.into_inner().map_err(|e| PayrollError::Export {
        message: e.to_string(),
    })?;
    debug!(format = %format, rows = payees.len(), "Rendered bank file");

    Ok(ExportFile {
        file_name: format.file_name(),
        content_type: "text/csv",
        bytes,
    })
}
