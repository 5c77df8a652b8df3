//! Export formatting for wage records.
//!
//! This module renders wage records as BSP or BRED bank transfer files and
//! as a spreadsheet workbook.

mod bank_file;
mod spreadsheet;

use std::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, WageRecord};

pub use bank_file::{BankFileFormat, render_bank_file};
pub use spreadsheet::{COLUMNS, SHEET_NAME, WORKBOOK_FILE_NAME, WageSheet};

/// Any downloadable layout: a bank file or the workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// A BSP or BRED bank transfer file.
    Bank(BankFileFormat),
    /// The `.xlsx` wage sheet.
    Workbook,
}

impl ExportFormat {
    /// Renders `records` in this layout.
    ///
    /// `employees` supplies bank details and is only read for bank files.
    pub fn render<'a, I>(self, records: I, employees: &[Employee]) -> PayrollResult<ExportFile>
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        match self {
            ExportFormat::Bank(format) => render_bank_file(format, records, employees),
            ExportFormat::Workbook => WageSheet::build(records)?.to_workbook(),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Bank(format) => write!(f, "{}", format),
            ExportFormat::Workbook => write!(f, "xlsx"),
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PayrollError;

    /// Accepts `xlsx`, `BSP` or `BRED`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("xlsx") {
            Ok(ExportFormat::Workbook)
        } else {
            s.parse().map(ExportFormat::Bank)
        }
    }
}

/// A rendered file ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested download name.
    pub file_name: String,
    /// MIME type of `bytes`.
    pub content_type: &'static str,
    /// The file contents.
    pub bytes: Vec<u8>,
}

impl ExportFile {
    /// The contents as UTF-8 text, for the CSV layouts.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }
}

/// Formats a currency amount with exactly two decimal places.
///
/// Midpoints round away from zero.
///
/// ```
/// use payroll_ledger::export::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::from(368)), "368.00");
/// assert_eq!(format_money(Decimal::new(68931, 3)), "68.93");
/// assert_eq!(format_money(Decimal::new(1005, 3)), "1.01");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
