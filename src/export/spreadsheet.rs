//! Spreadsheet export.
//!
//! The wage grid is built as plain rows first so it can be checked without
//! opening a workbook, then written to `.xlsx` with `rust_xlsxwriter`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::Workbook;
use tracing::debug;

use super::ExportFile;
use crate::error::{PayrollError, PayrollResult};
use crate::models::WageRecord;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Wage Records";

/// Download file name of the workbook.
pub const WORKBOOK_FILE_NAME: &str = "wage_records.xlsx";

/// Column headings, in order.
pub const COLUMNS: [&str; 9] = [
    "Employee Name",
    "Hourly Wage",
    "Hours Worked",
    "FNPF Deduction",
    "Other Deductions",
    "Gross Pay",
    "Net Pay",
    "Date From",
    "Date To",
];

const DATE_FORMAT: &str = "%b %d, %Y";

/// One cell of the wage grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Cell {
    /// A text cell.
    Text(String),
    /// A numeric cell, unrounded.
    Number(Decimal),
    /// An empty cell.
    Blank,
}

impl Cell {
    fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }
}

/// The wage grid: a header row, one row per record and a totals row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WageSheet {
    rows: Vec<Vec<Cell>>,
}

impl WageSheet {
    /// Builds the grid for `records`.
    ///
    /// The totals row sums FNPF deductions and net pay; its other cells are
    /// blank. Fails with [`PayrollError::NothingToExport`] for no records.
    pub fn build<'a, I>(records: I) -> PayrollResult<Self>
    where
        I: IntoIterator<Item = &'a WageRecord>,
    {
        let mut rows: Vec<Vec<Cell>> = vec![COLUMNS.iter().map(|c| Cell::text(*c)).collect()];
        let mut total_fnpf = Decimal::ZERO;
        let mut total_net = Decimal::ZERO;

        for record in records {
            total_fnpf = total_fnpf.saturating_add(record.fnpf_deduction);
            total_net = total_net.saturating_add(record.net_pay);
            rows.push(vec![
                Cell::text(record.employee_name.clone()),
                Cell::Number(record.hourly_wage),
                Cell::Number(record.hours_worked),
                Cell::Number(record.fnpf_deduction),
                Cell::Number(record.other_deductions),
                Cell::Number(record.gross_pay),
                Cell::Number(record.net_pay),
                Cell::text(record.date_from.format(DATE_FORMAT).to_string()),
                Cell::text(record.date_to.format(DATE_FORMAT).to_string()),
            ]);
        }

        if rows.len() == 1 {
            return Err(PayrollError::NothingToExport);
        }

        rows.push(vec![
            Cell::text("Totals"),
            Cell::Blank,
            Cell::Blank,
            Cell::Number(total_fnpf),
            Cell::Blank,
            Cell::Blank,
            Cell::Number(total_net),
            Cell::Blank,
            Cell::Blank,
        ]);

        Ok(Self { rows })
    }

    /// Writes the grid to an in-memory `.xlsx` workbook.
    pub fn to_workbook(&self) -> PayrollResult<ExportFile> {
        let mut workbook = Workbook::new();
        {
            let worksheet = workbook.add_worksheet();
            worksheet.set_name(SHEET_NAME)?;

            for (row_index, row) in self.rows.iter().enumerate() {
                let row_number = u32::try_from(row_index).map_err(|_| PayrollError::Export {
                    message: "too many rows for a worksheet".to_string(),
                })?;
                for (col_index, cell) in row.iter().enumerate() {
                    let col_number = col_index as u16;
                    match cell {
                        Cell::Text(text) => {
                            worksheet.write_string(row_number, col_number, text)?;
                        }
                        Cell::Number(value) => {
                            let value = value.to_f64().ok_or_else(|| PayrollError::Export {
                                message: format!("{} cannot be written as a number", value),
                            })?;
                            worksheet.write_number(row_number, col_number, value)?;
                        }
                        Cell::Blank => {}
                    }
                }
            }
        }

        let bytes = workbook.save_to_buffer()?;
        debug!(rows = self.rows.len(), bytes = bytes.len(), "Rendered workbook");

        Ok(ExportFile {
            file_name: WORKBOOK_FILE_NAME.to_string(),
            content_type: "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            bytes,
        })
    }
}
