//! Calculation logic for the payroll ledger.
//!
//! This module contains the wage calculator (gross pay, FNPF deduction, net
//! pay), lenient parsing of operator-entered amounts, and batch totals.

mod totals;
mod wages;

pub use totals::PayrollTotals;
pub use wages::{
    HoursEntry, WageCalculation, calculate_wages, fnpf_rate, max_entry_amount, parse_amount,
};
