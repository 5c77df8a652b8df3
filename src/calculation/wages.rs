//! Wage calculation.
//!
//! This module turns an hourly wage, hours worked and other deductions into
//! gross pay, the statutory FNPF deduction and net pay.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Returns the FNPF contribution rate withheld from gross pay (8%).
pub fn fnpf_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Returns the largest hours or deductions figure accepted from the wage form.
///
/// [`parse_amount`] reads anything larger in magnitude as zero, like other
/// input that is not a usable number.
pub fn max_entry_amount() -> Decimal {
    Decimal::from(1_000_000)
}

/// The result of a wage calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageCalculation {
    /// The hourly wage used.
    pub hourly_wage: Decimal,
    /// The hours worked used.
    pub hours_worked: Decimal,
    /// Hourly wage times hours worked.
    pub gross_pay: Decimal,
    /// Gross pay times the FNPF rate.
    pub fnpf_deduction: Decimal,
    /// The other deductions used.
    pub other_deductions: Decimal,
    /// Gross pay less FNPF and other deductions.
    pub net_pay: Decimal,
}

/// Calculates an employee's pay for a period.
///
/// ```text
/// gross = hourly_wage * hours_worked
/// fnpf  = gross * 0.08
/// net   = gross - fnpf - other_deductions
/// ```
///
/// Nothing is rounded here; amounts are rounded to two places only when
/// displayed or exported. Net pay is not clamped, so over-deduction shows as
/// a negative amount. The calculation cannot fail: results beyond the range
/// of [`Decimal`] saturate at its bounds.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_wages;
/// use rust_decimal::Decimal;
///
/// let wages = calculate_wages(Decimal::from(10), Decimal::from(40), Decimal::ZERO);
/// assert_eq!(wages.gross_pay, Decimal::from(400));
/// assert_eq!(wages.fnpf_deduction, Decimal::from(32));
/// assert_eq!(wages.net_pay, Decimal::from(368));
/// ```
pub fn calculate_wages(
    hourly_wage: Decimal,
    hours_worked: Decimal,
    other_deductions: Decimal,
) -> WageCalculation {
    let gross_pay = hourly_wage.saturating_mul(hours_worked);
    let fnpf_deduction = gross_pay.saturating_mul(fnpf_rate());
    let net_pay = gross_pay
        .saturating_sub(fnpf_deduction)
        .saturating_sub(other_deductions);

    WageCalculation {
        hourly_wage,
        hours_worked,
        gross_pay,
        fnpf_deduction,
        other_deductions,
        net_pay,
    }
}

/// Parses an operator-entered amount, treating blank or unparseable text as zero.
///
/// Amounts larger in magnitude than [`max_entry_amount`] also read as zero.
///
/// ```
/// use payroll_ledger::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(" 37.5 "), Decimal::new(375, 1));
/// assert_eq!(parse_amount(""), Decimal::ZERO);
/// assert_eq!(parse_amount("n/a"), Decimal::ZERO);
/// assert_eq!(parse_amount("9999999999999999999999"), Decimal::ZERO);
/// ```
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .filter(|amount| amount.abs() <= max_entry_amount())
        .unwrap_or(Decimal::ZERO)
}

/// Hours and other deductions entered for one employee.
///
/// Both fields deserialize leniently: strings, numbers, `null` or a missing
/// key are accepted, and anything that is not a number counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoursEntry {
    /// Hours worked in the period.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub hours_worked: Decimal,
    /// Deductions on top of FNPF.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub other_deductions: Decimal,
}

impl HoursEntry {
    /// Creates an entry from already parsed amounts.
    pub fn new(hours_worked: Decimal, other_deductions: Decimal) -> Self {
        Self {
            hours_worked,
            other_deductions,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Number(serde_json::Number),
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawAmount> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => Decimal::ZERO,
        Some(RawAmount::Text(text)) => parse_amount(&text),
        Some(RawAmount::Number(number)) => parse_amount(&number.to_string()),
    })
}
