//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the [`EmployeeDraft`] used to
//! create or edit one, and the [`PaymentMethod`] and [`Branch`] enums.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

/// How an employee receives their wages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Paid in cash at the branch.
    #[default]
    Cash,
    /// Paid by bank transfer; requires bank details.
    Online,
}

impl FromStr for PaymentMethod {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cash" => Ok(PaymentMethod::Cash),
            "online" => Ok(PaymentMethod::Online),
            other => Err(PayrollError::invalid_employee(
                "payment_method",
                format!("unknown payment method '{}'", other),
            )),
        }
    }
}

/// The physical location an employee works at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    /// The Labasa branch.
    #[default]
    Labasa,
    /// The Suva branch.
    Suva,
}

impl FromStr for Branch {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labasa" => Ok(Branch::Labasa),
            "suva" => Ok(Branch::Suva),
            other => Err(PayrollError::invalid_employee(
                "branch",
                format!("unknown branch '{}'", other),
            )),
        }
    }
}

/// Returns the highest hourly wage an employee record accepts.
pub fn max_hourly_wage() -> Decimal {
    Decimal::from(100_000)
}

/// Bank transfer details of an online-paid employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BankDetails<'a> {
    /// The bank or branch code.
    pub bank_code: &'a str,
    /// The account number.
    pub account_number: &'a str,
}

/// The contents of the employee create/edit form.
///
/// Text fields are kept as entered; [`Employee::new`] and [`Employee::apply`]
/// validate them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeDraft {
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Hourly wage as entered, e.g. `"12.50"`.
    pub hourly_wage: String,
    /// FNPF registration number.
    pub fnpf_no: String,
    /// Bank code, required for online payment.
    pub bank_code: String,
    /// Bank account number, required for online payment.
    pub bank_account_number: String,
    /// How the employee is paid.
    pub payment_method: PaymentMethod,
    /// The employee's branch.
    pub branch: Branch,
}

impl EmployeeDraft {
    /// Validates the draft and returns the parsed hourly wage.
    ///
    /// Name, position, hourly wage and FNPF number are required. The wage
    /// must be a decimal between zero and [`max_hourly_wage`]. Online payment
    /// requires both bank fields.
    pub fn validate(&self) -> PayrollResult<Decimal> {
        let required = [
            ("name", &self.name),
            ("position", &self.position),
            ("hourly_wage", &self.hourly_wage),
            ("fnpf_no", &self.fnpf_no),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(PayrollError::invalid_employee(field, "is required"));
            }
        }

        let hourly_wage = Decimal::from_str(self.hourly_wage.trim()).map_err(|_| {
            PayrollError::invalid_employee(
                "hourly_wage",
                format!("'{}' is not a number", self.hourly_wage.trim()),
            )
        })?;
        if hourly_wage.is_sign_negative() && !hourly_wage.is_zero() {
            return Err(PayrollError::invalid_employee(
                "hourly_wage",
                "cannot be negative",
            ));
        }
        if hourly_wage > max_hourly_wage() {
            return Err(PayrollError::invalid_employee(
                "hourly_wage",
                format!("cannot exceed {}", max_hourly_wage()),
            ));
        }

        if self.payment_method == PaymentMethod::Online {
            if self.bank_code.trim().is_empty() {
                return Err(PayrollError::invalid_employee(
                    "bank_code",
                    "required for online transfer",
                ));
            }
            if self.bank_account_number.trim().is_empty() {
                return Err(PayrollError::invalid_employee(
                    "bank_account_number",
                    "required for online transfer",
                ));
            }
        }

        Ok(hourly_wage)
    }
}

/// An employee on the payroll.
///
/// Serialized with camelCase keys so the persisted `employees` collection
/// keeps its established shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Opaque unique identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Hourly wage in currency units.
    pub hourly_wage: Decimal,
    /// FNPF registration number.
    pub fnpf_no: String,
    /// Bank code; empty for cash-paid employees.
    #[serde(default)]
    pub bank_code: String,
    /// Bank account number; empty for cash-paid employees.
    #[serde(default)]
    pub bank_account_number: String,
    /// How the employee is paid.
    pub payment_method: PaymentMethod,
    /// The employee's branch.
    pub branch: Branch,
}

impl Employee {
    /// Creates an employee with a fresh random id from a validated draft.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::{Branch, Employee, EmployeeDraft, PaymentMethod};
    ///
    /// let draft = EmployeeDraft {
    ///     name: "Mere Tuilau".to_string(),
    ///     position: "Winder".to_string(),
    ///     hourly_wage: "10".to_string(),
    ///     fnpf_no: "FN-1001".to_string(),
    ///     payment_method: PaymentMethod::Cash,
    ///     branch: Branch::Suva,
    ///     ..Default::default()
    /// };
    /// let employee = Employee::new(draft).unwrap();
    /// assert!(!employee.is_online());
    ///
    /// let online_without_bank = EmployeeDraft {
    ///     payment_method: PaymentMethod::Online,
    ///     ..employee.to_draft()
    /// };
    /// assert!(Employee::new(online_without_bank).is_err());
    /// ```
    pub fn new(draft: EmployeeDraft) -> PayrollResult<Self> {
        Self::with_id(Uuid::new_v4().to_string(), draft)
    }

    /// Creates an employee with a caller-chosen id from a validated draft.
    pub fn with_id(id: impl Into<String>, draft: EmployeeDraft) -> PayrollResult<Self> {
        let hourly_wage = draft.validate()?;
        Ok(Self {
            id: id.into(),
            name: draft.name.trim().to_string(),
            position: draft.position.trim().to_string(),
            hourly_wage,
            fnpf_no: draft.fnpf_no.trim().to_string(),
            bank_code: draft.bank_code.trim().to_string(),
            bank_account_number: draft.bank_account_number.trim().to_string(),
            payment_method: draft.payment_method,
            branch: draft.branch,
        })
    }

    /// Replaces every editable field with the draft's, keeping the id.
    ///
    /// The employee is left untouched when the draft is invalid.
    pub fn apply(&mut self, draft: EmployeeDraft) -> PayrollResult<()> {
        let updated = Self::with_id(self.id.clone(), draft)?;
        *self = updated;
        Ok(())
    }

    /// Returns the employee's fields as an editable draft.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            position: self.position.clone(),
            hourly_wage: self.hourly_wage.to_string(),
            fnpf_no: self.fnpf_no.clone(),
            bank_code: self.bank_code.clone(),
            bank_account_number: self.bank_account_number.clone(),
            payment_method: self.payment_method,
            branch: self.branch,
        }
    }

    /// Returns true if the employee is paid by bank transfer.
    pub fn is_online(&self) -> bool {
        self.payment_method == PaymentMethod::Online
    }

    /// Returns the bank details for online-paid employees.
    pub fn bank_details(&self) -> Option<BankDetails<'_>> {
        self.is_online().then(|| BankDetails {
            bank_code: &self.bank_code,
            account_number: &self.bank_account_number,
        })
    }
}
