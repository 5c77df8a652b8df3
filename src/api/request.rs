//! Request types for the payroll API.
//!
//! Bodies use camelCase field names. Dates accept RFC 3339 timestamps or
//! bare `YYYY-MM-DD` dates (midnight UTC).

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::HoursEntry;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Branch, PayPeriod, PaymentMethod, deserialize_optional_instant};

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Operator username.
    pub username: String,
    /// Operator password.
    pub password: String,
}

/// A body carrying only the administrator passphrase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PassphraseRequest {
    /// The administrator passphrase.
    #[serde(default)]
    pub passphrase: Option<String>,
}

/// Query for `GET /employees`, `?branch=&paymentMethod=`.
///
/// Both values are matched case-insensitively.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    /// Restrict the list to one branch.
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub branch: Option<Branch>,
    /// Restrict the list to one payment method.
    #[serde(default, deserialize_with = "deserialize_optional_parsed")]
    pub payment_method: Option<PaymentMethod>,
}

/// Date range query, `?from=&to=`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RangeQuery {
    /// Range start.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub from: Option<DateTime<Utc>>,
    /// Range end.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub to: Option<DateTime<Utc>>,
}

impl RangeQuery {
    /// The selected range, `None` when neither bound is given.
    ///
    /// A single bound is an incomplete selection.
    pub fn selection(&self) -> PayrollResult<Option<PayPeriod>> {
        optional_period(self.from, self.to)
    }
}

/// Request body for `POST /wages`, `POST /wages/preview` and
/// `POST /wages/preview/export/:format`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageEntryRequest {
    /// Period start.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub date_from: Option<DateTime<Utc>>,
    /// Period end.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub date_to: Option<DateTime<Utc>>,
    /// Hours and other deductions by employee id.
    #[serde(default)]
    pub hours: HashMap<String, HoursEntry>,
    /// Administrator passphrase, needed to overwrite an existing period.
    #[serde(default)]
    pub passphrase: Option<String>,
    /// On the export route, also save the batch after rendering it.
    #[serde(default)]
    pub save: bool,
}

impl WageEntryRequest {
    /// The pay period; both bounds are required.
    pub fn period(&self) -> PayrollResult<PayPeriod> {
        PayPeriod::from_selection(self.date_from, self.date_to)
    }
}

/// Request body for `POST /wages/delete`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRangeRequest {
    /// Range start.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub date_from: Option<DateTime<Utc>>,
    /// Range end.
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub date_to: Option<DateTime<Utc>>,
    /// The administrator passphrase.
    #[serde(default)]
    pub passphrase: Option<String>,
}

impl DeleteRangeRequest {
    /// The selected range, `None` when neither bound is given.
    pub fn selection(&self) -> PayrollResult<Option<PayPeriod>> {
        optional_period(self.date_from, self.date_to)
    }
}

fn deserialize_optional_parsed<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(serde::de::Error::custom),
    }
}

fn optional_period(
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> PayrollResult<Option<PayPeriod>> {
    match (start, end) {
        (None, None) => Ok(None),
        (Some(start), Some(end)) => PayPeriod::new(start, end).map(Some),
        _ => Err(PayrollError::NoPeriodSelected),
    }
}
