//! Pay period model.
//!
//! A [`PayPeriod`] is the closed range of instants a batch of wage records
//! was calculated for. Two checks matter to the ledger: exact equality
//! (collision with an already recorded period) and containment (date range
//! filtering).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A closed pay period `[start, end]`.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::PayPeriod;
/// use chrono::{TimeZone, Utc};
///
/// let week = PayPeriod::new(
///     Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 1, 7, 0, 0, 0).unwrap(),
/// ).unwrap();
/// let month = PayPeriod::new(
///     Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
///     Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert!(month.contains(&week));
/// assert!(!week.contains(&month));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPayPeriod")]
pub struct PayPeriod {
    /// First instant of the period (inclusive).
    pub start: DateTime<Utc>,
    /// Last instant of the period (inclusive).
    pub end: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawPayPeriod {
    #[serde(deserialize_with = "deserialize_instant")]
    start: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_instant")]
    end: DateTime<Utc>,
}

impl TryFrom<RawPayPeriod> for PayPeriod {
    type Error = PayrollError;

    fn try_from(raw: RawPayPeriod) -> Result<Self, Self::Error> {
        PayPeriod::new(raw.start, raw.end)
    }
}

impl PayPeriod {
    /// Creates a pay period, rejecting an end before the start.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> PayrollResult<Self> {
        if end < start {
            return Err(PayrollError::InvalidPeriod {
                message: format!("end {} is before start {}", end, start),
            });
        }
        Ok(Self { start, end })
    }

    /// Creates a pay period from whole calendar days, midnight UTC.
    pub fn from_dates(start: NaiveDate, end: NaiveDate) -> PayrollResult<Self> {
        Self::new(midnight_utc(start), midnight_utc(end))
    }

    /// Builds a period from a possibly incomplete date range selection.
    ///
    /// Either bound missing yields [`PayrollError::NoPeriodSelected`].
    pub fn from_selection(
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> PayrollResult<Self> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(PayrollError::NoPeriodSelected),
        }
    }

    /// Returns true if `other` starts and ends at exactly the same instants.
    pub fn same_as(&self, other: &PayPeriod) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Returns true if `other` lies entirely inside this period.
    ///
    /// Containment, not overlap: `other.start >= self.start` and
    /// `other.end <= self.end` must both hold.
    pub fn contains(&self, other: &PayPeriod) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Short label used for chart series, e.g. `Jan 01 - Jan 07`.
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%b %d"),
            self.end.format("%b %d")
        )
    }
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Parses an RFC 3339 timestamp or a bare `YYYY-MM-DD` date (midnight UTC).
///
/// A space in place of the `+` before a positive offset is accepted, since
/// an unencoded `+` in a query string decodes to a space.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Some((timestamp, offset)) = value.rsplit_once(' ') {
        if timestamp.contains('T') {
            let restored = format!("{}+{}", timestamp, offset);
            if let Ok(instant) = DateTime::parse_from_rfc3339(&restored) {
                return Some(instant.with_timezone(&Utc));
            }
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(midnight_utc)
}

pub(crate) fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date or timestamp '{}'", raw)))
}

pub(crate) fn deserialize_optional_instant<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_instant(value).map(Some).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid date or timestamp '{}'", value))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, d, 0, 0, 0).unwrap()
    }

    fn period(start: u32, end: u32) -> PayPeriod {
        PayPeriod::new(day(start), day(end)).unwrap()
    }

    #[test]
    fn test_new_rejects_end_before_start() {
        assert!(matches!(
            PayPeriod::new(day(7), day(1)),
            Err(PayrollError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_single_instant_period_is_valid() {
        assert!(PayPeriod::new(day(3), day(3)).is_ok());
    }

    #[test]
    fn test_from_selection_requires_both_bounds() {
        assert!(matches!(
            PayPeriod::from_selection(Some(day(1)), None),
            Err(PayrollError::NoPeriodSelected)
        ));
        assert!(matches!(
            PayPeriod::from_selection(None, Some(day(7))),
            Err(PayrollError::NoPeriodSelected)
        ));
        assert!(matches!(
            PayPeriod::from_selection(None, None),
            Err(PayrollError::NoPeriodSelected)
        ));
        assert_eq!(
            PayPeriod::from_selection(Some(day(1)), Some(day(7))).unwrap(),
            period(1, 7)
        );
    }

    #[test]
    fn test_same_as_requires_identical_bounds() {
        assert!(period(1, 7).same_as(&period(1, 7)));
        assert!(!period(1, 7).same_as(&period(1, 8)));
        assert!(!period(1, 7).same_as(&period(2, 7)));
    }

    #[test]
    fn test_contains_on_both_boundaries() {
        let record = period(1, 7);
        assert!(period(1, 31).contains(&record));
        assert!(period(1, 7).contains(&record));
        // record starts before the query
        assert!(!period(3, 31).contains(&record));
        // record ends after the query
        assert!(!period(1, 6).contains(&record));
    }

    #[test]
    fn test_contains_is_not_overlap() {
        assert!(!period(5, 10).contains(&period(1, 7)));
    }

    #[test]
    fn test_from_dates_uses_midnight_utc() {
        let p = PayPeriod::from_dates(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 7).unwrap(),
        )
        .unwrap();
        assert_eq!(p, period(1, 7));
    }

    #[test]
    fn test_parse_instant_accepts_dates_and_timestamps() {
        assert_eq!(parse_instant("2026-01-03"), Some(day(3)));
        assert_eq!(parse_instant("2026-01-03T00:00:00Z"), Some(day(3)));
        assert_eq!(
            parse_instant("2026-01-03T12:00:00+12:00"),
            Some(day(3))
        );
        assert_eq!(parse_instant("not a date"), None);
    }

    #[test]
    fn test_parse_instant_accepts_offset_with_decoded_plus() {
        assert_eq!(parse_instant("2026-01-03T12:00:00 12:00"), Some(day(3)));
        assert_eq!(
            parse_instant("2026-01-03T12:00:00 12:00"),
            parse_instant("2026-01-03T12:00:00+12:00")
        );
        assert_eq!(parse_instant("2026-01-03 12:00"), None);
    }

    #[test]
    fn test_deserialize_period() {
        let p: PayPeriod =
            serde_json::from_str(r#"{"start": "2026-01-01", "end": "2026-01-07T00:00:00.000Z"}"#)
                .unwrap();
        assert_eq!(p, period(1, 7));
    }

    #[test]
    fn test_deserialize_rejects_reversed_period() {
        let result: Result<PayPeriod, _> =
            serde_json::from_str(r#"{"start": "2026-01-07", "end": "2026-01-01"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_label() {
        assert_eq!(period(1, 7).label(), "Jan 01 - Jan 07");
    }
}
