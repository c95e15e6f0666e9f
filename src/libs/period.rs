//! Date keys for day, week and month records.
//!
//! - day: `YYYY-MM-DD`
//! - week: the Monday of the ISO week, `YYYY-MM-DD`
//! - month: `YYYY-MM`

use super::error::{TrackerError, TrackerResult};
use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Epoch milliseconds, the timestamp unit stored in the document.
pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn week_key(date: NaiveDate) -> String {
    day_key(week_start(date))
}

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Parses a `YYYY-MM-DD` date, also accepting `today`.
pub fn parse_date(value: &str) -> TrackerResult<NaiveDate> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| TrackerError::InvalidDate(value.to_string()))
}

/// Normalizes an optional deadline: blank input clears it, anything else
/// must be a valid date.
pub fn normalize_deadline(value: Option<&str>) -> TrackerResult<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => parse_date(v).map(|d| Some(day_key(d))),
    }
}

/// A calendar month whose first day and following month are both
/// representable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
    days: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> TrackerResult<Self> {
        let invalid = || TrackerError::InvalidDate(format!("{}-{:02}", year, month));
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        Self::starting(first).ok_or_else(invalid)
    }

    fn starting(first: NaiveDate) -> Option<Self> {
        let next = first.checked_add_months(Months::new(1))?;
        let days = u32::try_from((next - first).num_days()).ok()?;
        Some(Self { first, days })
    }

    pub fn current() -> TrackerResult<Self> {
        Self::try_from(today())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// The month `delta` months away. Fails outside the supported date range.
    pub fn add_months(&self, delta: i32) -> TrackerResult<Self> {
        let months = Months::new(delta.unsigned_abs());
        let first = if delta >= 0 {
            self.first.checked_add_months(months)
        } else {
            self.first.checked_sub_months(months)
        };
        first
            .and_then(Self::starting)
            .ok_or_else(|| TrackerError::InvalidDate(format!("{} {:+} months", self, delta)))
    }

    pub fn days_in_month(&self) -> u32 {
        self.days
    }

    /// Monday-first weekday index (0..=6) of the first day of the month.
    pub fn first_weekday_offset(&self) -> usize {
        self.first.weekday().num_days_from_monday() as usize
    }

    pub fn contains(&self, date_key: &str) -> bool {
        date_key.starts_with(&self.to_string())
    }

    /// "March 2026"
    pub fn long_label(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// "Mar 2026"
    pub fn short_label(&self) -> String {
        self.first.format("%b %Y").to_string()
    }
}

impl TryFrom<NaiveDate> for YearMonth {
    type Error = TrackerError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date.year(), date.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("current") {
            return Self::current();
        }
        let invalid = || TrackerError::InvalidDate(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
