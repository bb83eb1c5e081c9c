//! Calendar utilities: month buckets in UTC
//!
//! The single source of month boundaries. The work sheet `month` filter and
//! the payroll ledger's `month_key` both go through [`Month`], so they can
//! never disagree on where a month starts or ends.
//!
//! Repositories only see Unix millis; conversions happen here.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("Invalid month '{0}', expected YYYY-MM")]
    InvalidMonth(String),
}

/// A calendar month in UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        // Validates the month and that the year is representable
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CalendarError::InvalidMonth(format!("{year}-{month}")))?;
        Ok(Self { year, month })
    }

    /// The month containing `instant` (UTC)
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self {
            year: instant.year(),
            month: instant.month(),
        }
    }

    /// Parse a `YYYY-MM` filter value
    pub fn parse(raw: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidMonth(raw.to_string());
        let (year, month) = raw.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.is_empty() || month.len() > 2 {
            return Err(invalid());
        }
        if !year.chars().chain(month.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Canonical month bucket key, e.g. `"2024-1"` (month not zero-padded)
    pub fn key(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    /// The following month (December rolls into January of the next year)
    pub fn succ(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// First instant of the month
    pub fn start(&self) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Half-open interval `[start, start of next month)`
    pub fn range(&self) -> MonthRange {
        MonthRange {
            start: self.start(),
            end: self.succ().start(),
        }
    }
}

/// Half-open UTC interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    pub fn start_millis(&self) -> i64 {
        self.start.timestamp_millis()
    }

    /// Exclusive upper bound; callers compare with `<`
    pub fn end_millis(&self) -> i64 {
        self.end.timestamp_millis()
    }
}

/// Month bucket key for a payment date
pub fn month_key(instant: DateTime<Utc>) -> String {
    Month::containing(instant).key()
}

/// Unix millis → UTC instant (clamped to chrono's representable range)
pub fn from_millis(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or(if millis < 0 {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    })
}
