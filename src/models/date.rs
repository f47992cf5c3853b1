//! Day/month/year value type
//!
//! A [`Date`] is stored exactly as read: no calendar validation happens at
//! construction, so `99/13/2020` is a perfectly representable value. The
//! zero date (`00/00/0`) stands for an empty date field.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

/// Days per month in a non-leap year
const MONTH_DAYS: [i64; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Text that could not be read as a `DD/MM/YYYY` date
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid date '{0}', expected DD/MM/YYYY")]
pub struct InvalidDate(pub String);

/// Calendar date without validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Date {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl Date {
    /// The date read from an empty field
    pub const ZERO: Self = Self {
        day: 0,
        month: 0,
        year: 0,
    };

    /// Create a date from its components as given
    #[must_use]
    pub const fn new(day: u32, month: u32, year: u32) -> Self {
        Self { day, month, year }
    }

    /// Parse `DD/MM/YYYY`; blank text yields [`Date::ZERO`]
    ///
    /// # Errors
    /// Returns [`InvalidDate`] if the text is not three `/`-separated numbers
    pub fn parse(text: &str) -> Result<Self, InvalidDate> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::ZERO);
        }

        let invalid = || InvalidDate(text.to_string());
        let mut parts = text.split('/').map(|part| part.trim().parse::<u32>());

        let (Some(Ok(day)), Some(Ok(month)), Some(Ok(year)), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Ok(Self::new(day, month, year))
    }

    /// Whether this is the empty-field date
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.day == 0 && self.month == 0 && self.year == 0
    }

    /// Whether a day has been recorded at all
    ///
    /// Commands treat a date with day `0` as missing.
    #[must_use]
    pub const fn has_day(&self) -> bool {
        self.day > 0
    }

    /// Absolute day count used for day differences
    ///
    /// `year * 365 + day`, plus the days of every month before this one,
    /// plus the number of leap years up to this date. Months past December
    /// contribute only the twelve known months.
    #[must_use]
    pub fn day_number(&self) -> i64 {
        let preceding_months = self.month.saturating_sub(1) as usize;
        let month_offset: i64 = MONTH_DAYS.iter().take(preceding_months).sum();

        i64::from(self.year) * 365 + i64::from(self.day) + month_offset + self.leap_years()
    }

    /// Signed number of days from `self` to `other`
    #[must_use]
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Leap years elapsed before this date
    ///
    /// January and February do not yet count the current year.
    fn leap_years(&self) -> i64 {
        let mut years = i64::from(self.year);
        if self.month <= 2 {
            years -= 1;
        }
        years / 4 - years / 100 + years / 400
    }

    /// Convert to a chrono date when the components form a real calendar day
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let year = i32::try_from(self.year).ok()?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// Whether the components form a real calendar day
    #[must_use]
    pub fn is_calendar_valid(&self) -> bool {
        self.to_naive_date().is_some()
    }

    /// The day before this one
    ///
    /// Calendar dates roll back across month and year boundaries; dates that
    /// are not valid calendar days simply lose one from the day component.
    #[must_use]
    pub fn previous_day(&self) -> Self {
        self.to_naive_date()
            .and_then(|date| date.pred_opt())
            .and_then(|date| Self::try_from(date).ok())
            .unwrap_or_else(|| Self::new(self.day.saturating_sub(1), self.month, self.year))
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = InvalidDate;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let year = u32::try_from(date.year()).map_err(|_| InvalidDate(date.to_string()))?;
        Ok(Self::new(date.day(), date.month(), year))
    }
}

impl FromStr for Date {
    type Err = InvalidDate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{}", self.day, self.month, self.year)
    }
}
