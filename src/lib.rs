mod calendar;
mod consts;
mod format;
mod prelude;
mod types;

pub use calendar::{day_of_week_name, day_of_year, quarter, week, week_day};
pub use consts::*;
pub use format::{
    DEFAULT_NAME_PART, DEFAULT_PATTERN, DEFAULT_TRUNC_UNIT, date_format, date_name, date_trunc,
    end_month, start_month,
};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;

/// A calendar date with varying precision: a full day, a month, or a bare
/// year. Missing components are absent structurally instead of being filled
/// with placeholders, so a day can never exist without its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PartialDate {
    /// Full date with day, month, and year
    #[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
    Day {
        year: types::Year,
        month: types::Month,
        day: types::Day,
    },
    /// Month and year only
    #[display(fmt = "{:04}-{:02}", "year.get()", "month.get()")]
    Month {
        year: types::Year,
        month: types::Month,
    },
    /// Year only
    #[display(fmt = "{:04}", "year.get()")]
    Year { year: types::Year },
}

/// Granular parse/validation failure for a date string.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for the string-oriented date operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A valid (and, where the operation requires it, fully specified)
    /// calendar date was expected.
    #[error("Invalid date: {0}")]
    InvalidDate(#[from] ParseError),

    /// A part/unit/pattern selector outside its recognized set.
    #[error("Invalid argument `{argument}`, expects {expected}")]
    InvalidArgument {
        argument: String,
        expected: &'static str,
    },
}

impl PartialDate {
    /// Returns the day component if present (as u8 for convenience)
    pub fn day(&self) -> Option<u8> {
        match self {
            Self::Day { day, .. } => Some(day.get()),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// Returns the month component if present (as u8 for convenience)
    pub fn month(&self) -> Option<u8> {
        match self {
            Self::Day { month, .. } | Self::Month { month, .. } => Some(month.get()),
            Self::Year { .. } => None,
        }
    }

    /// Returns the year component (always present)
    pub fn year(&self) -> u16 {
        match self {
            Self::Day { year, .. } | Self::Month { year, .. } | Self::Year { year } => year.get(),
        }
    }

    /// All components as `(year, month, day)`, with the absent ones `None`
    pub const fn fields(&self) -> (u16, Option<u8>, Option<u8>) {
        match *self {
            Self::Day { year, month, day } => (year.get(), Some(month.get()), Some(day.get())),
            Self::Month { year, month } => (year.get(), Some(month.get()), None),
            Self::Year { year } => (year.get(), None, None),
        }
    }

    /// `(year, month, day)` of a fully specified date, `None` otherwise
    pub const fn as_ymd(&self) -> Option<(u16, u8, u8)> {
        match *self {
            Self::Day { year, month, day } => Some((year.get(), month.get(), day.get())),
            Self::Month { .. } | Self::Year { .. } => None,
        }
    }

    /// True when year, month and day are all present
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Day { .. })
    }

    /// Builds a date from raw components, enforcing that a day cannot be
    /// present without a month.
    ///
    /// # Errors
    /// Returns the matching `ParseError` when a component is out of range or
    /// a day is given without a month.
    pub fn from_fields(year: u16, month: Option<u8>, day: Option<u8>) -> Result<Self, ParseError> {
        let year = types::Year::new(year)?;
        match (month, day) {
            (Some(m), Some(d)) => {
                let month = types::Month::new(m)?;
                let day = types::Day::new(d, year.get(), m)?;
                Ok(Self::Day { year, month, day })
            }
            (Some(m), None) => Ok(Self::Month {
                year,
                month: types::Month::new(m)?,
            }),
            (None, None) => Ok(Self::Year { year }),
            (None, Some(d)) => Err(ParseError::InvalidFormat(format!(
                "day {d} without a month"
            ))),
        }
    }
}

/// Splits `n` ASCII digits off the front of `s`, or `None` if the prefix is
/// shorter or not all digits.
fn take_digits(s: &str, n: usize) -> Option<(&str, &str)> {
    if s.len() >= n && s.as_bytes()[..n].iter().all(u8::is_ascii_digit) {
        Some(s.split_at(n))
    } else {
        None
    }
}

fn invalid_format(s: &str) -> ParseError {
    ParseError::InvalidFormat(s.to_owned())
}

fn parse_u16(s: &str) -> Result<u16, ParseError> {
    s.parse::<u16>().map_err(|_| invalid_format(s))
}

fn parse_u8(s: &str) -> Result<u8, ParseError> {
    s.parse::<u8>().map_err(|_| invalid_format(s))
}

impl FromStr for PartialDate {
    type Err = ParseError;

    /// Accepts `YYYY`, `YYYY-MM` and `YYYY-MM-DD`; the separators may be
    /// omitted (`20240315`). The whole string must match: no surrounding
    /// whitespace, no trailing characters, and a separator must be followed
    /// by its two-digit group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let (year_digits, rest) = take_digits(s, 4).ok_or_else(|| invalid_format(s))?;
        let year = types::Year::new(parse_u16(year_digits)?)?;
        if rest.is_empty() {
            return Ok(Self::Year { year });
        }

        let rest = rest.strip_prefix(DATE_SEPARATOR).unwrap_or(rest);
        let (month_digits, rest) = take_digits(rest, 2).ok_or_else(|| invalid_format(s))?;
        let month = types::Month::new(parse_u8(month_digits)?)?;
        if rest.is_empty() {
            return Ok(Self::Month { year, month });
        }

        let rest = rest.strip_prefix(DATE_SEPARATOR).unwrap_or(rest);
        let (day_digits, rest) = take_digits(rest, 2).ok_or_else(|| invalid_format(s))?;
        if !rest.is_empty() {
            return Err(invalid_format(s));
        }
        let day = types::Day::new(parse_u8(day_digits)?, year.get(), month.get())?;
        Ok(Self::Day { year, month, day })
    }
}

impl serde::Serialize for PartialDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for PartialDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Checks whether `s` is a valid partial or complete calendar date:
/// `YYYY`, `YYYY-MM` or `YYYY-MM-DD` with optional separators, year in
/// 1900..=2100, month in 1..=12 and day within the month (leap-aware).
pub fn is_valid_date(s: &str) -> bool {
    s.parse::<PartialDate>().is_ok()
}

/// Purely lexical split of the strict dash-separated `YYYY-MM-DD` shape.
/// No range checks are applied to the extracted numbers.
fn split_strict(s: &str) -> Option<(u16, u8, u8)> {
    let (year_digits, rest) = take_digits(s, 4)?;
    let rest = rest.strip_prefix(DATE_SEPARATOR)?;
    let (month_digits, rest) = take_digits(rest, 2)?;
    let rest = rest.strip_prefix(DATE_SEPARATOR)?;
    let (day_digits, rest) = take_digits(rest, 2)?;
    if !rest.is_empty() {
        return None;
    }
    Some((
        year_digits.parse().ok()?,
        month_digits.parse().ok()?,
        day_digits.parse().ok()?,
    ))
}

/// Extracts the year from a strict `YYYY-MM-DD` string, or `None` when the
/// shape does not match exactly. Lexical only: partial forms are rejected
/// but no range checks are applied.
pub fn year(s: &str) -> Option<u16> {
    split_strict(s).map(|(y, _, _)| y)
}

/// Extracts the month from a strict `YYYY-MM-DD` string, or `None` when the
/// shape does not match exactly. Lexical only, like [`year`].
pub fn month(s: &str) -> Option<u8> {
    split_strict(s).map(|(_, m, _)| m)
}

/// Extracts the day from a strict `YYYY-MM-DD` string, or `None` when the
/// shape does not match exactly. Lexical only, like [`year`].
pub fn day(s: &str) -> Option<u8> {
    split_strict(s).map(|(_, _, d)| d)
}

/// Conventional default selector for [`date_part`].
pub const DEFAULT_PART: &str = "year";

/// Returns one part of a valid date string as an integer.
///
/// `part` is one of `day`, `month`, `year`, `week`, `week_day` or `quarter`.
/// The `day`/`month`/`year` selectors use the strict extractors and so yield
/// `Ok(None)` when `s` is valid but not in the dash-separated full form;
/// `week`, `week_day` and `quarter` require a fully specified date and fail
/// with [`DateError::InvalidDate`] otherwise.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` fails validation,
/// [`DateError::InvalidArgument`] for an unrecognized `part`.
pub fn date_part(s: &str, part: &str) -> Result<Option<u16>, DateError> {
    const EXPECTED: &str = "['day', 'month', 'year', 'week', 'week_day', 'quarter']";
    s.parse::<PartialDate>()?;
    match part {
        "day" => Ok(day(s).map(u16::from)),
        "month" => Ok(month(s).map(u16::from)),
        "year" => Ok(year(s)),
        "week" => week(s).map(|w| Some(u16::from(w))),
        "week_day" => week_day(s).map(|w| Some(u16::from(w))),
        "quarter" => quarter(s).map(|q| Some(u16::from(q))),
        _ => Err(invalid_argument(part, EXPECTED)),
    }
}

/// Parses `s` and requires all three components to be present.
pub(crate) fn full_date(s: &str) -> Result<(u16, u8, u8), DateError> {
    let date: PartialDate = s.parse()?;
    date.as_ymd()
        .ok_or_else(|| DateError::InvalidDate(invalid_format(s)))
}

pub(crate) fn invalid_argument(argument: &str, expected: &'static str) -> DateError {
    DateError::InvalidArgument {
        argument: argument.to_owned(),
        expected,
    }
}
