//! Calendar facts derived from a fully specified date: ISO-8601 week
//! number, weekday index and name, quarter, and ordinal day of the year.

use crate::consts::WEEKDAY_NAMES;
use crate::types::{days_in_month, is_leap_year};
use crate::{DateError, full_date};

/// Month offsets for Sakamoto's weekday congruence, January first.
const SAKAMOTO: [u32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Zero-based weekday, Monday = 0 through Sunday = 6.
pub(crate) fn weekday_index(year: u16, month: u8, day: u8) -> u8 {
    let y = u32::from(if month < 3 { year - 1 } else { year });
    let sunday_based =
        (y + y / 4 - y / 100 + y / 400 + SAKAMOTO[usize::from(month - 1)] + u32::from(day)) % 7;
    ((sunday_based + 6) % 7) as u8
}

/// 1-based ordinal day within the year.
pub(crate) fn ordinal_day(year: u16, month: u8, day: u8) -> u16 {
    let mut ordinal = u16::from(day);
    for m in 1..month {
        ordinal += u16::from(days_in_month(year, m));
    }
    ordinal
}

/// Number of ISO weeks in a year: 53 when January 1st falls on a Thursday,
/// or on a Wednesday of a leap year; 52 otherwise.
fn iso_weeks_in_year(year: u16) -> u8 {
    let jan_first = weekday_index(year, 1, 1);
    if jan_first == 3 || (jan_first == 2 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

/// ISO-8601 week number. A week belongs to the year containing its
/// Thursday, so the first days of January can land in the last week of the
/// previous year and the last days of December in week 1 of the next.
pub(crate) fn iso_week(year: u16, month: u8, day: u8) -> u8 {
    let ordinal = i32::from(ordinal_day(year, month, day));
    let iso_weekday = i32::from(weekday_index(year, month, day)) + 1;
    let week = (ordinal - iso_weekday + 10) / 7;
    if week < 1 {
        iso_weeks_in_year(year - 1)
    } else if week > i32::from(iso_weeks_in_year(year)) {
        1
    } else {
        week as u8
    }
}

pub(crate) const fn quarter_of(month: u8) -> u8 {
    (month - 1) / 3 + 1
}

/// ISO-8601 week number (1-53) of a fully specified valid date.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn week(s: &str) -> Result<u8, DateError> {
    let (year, month, day) = full_date(s)?;
    Ok(iso_week(year, month, day))
}

/// Zero-based weekday index of a fully specified valid date,
/// Monday = 0 through Sunday = 6.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn week_day(s: &str) -> Result<u8, DateError> {
    let (year, month, day) = full_date(s)?;
    Ok(weekday_index(year, month, day))
}

/// Full English weekday name of a fully specified valid date.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn day_of_week_name(s: &str) -> Result<&'static str, DateError> {
    let (year, month, day) = full_date(s)?;
    Ok(WEEKDAY_NAMES[usize::from(weekday_index(year, month, day))])
}

/// Quarter of the year (1-4) of a fully specified valid date.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn quarter(s: &str) -> Result<u8, DateError> {
    let (_, month, _) = full_date(s)?;
    Ok(quarter_of(month))
}

/// 1-based day of the year (1-366) of a fully specified valid date.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn day_of_year(s: &str) -> Result<u16, DateError> {
    let (year, month, day) = full_date(s)?;
    Ok(ordinal_day(year, month, day))
}
