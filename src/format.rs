//! Truncation, month boundaries, and the fixed set of rendering patterns.

use crate::calendar::weekday_index;
use crate::consts::{MONTH_NAMES, WEEKDAY_NAMES};
use crate::types::days_in_month;
use crate::{DateError, ParseError, PartialDate, full_date, invalid_argument};

/// Conventional default selector for [`date_name`].
pub const DEFAULT_NAME_PART: &str = "month";
/// Conventional default unit for [`date_trunc`].
pub const DEFAULT_TRUNC_UNIT: &str = "year";
/// Conventional default pattern for [`date_format`].
pub const DEFAULT_PATTERN: &str = "dd";

fn month_name(month: u8) -> &'static str {
    MONTH_NAMES[usize::from(month)]
}

/// First three characters of a full month or weekday name.
fn abbrev(name: &'static str) -> &'static str {
    &name[..3]
}

/// Renders one named component of a fully specified valid date.
///
/// `part` is one of `day` (zero-padded two digits), `month` (full name),
/// `year` (four digits) or `week_day` (full name).
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date,
/// [`DateError::InvalidArgument`] for an unrecognized `part`.
pub fn date_name(s: &str, part: &str) -> Result<String, DateError> {
    const EXPECTED: &str = "['day', 'month', 'year', 'week_day']";
    let (year, month, day) = full_date(s)?;
    match part {
        "day" => Ok(format!("{day:02}")),
        "month" => Ok(month_name(month).to_owned()),
        "year" => Ok(format!("{year:04}")),
        "week_day" => Ok(WEEKDAY_NAMES[usize::from(weekday_index(year, month, day))].to_owned()),
        _ => Err(invalid_argument(part, EXPECTED)),
    }
}

/// Truncates a date string to `day`, `month` or `year` precision.
///
/// A fully specified date truncates to `YYYY-01-01` (`year`), `YYYY-MM-01`
/// (`month`), or its canonical `YYYY-MM-DD` rendering (`day`). A valid
/// partial date is truncated with the fields it has: `month`/`year`
/// truncation of a year-only input returns just the year string, and `day`
/// truncation of any partial input returns the input unchanged.
///
/// Returns `Ok(None)` when the input does not match the date shape at all:
/// there is nothing to truncate, which is distinct from an error.
///
/// # Errors
/// [`DateError::InvalidArgument`] for an unrecognized `unit` (checked
/// first), [`DateError::InvalidDate`] when the input matches the date shape
/// but fails the range checks.
pub fn date_trunc(s: &str, unit: &str) -> Result<Option<String>, DateError> {
    const EXPECTED: &str = "['day', 'month', 'year']";
    if !matches!(unit, "day" | "month" | "year") {
        return Err(invalid_argument(unit, EXPECTED));
    }

    let date = match s.parse::<PartialDate>() {
        Ok(date) => date,
        // Shape mismatch means there is nothing to truncate
        Err(ParseError::InvalidFormat(_) | ParseError::EmptyInput) => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let truncated = if unit == "day" {
        if date.is_complete() {
            date.to_string()
        } else {
            s.to_owned()
        }
    } else if let Some(month) = date.month() {
        if unit == "month" {
            format!("{:04}-{:02}-01", date.year(), month)
        } else {
            format!("{:04}-01-01", date.year())
        }
    } else {
        // A year-only input keeps its precision under month or year truncation
        date.to_string()
    };
    Ok(Some(truncated))
}

/// First day of the month of a fully specified valid date, as `YYYY-MM-01`.
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn start_month(s: &str) -> Result<String, DateError> {
    let (year, month, _) = full_date(s)?;
    Ok(format!("{year:04}-{month:02}-01"))
}

/// Last day of the month of a fully specified valid date, as `YYYY-MM-DD`
/// (28/29/30/31, leap-aware).
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date.
pub fn end_month(s: &str) -> Result<String, DateError> {
    let (year, month, _) = full_date(s)?;
    Ok(format!(
        "{year:04}-{month:02}-{:02}",
        days_in_month(year, month)
    ))
}

/// Renders a fully specified valid date in one of the fixed patterns.
///
/// | pattern | output for 2024-03-05 |
/// |---|---|
/// | `dd` | `05` |
/// | `ddd` | `Tue` |
/// | `dddd` | `Tuesday` |
/// | `mm` | `3` |
/// | `mmm` | `Mar` |
/// | `mmmm` | `March` |
/// | `yy` | `24` |
/// | `yyyy` | `2024` |
/// | `dd-mmm` | `05 Mar` |
/// | `dd-mmmm` | `05 March` |
/// | `mmm-yy` | `Mar 24` |
/// | `mmm-yyyy` | `Mar 2024` |
/// | `mmmm-yyyy` | `March 2024` |
/// | `yyyy-mm-dd` | `2024-03-05` |
/// | `dd-mm-yyyy` | `05-03-2024` |
/// | `dd-mmm-yyyy` | `05 Mar, 2024` |
/// | `dd-mmmm-yyyy` | `05 March, 2024` |
/// | `dd-mm-yy` | `05-03-24` |
///
/// # Errors
/// [`DateError::InvalidDate`] when `s` is not a valid `YYYY-MM-DD` date,
/// [`DateError::InvalidArgument`] for a pattern outside the fixed set.
pub fn date_format(s: &str, pattern: &str) -> Result<String, DateError> {
    const EXPECTED: &str = "['dd', 'ddd', 'dddd', 'mm', 'mmm', 'mmmm', 'yy', 'yyyy', \
         'dd-mmm', 'dd-mmmm', 'mmm-yy', 'mmm-yyyy', 'mmmm-yyyy', 'yyyy-mm-dd', \
         'dd-mm-yyyy', 'dd-mmm-yyyy', 'dd-mmmm-yyyy', 'dd-mm-yy']";
    let (year, month, day) = full_date(s)?;
    let month_full = month_name(month);
    let weekday_full = WEEKDAY_NAMES[usize::from(weekday_index(year, month, day))];

    let rendered = match pattern {
        "dd" => format!("{day:02}"),
        "ddd" => abbrev(weekday_full).to_owned(),
        "dddd" => weekday_full.to_owned(),
        "mm" => month.to_string(),
        "mmm" => abbrev(month_full).to_owned(),
        "mmmm" => month_full.to_owned(),
        "yy" => format!("{:02}", year % 100),
        "yyyy" => format!("{year:04}"),
        "dd-mmm" => format!("{day:02} {}", abbrev(month_full)),
        "dd-mmmm" => format!("{day:02} {month_full}"),
        "mmm-yy" => format!("{} {:02}", abbrev(month_full), year % 100),
        "mmm-yyyy" => format!("{} {year:04}", abbrev(month_full)),
        "mmmm-yyyy" => format!("{month_full} {year:04}"),
        "yyyy-mm-dd" => format!("{year:04}-{month:02}-{day:02}"),
        "dd-mm-yyyy" => format!("{day:02}-{month:02}-{year:04}"),
        "dd-mmm-yyyy" => format!("{day:02} {}, {year:04}", abbrev(month_full)),
        "dd-mmmm-yyyy" => format!("{day:02} {month_full}, {year:04}"),
        "dd-mm-yy" => format!("{day:02}-{month:02}-{:02}", year % 100),
        _ => return Err(invalid_argument(pattern, EXPECTED)),
    };
    Ok(rendered)
}
