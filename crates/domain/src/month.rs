// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month-of-year extraction from spreadsheet cells.
//!
//! Cells arrive as whatever the export produced: integers, floats, ISO
//! datetimes, day-month-year strings, bare month names. Every function here
//! returns `None` instead of failing so a single bad cell never aborts an
//! aggregation pass.

use chrono::{DateTime, Datelike, Month, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Placeholder strings spreadsheet exports use for empty cells.
const NULL_MARKERS: [&str; 4] = ["", "nan", "nat", "none"];

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S",
    "%d-%m-%Y %H:%M:%S",
];

// Month-first before day-first: `03/04/1990` is March 4th, and the
// day-first form only applies once the first field exceeds 12.
const DATE_FORMATS: [&str; 17] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%m.%d.%Y",
    "%d.%m.%Y",
    "%m/%d/%y",
    "%d/%m/%y",
    "%d-%B-%Y",
    "%d-%B-%y",
    "%d %B %Y",
    "%d %B, %Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%Y-%B-%d",
];

/// Returns the month number (1-12) a cell refers to, if any.
///
/// Numeric cells are taken as month numbers when they fall within 1-12.
/// Strings are tried as a month number, then as a full date, then as a
/// month name with an optional year.
#[must_use]
pub fn extract_month(value: &Value) -> Option<u32> {
    match value {
        Value::Number(number) => {
            if let Some(whole) = number.as_i64() {
                month_in_range(whole)
            } else {
                number.as_f64().and_then(month_from_float)
            }
        }
        Value::String(text) => extract_month_from_str(text),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

fn extract_month_from_str(text: &str) -> Option<u32> {
    let trimmed: &str = text.trim();
    if NULL_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
    {
        return None;
    }

    // Bare numbers are month numbers or nothing; never a day-of-month guess.
    if let Ok(whole) = trimmed.parse::<i64>() {
        return month_in_range(whole);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return month_from_float(float);
    }

    parse_permissive_date(trimmed)
        .map(|date| date.month())
        .or_else(|| parse_month_name(trimmed))
}

fn month_in_range(value: i64) -> Option<u32> {
    u32::try_from(value)
        .ok()
        .filter(|month| (1..=12).contains(month))
}

#[allow(clippy::cast_possible_truncation)]
fn month_from_float(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    // Truncation is intended: a month exported as 3.0 is March.
    month_in_range(value.trunc() as i64)
}

/// Parses a date written in any of the common export formats.
///
/// Accepts ISO dates and datetimes, RFC 3339 timestamps, numeric
/// month/day/year forms separated by `/`, `-` or `.` (month-first when
/// ambiguous), and forms with a written month such as `15-Mar-1990` or
/// `March 15, 1990`.
#[must_use]
pub fn parse_permissive_date(text: &str) -> Option<NaiveDate> {
    let trimmed: &str = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|datetime| datetime.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        })
}

/// Accepts `March`, `mar`, `March 2025`, `Mar-25` and similar.
fn parse_month_name(text: &str) -> Option<u32> {
    let mut tokens = text
        .split(|c: char| c.is_whitespace() || matches!(c, '-' | '/' | ',' | '\''))
        .filter(|token| !token.is_empty());

    let month: Month = tokens.next()?.parse::<Month>().ok()?;
    if tokens.all(|token| token.chars().all(|c| c.is_ascii_digit())) {
        Some(month.number_from_month())
    } else {
        None
    }
}
