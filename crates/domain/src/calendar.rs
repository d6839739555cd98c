// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono::{Datelike, Month, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar month within a specific year.
///
/// Projections step through these one at a time; the month always stays
/// within 1-12 and wraps into the next year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Creates a new year-month.
    ///
    /// # Errors
    ///
    /// Returns an error if `month` is not between 1 and 12.
    pub fn new(year: i32, month: u32) -> Result<Self, DomainError> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, 1-12.
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// English month name, e.g. `March`.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        u8::try_from(self.month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map_or("Unknown", |m| m.name())
    }

    /// Advances by `offset` months, wrapping December into January of the
    /// following year.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting year does not fit in an `i32`.
    pub fn plus_months(&self, offset: u32) -> Result<Self, DomainError> {
        let zero_based: i64 = i64::from(self.month) - 1 + i64::from(offset);
        let year: i64 = i64::from(self.year) + zero_based.div_euclid(12);
        let month: i64 = zero_based.rem_euclid(12) + 1;

        let year: i32 = i32::try_from(year).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("advancing {self} by {offset} months"),
        })?;
        let month: u32 = u32::try_from(month).map_err(|_| DomainError::DateArithmeticOverflow {
            operation: format!("advancing {self} by {offset} months"),
        })?;

        Ok(Self { year, month })
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.month, self.year)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_range_month() {
        assert_eq!(YearMonth::new(2025, 0), Err(DomainError::InvalidMonth(0)));
        assert_eq!(YearMonth::new(2025, 13), Err(DomainError::InvalidMonth(13)));
        assert!(YearMonth::new(2025, 12).is_ok());
    }

    #[test]
    fn test_plus_months_within_year() {
        let start: YearMonth = YearMonth::new(2025, 3).unwrap();
        assert_eq!(start.plus_months(0).unwrap(), start);
        assert_eq!(
            start.plus_months(4).unwrap(),
            YearMonth::new(2025, 7).unwrap()
        );
    }

    #[test]
    fn test_plus_months_wraps_december() {
        let start: YearMonth = YearMonth::new(2025, 11).unwrap();
        assert_eq!(
            start.plus_months(1).unwrap(),
            YearMonth::new(2025, 12).unwrap()
        );
        assert_eq!(
            start.plus_months(2).unwrap(),
            YearMonth::new(2026, 1).unwrap()
        );
        assert_eq!(
            start.plus_months(26).unwrap(),
            YearMonth::new(2028, 1).unwrap()
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(YearMonth::new(2025, 1).unwrap().month_name(), "January");
        assert_eq!(YearMonth::new(2025, 9).unwrap().month_name(), "September");
    }

    #[test]
    fn test_containing_date() {
        let date: NaiveDate = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(
            YearMonth::containing(date),
            YearMonth::new(2026, 10).unwrap()
        );
    }
}
