// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-location milestone counting.
//!
//! Counts are month-of-year aggregates: the target year is carried through
//! for reporting but never compared, so an employee born in March counts
//! toward every March regardless of year. Service completion is likewise
//! counted every year in the joining month, not on whole-year boundaries.

use crate::calendar::YearMonth;
use crate::columns::ResolvedColumns;
use crate::config::ProjectionConfig;
use crate::error::DomainError;
use crate::month::extract_month;
use crate::types::{EmployeeRecord, GiftType};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Per-location milestone counts for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneCounts {
    /// The month these counts were computed for.
    pub period: YearMonth,
    pub birthday: BTreeMap<String, u32>,
    pub anniversary: BTreeMap<String, u32>,
    pub service_completion: BTreeMap<String, u32>,
    /// The column locations were read from. `None` means the dataset had no
    /// usable location column, so the empty maps carry no information.
    pub location_column: Option<String>,
}

impl MilestoneCounts {
    fn empty(period: YearMonth, location_column: Option<String>) -> Self {
        Self {
            period,
            birthday: BTreeMap::new(),
            anniversary: BTreeMap::new(),
            service_completion: BTreeMap::new(),
            location_column,
        }
    }

    /// Whether the counts were computed from real location data.
    ///
    /// All-empty maps with this returning `false` mean "no computable data",
    /// not "no milestones this month".
    #[must_use]
    pub const fn has_location_data(&self) -> bool {
        self.location_column.is_some()
    }

    #[must_use]
    pub const fn for_gift(&self, gift_type: GiftType) -> &BTreeMap<String, u32> {
        match gift_type {
            GiftType::Birthday => &self.birthday,
            GiftType::Anniversary => &self.anniversary,
            GiftType::ServiceCompletion => &self.service_completion,
        }
    }

    const fn for_gift_mut(&mut self, gift_type: GiftType) -> &mut BTreeMap<String, u32> {
        match gift_type {
            GiftType::Birthday => &mut self.birthday,
            GiftType::Anniversary => &mut self.anniversary,
            GiftType::ServiceCompletion => &mut self.service_completion,
        }
    }

    /// Gifts of this type a location needs this month; zero when absent.
    #[must_use]
    pub fn usage(&self, gift_type: GiftType, location: &str) -> u32 {
        self.for_gift(gift_type).get(location).copied().unwrap_or(0)
    }

    /// Total across all locations.
    #[must_use]
    pub fn total(&self, gift_type: GiftType) -> u32 {
        self.for_gift(gift_type).values().sum()
    }
}

/// Months of year an employee's milestones fall in.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EmployeeMilestones {
    location: String,
    name: Option<String>,
    birth_month: Option<u32>,
    marriage_month: Option<u32>,
    joining_month: Option<u32>,
}

impl EmployeeMilestones {
    const fn month_for(&self, gift_type: GiftType) -> Option<u32> {
        match gift_type {
            GiftType::Birthday => self.birth_month,
            GiftType::Anniversary => self.marriage_month,
            GiftType::ServiceCompletion => self.joining_month,
        }
    }
}

/// Reads a cell from `column`, treating a missing column as absent.
fn cell<'a>(record: &'a EmployeeRecord, column: Option<&String>) -> Option<&'a Value> {
    column.and_then(|name| record.get(name))
}

/// Prefers the pre-computed month column, falling back to the date column.
fn resolve_month(
    record: &EmployeeRecord,
    month_column: Option<&String>,
    date_column: Option<&String>,
) -> Option<u32> {
    cell(record, month_column)
        .and_then(extract_month)
        .or_else(|| cell(record, date_column).and_then(extract_month))
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Milestone counter over one employee dataset.
///
/// Construction resolves columns once and extracts each employee's months
/// once; [`MilestoneCounter::count`] then answers any target month without
/// re-reading the records.
#[derive(Debug, Clone)]
pub struct MilestoneCounter {
    columns: ResolvedColumns,
    employees: Vec<EmployeeMilestones>,
}

impl MilestoneCounter {
    #[must_use]
    pub fn new(records: &[EmployeeRecord], config: &ProjectionConfig) -> Self {
        let columns: ResolvedColumns = ResolvedColumns::resolve(records, &config.columns);

        debug!(
            location = ?columns.location,
            date_of_birth = ?columns.date_of_birth,
            birth_month = ?columns.birth_month,
            date_of_marriage = ?columns.date_of_marriage,
            date_of_joining = ?columns.date_of_joining,
            joining_month = ?columns.joining_month,
            "Resolved milestone columns"
        );

        let Some(location_column) = columns.location.as_ref() else {
            warn!(
                records = records.len(),
                "No location column found in milestone data; counts will be empty"
            );
            return Self {
                columns,
                employees: Vec::new(),
            };
        };

        let employees: Vec<EmployeeMilestones> = records
            .iter()
            .map(|record| {
                let raw_location: Option<String> = record.get(location_column).and_then(text_of);
                EmployeeMilestones {
                    location: config
                        .location_aliases
                        .normalize(raw_location.as_deref()),
                    name: cell(record, columns.employee_name.as_ref()).and_then(text_of),
                    birth_month: resolve_month(
                        record,
                        columns.birth_month.as_ref(),
                        columns.date_of_birth.as_ref(),
                    ),
                    marriage_month: resolve_month(record, None, columns.date_of_marriage.as_ref()),
                    joining_month: resolve_month(
                        record,
                        columns.joining_month.as_ref(),
                        columns.date_of_joining.as_ref(),
                    ),
                }
            })
            .collect();

        Self { columns, employees }
    }

    #[must_use]
    pub const fn columns(&self) -> &ResolvedColumns {
        &self.columns
    }

    #[must_use]
    pub const fn has_location_data(&self) -> bool {
        self.columns.location.is_some()
    }

    /// Counts milestones falling in `target`'s month, per location.
    ///
    /// Only the month is compared; the year of `target` does not affect the
    /// result.
    #[must_use]
    pub fn count(&self, target: YearMonth) -> MilestoneCounts {
        let mut counts: MilestoneCounts =
            MilestoneCounts::empty(target, self.columns.location.clone());

        for employee in &self.employees {
            for gift_type in GiftType::ALL {
                if employee.month_for(gift_type) != Some(target.month()) {
                    continue;
                }
                *counts
                    .for_gift_mut(gift_type)
                    .entry(employee.location.clone())
                    .or_insert(0) += 1;
                debug!(
                    gift_type = %gift_type,
                    location = %employee.location,
                    employee = employee.name.as_deref().unwrap_or("Unknown"),
                    "Milestone match"
                );
            }
        }

        debug!(
            period = %target,
            birthdays = counts.total(GiftType::Birthday),
            anniversaries = counts.total(GiftType::Anniversary),
            service_completions = counts.total(GiftType::ServiceCompletion),
            "Counted milestones"
        );

        counts
    }
}

/// Counts birthdays, anniversaries and service completions per normalized
/// location for one month.
///
/// # Errors
///
/// Returns an error if `target_month` is not between 1 and 12.
pub fn count_milestones(
    records: &[EmployeeRecord],
    target_month: u32,
    target_year: i32,
    config: &ProjectionConfig,
) -> Result<MilestoneCounts, DomainError> {
    let target: YearMonth = YearMonth::new(target_year, target_month)?;
    let counts: MilestoneCounts = MilestoneCounter::new(records, config).count(target);

    info!(
        period = %target,
        records = records.len(),
        birthdays = counts.total(GiftType::Birthday),
        birthday_locations = counts.birthday.len(),
        anniversaries = counts.total(GiftType::Anniversary),
        anniversary_locations = counts.anniversary.len(),
        service_completions = counts.total(GiftType::ServiceCompletion),
        service_locations = counts.service_completion.len(),
        "Calculated milestone counts"
    );

    Ok(counts)
}
