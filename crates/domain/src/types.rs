// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// The closed set of gift categories tracked in inventory.
///
/// Each gift type is consumed by exactly one milestone kind: birthdays by
/// date of birth, anniversaries by date of marriage, and service completion
/// by date of joining.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum GiftType {
    Birthday,
    Anniversary,
    ServiceCompletion,
}

impl GiftType {
    /// All gift types in reporting order.
    pub const ALL: [Self; 3] = [Self::Birthday, Self::Anniversary, Self::ServiceCompletion];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Birthday => "birthday",
            Self::Anniversary => "anniversary",
            Self::ServiceCompletion => "service_completion",
        }
    }
}

impl FromStr for GiftType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "birthday" => Ok(Self::Birthday),
            "anniversary" => Ok(Self::Anniversary),
            "service_completion" => Ok(Self::ServiceCompletion),
            _ => Err(DomainError::InvalidGiftType(s.to_string())),
        }
    }
}

impl std::fmt::Display for GiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One employee row as produced by the spreadsheet parser.
///
/// Column names are whatever the upstream export used; semantic fields are
/// resolved through synonym lists, never by a fixed schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeRecord {
    fields: Map<String, Value>,
}

impl EmployeeRecord {
    #[must_use]
    pub const fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Returns the raw cell for a column, if the column exists in this row.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    /// Column names present in this row.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for EmployeeRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// One stock row: a received quantity for a location within a workbook.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Location as stored alongside the row, if the importer found one.
    pub location: Option<String>,
    /// Workbook or category label, e.g. `Birthday` or `As on 03-10-25`.
    pub workbook: String,
    /// Optional quarter label for quarterly counts.
    pub quarter: Option<String>,
    /// The full row as exported.
    pub data: Map<String, Value>,
}

impl InventoryRecord {
    #[must_use]
    pub fn new(
        location: Option<String>,
        workbook: impl Into<String>,
        quarter: Option<String>,
        data: Map<String, Value>,
    ) -> Self {
        Self {
            location,
            workbook: workbook.into(),
            quarter,
            data,
        }
    }

    /// Location of the row: the stored location, else the first data column
    /// whose header mentions `location`. Not normalized.
    #[must_use]
    pub fn source_location(&self) -> Option<String> {
        if let Some(stored) = self.location.as_deref().filter(|s| !s.trim().is_empty()) {
            return Some(stored.to_string());
        }

        self.data
            .iter()
            .filter(|(header, _)| header.to_lowercase().contains("location"))
            .find_map(|(_, value)| value.as_str().map(str::to_string))
    }
}
