// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ColumnSynonyms;
use crate::types::EmployeeRecord;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Returns the first candidate that appears in `present`.
fn first_present(candidates: &[String], present: &BTreeSet<&str>) -> Option<String> {
    candidates
        .iter()
        .find(|candidate| present.contains(candidate.as_str()))
        .cloned()
}

/// The concrete column chosen for each semantic employee field.
///
/// Resolution happens once per dataset over the union of all row columns,
/// mirroring how a spreadsheet has one header row for every employee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedColumns {
    pub location: Option<String>,
    pub date_of_birth: Option<String>,
    pub birth_month: Option<String>,
    pub date_of_marriage: Option<String>,
    pub date_of_joining: Option<String>,
    pub joining_month: Option<String>,
    pub employee_name: Option<String>,
}

impl ResolvedColumns {
    /// Picks the highest-priority synonym present for every field.
    #[must_use]
    pub fn resolve(records: &[EmployeeRecord], synonyms: &ColumnSynonyms) -> Self {
        let present: BTreeSet<&str> = records
            .iter()
            .flat_map(EmployeeRecord::columns)
            .collect();

        Self {
            location: first_present(&synonyms.location, &present),
            date_of_birth: first_present(&synonyms.date_of_birth, &present),
            birth_month: first_present(&synonyms.birth_month, &present),
            date_of_marriage: first_present(&synonyms.date_of_marriage, &present),
            date_of_joining: first_present(&synonyms.date_of_joining, &present),
            joining_month: first_present(&synonyms.joining_month, &present),
            employee_name: first_present(&synonyms.employee_name, &present),
        }
    }
}

/// Finds the quantity column within one inventory row.
///
/// Configured synonyms are tried first; otherwise the first header
/// containing both `quantity` and `received` (case-insensitive) is used.
#[must_use]
pub fn quantity_column<'a>(
    data: &'a Map<String, Value>,
    synonyms: &ColumnSynonyms,
) -> Option<&'a str> {
    let configured: Option<&'a str> = synonyms
        .inventory_quantity
        .iter()
        .find_map(|wanted| data.keys().find(|header| *header == wanted))
        .map(String::as_str);

    configured.or_else(|| {
        data.keys()
            .find(|header| {
                let lowered: String = header.to_lowercase();
                lowered.contains("quantity") && lowered.contains("received")
            })
            .map(String::as_str)
    })
}
