// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record fetches. Every fetch returns the newest rows first.

use diesel::prelude::*;
use diesel::SqliteConnection;
use giftstock_domain::{EmployeeRecord, InventoryRecord};
use serde_json::{Map, Value};
use tracing::debug;

use crate::diesel_schema::{inventory_records, milestone_records, welcome_kit_records};
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = inventory_records)]
struct InventoryRow {
    location: String,
    workbook: String,
    quarter: String,
    data_json: String,
}

fn decode(data_json: &str) -> Result<Map<String, Value>, PersistenceError> {
    Ok(serde_json::from_str(data_json)?)
}

/// Fetches all milestone rows.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn fetch_milestone_records(
    conn: &mut SqliteConnection,
) -> Result<Vec<EmployeeRecord>, PersistenceError> {
    let rows: Vec<String> = milestone_records::table
        .order(milestone_records::record_id.desc())
        .select(milestone_records::data_json)
        .load(conn)?;

    debug!(rows = rows.len(), "Fetched milestone records");

    rows.iter()
        .map(|data_json| decode(data_json).map(EmployeeRecord::new))
        .collect()
}

/// Fetches all welcome-kit rows.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn fetch_welcome_kit_records(
    conn: &mut SqliteConnection,
) -> Result<Vec<Map<String, Value>>, PersistenceError> {
    let rows: Vec<String> = welcome_kit_records::table
        .order(welcome_kit_records::record_id.desc())
        .select(welcome_kit_records::data_json)
        .load(conn)?;

    debug!(rows = rows.len(), "Fetched welcome kit records");

    rows.iter().map(String::as_str).map(decode).collect()
}

/// Fetches all inventory rows.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row cannot be decoded.
pub fn fetch_inventory_records(
    conn: &mut SqliteConnection,
) -> Result<Vec<InventoryRecord>, PersistenceError> {
    let rows: Vec<InventoryRow> = inventory_records::table
        .order(inventory_records::record_id.desc())
        .select(InventoryRow::as_select())
        .load(conn)?;

    debug!(rows = rows.len(), "Fetched inventory records");

    rows.into_iter()
        .map(|row| {
            Ok(InventoryRecord::new(
                Some(row.location),
                row.workbook,
                Some(row.quarter),
                decode(&row.data_json)?,
            ))
        })
        .collect()
}
