// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Upload persistence.

use diesel::prelude::*;
use diesel::SqliteConnection;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::backend::get_last_insert_rowid;
use crate::data_models::{UNKNOWN_LABEL, UploadTarget};
use crate::diesel_schema::{inventory_records, milestone_records, uploads, welcome_kit_records};
use crate::error::PersistenceError;

/// Normalizes one exported cell.
///
/// Strings are trimmed; empty strings and the spreadsheet null markers
/// `nan`, `nat` and `none` (any case) become null. Other values are kept.
#[must_use]
pub fn clean_value(value: Value) -> Value {
    match value {
        Value::String(text) => {
            let trimmed: &str = text.trim();
            if trimmed.is_empty()
                || ["nan", "nat", "none"]
                    .iter()
                    .any(|marker| trimmed.eq_ignore_ascii_case(marker))
            {
                Value::Null
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other,
    }
}

/// Cleans every cell of a row, keeping column names as exported.
#[must_use]
pub fn clean_row(row: Map<String, Value>) -> Map<String, Value> {
    row.into_iter()
        .map(|(column, value)| (column, clean_value(value)))
        .collect()
}

/// First non-null text cell under a header mentioning `location`.
fn row_location(row: &Map<String, Value>) -> String {
    row.iter()
        .filter(|(header, _)| header.to_lowercase().contains("location"))
        .find_map(|(_, value)| value.as_str())
        .map_or_else(|| UNKNOWN_LABEL.to_string(), str::to_string)
}

fn non_blank_or_unknown(label: Option<&str>) -> String {
    label
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map_or_else(|| UNKNOWN_LABEL.to_string(), str::to_string)
}

/// Stores an upload and its cleaned rows in one transaction.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `target` - Which record table receives the rows
/// * `source_name` - File or sheet the rows came from
/// * `rows` - The exported rows
///
/// # Returns
///
/// The new upload ID.
///
/// # Errors
///
/// Returns an error if a row cannot be serialized or the insert fails.
pub fn save_upload(
    conn: &mut SqliteConnection,
    target: &UploadTarget,
    source_name: &str,
    rows: Vec<Map<String, Value>>,
) -> Result<i64, PersistenceError> {
    let row_count: i64 = i64::try_from(rows.len())
        .map_err(|e| PersistenceError::SerializationError(e.to_string()))?;

    let upload_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(uploads::table)
            .values((
                uploads::category.eq(target.category().as_str()),
                uploads::source_name.eq(source_name),
                uploads::row_count.eq(row_count),
            ))
            .execute(conn)?;
        let upload_id: i64 = get_last_insert_rowid(conn)?;

        for row in rows {
            let row: Map<String, Value> = clean_row(row);
            let data_json: String = serde_json::to_string(&row)?;

            match target {
                UploadTarget::Milestones => {
                    diesel::insert_into(milestone_records::table)
                        .values((
                            milestone_records::upload_id.eq(upload_id),
                            milestone_records::data_json.eq(&data_json),
                        ))
                        .execute(conn)?;
                }
                UploadTarget::WelcomeKits => {
                    diesel::insert_into(welcome_kit_records::table)
                        .values((
                            welcome_kit_records::upload_id.eq(upload_id),
                            welcome_kit_records::data_json.eq(&data_json),
                        ))
                        .execute(conn)?;
                }
                UploadTarget::Inventory { workbook, quarter } => {
                    let workbook: String = non_blank_or_unknown(Some(workbook.as_str()));
                    let quarter: String = non_blank_or_unknown(quarter.as_deref());
                    diesel::insert_into(inventory_records::table)
                        .values((
                            inventory_records::upload_id.eq(upload_id),
                            inventory_records::location.eq(row_location(&row)),
                            inventory_records::workbook.eq(&workbook),
                            inventory_records::quarter.eq(&quarter),
                            inventory_records::data_json.eq(&data_json),
                        ))
                        .execute(conn)?;
                }
            }
        }

        debug!(upload_id, row_count, "Inserted upload rows");
        Ok(upload_id)
    })?;

    info!(
        upload_id,
        category = %target.category(),
        source_name,
        row_count,
        "Saved upload"
    );

    Ok(upload_id)
}
