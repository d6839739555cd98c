// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::prelude::*;
use diesel::SqliteConnection;
use std::str::FromStr;

use crate::data_models::{UploadCategory, UploadSummary};
use crate::diesel_schema::uploads;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = uploads)]
struct UploadRow {
    upload_id: i64,
    category: String,
    source_name: String,
    row_count: i64,
    uploaded_at: String,
}

/// Lists uploads, newest first.
///
/// # Errors
///
/// Returns an error if the query fails or a stored category is unknown.
pub fn list_uploads(conn: &mut SqliteConnection) -> Result<Vec<UploadSummary>, PersistenceError> {
    let rows: Vec<UploadRow> = uploads::table
        .order(uploads::upload_id.desc())
        .select(UploadRow::as_select())
        .load(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(UploadSummary {
                upload_id: row.upload_id,
                category: UploadCategory::from_str(&row.category)?,
                source_name: row.source_name,
                row_count: row.row_count,
                uploaded_at: row.uploaded_at,
            })
        })
        .collect()
}
