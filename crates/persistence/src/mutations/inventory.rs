// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Inventory quantity updates.

use diesel::prelude::*;
use diesel::SqliteConnection;
use giftstock_domain::{ColumnSynonyms, draw_down_quantity};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::diesel_schema::inventory_records;
use crate::error::PersistenceError;

/// Subtracts `usage` from the newest inventory row for `(location,
/// workbook)`, flooring the stored quantity at zero.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `location` - The row's stored location
/// * `workbook` - The row's workbook label
/// * `usage` - Gifts handed out
/// * `synonyms` - Column synonyms used to find the quantity cell
///
/// # Returns
///
/// The new quantity, or `None` when no row matched or the row has no
/// quantity column.
///
/// # Errors
///
/// Returns an error if the row cannot be read, decoded or written.
pub fn apply_inventory_usage(
    conn: &mut SqliteConnection,
    location: &str,
    workbook: &str,
    usage: u32,
    synonyms: &ColumnSynonyms,
) -> Result<Option<i64>, PersistenceError> {
    let newest: Option<(i64, String)> = inventory_records::table
        .filter(inventory_records::location.eq(location))
        .filter(inventory_records::workbook.eq(workbook))
        .order(inventory_records::record_id.desc())
        .select((inventory_records::record_id, inventory_records::data_json))
        .first::<(i64, String)>(conn)
        .optional()?;

    let Some((record_id, data_json)) = newest else {
        warn!(location, workbook, "No inventory row found for draw-down");
        return Ok(None);
    };

    let mut data: Map<String, Value> = serde_json::from_str(&data_json)?;
    let Some(remaining) = draw_down_quantity(&mut data, usage, synonyms) else {
        warn!(
            record_id,
            location, workbook, "Inventory row has no quantity column"
        );
        return Ok(None);
    };

    diesel::update(inventory_records::table.find(record_id))
        .set(inventory_records::data_json.eq(serde_json::to_string(&data)?))
        .execute(conn)?;

    info!(
        record_id,
        location, workbook, usage, remaining, "Drew down inventory"
    );

    Ok(Some(remaining))
}
