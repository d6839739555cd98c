// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reading exported sheets.
//!
//! A sheet is a CSV file with one header row. Each data row becomes a map
//! from header to string cell; cells are cleaned when the upload is saved,
//! not here.

use csv::StringRecord;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::PersistenceError;

/// Reads every data row of a CSV sheet.
///
/// Rows whose cells are all blank are dropped. Columns with a blank header
/// are ignored. Short rows simply lack the trailing columns.
///
/// # Errors
///
/// Returns an error if the header row or any data row cannot be parsed.
pub fn read_sheet<R: Read>(reader: R) -> Result<Vec<Map<String, Value>>, PersistenceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers: StringRecord = reader.headers()?.clone();
    let mut rows: Vec<Map<String, Value>> = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record: StringRecord = result.map_err(|e| {
            PersistenceError::ImportFailed(format!("Row {}: {e}", idx + 2))
        })?;

        if record.iter().all(|cell| cell.trim().is_empty()) {
            debug!(row = idx + 2, "Skipping blank row");
            continue;
        }

        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "Read sheet");
    Ok(rows)
}

/// Reads a CSV sheet from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_sheet_file<P: AsRef<Path>>(path: P) -> Result<Vec<Map<String, Value>>, PersistenceError> {
    let file: File = File::open(path.as_ref())?;
    read_sheet(file)
}
