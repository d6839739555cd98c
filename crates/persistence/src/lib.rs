// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` record store for giftstock.
//!
//! Uploaded sheets are stored as JSON row blobs under an upload entry, one
//! table per category. Inventory rows additionally carry the location,
//! workbook and quarter they were filed under so draw-downs can find the
//! newest row for a `(location, workbook)` pair.
//!
//! The store implements the record seams of the `giftstock` crate, so a
//! [`giftstock::Projector`] can run directly against it.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use crate::backend::StoreKind;
use diesel::SqliteConnection;
use giftstock::{CoreError, InventoryLedger, RecordSource};
use giftstock_domain::{ColumnSynonyms, EmployeeRecord, InventoryRecord};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod import;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{UNKNOWN_LABEL, UploadCategory, UploadSummary, UploadTarget};
pub use error::PersistenceError;
pub use import::{read_sheet, read_sheet_file};
pub use mutations::{clean_row, clean_value};

/// Atomic counter for generating unique in-memory database names.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Record store over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a store backed by a fresh in-memory database.
    ///
    /// Each call gets its own database, so stores never see each other's
    /// rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:giftstock_memdb_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection =
            backend::open_record_store(&shared_memory_url, StoreKind::Memory)?;

        Ok(Self { conn })
    }

    /// Opens or creates a file-backed store.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let conn: SqliteConnection = backend::open_record_store(path_str, StoreKind::File)?;

        Ok(Self { conn })
    }

    // ========================================================================
    // Uploads
    // ========================================================================

    /// Stores rows under a new upload, cleaning each cell.
    ///
    /// # Arguments
    ///
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
    /// Returns an error if the rows cannot be stored.
    pub fn save_upload(
        &mut self,
        target: &UploadTarget,
        source_name: &str,
        rows: Vec<Map<String, Value>>,
    ) -> Result<i64, PersistenceError> {
        mutations::save_upload(&mut self.conn, target, source_name, rows)
    }

    /// Reads a CSV sheet from disk and stores it as an upload named after
    /// the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the rows cannot be
    /// stored.
    pub fn import_sheet<P: AsRef<Path>>(
        &mut self,
        path: P,
        target: &UploadTarget,
    ) -> Result<i64, PersistenceError> {
        let path: &Path = path.as_ref();
        let rows: Vec<Map<String, Value>> = read_sheet_file(path)?;
        let source_name: String = path
            .file_name()
            .map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            );
        self.save_upload(target, &source_name, rows)
    }

    /// Lists uploads, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_uploads(&mut self) -> Result<Vec<UploadSummary>, PersistenceError> {
        queries::list_uploads(&mut self.conn)
    }

    // ========================================================================
    // Records
    // ========================================================================

    /// Fetches milestone records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn fetch_milestone_records(&mut self) -> Result<Vec<EmployeeRecord>, PersistenceError> {
        queries::fetch_milestone_records(&mut self.conn)
    }

    /// Fetches welcome-kit records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn fetch_welcome_kit_records(
        &mut self,
    ) -> Result<Vec<Map<String, Value>>, PersistenceError> {
        queries::fetch_welcome_kit_records(&mut self.conn)
    }

    /// Fetches inventory records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    pub fn fetch_inventory_records(&mut self) -> Result<Vec<InventoryRecord>, PersistenceError> {
        queries::fetch_inventory_records(&mut self.conn)
    }

    /// Subtracts `usage` from the newest inventory row for `(location,
    /// workbook)`, flooring the stored quantity at zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be read or written.
    pub fn update_inventory_quantity(
        &mut self,
        location: &str,
        workbook: &str,
        usage: u32,
        synonyms: &ColumnSynonyms,
    ) -> Result<Option<i64>, PersistenceError> {
        mutations::apply_inventory_usage(&mut self.conn, location, workbook, usage, synonyms)
    }
}

impl RecordSource for Persistence {
    fn employee_records(&mut self) -> Result<Vec<EmployeeRecord>, CoreError> {
        Ok(self.fetch_milestone_records()?)
    }

    fn inventory_records(&mut self) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self.fetch_inventory_records()?)
    }
}

impl InventoryLedger for Persistence {
    fn apply_usage(
        &mut self,
        location: &str,
        workbook: &str,
        usage: u32,
        synonyms: &ColumnSynonyms,
    ) -> Result<Option<i64>, CoreError> {
        Ok(self.update_inventory_quantity(location, workbook, usage, synonyms)?)
    }
}
