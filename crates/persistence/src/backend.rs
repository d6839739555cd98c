// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Opening the record store.
//!
//! ## Raw SQL
//!
//! Diesel covers every record query and mutation. This module holds the
//! few statements it has no DSL for:
//! - PRAGMA statements (foreign keys, journal mode)
//! - `last_insert_rowid()` after an upload insert
//!
//! Anything touching upload or record tables belongs in `queries/` or
//! `mutations/`.

use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::{debug, info};

use crate::error::PersistenceError;

/// Record store schema: uploads plus one record table per category.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// How a record store's database is backed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Shared-cache in-memory database, gone when the connection closes.
    Memory,
    /// File on disk, switched to write-ahead logging.
    File,
}

/// Result row of `PRAGMA foreign_keys`.
///
/// Raw SQL here is justified: Diesel has no PRAGMA DSL.
#[derive(QueryableByName)]
struct PragmaRow {
    #[diesel(sql_type = Integer)]
    foreign_keys: i32,
}

/// Returns the `upload_id` assigned by the most recent insert.
///
/// Uploads are inserted inside a transaction and their rows need the new
/// ID straight away. Diesel has no direct API for `last_insert_rowid()`, so
/// this is a justified use of raw SQL.
///
/// # Arguments
///
/// * `conn` - The connection the insert ran on
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    Ok(diesel::select(sql::<BigInt>("last_insert_rowid()")).get_result(conn)?)
}

/// Runs a PRAGMA that returns nothing we read.
fn pragma(conn: &mut SqliteConnection, statement: &str) -> Result<(), PersistenceError> {
    debug!(statement, "Applying PRAGMA");
    diesel::sql_query(statement)
        .execute(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("{statement}: {e}")))?;
    Ok(())
}

/// Checks that deleting an upload will cascade to its records.
///
/// # Errors
///
/// Returns an error if foreign key enforcement is off.
fn verify_foreign_key_enforcement(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    // NOTE: raw SQL, Diesel has no PRAGMA DSL
    let foreign_keys_enabled: i32 = diesel::sql_query("PRAGMA foreign_keys")
        .get_result::<PragmaRow>(conn)?
        .foreign_keys;

    if foreign_keys_enabled == 0 {
        return Err(PersistenceError::ForeignKeyEnforcementNotEnabled);
    }
    Ok(())
}

/// Opens a record store database and brings its schema up to date.
///
/// Foreign keys are switched on before migrating and verified afterwards.
/// File-backed stores also switch to write-ahead logging.
///
/// # Arguments
///
/// * `database_url` - A file path, or a `file:` URI for in-memory stores
/// * `kind` - How the database is backed
///
/// # Errors
///
/// Returns an error if the connection, a PRAGMA, or a migration fails.
pub fn open_record_store(
    database_url: &str,
    kind: StoreKind,
) -> Result<SqliteConnection, PersistenceError> {
    info!(database_url, kind = ?kind, "Opening record store");

    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;
    pragma(&mut conn, "PRAGMA foreign_keys = ON")?;
    if kind == StoreKind::File {
        pragma(&mut conn, "PRAGMA journal_mode = WAL")?;
    }

    let applied: usize = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?
        .len();
    info!(applied, "Record store schema is current");

    verify_foreign_key_enforcement(&mut conn)?;
    Ok(conn)
}
