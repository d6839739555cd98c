// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seams to the record collaborator.

use crate::error::CoreError;
use giftstock_domain::{ColumnSynonyms, EmployeeRecord, InventoryRecord, draw_down_quantity};
use tracing::debug;

/// Supplies the records every calculation reads.
///
/// Records are fetched fresh on each call; implementations must not cache
/// across calls.
pub trait RecordSource {
    /// Returns milestone (employee) records.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn employee_records(&mut self) -> Result<Vec<EmployeeRecord>, CoreError>;

    /// Returns inventory records, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be read.
    fn inventory_records(&mut self) -> Result<Vec<InventoryRecord>, CoreError>;
}

/// Accepts stock draw-downs against stored inventory.
pub trait InventoryLedger {
    /// Subtracts `usage` from the newest inventory row stored for
    /// `(location, workbook)`, flooring the stored quantity at zero.
    ///
    /// `location` is the row's location as stored, not normalized.
    /// Returns the new quantity, or `None` when no row matched or the row
    /// has no quantity column.
    ///
    /// # Errors
    ///
    /// Returns an error if the update cannot be written.
    fn apply_usage(
        &mut self,
        location: &str,
        workbook: &str,
        usage: u32,
        synonyms: &ColumnSynonyms,
    ) -> Result<Option<i64>, CoreError>;
}

/// Records held in memory, for tests and embedding.
///
/// Inventory is kept in insertion order; the last matching row is the
/// newest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemorySource {
    employees: Vec<EmployeeRecord>,
    inventory: Vec<InventoryRecord>,
}

impl InMemorySource {
    #[must_use]
    pub const fn new(employees: Vec<EmployeeRecord>, inventory: Vec<InventoryRecord>) -> Self {
        Self {
            employees,
            inventory,
        }
    }

    pub fn push_employee(&mut self, record: EmployeeRecord) {
        self.employees.push(record);
    }

    pub fn push_inventory(&mut self, record: InventoryRecord) {
        self.inventory.push(record);
    }

    /// Inventory in insertion order.
    #[must_use]
    pub fn inventory(&self) -> &[InventoryRecord] {
        &self.inventory
    }
}

impl RecordSource for InMemorySource {
    fn employee_records(&mut self) -> Result<Vec<EmployeeRecord>, CoreError> {
        Ok(self.employees.clone())
    }

    fn inventory_records(&mut self) -> Result<Vec<InventoryRecord>, CoreError> {
        Ok(self.inventory.iter().rev().cloned().collect())
    }
}

impl InventoryLedger for InMemorySource {
    fn apply_usage(
        &mut self,
        location: &str,
        workbook: &str,
        usage: u32,
        synonyms: &ColumnSynonyms,
    ) -> Result<Option<i64>, CoreError> {
        let Some(record) = self.inventory.iter_mut().rev().find(|record| {
            record.workbook == workbook && record.source_location().as_deref() == Some(location)
        }) else {
            debug!(location, workbook, "No in-memory inventory row to draw down");
            return Ok(None);
        };

        Ok(draw_down_quantity(&mut record.data, usage, synonyms))
    }
}
