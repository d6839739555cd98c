// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Milestone aggregation and inventory projection.
//!
//! Everything in this crate is a pure, synchronous function over records
//! that are already in memory. The current date is always a parameter;
//! nothing here reads the clock or performs I/O.

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

mod calendar;
mod columns;
mod config;
mod depletion;
mod error;
mod inventory;
mod location;
mod milestones;
mod month;
mod outlook;
mod projection;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::YearMonth;
pub use columns::{ResolvedColumns, quantity_column};
pub use config::{ColumnSynonyms, GiftLabel, GiftLabels, ProjectionConfig, ThresholdRule};
pub use depletion::{
    MonthlyLedgerEntry, RestockProjection, RestockStatus, SimulationRequest, simulate_restock,
};
pub use error::DomainError;
pub use inventory::{
    InventorySnapshot, LowStockAlert, current_snapshot, draw_down_quantity, low_stock_alerts,
    parse_quantity,
};
pub use location::{LocationAliases, UNKNOWN_LOCATION};
pub use milestones::{MilestoneCounter, MilestoneCounts, count_milestones};
pub use month::{extract_month, parse_permissive_date};
pub use outlook::{
    GiftOutlook, MilestoneTally, MonthlySummary, NextMonthOutlook, StockStatus, summarize_month,
};
pub use projection::{
    FleetReport, LocationProjection, ProjectionEngine, ProjectionSummary, UrgentRestock,
};
pub use types::{EmployeeRecord, GiftType, InventoryRecord};
