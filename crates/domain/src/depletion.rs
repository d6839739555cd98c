// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month-by-month depletion of one gift type at one location.
//!
//! Starting from current stock, each simulated month subtracts that month's
//! milestone count for the location. The simulation stops at the first
//! month the balance breaches the threshold, so a breach before the
//! horizon yields a shorter ledger. Balances are never floored: a negative
//! `remaining_stock` is a projected stock-out.

use crate::calendar::YearMonth;
use crate::config::ProjectionConfig;
use crate::error::DomainError;
use crate::inventory::InventorySnapshot;
use crate::milestones::MilestoneCounter;
use crate::types::GiftType;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One simulated month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyLedgerEntry {
    /// Month name, e.g. `March`.
    pub month: String,
    pub year: i32,
    pub usage: u32,
    /// Balance after this month's usage. May be negative.
    pub remaining_stock: i64,
}

/// Whether the projection found a breach within its horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RestockStatus {
    RestockNeeded,
    NotNeededWithinProjection,
}

/// Projected depletion of one gift type at one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RestockProjection {
    /// Normalized location.
    pub location: String,
    /// Location as the caller spelled it.
    pub requested_location: String,
    pub gift_type: GiftType,
    pub current_stock: i64,
    pub threshold: i64,
    pub horizon_months: u32,
    /// First simulated month.
    pub starting: YearMonth,
    /// Month offset of the first breach; `None` if the horizon passed
    /// without one.
    pub months_until_restock: Option<u32>,
    pub restock_status: RestockStatus,
    /// Oldest first; one entry per simulated month.
    pub ledger: Vec<MonthlyLedgerEntry>,
}

impl RestockProjection {
    /// First and last simulated month, e.g. `March 2025 to May 2025`.
    #[must_use]
    pub fn projection_range(&self) -> Option<String> {
        let last: &MonthlyLedgerEntry = self.ledger.last()?;
        Some(format!(
            "{} {} to {} {}",
            self.starting.month_name(),
            self.starting.year(),
            last.month,
            last.year
        ))
    }
}

/// Parameters of a single simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationRequest<'a> {
    pub location: &'a str,
    pub gift_type: GiftType,
    pub horizon_months: u32,
    pub threshold: i64,
    /// The current month; simulation offset 0.
    pub start: YearMonth,
}

/// Runs the depletion simulation described in the module docs.
///
/// The milestone counter covers every location; only the requested
/// location's usage is read, defaulting to zero when it has no milestones
/// that month.
///
/// # Errors
///
/// Returns an error if:
/// - The horizon is zero
/// - The location has no inventory entry (absence is not zero stock)
/// - Month arithmetic overflows
pub fn simulate_restock(
    milestones: &MilestoneCounter,
    inventory: &InventorySnapshot,
    request: &SimulationRequest<'_>,
    config: &ProjectionConfig,
) -> Result<RestockProjection, DomainError> {
    if request.horizon_months == 0 {
        return Err(DomainError::InvalidHorizon(request.horizon_months));
    }

    let location: String = config.location_aliases.normalize(Some(request.location));

    let current_stock: i64 = inventory
        .location(&location)
        .filter(|gifts| !gifts.is_empty())
        .map(|gifts: &BTreeMap<GiftType, i64>| {
            gifts.get(&request.gift_type).copied().unwrap_or(0)
        })
        .ok_or_else(|| {
            warn!(
                requested = request.location,
                normalized = %location,
                "No inventory found for location"
            );
            DomainError::UnknownLocation {
                requested: request.location.to_string(),
                normalized: location.clone(),
            }
        })?;

    if !milestones.has_location_data() {
        warn!(
            location = %location,
            "Milestone data has no location column; projecting zero usage"
        );
    }

    let mut remaining_stock: i64 = current_stock;
    let mut months_until_restock: Option<u32> = None;
    let mut ledger: Vec<MonthlyLedgerEntry> = Vec::new();

    for offset in 0..request.horizon_months {
        let period: YearMonth = request.start.plus_months(offset)?;
        let usage: u32 = milestones.count(period).usage(request.gift_type, &location);

        remaining_stock = remaining_stock.saturating_sub(i64::from(usage));
        ledger.push(MonthlyLedgerEntry {
            month: period.month_name().to_string(),
            year: period.year(),
            usage,
            remaining_stock,
        });

        if config
            .threshold_rule
            .is_breached(remaining_stock, request.threshold)
        {
            months_until_restock = Some(offset);
            break;
        }
    }

    debug!(
        location = %location,
        gift_type = %request.gift_type,
        current_stock,
        remaining_stock,
        months_until_restock = ?months_until_restock,
        "Simulated depletion"
    );

    Ok(RestockProjection {
        location,
        requested_location: request.location.to_string(),
        gift_type: request.gift_type,
        current_stock,
        threshold: request.threshold,
        horizon_months: request.horizon_months,
        starting: request.start,
        months_until_restock,
        restock_status: if months_until_restock.is_some() {
            RestockStatus::RestockNeeded
        } else {
            RestockStatus::NotNeededWithinProjection
        },
        ledger,
    })
}
