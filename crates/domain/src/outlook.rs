// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Short-range views: the current month's draw on stock and a monthly
//! milestone summary.

use crate::calendar::YearMonth;
use crate::config::ProjectionConfig;
use crate::error::DomainError;
use crate::inventory::{LowStockAlert, low_stock_alerts};
use crate::milestones::{MilestoneCounter, MilestoneCounts};
use crate::projection::ProjectionEngine;
use crate::types::{EmployeeRecord, GiftType, InventoryRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Adequate,
    Low,
}

/// Stock position for one gift type after the current month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GiftOutlook {
    pub current_stock: i64,
    pub current_month_usage: u32,
    pub remaining_after_current_month: i64,
    pub status: StockStatus,
}

/// Where a location stands going into next month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextMonthOutlook {
    pub location: String,
    pub requested_location: String,
    pub current_month: YearMonth,
    pub next_month: YearMonth,
    pub projections: BTreeMap<GiftType, GiftOutlook>,
}

impl ProjectionEngine<'_> {
    /// Computes what remains at a location once this month's milestones are
    /// served, for one gift type or all of them.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory or month
    /// arithmetic overflows.
    pub fn next_month_outlook(
        &self,
        location: &str,
        gift_type: Option<GiftType>,
        current_month: YearMonth,
    ) -> Result<NextMonthOutlook, DomainError> {
        let config: &ProjectionConfig = self.config();
        let normalized: String = config.location_aliases.normalize(Some(location));

        let stock: &BTreeMap<GiftType, i64> = self
            .inventory()
            .location(&normalized)
            .filter(|gifts| !gifts.is_empty())
            .ok_or_else(|| {
                warn!(
                    requested = location,
                    normalized = %normalized,
                    "No inventory found for location"
                );
                DomainError::UnknownLocation {
                    requested: location.to_string(),
                    normalized: normalized.clone(),
                }
            })?;

        let counts: MilestoneCounts = self.milestones().count(current_month);
        let gift_types: Vec<GiftType> =
            gift_type.map_or_else(|| GiftType::ALL.to_vec(), |single| vec![single]);

        let projections: BTreeMap<GiftType, GiftOutlook> = gift_types
            .into_iter()
            .map(|gift| {
                let current_stock: i64 = stock.get(&gift).copied().unwrap_or(0);
                let usage: u32 = counts.usage(gift, &normalized);
                let remaining: i64 = current_stock.saturating_sub(i64::from(usage));
                let status: StockStatus = if config
                    .threshold_rule
                    .is_breached(remaining, config.low_inventory_threshold)
                {
                    StockStatus::Low
                } else {
                    StockStatus::Adequate
                };
                (
                    gift,
                    GiftOutlook {
                        current_stock,
                        current_month_usage: usage,
                        remaining_after_current_month: remaining,
                        status,
                    },
                )
            })
            .collect();

        Ok(NextMonthOutlook {
            location: normalized,
            requested_location: location.to_string(),
            current_month,
            next_month: current_month.plus_months(1)?,
            projections,
        })
    }
}

/// Milestones of one kind in a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneTally {
    pub total: u32,
    pub by_location: BTreeMap<String, u32>,
}

impl MilestoneTally {
    fn of(counts: &MilestoneCounts, gift_type: GiftType) -> Self {
        Self {
            total: counts.total(gift_type),
            by_location: counts.for_gift(gift_type).clone(),
        }
    }
}

/// Milestones due in a month alongside current low-stock rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlySummary {
    pub period: YearMonth,
    pub birthdays: MilestoneTally,
    pub anniversaries: MilestoneTally,
    pub service_completions: MilestoneTally,
    /// `false` when the employee data had no location column.
    pub has_location_data: bool,
    pub low_inventory_alerts: Vec<LowStockAlert>,
    pub inventory_rows: usize,
}

/// Summarizes a month's milestones and the current low-stock rows.
#[must_use]
pub fn summarize_month(
    employees: &[EmployeeRecord],
    inventory: &[InventoryRecord],
    period: YearMonth,
    config: &ProjectionConfig,
) -> MonthlySummary {
    let counts: MilestoneCounts = MilestoneCounter::new(employees, config).count(period);

    MonthlySummary {
        period,
        birthdays: MilestoneTally::of(&counts, GiftType::Birthday),
        anniversaries: MilestoneTally::of(&counts, GiftType::Anniversary),
        service_completions: MilestoneTally::of(&counts, GiftType::ServiceCompletion),
        has_location_data: counts.has_location_data(),
        low_inventory_alerts: low_stock_alerts(inventory, config.low_inventory_threshold, config),
        inventory_rows: inventory.len(),
    }
}
