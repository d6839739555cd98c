// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::source::{InventoryLedger, RecordSource};
use chrono::{Datelike, NaiveDate};
use giftstock_domain::{
    EmployeeRecord, FleetReport, GiftType, InventoryRecord, InventorySnapshot, LocationProjection,
    LowStockAlert, MilestoneCounter, MilestoneCounts, MonthlySummary, NextMonthOutlook,
    ProjectionConfig, ProjectionEngine, RestockProjection, YearMonth, current_snapshot,
    low_stock_alerts, summarize_month,
};
use serde::Serialize;
use tracing::{info, warn};

/// Stock taken from one inventory row by a draw-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockAdjustment {
    /// Normalized location the usage was counted for.
    pub location: String,
    /// Location as stored on the adjusted row.
    pub source_location: String,
    pub gift_type: GiftType,
    pub workbook: String,
    pub usage: u32,
    /// Stored quantity after the adjustment; never negative.
    pub remaining: i64,
}

/// Usage that found no inventory row to draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnappliedUsage {
    pub location: String,
    pub gift_type: GiftType,
    pub usage: u32,
}

/// Outcome of a monthly draw-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawDownReport {
    pub period: YearMonth,
    pub adjustments: Vec<StockAdjustment>,
    pub unapplied: Vec<UnappliedUsage>,
    /// Low-stock rows after the draw-down was applied.
    pub low_stock_alerts: Vec<LowStockAlert>,
}

/// Runs domain calculations against records fetched from a [`RecordSource`].
///
/// The current date is injected at construction and drives every month or
/// year default; the system clock is never read here. Records are fetched
/// again for every operation.
#[derive(Debug, Clone)]
pub struct Projector<S> {
    source: S,
    config: ProjectionConfig,
    today: NaiveDate,
}

impl<S> Projector<S> {
    #[must_use]
    pub const fn new(source: S, config: ProjectionConfig, today: NaiveDate) -> Self {
        Self {
            source,
            config,
            today,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// The month containing the injected date.
    #[must_use]
    pub fn current_month(&self) -> YearMonth {
        YearMonth::containing(self.today)
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    pub const fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    /// Resolves an optional month and year against the injected date.
    fn period(&self, month: Option<u32>, year: Option<i32>) -> Result<YearMonth, CoreError> {
        Ok(YearMonth::new(
            year.unwrap_or_else(|| self.today.year()),
            month.unwrap_or_else(|| self.today.month()),
        )?)
    }
}

impl<S: RecordSource> Projector<S> {
    fn load(&mut self) -> Result<(Vec<EmployeeRecord>, Vec<InventoryRecord>), CoreError> {
        let employees: Vec<EmployeeRecord> = self.source.employee_records()?;
        let inventory: Vec<InventoryRecord> = self.source.inventory_records()?;
        Ok((employees, inventory))
    }

    /// Counts milestones per location for a month, defaulting to the current
    /// month and year.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is out of range or records cannot be
    /// fetched.
    pub fn count_milestones(
        &mut self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<MilestoneCounts, CoreError> {
        let period: YearMonth = self.period(month, year)?;
        let employees: Vec<EmployeeRecord> = self.source.employee_records()?;
        Ok(giftstock_domain::count_milestones(
            &employees,
            period.month(),
            period.year(),
            &self.config,
        )?)
    }

    /// Current stock per location and gift type.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be fetched.
    pub fn current_inventory(
        &mut self,
        location: Option<&str>,
    ) -> Result<InventorySnapshot, CoreError> {
        let inventory: Vec<InventoryRecord> = self.source.inventory_records()?;
        Ok(current_snapshot(&inventory, location, &self.config))
    }

    /// Simulates one gift type at one location from the current month.
    ///
    /// Horizon and threshold default to the configured restock horizon and
    /// low-inventory threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory, the horizon is
    /// zero, or records cannot be fetched.
    pub fn simulate(
        &mut self,
        location: &str,
        gift_type: GiftType,
        horizon_months: Option<u32>,
        threshold: Option<i64>,
    ) -> Result<RestockProjection, CoreError> {
        let (employees, inventory) = self.load()?;
        let engine: ProjectionEngine<'_> =
            ProjectionEngine::new(&employees, &inventory, &self.config);
        Ok(engine.simulate(
            location,
            gift_type,
            horizon_months.unwrap_or(self.config.default_restock_horizon_months),
            threshold.unwrap_or(self.config.low_inventory_threshold),
            YearMonth::containing(self.today),
        )?)
    }

    /// Projects all gift types at one location from the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory, the horizon is
    /// zero, or records cannot be fetched.
    pub fn project_location(
        &mut self,
        location: &str,
        horizon_months: Option<u32>,
    ) -> Result<LocationProjection, CoreError> {
        let (employees, inventory) = self.load()?;
        let engine: ProjectionEngine<'_> =
            ProjectionEngine::new(&employees, &inventory, &self.config);
        Ok(engine.project_location(
            location,
            horizon_months.unwrap_or(self.config.default_horizon_months),
            YearMonth::containing(self.today),
        )?)
    }

    /// Projects every stocked location from the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if the horizon is zero or records cannot be fetched.
    pub fn project_all_locations(
        &mut self,
        horizon_months: Option<u32>,
    ) -> Result<FleetReport, CoreError> {
        let (employees, inventory) = self.load()?;
        let engine: ProjectionEngine<'_> =
            ProjectionEngine::new(&employees, &inventory, &self.config);
        Ok(engine.project_all_locations(
            horizon_months.unwrap_or(self.config.default_horizon_months),
            YearMonth::containing(self.today),
        )?)
    }

    /// Stock left at a location once the current month is served.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory or records cannot
    /// be fetched.
    pub fn next_month_outlook(
        &mut self,
        location: &str,
        gift_type: Option<GiftType>,
    ) -> Result<NextMonthOutlook, CoreError> {
        let (employees, inventory) = self.load()?;
        let engine: ProjectionEngine<'_> =
            ProjectionEngine::new(&employees, &inventory, &self.config);
        Ok(engine.next_month_outlook(
            location,
            gift_type,
            YearMonth::containing(self.today),
        )?)
    }

    /// Milestone totals for a month with the current low-stock rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is out of range or records cannot be
    /// fetched.
    pub fn monthly_summary(
        &mut self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<MonthlySummary, CoreError> {
        let period: YearMonth = self.period(month, year)?;
        let (employees, inventory) = self.load()?;
        Ok(summarize_month(&employees, &inventory, period, &self.config))
    }

    /// Low-stock inventory rows against the configured threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if records cannot be fetched.
    pub fn low_stock_alerts(&mut self) -> Result<Vec<LowStockAlert>, CoreError> {
        let inventory: Vec<InventoryRecord> = self.source.inventory_records()?;
        Ok(low_stock_alerts(
            &inventory,
            self.config.low_inventory_threshold,
            &self.config,
        ))
    }
}

impl<S: RecordSource + InventoryLedger> Projector<S> {
    /// Subtracts a month's milestone usage from stored inventory.
    ///
    /// For each location and gift type with usage, the newest inventory row
    /// at that location whose workbook classifies as the gift type is drawn
    /// down. Stored quantities floor at zero. Usage with no matching row is
    /// reported as unapplied.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The month is out of range
    /// - The employee records have no location column
    /// - Records cannot be fetched or updated
    pub fn apply_monthly_draw_down(
        &mut self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<DrawDownReport, CoreError> {
        let period: YearMonth = self.period(month, year)?;
        let (employees, inventory) = self.load()?;

        let counter: MilestoneCounter = MilestoneCounter::new(&employees, &self.config);
        if !counter.has_location_data() {
            return Err(CoreError::MissingColumnData {
                field: String::from("location"),
            });
        }
        let counts: MilestoneCounts = counter.count(period);

        let mut adjustments: Vec<StockAdjustment> = Vec::new();
        let mut unapplied: Vec<UnappliedUsage> = Vec::new();

        for gift_type in GiftType::ALL {
            for (location, usage) in counts.for_gift(gift_type) {
                if *usage == 0 {
                    continue;
                }

                let target: Option<(String, String)> = inventory
                    .iter()
                    .filter(|record| {
                        self.config.gift_labels.classify(&record.workbook) == Some(gift_type)
                    })
                    .find_map(|record| {
                        let source_location: String = record.source_location()?;
                        (self
                            .config
                            .location_aliases
                            .normalize(Some(&source_location))
                            == *location)
                            .then(|| (source_location, record.workbook.clone()))
                    });

                let applied: Option<(String, String, i64)> = match target {
                    Some((source_location, workbook)) => self
                        .source
                        .apply_usage(&source_location, &workbook, *usage, &self.config.columns)?
                        .map(|remaining| (source_location, workbook, remaining)),
                    None => None,
                };

                match applied {
                    Some((source_location, workbook, remaining)) => {
                        adjustments.push(StockAdjustment {
                            location: location.clone(),
                            source_location,
                            gift_type,
                            workbook,
                            usage: *usage,
                            remaining,
                        });
                    }
                    None => {
                        warn!(
                            location = %location,
                            gift_type = %gift_type,
                            usage,
                            "No inventory row with a quantity to draw down"
                        );
                        unapplied.push(UnappliedUsage {
                            location: location.clone(),
                            gift_type,
                            usage: *usage,
                        });
                    }
                }
            }
        }

        let refreshed: Vec<InventoryRecord> = self.source.inventory_records()?;
        let alerts: Vec<LowStockAlert> = low_stock_alerts(
            &refreshed,
            self.config.low_inventory_threshold,
            &self.config,
        );

        info!(
            period = %period,
            adjusted = adjustments.len(),
            unapplied = unapplied.len(),
            alerts = alerts.len(),
            "Applied monthly inventory draw-down"
        );

        Ok(DrawDownReport {
            period,
            adjustments,
            unapplied,
            low_stock_alerts: alerts,
        })
    }
}
