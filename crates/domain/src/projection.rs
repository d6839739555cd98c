// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Location and fleet-wide restock projections.

use crate::calendar::YearMonth;
use crate::config::ProjectionConfig;
use crate::depletion::{RestockProjection, SimulationRequest, simulate_restock};
use crate::error::DomainError;
use crate::inventory::{InventorySnapshot, current_snapshot};
use crate::milestones::MilestoneCounter;
use crate::types::{EmployeeRecord, GiftType, InventoryRecord};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

/// Months until restock per gift type, plus the earliest of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionSummary {
    pub birthday_restock_in_months: Option<u32>,
    pub anniversary_restock_in_months: Option<u32>,
    pub service_restock_in_months: Option<u32>,
    /// Minimum of the three, treating `None` as never.
    pub earliest_restock_needed: Option<u32>,
}

impl ProjectionSummary {
    fn from_projections(
        birthday: &RestockProjection,
        anniversary: &RestockProjection,
        service_completion: &RestockProjection,
    ) -> Self {
        let restocks: [Option<u32>; 3] = [
            birthday.months_until_restock,
            anniversary.months_until_restock,
            service_completion.months_until_restock,
        ];

        Self {
            birthday_restock_in_months: restocks[0],
            anniversary_restock_in_months: restocks[1],
            service_restock_in_months: restocks[2],
            earliest_restock_needed: restocks.into_iter().flatten().min(),
        }
    }
}

/// All three gift-type projections for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationProjection {
    pub location: String,
    pub requested_location: String,
    pub horizon_months: u32,
    pub starting: YearMonth,
    pub birthday: RestockProjection,
    pub anniversary: RestockProjection,
    pub service_completion: RestockProjection,
    pub summary: ProjectionSummary,
}

impl LocationProjection {
    #[must_use]
    pub const fn for_gift(&self, gift_type: GiftType) -> &RestockProjection {
        match gift_type {
            GiftType::Birthday => &self.birthday,
            GiftType::Anniversary => &self.anniversary,
            GiftType::ServiceCompletion => &self.service_completion,
        }
    }
}

/// A stocked location needing a restock soon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrgentRestock {
    pub location: String,
    pub months_until_restock: u32,
    pub details: ProjectionSummary,
}

/// Restock schedule across every stocked location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FleetReport {
    pub horizon_months: u32,
    pub starting: YearMonth,
    pub total_locations: usize,
    /// Sorted soonest first.
    pub urgent_restocks: Vec<UrgentRestock>,
    pub locations: BTreeMap<String, LocationProjection>,
}

/// Projection engine over one loaded dataset.
///
/// Employee months are extracted and the inventory snapshot is built once
/// at construction; every projection then reads from those. Nothing is
/// shared between engines, so each request builds its own.
#[derive(Debug, Clone)]
pub struct ProjectionEngine<'c> {
    config: &'c ProjectionConfig,
    milestones: MilestoneCounter,
    inventory: InventorySnapshot,
}

impl<'c> ProjectionEngine<'c> {
    #[must_use]
    pub fn new(
        employees: &[EmployeeRecord],
        inventory: &[InventoryRecord],
        config: &'c ProjectionConfig,
    ) -> Self {
        Self {
            config,
            milestones: MilestoneCounter::new(employees, config),
            inventory: current_snapshot(inventory, None, config),
        }
    }

    #[must_use]
    pub const fn milestones(&self) -> &MilestoneCounter {
        &self.milestones
    }

    #[must_use]
    pub const fn inventory(&self) -> &InventorySnapshot {
        &self.inventory
    }

    #[must_use]
    pub const fn config(&self) -> &'c ProjectionConfig {
        self.config
    }

    /// Simulates one gift type at one location against an explicit threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory, the horizon is
    /// zero, or month arithmetic overflows.
    pub fn simulate(
        &self,
        location: &str,
        gift_type: GiftType,
        horizon_months: u32,
        threshold: i64,
        start: YearMonth,
    ) -> Result<RestockProjection, DomainError> {
        let request: SimulationRequest<'_> = SimulationRequest {
            location,
            gift_type,
            horizon_months,
            threshold,
            start,
        };
        simulate_restock(&self.milestones, &self.inventory, &request, self.config)
    }

    /// Projects all gift types at one location using the configured
    /// threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if the location has no inventory, the horizon is
    /// zero, or month arithmetic overflows.
    pub fn project_location(
        &self,
        location: &str,
        horizon_months: u32,
        start: YearMonth,
    ) -> Result<LocationProjection, DomainError> {
        let threshold: i64 = self.config.low_inventory_threshold;
        let birthday: RestockProjection =
            self.simulate(location, GiftType::Birthday, horizon_months, threshold, start)?;
        let anniversary: RestockProjection = self.simulate(
            location,
            GiftType::Anniversary,
            horizon_months,
            threshold,
            start,
        )?;
        let service_completion: RestockProjection = self.simulate(
            location,
            GiftType::ServiceCompletion,
            horizon_months,
            threshold,
            start,
        )?;

        let summary: ProjectionSummary =
            ProjectionSummary::from_projections(&birthday, &anniversary, &service_completion);

        Ok(LocationProjection {
            location: birthday.location.clone(),
            requested_location: location.to_string(),
            horizon_months,
            starting: start,
            birthday,
            anniversary,
            service_completion,
            summary,
        })
    }

    /// Projects every location present in the inventory snapshot.
    ///
    /// Locations that only appear in milestone data have no stock baseline
    /// and are not reported. Locations whose earliest restock falls within
    /// the configured urgency window are listed soonest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the horizon is zero or month arithmetic
    /// overflows.
    pub fn project_all_locations(
        &self,
        horizon_months: u32,
        start: YearMonth,
    ) -> Result<FleetReport, DomainError> {
        let mut locations: BTreeMap<String, LocationProjection> = BTreeMap::new();
        let mut urgent_restocks: Vec<UrgentRestock> = Vec::new();

        for location in self.inventory.locations() {
            let projection: LocationProjection =
                self.project_location(location, horizon_months, start)?;

            if let Some(months) = projection
                .summary
                .earliest_restock_needed
                .filter(|months| *months <= self.config.urgent_within_months)
            {
                urgent_restocks.push(UrgentRestock {
                    location: location.to_string(),
                    months_until_restock: months,
                    details: projection.summary,
                });
            }

            locations.insert(location.to_string(), projection);
        }

        urgent_restocks.sort_by_key(|urgent| urgent.months_until_restock);

        info!(
            locations = locations.len(),
            urgent = urgent_restocks.len(),
            horizon_months,
            "Generated restock schedule for all locations"
        );

        Ok(FleetReport {
            horizon_months,
            starting: start,
            total_locations: locations.len(),
            urgent_restocks,
            locations,
        })
    }
}
