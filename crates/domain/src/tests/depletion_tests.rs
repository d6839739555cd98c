// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_test_birthday, create_test_birthdays_every_month, create_test_inventory,
    create_test_stocked_location, march_2025,
};
use crate::{
    DomainError, EmployeeRecord, GiftType, InventoryRecord, MonthlyLedgerEntry, ProjectionConfig,
    ProjectionEngine, RestockProjection, RestockStatus, ThresholdRule,
};

#[test]
fn test_restock_found_at_first_breach() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = create_test_birthdays_every_month("Pune", 5);
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 50);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 12, 40, march_2025())
        .unwrap();

    assert_eq!(projection.current_stock, 50);
    assert_eq!(projection.months_until_restock, Some(2));
    assert_eq!(projection.restock_status, RestockStatus::RestockNeeded);
    let remaining: Vec<i64> = projection
        .ledger
        .iter()
        .map(|entry| entry.remaining_stock)
        .collect();
    assert_eq!(remaining, vec![45, 40, 35]);
}

#[test]
fn test_simulation_stops_after_breach() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = create_test_birthdays_every_month("Pune", 5);
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 60);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 12, 40, march_2025())
        .unwrap();

    assert_eq!(projection.months_until_restock, Some(4));
    assert_eq!(projection.ledger.len(), 5);
}

#[test]
fn test_ledger_walks_calendar_months() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = vec![create_test_birthday("Pune", 1)];
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 100);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 12, 40, march_2025())
        .unwrap();

    let first: &MonthlyLedgerEntry = &projection.ledger[0];
    assert_eq!((first.month.as_str(), first.year), ("March", 2025));
    let january: &MonthlyLedgerEntry = &projection.ledger[10];
    assert_eq!((january.month.as_str(), january.year), ("January", 2026));
    assert_eq!(january.usage, 1);
    assert_eq!(
        projection.projection_range().as_deref(),
        Some("March 2025 to February 2026")
    );
}

#[test]
fn test_zero_usage_keeps_stock_flat() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = Vec::new();
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 100);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 6, 40, march_2025())
        .unwrap();

    assert_eq!(projection.ledger.len(), 6);
    assert!(
        projection
            .ledger
            .iter()
            .all(|entry| entry.usage == 0 && entry.remaining_stock == 100)
    );
    assert_eq!(projection.months_until_restock, None);
    assert_eq!(
        projection.restock_status,
        RestockStatus::NotNeededWithinProjection
    );
}

#[test]
fn test_remaining_stock_is_not_clamped() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = create_test_birthdays_every_month("Pune", 5);
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 2);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 12, 40, march_2025())
        .unwrap();

    assert_eq!(projection.months_until_restock, Some(0));
    assert_eq!(projection.ledger[0].remaining_stock, -3);
}

#[test]
fn test_equal_to_threshold_is_not_a_breach_by_default() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = vec![create_test_birthday("Pune", 3)];
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 41);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 3, 40, march_2025())
        .unwrap();

    assert_eq!(projection.months_until_restock, None);
}

#[test]
fn test_at_or_below_rule_breaches_on_equality() {
    let config: ProjectionConfig = ProjectionConfig {
        threshold_rule: ThresholdRule::AtOrBelow,
        ..ProjectionConfig::default()
    };
    let employees: Vec<EmployeeRecord> = vec![create_test_birthday("Pune", 3)];
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 41);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 3, 40, march_2025())
        .unwrap();

    assert_eq!(projection.months_until_restock, Some(0));
}

#[test]
fn test_alias_spellings_share_stock_and_usage() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = vec![create_test_birthday("BNG", 3)];
    let inventory: Vec<InventoryRecord> =
        create_test_stocked_location("Bangalore-Whitefield-DC", 41);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let by_alias: RestockProjection = engine
        .simulate(
            "Bangalore-BHIVE-DC",
            GiftType::Birthday,
            3,
            40,
            march_2025(),
        )
        .unwrap();
    let by_name: RestockProjection = engine
        .simulate("Bangalore", GiftType::Birthday, 3, 40, march_2025())
        .unwrap();

    assert_eq!(by_alias.location, "Bangalore");
    assert_eq!(by_alias.requested_location, "Bangalore-BHIVE-DC");
    assert_eq!(by_alias.ledger, by_name.ledger);
    assert_eq!(by_alias.ledger[0].usage, 1);
}

#[test]
fn test_missing_gift_type_at_known_location_is_zero_stock() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let inventory: Vec<InventoryRecord> = vec![create_test_inventory("Pune", "Birthday", 100)];
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&[], &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Anniversary, 12, 40, march_2025())
        .unwrap();

    assert_eq!(projection.current_stock, 0);
    assert_eq!(projection.months_until_restock, Some(0));
}

#[test]
fn test_unknown_location_is_an_error() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 100);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&[], &inventory, &config);

    let result: Result<RestockProjection, DomainError> =
        engine.simulate("Chennai", GiftType::Birthday, 12, 40, march_2025());

    assert_eq!(
        result,
        Err(DomainError::UnknownLocation {
            requested: String::from("Chennai"),
            normalized: String::from("Chennai"),
        })
    );
}

#[test]
fn test_zero_horizon_is_rejected() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let inventory: Vec<InventoryRecord> = create_test_stocked_location("Pune", 100);
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&[], &inventory, &config);

    let result: Result<RestockProjection, DomainError> =
        engine.simulate("Pune", GiftType::Birthday, 0, 40, march_2025());

    assert_eq!(result, Err(DomainError::InvalidHorizon(0)));
}

#[test]
fn test_depletion_saturates_at_minimum_stock() {
    let config: ProjectionConfig = ProjectionConfig::default();
    let employees: Vec<EmployeeRecord> = create_test_birthdays_every_month("Pune", 5);
    let inventory: Vec<InventoryRecord> = vec![create_test_inventory("Pune", "Birthday", i64::MIN)];
    let engine: ProjectionEngine<'_> = ProjectionEngine::new(&employees, &inventory, &config);

    let projection: RestockProjection = engine
        .simulate("Pune", GiftType::Birthday, 12, 40, march_2025())
        .unwrap();

    assert_eq!(projection.months_until_restock, Some(0));
    assert_eq!(projection.ledger[0].remaining_stock, i64::MIN);
}
