// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::{
    birthday_inventory, create_test_inventory_row, create_test_persistence, create_test_row,
};
use crate::{UNKNOWN_LABEL, UploadCategory, UploadSummary, UploadTarget, clean_value};
use giftstock_domain::{EmployeeRecord, InventoryRecord};
use serde_json::{Map, Value, json};

#[test]
fn test_clean_value_nulls_spreadsheet_markers() {
    assert_eq!(clean_value(json!("  Pune ")), json!("Pune"));
    assert_eq!(clean_value(json!("")), Value::Null);
    assert_eq!(clean_value(json!("   ")), Value::Null);
    assert_eq!(clean_value(json!("NaN")), Value::Null);
    assert_eq!(clean_value(json!("NaT")), Value::Null);
    assert_eq!(clean_value(json!("None")), Value::Null);
    assert_eq!(clean_value(json!(12)), json!(12));
    assert_eq!(clean_value(json!(true)), json!(true));
}

#[test]
fn test_milestone_upload_round_trips_cleaned_rows() {
    let mut persistence = create_test_persistence();
    let rows: Vec<Map<String, Value>> = vec![create_test_row(&[
        ("Location", json!(" Pune ")),
        ("DOB", json!("nan")),
    ])];

    persistence
        .save_upload(&UploadTarget::Milestones, "roster.csv", rows)
        .unwrap();
    let records: Vec<EmployeeRecord> = persistence.fetch_milestone_records().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].get("Location"), Some(&json!("Pune")));
    assert_eq!(records[0].get("DOB"), Some(&Value::Null));
}

#[test]
fn test_records_are_fetched_newest_first() {
    let mut persistence = create_test_persistence();
    persistence
        .save_upload(
            &UploadTarget::WelcomeKits,
            "first.csv",
            vec![create_test_row(&[("Kit", json!("first"))])],
        )
        .unwrap();
    persistence
        .save_upload(
            &UploadTarget::WelcomeKits,
            "second.csv",
            vec![create_test_row(&[("Kit", json!("second"))])],
        )
        .unwrap();

    let records: Vec<Map<String, Value>> = persistence.fetch_welcome_kit_records().unwrap();

    assert_eq!(records[0].get("Kit"), Some(&json!("second")));
    assert_eq!(records[1].get("Kit"), Some(&json!("first")));
}

#[test]
fn test_inventory_upload_records_labels() {
    let mut persistence = create_test_persistence();
    persistence
        .save_upload(
            &birthday_inventory(),
            "stock.csv",
            vec![create_test_inventory_row("Hyd", "25")],
        )
        .unwrap();

    let records: Vec<InventoryRecord> = persistence.fetch_inventory_records().unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].location.as_deref(), Some("Hyd"));
    assert_eq!(records[0].workbook, "Birthday");
    assert_eq!(records[0].quarter.as_deref(), Some("Q1"));
}

#[test]
fn test_inventory_upload_skips_blank_location_columns() {
    let mut persistence = create_test_persistence();
    persistence
        .save_upload(
            &birthday_inventory(),
            "stock.csv",
            vec![create_test_row(&[
                ("Base Location", json!("  ")),
                ("Location (Current)", json!("Pune")),
                ("Quantity Received", json!("10")),
            ])],
        )
        .unwrap();

    let records: Vec<InventoryRecord> = persistence.fetch_inventory_records().unwrap();

    assert_eq!(records[0].location.as_deref(), Some("Pune"));
}

#[test]
fn test_inventory_upload_defaults_missing_labels() {
    let mut persistence = create_test_persistence();
    let target: UploadTarget = UploadTarget::Inventory {
        workbook: String::from("  "),
        quarter: None,
    };
    persistence
        .save_upload(
            &target,
            "stock.csv",
            vec![create_test_row(&[("Quantity Received", json!("10"))])],
        )
        .unwrap();

    let records: Vec<InventoryRecord> = persistence.fetch_inventory_records().unwrap();

    assert_eq!(records[0].location.as_deref(), Some(UNKNOWN_LABEL));
    assert_eq!(records[0].workbook, UNKNOWN_LABEL);
    assert_eq!(records[0].quarter.as_deref(), Some(UNKNOWN_LABEL));
}

#[test]
fn test_list_uploads() {
    let mut persistence = create_test_persistence();
    let first: i64 = persistence
        .save_upload(
            &UploadTarget::Milestones,
            "roster.csv",
            vec![create_test_row(&[("Location", json!("Pune"))]); 3],
        )
        .unwrap();
    let second: i64 = persistence
        .save_upload(&birthday_inventory(), "stock.csv", Vec::new())
        .unwrap();

    let uploads: Vec<UploadSummary> = persistence.list_uploads().unwrap();

    assert_eq!(uploads.len(), 2);
    assert_eq!(uploads[0].upload_id, second);
    assert_eq!(uploads[0].category, UploadCategory::Inventory);
    assert_eq!(uploads[0].row_count, 0);
    assert_eq!(uploads[1].upload_id, first);
    assert_eq!(uploads[1].source_name, "roster.csv");
    assert_eq!(uploads[1].row_count, 3);
}

#[test]
fn test_in_memory_stores_are_isolated() {
    let mut first = create_test_persistence();
    let mut second = create_test_persistence();
    first
        .save_upload(
            &UploadTarget::Milestones,
            "roster.csv",
            vec![create_test_row(&[("Location", json!("Pune"))])],
        )
        .unwrap();

    assert_eq!(first.fetch_milestone_records().unwrap().len(), 1);
    assert!(second.fetch_milestone_records().unwrap().is_empty());
}
