// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemorySource, Projector};
use chrono::NaiveDate;
use giftstock_domain::{EmployeeRecord, InventoryRecord, ProjectionConfig};
use serde_json::{Map, Value, json};

pub fn create_test_employee(location: &str, date_of_birth: &str) -> EmployeeRecord {
    let mut fields: Map<String, Value> = Map::new();
    fields.insert(String::from("Place of posting"), json!(location));
    fields.insert(String::from("DOB"), json!(date_of_birth));
    EmployeeRecord::new(fields)
}

pub fn create_test_inventory(location: &str, workbook: &str, quantity: i64) -> InventoryRecord {
    let mut data: Map<String, Value> = Map::new();
    data.insert(String::from("Location"), json!(location));
    data.insert(String::from("Quantity Received"), json!(quantity));
    InventoryRecord::new(Some(String::from(location)), workbook, None, data)
}

pub fn create_test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
}

/// Pune holds 50 birthday gifts; three Pune employees and one Hyd employee
/// have March birthdays.
pub fn create_test_source() -> InMemorySource {
    InMemorySource::new(
        vec![
            create_test_employee("Pune", "1990-03-02"),
            create_test_employee("Magarpatta", "03/21/1987"),
            create_test_employee("Pune", "12 March 1993"),
            create_test_employee("Hyd", "1991-03-30"),
            create_test_employee("Pune", "1989-08-11"),
        ],
        vec![
            create_test_inventory("Pune", "Birthday", 50),
            create_test_inventory("Pune", "As on 03-10-25", 60),
            create_test_inventory("Pune", "Service Completion", 45),
        ],
    )
}

pub fn create_test_projector() -> Projector<InMemorySource> {
    Projector::new(
        create_test_source(),
        ProjectionConfig::default(),
        create_test_today(),
    )
}
