// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{EmployeeRecord, InventoryRecord, YearMonth};
use serde_json::{Map, Value, json};

pub fn create_test_employee(
    location: &str,
    date_of_birth: &str,
    date_of_marriage: &str,
    date_of_joining: &str,
) -> EmployeeRecord {
    let mut fields: Map<String, Value> = Map::new();
    fields.insert(String::from("Full Name"), json!("Test Employee"));
    fields.insert(String::from("Location"), json!(location));
    fields.insert(String::from("Date of Birth"), json!(date_of_birth));
    fields.insert(String::from("Date of Marriage"), json!(date_of_marriage));
    fields.insert(String::from("Date of Joining"), json!(date_of_joining));
    EmployeeRecord::new(fields)
}

/// An employee whose only milestone is a birthday in `month`.
pub fn create_test_birthday(location: &str, month: u32) -> EmployeeRecord {
    create_test_employee(location, &format!("1990-{month:02}-15"), "", "")
}

/// `per_month` birthdays at `location` in every month of the year.
pub fn create_test_birthdays_every_month(location: &str, per_month: u32) -> Vec<EmployeeRecord> {
    (1..=12)
        .flat_map(|month| (0..per_month).map(move |_| create_test_birthday(location, month)))
        .collect()
}

pub fn create_test_inventory(location: &str, workbook: &str, quantity: i64) -> InventoryRecord {
    let mut data: Map<String, Value> = Map::new();
    data.insert(String::from("Location"), json!(location));
    data.insert(String::from("Quantity Received"), json!(quantity));
    InventoryRecord::new(Some(String::from(location)), workbook, None, data)
}

/// An inventory row carrying a location but no quantity column.
pub fn create_test_inventory_without_quantity(location: &str, workbook: &str) -> InventoryRecord {
    let mut data: Map<String, Value> = Map::new();
    data.insert(String::from("Location"), json!(location));
    data.insert(String::from("Remarks"), json!("count pending"));
    InventoryRecord::new(Some(String::from(location)), workbook, None, data)
}

/// Birthday stock at `location`, with anniversary and service stock high
/// enough never to breach.
pub fn create_test_stocked_location(location: &str, birthday_stock: i64) -> Vec<InventoryRecord> {
    vec![
        create_test_inventory(location, "Birthday", birthday_stock),
        create_test_inventory(location, "As on 03-10-25", 1000),
        create_test_inventory(location, "Service Completion", 1000),
    ]
}

pub fn march_2025() -> YearMonth {
    YearMonth::new(2025, 3).unwrap()
}
