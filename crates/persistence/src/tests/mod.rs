// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod import_tests;
mod upload_tests;

use crate::{Persistence, UploadTarget};
use serde_json::{Map, Value, json};

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().unwrap()
}

pub fn create_test_row(cells: &[(&str, Value)]) -> Map<String, Value> {
    cells
        .iter()
        .map(|(column, value)| ((*column).to_string(), value.clone()))
        .collect()
}

pub fn create_test_inventory_row(location: &str, quantity: &str) -> Map<String, Value> {
    create_test_row(&[
        ("Base Location", json!(location)),
        ("Quantity Received", json!(quantity)),
    ])
}

pub fn birthday_inventory() -> UploadTarget {
    UploadTarget::Inventory {
        workbook: String::from("Birthday"),
        quarter: Some(String::from("Q1")),
    }
}
