// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::read_sheet;
use serde_json::{Map, Value, json};

#[test]
fn test_read_sheet_maps_headers_to_cells() {
    let content: &str = "Full Name,Place of posting,DOB\n\
                         Asha,Pune,1990-03-15\n\
                         Ravi,BNG,\n";

    let rows: Vec<Map<String, Value>> = read_sheet(content.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get("Place of posting"), Some(&json!("Pune")));
    assert_eq!(rows[1].get("DOB"), Some(&json!("")));
}

#[test]
fn test_read_sheet_skips_blank_rows_and_headers() {
    let content: &str = " Location ,,Quantity Received\n\
                         Pune,x,40\n\
                         ,,\n\
                         Hyd,y,12\n";

    let rows: Vec<Map<String, Value>> = read_sheet(content.as_bytes()).unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), 2);
    assert_eq!(rows[0].get("Location"), Some(&json!("Pune")));
    assert_eq!(rows[1].get("Quantity Received"), Some(&json!("12")));
}

#[test]
fn test_read_sheet_accepts_short_rows() {
    let content: &str = "Location,Quantity Received\nPune\n";

    let rows: Vec<Map<String, Value>> = read_sheet(content.as_bytes()).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("Quantity Received"), None);
}
