// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_inventory;
use crate::{InMemorySource, InventoryLedger, RecordSource};
use giftstock_domain::{ColumnSynonyms, InventoryRecord, parse_quantity};

#[test]
fn test_inventory_is_returned_newest_first() {
    let mut source: InMemorySource = InMemorySource::default();
    source.push_inventory(create_test_inventory("Pune", "Birthday", 10));
    source.push_inventory(create_test_inventory("Pune", "Birthday", 20));

    let records: Vec<InventoryRecord> = source.inventory_records().unwrap();

    assert_eq!(parse_quantity(records[0].data.get("Quantity Received")), 20);
    assert_eq!(parse_quantity(records[1].data.get("Quantity Received")), 10);
}

#[test]
fn test_apply_usage_touches_only_newest_row() {
    let mut source: InMemorySource = InMemorySource::default();
    source.push_inventory(create_test_inventory("Pune", "Birthday", 10));
    source.push_inventory(create_test_inventory("Pune", "Birthday", 20));

    let remaining: Option<i64> = source
        .apply_usage("Pune", "Birthday", 5, &ColumnSynonyms::default())
        .unwrap();

    assert_eq!(remaining, Some(15));
    assert_eq!(
        parse_quantity(source.inventory()[0].data.get("Quantity Received")),
        10
    );
}

#[test]
fn test_apply_usage_without_match() {
    let mut source: InMemorySource = InMemorySource::default();
    source.push_inventory(create_test_inventory("Pune", "Birthday", 10));

    let remaining: Option<i64> = source
        .apply_usage("Pune", "Service Completion", 5, &ColumnSynonyms::default())
        .unwrap();

    assert_eq!(remaining, None);
}
