// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Received-stock snapshot per location and gift type.

use crate::columns::quantity_column;
use crate::config::{ColumnSynonyms, ProjectionConfig};
use crate::types::{GiftType, InventoryRecord};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Current quantities keyed by normalized location, then gift type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventorySnapshot(BTreeMap<String, BTreeMap<GiftType, i64>>);

impl InventorySnapshot {
    /// Whether the location has any inventory entry at all.
    #[must_use]
    pub fn contains_location(&self, location: &str) -> bool {
        self.0.contains_key(location)
    }

    /// Stock per gift type for a location, if the location is known.
    #[must_use]
    pub fn location(&self, location: &str) -> Option<&BTreeMap<GiftType, i64>> {
        self.0.get(location)
    }

    /// Stock of one gift type at a location; `None` when the location is
    /// unknown, zero when the location is known but the gift type is not.
    #[must_use]
    pub fn stock(&self, location: &str, gift_type: GiftType) -> Option<i64> {
        self.0
            .get(location)
            .map(|gifts| gifts.get(&gift_type).copied().unwrap_or(0))
    }

    /// Normalized locations in sorted order.
    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Restricts the snapshot to one location, keeping it present with no
    /// gift entries when nothing matched.
    #[must_use]
    pub fn restricted_to(mut self, location: &str) -> Self {
        let entry: BTreeMap<GiftType, i64> = self.0.remove(location).unwrap_or_default();
        Self(BTreeMap::from([(location.to_string(), entry)]))
    }
}

/// Parses a stock cell; anything non-numeric counts as zero.
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn parse_quantity(value: Option<&Value>) -> i64 {
    let as_float = |float: f64| {
        if float.is_finite() {
            float.trunc() as i64
        } else {
            0
        }
    };

    match value {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(as_float))
            .unwrap_or(0),
        Some(Value::String(text)) => {
            let cleaned: String = text.trim().replace(',', "");
            cleaned
                .parse::<i64>()
                .ok()
                .or_else(|| cleaned.parse::<f64>().ok().map(as_float))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

/// Builds the current-stock snapshot from inventory rows.
///
/// Rows are attributed to a gift type by their workbook label; rows whose
/// label matches no gift type, or that have no quantity column, are left
/// out. Quantities for the same location and gift type are summed,
/// saturating at the `i64` bounds. With `location_filter`, only that
/// (normalized) location is returned, present even if nothing matched.
#[must_use]
pub fn current_snapshot(
    records: &[InventoryRecord],
    location_filter: Option<&str>,
    config: &ProjectionConfig,
) -> InventorySnapshot {
    let mut snapshot: BTreeMap<String, BTreeMap<GiftType, i64>> = BTreeMap::new();

    for record in records {
        let Some(gift_type) = config.gift_labels.classify(&record.workbook) else {
            debug!(workbook = %record.workbook, "Skipping inventory row with unrecognized workbook");
            continue;
        };

        let location: String = config
            .location_aliases
            .normalize(record.source_location().as_deref());
        let Some(column) = quantity_column(&record.data, &config.columns) else {
            debug!(
                location = %location,
                workbook = %record.workbook,
                "Skipping inventory row with no quantity column"
            );
            continue;
        };
        let quantity: i64 = parse_quantity(record.data.get(column));

        let total: &mut i64 = snapshot
            .entry(location)
            .or_default()
            .entry(gift_type)
            .or_insert(0);
        *total = total.saturating_add(quantity);
    }

    let snapshot: InventorySnapshot = InventorySnapshot(snapshot);
    match location_filter {
        Some(filter) => {
            let normalized: String = config.location_aliases.normalize(Some(filter));
            snapshot.restricted_to(&normalized)
        }
        None => snapshot,
    }
}

/// Subtracts `usage` from a row's quantity cell, flooring the stored value
/// at zero.
///
/// Returns the new quantity, or `None` when the row has no quantity column
/// and nothing was changed.
pub fn draw_down_quantity(
    data: &mut Map<String, Value>,
    usage: u32,
    synonyms: &ColumnSynonyms,
) -> Option<i64> {
    let column: String = quantity_column(data, synonyms)?.to_string();
    let current: i64 = parse_quantity(data.get(&column));
    let updated: i64 = current.saturating_sub(i64::from(usage)).max(0);
    data.insert(column, Value::from(updated));
    Some(updated)
}

/// One inventory row holding less stock than the threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LowStockAlert {
    pub location: String,
    pub workbook: String,
    pub quarter: Option<String>,
    pub current_quantity: i64,
    pub threshold: i64,
}

/// Lists inventory rows whose quantity is strictly below `threshold`.
///
/// Rows without any quantity column are not reported.
#[must_use]
pub fn low_stock_alerts(
    records: &[InventoryRecord],
    threshold: i64,
    config: &ProjectionConfig,
) -> Vec<LowStockAlert> {
    let alerts: Vec<LowStockAlert> = records
        .iter()
        .filter_map(|record| {
            let column: &str = quantity_column(&record.data, &config.columns)?;
            let quantity: i64 = parse_quantity(record.data.get(column));
            (quantity < threshold).then(|| LowStockAlert {
                location: config
                    .location_aliases
                    .normalize(record.source_location().as_deref()),
                workbook: record.workbook.clone(),
                quarter: record.quarter.clone(),
                current_quantity: quantity,
                threshold,
            })
        })
        .collect();

    info!(
        threshold,
        alerts = alerts.len(),
        "Checked inventory rows for low stock"
    );

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_quantity_variants() {
        assert_eq!(parse_quantity(Some(&json!(12))), 12);
        assert_eq!(parse_quantity(Some(&json!(12.9))), 12);
        assert_eq!(parse_quantity(Some(&json!("15"))), 15);
        assert_eq!(parse_quantity(Some(&json!(" 1,200 "))), 1200);
        assert_eq!(parse_quantity(Some(&json!("20.0"))), 20);
        assert_eq!(parse_quantity(Some(&json!("n/a"))), 0);
        assert_eq!(parse_quantity(Some(&Value::Null)), 0);
        assert_eq!(parse_quantity(None), 0);
    }

    #[test]
    fn test_draw_down_floors_at_zero() {
        let synonyms: ColumnSynonyms = ColumnSynonyms::default();
        let mut data: Map<String, Value> = Map::new();
        data.insert(String::from("Quantity Received"), json!("12"));

        assert_eq!(draw_down_quantity(&mut data, 5, &synonyms), Some(7));
        assert_eq!(data.get("Quantity Received"), Some(&json!(7)));
        assert_eq!(draw_down_quantity(&mut data, 20, &synonyms), Some(0));
        assert_eq!(data.get("Quantity Received"), Some(&json!(0)));
    }

    #[test]
    fn test_draw_down_saturates_before_flooring() {
        let synonyms: ColumnSynonyms = ColumnSynonyms::default();
        let mut data: Map<String, Value> = Map::new();
        data.insert(String::from("Quantity Received"), json!(i64::MIN));

        assert_eq!(draw_down_quantity(&mut data, 5, &synonyms), Some(0));
    }

    #[test]
    fn test_draw_down_without_quantity_column_changes_nothing() {
        let synonyms: ColumnSynonyms = ColumnSynonyms::default();
        let mut data: Map<String, Value> = Map::new();
        data.insert(String::from("Location"), json!("Pune"));

        assert_eq!(draw_down_quantity(&mut data, 5, &synonyms), None);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_restricted_to_keeps_missing_location_present() {
        let snapshot: InventorySnapshot = InventorySnapshot::default().restricted_to("Pune");
        assert!(snapshot.contains_location("Pune"));
        assert_eq!(snapshot.location("Pune"), Some(&BTreeMap::new()));
    }

    #[test]
    fn test_stock_distinguishes_unknown_location_from_zero() {
        let snapshot: InventorySnapshot = InventorySnapshot(BTreeMap::from([(
            String::from("Pune"),
            BTreeMap::from([(GiftType::Birthday, 10)]),
        )]));
        assert_eq!(snapshot.stock("Pune", GiftType::Birthday), Some(10));
        assert_eq!(snapshot.stock("Pune", GiftType::Anniversary), Some(0));
        assert_eq!(snapshot.stock("Bangalore", GiftType::Birthday), None);
    }
}
