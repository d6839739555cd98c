// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static configuration consumed by every calculation.
//!
//! Nothing here is global: callers build a `ProjectionConfig` (usually the
//! default, optionally overlaid from a JSON file) and pass it to each entry
//! point, so tests can swap alias tables or thresholds freely.

use crate::location::LocationAliases;
use crate::types::GiftType;
use serde::{Deserialize, Serialize};

/// How a remaining balance is compared against the restock threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdRule {
    /// Breach when remaining stock is strictly below the threshold.
    #[default]
    Below,
    /// Breach when remaining stock is at or below the threshold.
    AtOrBelow,
}

impl ThresholdRule {
    /// Returns whether `remaining` has breached `threshold`.
    #[must_use]
    pub const fn is_breached(&self, remaining: i64, threshold: i64) -> bool {
        match self {
            Self::Below => remaining < threshold,
            Self::AtOrBelow => remaining <= threshold,
        }
    }
}

/// Workbook naming and label matching for one gift type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftLabel {
    /// Canonical workbook name the inventory for this gift lives under.
    pub workbook: String,
    /// Lowercase substrings that identify this gift type in a workbook label.
    pub patterns: Vec<String>,
}

impl GiftLabel {
    fn new(workbook: &str, patterns: &[&str]) -> Self {
        Self {
            workbook: workbook.to_string(),
            patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
        }
    }

    fn matches(&self, lowered_label: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| lowered_label.contains(p.to_lowercase().as_str()))
    }
}

/// Gift-type-to-label mapping for inventory workbooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GiftLabels {
    pub birthday: GiftLabel,
    pub anniversary: GiftLabel,
    pub service_completion: GiftLabel,
}

impl Default for GiftLabels {
    fn default() -> Self {
        Self {
            birthday: GiftLabel::new("Birthday", &["birthday"]),
            anniversary: GiftLabel::new("As on 03-10-25", &["as on", "anniversary"]),
            service_completion: GiftLabel::new("Service Completion", &["service"]),
        }
    }
}

impl GiftLabels {
    #[must_use]
    pub const fn label(&self, gift_type: GiftType) -> &GiftLabel {
        match gift_type {
            GiftType::Birthday => &self.birthday,
            GiftType::Anniversary => &self.anniversary,
            GiftType::ServiceCompletion => &self.service_completion,
        }
    }

    /// Resolves a workbook label to a gift type by substring match.
    ///
    /// Birthday patterns are checked first, then anniversary, then service
    /// completion. Labels matching none of them return `None`.
    #[must_use]
    pub fn classify(&self, workbook: &str) -> Option<GiftType> {
        let lowered: String = workbook.to_lowercase();
        GiftType::ALL
            .into_iter()
            .find(|gift_type| self.label(*gift_type).matches(&lowered))
    }
}

/// Prioritized column-name synonyms for each semantic field.
///
/// The first synonym present in a dataset wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSynonyms {
    pub location: Vec<String>,
    pub date_of_birth: Vec<String>,
    pub birth_month: Vec<String>,
    pub date_of_marriage: Vec<String>,
    pub date_of_joining: Vec<String>,
    pub joining_month: Vec<String>,
    pub employee_name: Vec<String>,
    pub inventory_quantity: Vec<String>,
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| (*n).to_string()).collect()
}

impl Default for ColumnSynonyms {
    fn default() -> Self {
        Self {
            location: owned(&[
                "Place of posting",
                "Base Location Name",
                "Base Location  Name",
                "Location",
            ]),
            date_of_birth: owned(&["Date of Birth (as per Records)", "DOB", "Date of Birth"]),
            birth_month: owned(&["MM Birth - WE Celebrate", "Birth Month"]),
            date_of_marriage: owned(&["Date of Marriage", "Marriage Date"]),
            date_of_joining: owned(&[
                "Employment Details Date of Joining",
                "Date of Joining",
                "DOJ",
                "DOJ - WE Celebrate",
            ]),
            joining_month: owned(&["MM Service Completion - WE Celebrate", "Service Month"]),
            employee_name: owned(&["Full Name", "Employee Name", "Name"]),
            inventory_quantity: owned(&["Quantity Received"]),
        }
    }
}

/// Everything the engine needs besides the records themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    pub location_aliases: LocationAliases,
    pub low_inventory_threshold: i64,
    pub threshold_rule: ThresholdRule,
    /// Locations needing a restock within this many months are urgent.
    pub urgent_within_months: u32,
    /// Horizon for location and fleet projections.
    pub default_horizon_months: u32,
    /// Horizon for a single gift-type simulation.
    pub default_restock_horizon_months: u32,
    pub gift_labels: GiftLabels,
    pub columns: ColumnSynonyms,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            location_aliases: LocationAliases::default(),
            low_inventory_threshold: 40,
            threshold_rule: ThresholdRule::default(),
            urgent_within_months: 3,
            default_horizon_months: 12,
            default_restock_horizon_months: 24,
            gift_labels: GiftLabels::default(),
            columns: ColumnSynonyms::default(),
        }
    }
}
