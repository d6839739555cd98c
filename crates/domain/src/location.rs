// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Location that absent or blank location values are attributed to.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Known free-text site spellings mapped to canonical location names.
///
/// Lookups are exact and case-sensitive. Spellings that are not in the table
/// pass through trimmed, so a new site variant shows up as its own location
/// until it is added here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationAliases(BTreeMap<String, String>);

impl LocationAliases {
    #[must_use]
    pub const fn new(aliases: BTreeMap<String, String>) -> Self {
        Self(aliases)
    }

    /// Resolves a raw location string to its canonical name.
    ///
    /// `None`, empty and whitespace-only input map to [`UNKNOWN_LOCATION`].
    #[must_use]
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let trimmed: &str = match raw.map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return UNKNOWN_LOCATION.to_string(),
        };

        self.0
            .get(trimmed)
            .map_or_else(|| trimmed.to_string(), Clone::clone)
    }

    /// Iterates `(alias, canonical)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl Default for LocationAliases {
    fn default() -> Self {
        const YIT: &str = "Indore-YASH IT Park-SC-DC";
        const MINDSPACE: &str = "Hyderabad-Mindspace I-DC";

        let pairs: [(&str, &str); 16] = [
            ("YASH IT Part", YIT),
            ("Indore YIT", YIT),
            ("YIT", YIT),
            ("Yash IT Park", YIT),
            ("YASH IT Park", YIT),
            ("CIT", YIT),
            ("Indore-Crystal IT Park-DC", YIT),
            ("Mindspace", MINDSPACE),
            ("Hyd", MINDSPACE),
            ("MIDC", MINDSPACE),
            ("BTC", "Indore-BTC-CO"),
            ("Magarpatta", "Pune"),
            ("Pune-Hinjewadi III-DC", "Pune"),
            ("BNG", "Bangalore"),
            ("Bangalore-Whitefield-DC", "Bangalore"),
            ("Bangalore-BHIVE-DC", "Bangalore"),
        ];

        Self(
            pairs
                .into_iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        )
    }
}
