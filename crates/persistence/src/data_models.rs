// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Placeholder stored for an inventory row's missing location, workbook or
/// quarter.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Kind of sheet an upload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadCategory {
    Milestone,
    WelcomeKit,
    Inventory,
}

impl UploadCategory {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Milestone => "milestone",
            Self::WelcomeKit => "welcome_kit",
            Self::Inventory => "inventory",
        }
    }
}

impl FromStr for UploadCategory {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "milestone" => Ok(Self::Milestone),
            "welcome_kit" => Ok(Self::WelcomeKit),
            "inventory" => Ok(Self::Inventory),
            _ => Err(PersistenceError::InvalidUploadCategory(s.to_string())),
        }
    }
}

impl std::fmt::Display for UploadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where an upload's rows are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadTarget {
    Milestones,
    WelcomeKits,
    /// Inventory rows with the workbook and optional quarter they came from.
    Inventory {
        workbook: String,
        quarter: Option<String>,
    },
}

impl UploadTarget {
    #[must_use]
    pub const fn category(&self) -> UploadCategory {
        match self {
            Self::Milestones => UploadCategory::Milestone,
            Self::WelcomeKits => UploadCategory::WelcomeKit,
            Self::Inventory { .. } => UploadCategory::Inventory,
        }
    }
}

/// One stored upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadSummary {
    pub upload_id: i64,
    pub category: UploadCategory,
    pub source_name: String,
    pub row_count: i64,
    pub uploaded_at: String,
}
