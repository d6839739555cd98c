// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors surfaced by the projection engine.
///
/// Data-quality problems inside individual rows never produce one of these;
/// they are absorbed where they occur. These variants cover structural
/// failures the caller must react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Gift type label is outside the closed set.
    InvalidGiftType(String),
    /// Month number is outside 1-12.
    InvalidMonth(u32),
    /// Projection horizon must cover at least one month.
    InvalidHorizon(u32),
    /// The location has no inventory entry to project from.
    UnknownLocation {
        /// The location as requested by the caller.
        requested: String,
        /// The location after alias resolution.
        normalized: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGiftType(value) => write!(
                f,
                "Invalid gift type '{value}'. Must be one of birthday, anniversary, service_completion"
            ),
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidHorizon(months) => {
                write!(f, "Invalid projection horizon: {months}. Must be at least 1")
            }
            Self::UnknownLocation {
                requested,
                normalized,
            } => write!(
                f,
                "No inventory found for location: {requested} (normalized: {normalized})"
            ),
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
