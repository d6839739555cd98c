// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use giftstock_domain::DomainError;
use thiserror::Error;

/// Errors surfaced by the orchestration layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),

    /// The loaded records lack a column the operation cannot do without.
    #[error("Missing column data: no {field} column found in the records")]
    MissingColumnData { field: String },

    /// The record collaborator failed to produce or update records.
    #[error("Record source unavailable: {0}")]
    SourceUnavailable(String),
}
