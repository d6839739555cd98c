// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the record store.

pub mod records;
pub mod uploads;

pub use records::{
    fetch_inventory_records, fetch_milestone_records, fetch_welcome_kit_records,
};
pub use uploads::list_uploads;
