// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations on the record store.

pub mod inventory;
pub mod uploads;

pub use inventory::apply_inventory_usage;
pub use uploads::{clean_row, clean_value, save_upload};
