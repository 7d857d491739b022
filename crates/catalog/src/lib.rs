// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod column;
mod registry;
mod table;

pub use column::{Column, DataType};
pub use registry::{IDENTITY_TABLE, Registry, Shape};
pub use table::Table;
