// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod error;
mod row;
pub mod util;
pub mod value;

pub use error::{Error, Result};
pub use row::Row;
pub use value::Value;
