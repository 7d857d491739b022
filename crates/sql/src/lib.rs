// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod emit;
mod literal;
mod statement;

pub use emit::{emit_create_table, emit_filter, emit_schema, emit_select, emit_upsert};
pub use literal::{quote_identifier, render_literal};
pub use statement::Statement;
