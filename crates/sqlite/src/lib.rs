// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod connection;
mod convert;
mod pending;
mod session;
mod storage;
mod writer;

pub use config::{Backpressure, DbPath, JournalMode, OpenFlags, SqliteConfig, SynchronousMode, TempStore};
pub use pending::Pending;
pub use session::ConnectionState;
pub use storage::{SchemaReport, SqliteStorage};
pub use tallydb_type::{Error, Result};
