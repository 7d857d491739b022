// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Player statistics persisted to a local SQLite file.
//!
//! ```no_run
//! use tallydb::{Row, SqliteConfig, StatStoreBuilder};
//!
//! let store = StatStoreBuilder::new(SqliteConfig::new("plugins/stats")).build()?;
//! store.write("joins", Row::new().with("uuid", "abc").with("value", 1));
//! let joins = store.query("joins", &Row::new().with("uuid", "abc"))?;
//! # Ok::<(), tallydb::Error>(())
//! ```

mod builder;
mod store;

pub use builder::StatStoreBuilder;
pub use store::StatStore;
pub use tallydb_catalog as catalog;
pub use tallydb_catalog::{Column, DataType, IDENTITY_TABLE, Registry, Shape, Table};
pub use tallydb_sql as sql;
pub use tallydb_sqlite as sqlite;
pub use tallydb_sqlite::{
	Backpressure, ConnectionState, DbPath, JournalMode, Pending, SchemaReport, SqliteConfig, SqliteStorage,
	SynchronousMode,
};
pub use tallydb_sub_tracing::TracingBuilder;
pub use tallydb_type::{Error, Result, Row, Value};
