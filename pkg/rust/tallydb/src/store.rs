// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::ops::Deref;

use tallydb_catalog::Registry;
use tallydb_sqlite::{SchemaReport, SqliteStorage};

/// A running storage engine together with the tables it was initialized with.
#[derive(Clone)]
pub struct StatStore {
	storage: SqliteStorage,
	registry: Registry,
	report: SchemaReport,
}

impl StatStore {
	pub(crate) fn new(storage: SqliteStorage, registry: Registry, report: SchemaReport) -> Self {
		Self {
			storage,
			registry,
			report,
		}
	}

	pub fn registry(&self) -> &Registry {
		&self.registry
	}

	/// Outcome of the schema initialization run at build time.
	pub fn schema_report(&self) -> &SchemaReport {
		&self.report
	}

	pub fn storage(&self) -> &SqliteStorage {
		&self.storage
	}
}

impl Deref for StatStore {
	type Target = SqliteStorage;

	fn deref(&self) -> &Self::Target {
		&self.storage
	}
}
