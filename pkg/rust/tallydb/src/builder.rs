// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tallydb_catalog::Registry;
use tallydb_sqlite::{SqliteConfig, SqliteStorage};
use tallydb_sub_tracing::{TracingBuilder, TracingFactory};
use tallydb_type::Result;
use tracing::{debug, warn};

use crate::StatStore;

pub struct StatStoreBuilder {
	config: SqliteConfig,
	registry: Registry,
	tracing: Option<TracingFactory>,
}

impl StatStoreBuilder {
	pub fn new(config: SqliteConfig) -> Self {
		Self {
			config,
			registry: Registry::standard(),
			tracing: None,
		}
	}

	/// Tables to create at build time, [`Registry::standard`] by default.
	pub fn with_registry(mut self, registry: Registry) -> Self {
		self.registry = registry;
		self
	}

	/// Install a `tracing` subscriber when the store is built.
	pub fn with_tracing<F>(mut self, configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		self.tracing = Some(TracingFactory::with_configurator(configurator));
		self
	}

	/// Start the engine and create every registered table.
	///
	/// Failing to open the database fails the build. Tables whose DDL is
	/// rejected are logged and listed in [`StatStore::schema_report`].
	pub fn build(self) -> Result<StatStore> {
		if let Some(factory) = self.tracing {
			if let Err(err) = factory.install() {
				debug!(err = %err, "keeping existing tracing subscriber");
			}
		}

		for violation in self.registry.tables().iter().flat_map(|table| table.violations()) {
			warn!(violation = %violation, "table declaration will be rejected");
		}

		let storage = SqliteStorage::new(self.config)?;
		let report = storage.initialize_schema(self.registry.tables())?;

		Ok(StatStore::new(storage, self.registry, report))
	}
}
