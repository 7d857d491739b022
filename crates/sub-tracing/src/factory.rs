// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use crate::builder::{TracingBuilder, TracingError};

/// Configuration function for the tracing subscriber
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Deferred subscriber installation, run once when a store is built
pub struct TracingFactory {
	configurator: Option<TracingConfigurator>,
}

impl TracingFactory {
	/// Create a new factory with default configuration
	pub fn new() -> Self {
		Self {
			configurator: None,
		}
	}

	/// Create a factory with a custom configurator
	pub fn with_configurator<F>(configurator: F) -> Self
	where
		F: FnOnce(TracingBuilder) -> TracingBuilder + Send + 'static,
	{
		Self {
			configurator: Some(Box::new(configurator)),
		}
	}

	pub fn builder(self) -> TracingBuilder {
		match self.configurator {
			Some(configurator) => configurator(TracingBuilder::new()),
			None => TracingBuilder::default(),
		}
	}

	/// Install the subscriber. Fails when another one is already installed.
	pub fn install(self) -> Result<(), TracingError> {
		self.builder().init()
	}
}

impl Default for TracingFactory {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use tracing::Level;

	use super::*;

	#[test]
	fn test_configurator_applied() {
		let factory = TracingFactory::with_configurator(|b| b.level(Level::DEBUG).with_directive("rusqlite=warn"));
		assert_eq!(factory.builder().filter(), "debug,rusqlite=warn");
	}

	#[test]
	fn test_default_builder() {
		assert_eq!(TracingFactory::new().builder().filter(), "info");
	}
}
