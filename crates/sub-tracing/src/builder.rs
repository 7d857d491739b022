// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subscriber

use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
#[error("failed to install tracing subscriber: {0}")]
pub struct TracingError(String);

/// Builder for the process wide `tracing` subscriber
#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: Level,
	directives: Vec<String>,
	json: bool,
	with_target: bool,
	with_thread_names: bool,
	ansi: bool,
	respect_env: bool,
}

impl TracingBuilder {
	/// Create a new tracing builder with default settings
	pub fn new() -> Self {
		Self {
			level: Level::INFO,
			directives: Vec::new(),
			json: false,
			with_target: true,
			with_thread_names: true,
			ansi: true,
			respect_env: true,
		}
	}

	/// Default level for every target without its own directive
	pub fn level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	/// Add a filter directive such as `tallydb_sqlite=debug`
	pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	/// Emit one JSON object per event instead of the human readable format
	pub fn json(mut self, json: bool) -> Self {
		self.json = json;
		self
	}

	pub fn with_target(mut self, with_target: bool) -> Self {
		self.with_target = with_target;
		self
	}

	pub fn with_thread_names(mut self, with_thread_names: bool) -> Self {
		self.with_thread_names = with_thread_names;
		self
	}

	pub fn ansi(mut self, ansi: bool) -> Self {
		self.ansi = ansi;
		self
	}

	/// Let `RUST_LOG` replace the configured filter when it is set
	pub fn respect_env(mut self, respect_env: bool) -> Self {
		self.respect_env = respect_env;
		self
	}

	/// The filter expression the subscriber is built with, ignoring `RUST_LOG`.
	pub fn filter(&self) -> String {
		let level = self.level.as_str().to_lowercase();
		if self.directives.is_empty() {
			level
		} else {
			format!("{},{}", level, self.directives.join(","))
		}
	}

	fn env_filter(&self) -> Result<EnvFilter, TracingError> {
		if self.respect_env {
			if let Ok(filter) = EnvFilter::try_from_default_env() {
				return Ok(filter);
			}
		}
		EnvFilter::try_new(self.filter()).map_err(|e| TracingError(e.to_string()))
	}

	/// Install the subscriber globally. Fails if one is already installed.
	pub fn init(self) -> Result<(), TracingError> {
		let filter = self.env_filter()?;

		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(self.with_target)
			.with_thread_names(self.with_thread_names)
			.with_ansi(self.ansi);

		let result = if self.json {
			builder.json().try_init()
		} else {
			builder.try_init()
		};

		result.map_err(|e| TracingError(e.to_string()))
	}
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}
