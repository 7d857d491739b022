// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

/// File name used when the configured path is a directory.
pub const DEFAULT_FILE_NAME: &str = "stats.db";

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DbPath {
	/// A file path, or a directory when the path has no extension.
	File(PathBuf),
	/// A private in-memory database. Only ever one connection exists, so the
	/// data lives as long as the storage does.
	Memory,
}

impl Display for DbPath {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			DbPath::File(path) => Display::fmt(&path.display(), f),
			DbPath::Memory => f.write_str(":memory:"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenFlags {
	pub read_write: bool,
	pub create: bool,
	pub full_mutex: bool,
	pub no_mutex: bool,
	pub shared_cache: bool,
	pub private_cache: bool,
	pub uri: bool,
}

impl Default for OpenFlags {
	fn default() -> Self {
		Self {
			read_write: true,
			create: true,
			full_mutex: false,
			no_mutex: true,
			shared_cache: false,
			private_cache: false,
			uri: false,
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum JournalMode {
	Delete,
	Truncate,
	Persist,
	Memory,
	Wal,
	Off,
}

impl JournalMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			JournalMode::Delete => "DELETE",
			JournalMode::Truncate => "TRUNCATE",
			JournalMode::Persist => "PERSIST",
			JournalMode::Memory => "MEMORY",
			JournalMode::Wal => "WAL",
			JournalMode::Off => "OFF",
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SynchronousMode {
	Off,
	Normal,
	Full,
	Extra,
}

impl SynchronousMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			SynchronousMode::Off => "OFF",
			SynchronousMode::Normal => "NORMAL",
			SynchronousMode::Full => "FULL",
			SynchronousMode::Extra => "EXTRA",
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TempStore {
	Default,
	File,
	Memory,
}

impl TempStore {
	pub fn as_str(&self) -> &'static str {
		match self {
			TempStore::Default => "DEFAULT",
			TempStore::File => "FILE",
			TempStore::Memory => "MEMORY",
		}
	}
}

/// What a write does when the writer queue is full.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backpressure {
	/// Wait for room in the queue.
	Block,
	/// Fail immediately with [`tallydb_type::Error::QueueFull`].
	Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqliteConfig {
	pub path: DbPath,
	pub flags: OpenFlags,
	pub journal_mode: JournalMode,
	pub synchronous_mode: SynchronousMode,
	pub temp_store: TempStore,
	/// Maximum number of commands waiting for the writer.
	pub queue_capacity: usize,
	pub backpressure: Backpressure,
}

impl SqliteConfig {
	/// WAL journal with NORMAL sync.
	pub fn new<P: AsRef<Path>>(path: P) -> Self {
		Self {
			path: DbPath::File(path.as_ref().to_path_buf()),
			flags: OpenFlags::default(),
			journal_mode: JournalMode::Wal,
			synchronous_mode: SynchronousMode::Normal,
			temp_store: TempStore::Memory,
			queue_capacity: 1024,
			backpressure: Backpressure::Block,
		}
	}

	/// Full durability, every commit is synced.
	pub fn safe<P: AsRef<Path>>(path: P) -> Self {
		Self {
			synchronous_mode: SynchronousMode::Full,
			temp_store: TempStore::File,
			..Self::new(path)
		}
	}

	/// No syncing at all; survives process crashes only by luck.
	pub fn fast<P: AsRef<Path>>(path: P) -> Self {
		Self {
			journal_mode: JournalMode::Memory,
			synchronous_mode: SynchronousMode::Off,
			..Self::new(path)
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			journal_mode: JournalMode::Memory,
			synchronous_mode: SynchronousMode::Off,
			..Self::new("")
		}
	}

	pub fn path(mut self, path: DbPath) -> Self {
		self.path = path;
		self
	}

	pub fn queue_capacity(mut self, capacity: usize) -> Self {
		self.queue_capacity = capacity;
		self
	}

	pub fn backpressure(mut self, backpressure: Backpressure) -> Self {
		self.backpressure = backpressure;
		self
	}

	pub fn journal_mode(mut self, mode: JournalMode) -> Self {
		self.journal_mode = mode;
		self
	}

	pub fn synchronous_mode(mut self, mode: SynchronousMode) -> Self {
		self.synchronous_mode = mode;
		self
	}
}

impl Default for SqliteConfig {
	fn default() -> Self {
		Self::new(DEFAULT_FILE_NAME)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_presets() {
		let config = SqliteConfig::new("/tmp/stats.db");
		assert_eq!(config.path, DbPath::File(PathBuf::from("/tmp/stats.db")));
		assert_eq!(config.journal_mode, JournalMode::Wal);
		assert_eq!(config.backpressure, Backpressure::Block);

		assert_eq!(SqliteConfig::safe("x.db").synchronous_mode, SynchronousMode::Full);
		assert_eq!(SqliteConfig::fast("x.db").synchronous_mode, SynchronousMode::Off);
		assert_eq!(SqliteConfig::in_memory().path, DbPath::Memory);
	}

	#[test]
	fn test_builders() {
		let config = SqliteConfig::in_memory().queue_capacity(8).backpressure(Backpressure::Reject);
		assert_eq!(config.queue_capacity, 8);
		assert_eq!(config.backpressure, Backpressure::Reject);
	}

	#[test]
	fn test_deserialize() {
		let config: SqliteConfig = serde_json::from_str(
			r#"{
				"path": {"File": "data/stats.db"},
				"flags": {"read_write": true, "create": true, "full_mutex": false, "no_mutex": true,
					"shared_cache": false, "private_cache": false, "uri": false},
				"journal_mode": "Wal",
				"synchronous_mode": "Normal",
				"temp_store": "Memory",
				"queue_capacity": 64,
				"backpressure": "Reject"
			}"#,
		)
		.unwrap();
		assert_eq!(config, SqliteConfig::new("data/stats.db").queue_capacity(64).backpressure(Backpressure::Reject));
	}

	#[test]
	fn test_display_path() {
		assert_eq!(DbPath::Memory.to_string(), ":memory:");
		assert_eq!(DbPath::File(PathBuf::from("a/b.db")).to_string(), "a/b.db");
	}
}
