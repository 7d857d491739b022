// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite connection utilities.

use std::path::Path;

use rusqlite::Connection;
use tallydb_type::{Error, Result};
use tracing::info;

use crate::config::{DEFAULT_FILE_NAME, DbPath, OpenFlags, SqliteConfig};

/// Open a connection and apply the configured pragmas.
pub(crate) fn connect(config: &SqliteConfig) -> Result<Connection> {
	let path = config.path.to_string();
	let flags = convert_flags(&config.flags);

	let conn = match resolve_db_path(&config.path, config.flags.uri)? {
		DbPath::File(path) => Connection::open_with_flags(path, flags),
		DbPath::Memory => Connection::open_in_memory_with_flags(flags),
	}
	.map_err(|e| Error::connection(&path, e))?;

	// journal_mode answers with the mode in effect, so it needs the checked variant
	conn.pragma_update_and_check(None, "journal_mode", config.journal_mode.as_str(), |row| row.get::<_, String>(0))
		.and_then(|_| conn.pragma_update(None, "synchronous", config.synchronous_mode.as_str()))
		.and_then(|_| conn.pragma_update(None, "temp_store", config.temp_store.as_str()))
		.map_err(|e| Error::connection(&path, e))?;

	Ok(conn)
}

/// Resolve the database path, creating missing directories.
///
/// A path without extension names a directory that receives the default
/// database file. With `uri` set, a `file:` URI is passed through untouched.
pub(crate) fn resolve_db_path(db_path: &DbPath, uri: bool) -> Result<DbPath> {
	let path = match db_path {
		DbPath::Memory => return Ok(DbPath::Memory),
		DbPath::File(path) if uri && path.to_string_lossy().starts_with("file:") => return Ok(db_path.clone()),
		DbPath::File(path) if path.extension().is_none() => {
			create_dir(path)?;
			path.join(DEFAULT_FILE_NAME)
		}
		DbPath::File(path) => {
			if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
				create_dir(parent)?;
			}
			path.clone()
		}
	};

	if !path.exists() {
		info!(path = %path.display(), "database not found, creating a new one");
	}

	Ok(DbPath::File(path))
}

fn create_dir(path: &Path) -> Result<()> {
	std::fs::create_dir_all(path).map_err(|e| Error::connection(path.display().to_string(), e))
}

/// Convert our OpenFlags to rusqlite OpenFlags.
pub(crate) fn convert_flags(flags: &OpenFlags) -> rusqlite::OpenFlags {
	let mut rusqlite_flags = rusqlite::OpenFlags::empty();

	if flags.read_write {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE;
	}
	if flags.create {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_CREATE;
	}
	if flags.full_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_FULL_MUTEX;
	}
	if flags.no_mutex {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_NO_MUTEX;
	}
	if flags.shared_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_SHARED_CACHE;
	}
	if flags.private_cache {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_PRIVATE_CACHE;
	}
	if flags.uri {
		rusqlite_flags |= rusqlite::OpenFlags::SQLITE_OPEN_URI;
	}

	rusqlite_flags
}
