// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Lifecycle of the one connection to the database file.
//!
//! `Closed -> Opening -> Open`, and back to `Closed` on shutdown or after an
//! unrecoverable I/O error. A closed session re-opens on its next use.

use std::sync::{
	Arc,
	atomic::{AtomicU8, Ordering},
};

use rusqlite::{Connection, ErrorCode};
use tallydb_type::{Error, Result};
use tracing::{debug, error, warn};

use crate::{DbPath, SqliteConfig, connection::connect};

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConnectionState {
	Closed = 0,
	Opening = 1,
	Open = 2,
}

impl ConnectionState {
	fn from_u8(value: u8) -> Self {
		match value {
			1 => ConnectionState::Opening,
			2 => ConnectionState::Open,
			_ => ConnectionState::Closed,
		}
	}
}

/// Shared view of a session's state, readable from any thread.
#[derive(Debug, Clone)]
pub(crate) struct StateCell(Arc<AtomicU8>);

impl StateCell {
	pub(crate) fn new() -> Self {
		Self(Arc::new(AtomicU8::new(ConnectionState::Closed as u8)))
	}

	pub(crate) fn get(&self) -> ConnectionState {
		ConnectionState::from_u8(self.0.load(Ordering::Acquire))
	}

	fn set(&self, state: ConnectionState) {
		self.0.store(state as u8, Ordering::Release);
	}
}

pub(crate) struct Session {
	config: SqliteConfig,
	conn: Option<Connection>,
	state: StateCell,
}

impl Session {
	pub(crate) fn new(config: SqliteConfig, state: StateCell) -> Self {
		Self {
			config,
			conn: None,
			state,
		}
	}

	/// Reuse the live connection or open a new one.
	pub(crate) fn ensure_open(&mut self) -> Result<&mut Connection> {
		if self.conn.is_none() {
			self.state.set(ConnectionState::Opening);
			match connect(&self.config) {
				Ok(conn) => {
					debug!(path = %self.config.path, "connection opened");
					self.conn = Some(conn);
					self.state.set(ConnectionState::Open);
				}
				Err(err) => {
					error!(path = %self.config.path, err = %err, "failed to open database");
					self.state.set(ConnectionState::Closed);
					return Err(err);
				}
			}
		}

		self.conn.as_mut().ok_or_else(|| Error::connection(self.config.path.to_string(), "connection lost"))
	}

	/// Close the session if `err` means the file handle is no longer usable.
	///
	/// An in-memory database lives only as long as its connection, so that
	/// connection is kept.
	pub(crate) fn observe(&mut self, err: &rusqlite::Error) {
		if !is_unrecoverable(err) {
			return;
		}
		if self.config.path == DbPath::Memory {
			warn!(err = %err, "keeping in-memory connection after unrecoverable error");
			return;
		}

		warn!(path = %self.config.path, err = %err, "closing connection after unrecoverable error");
		self.close();
	}

	pub(crate) fn close(&mut self) {
		if let Some(conn) = self.conn.take() {
			if let Err((_, err)) = conn.close() {
				warn!(path = %self.config.path, err = %err, "failed to close connection cleanly");
			}
			debug!(path = %self.config.path, "connection closed");
		}
		self.state.set(ConnectionState::Closed);
	}
}

pub(crate) fn is_unrecoverable(err: &rusqlite::Error) -> bool {
	match err {
		rusqlite::Error::SqliteFailure(err, _) => matches!(
			err.code,
			ErrorCode::CannotOpen | ErrorCode::SystemIoFailure | ErrorCode::NotADatabase | ErrorCode::DatabaseCorrupt
		),
		_ => false,
	}
}

#[cfg(test)]
mod tests {
	use tallydb_testing::tempdir::temp_dir;

	use super::*;

	#[test]
	fn test_lazy_open_and_reuse() {
		let state = StateCell::new();
		let mut session = Session::new(SqliteConfig::in_memory(), state.clone());
		assert_eq!(state.get(), ConnectionState::Closed);

		session.ensure_open().unwrap().execute("CREATE TABLE t (x INTEGER)", []).unwrap();
		assert_eq!(state.get(), ConnectionState::Open);

		// same connection: the in-memory table is still there
		session.ensure_open().unwrap().execute("INSERT INTO t (x) VALUES (1)", []).unwrap();
	}

	#[test]
	fn test_close_and_reopen() {
		temp_dir(|dir| {
			let state = StateCell::new();
			let mut session = Session::new(SqliteConfig::new(dir.join("stats.db")), state.clone());

			session.ensure_open().unwrap().execute("CREATE TABLE t (x INTEGER)", []).unwrap();
			session.close();
			assert_eq!(state.get(), ConnectionState::Closed);

			let count: i64 = session
				.ensure_open()
				.unwrap()
				.query_row("SELECT count(*) FROM sqlite_master WHERE name = 't'", [], |row| row.get(0))
				.unwrap();
			assert_eq!(count, 1);
			assert_eq!(state.get(), ConnectionState::Open);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_open_failure_leaves_closed() {
		temp_dir(|dir| {
			let blocker = dir.join("blocker");
			std::fs::write(&blocker, b"not a directory").unwrap();

			let state = StateCell::new();
			let mut session = Session::new(SqliteConfig::new(blocker.join("stats.db")), state.clone());

			let err = session.ensure_open().unwrap_err();
			assert!(matches!(err, Error::ConnectionUnavailable { .. }));
			assert_eq!(state.get(), ConnectionState::Closed);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_in_memory_survives_unrecoverable_error() {
		let state = StateCell::new();
		let mut session = Session::new(SqliteConfig::in_memory(), state.clone());
		session.ensure_open().unwrap().execute("CREATE TABLE t (x INTEGER)", []).unwrap();

		session.observe(&rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR), None));
		assert_eq!(state.get(), ConnectionState::Open);
		session.ensure_open().unwrap().execute("INSERT INTO t (x) VALUES (1)", []).unwrap();
	}

	#[test]
	fn test_file_session_closes_on_unrecoverable_error() {
		temp_dir(|dir| {
			let state = StateCell::new();
			let mut session = Session::new(SqliteConfig::new(dir.join("stats.db")), state.clone());
			session.ensure_open().unwrap();

			session.observe(&rusqlite::Error::SqliteFailure(
				rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR),
				None,
			));
			assert_eq!(state.get(), ConnectionState::Closed);
			Ok(())
		})
		.unwrap();
	}

	#[test]
	fn test_unrecoverable_codes() {
		let io = rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR), None);
		assert!(is_unrecoverable(&io));

		let constraint =
			rusqlite::Error::SqliteFailure(rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CONSTRAINT), None);
		assert!(!is_unrecoverable(&constraint));
		assert!(!is_unrecoverable(&rusqlite::Error::QueryReturnedNoRows));
	}
}
