// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! SQLite storage engine.
//!
//! One writer thread owns the only connection to the database file; every
//! operation is handed to it through a bounded queue.

use std::{
	collections::HashMap,
	sync::{Arc, Mutex},
	thread,
};

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use parking_lot::RwLock;
use tallydb_catalog::Table;
use tallydb_sql::{Statement, emit_schema, emit_select, emit_upsert};
use tallydb_type::{Error, Result, Row};
use tracing::{error, info, instrument, warn};

use crate::{
	Backpressure, ConnectionState, Pending, SqliteConfig,
	session::{Session, StateCell},
	writer::{WriteCommand, run_writer},
};

/// Outcome of [`SqliteStorage::initialize_schema`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaReport {
	pub created: Vec<String>,
	pub failed: Vec<(String, Error)>,
}

impl SchemaReport {
	pub fn is_complete(&self) -> bool {
		self.failed.is_empty()
	}
}

#[derive(Clone)]
pub struct SqliteStorage {
	inner: Arc<SqliteStorageInner>,
}

struct SqliteStorageInner {
	/// Writer queue
	writer: Sender<WriteCommand>,
	/// Writer thread handle
	writer_thread: Mutex<Option<thread::JoinHandle<()>>>,
	/// Connection state, updated by the writer
	state: StateCell,
	/// Tables whose DDL has run
	tables: RwLock<HashMap<String, Arc<Table>>>,
	config: SqliteConfig,
}

impl SqliteStorageInner {
	/// Queue a shutdown behind pending work and join the writer.
	fn stop(&self) {
		let _ = self.writer.send(WriteCommand::Shutdown);

		if let Some(handle) = self.writer_thread.lock().ok().and_then(|mut handle| handle.take()) {
			let _ = handle.join();
		}
	}
}

impl Drop for SqliteStorageInner {
	fn drop(&mut self) {
		self.stop();
	}
}

impl SqliteStorage {
	/// Start the writer thread. The database is opened on first use.
	#[instrument(name = "store::sqlite::new", level = "info", skip(config), fields(
		db_path = %config.path,
		journal_mode = %config.journal_mode.as_str(),
		queue_capacity = config.queue_capacity
	))]
	pub fn new(config: SqliteConfig) -> Result<Self> {
		let (sender, receiver): (Sender<WriteCommand>, Receiver<WriteCommand>) =
			bounded(config.queue_capacity.max(1));

		let state = StateCell::new();
		let session = Session::new(config.clone(), state.clone());

		let writer_thread = thread::Builder::new()
			.name("tallydb-sqlite-writer".to_string())
			.spawn(move || run_writer(receiver, session))
			.map_err(|e| Error::connection(config.path.to_string(), e))?;

		Ok(Self {
			inner: Arc::new(SqliteStorageInner {
				writer: sender,
				writer_thread: Mutex::new(Some(writer_thread)),
				state,
				tables: RwLock::new(HashMap::new()),
				config,
			}),
		})
	}

	/// Create an in-memory storage for testing.
	pub fn in_memory() -> Result<Self> {
		Self::new(SqliteConfig::in_memory())
	}

	pub fn config(&self) -> &SqliteConfig {
		&self.inner.config
	}

	pub fn state(&self) -> ConnectionState {
		self.inner.state.get()
	}

	/// Names of every table whose DDL has run.
	pub fn tables(&self) -> Vec<String> {
		let mut names: Vec<String> = self.inner.tables.read().keys().cloned().collect();
		names.sort();
		names
	}

	pub fn table(&self, name: &str) -> Result<Arc<Table>> {
		self.inner.tables.read().get(name).cloned().ok_or_else(|| Error::UnknownTable(name.to_string()))
	}

	/// Create every table that does not exist yet.
	///
	/// Failing to open the database fails the call. A table whose DDL is
	/// rejected is logged and reported while the remaining tables are still
	/// created. Running it again against the same file is a no-op.
	#[instrument(name = "store::sqlite::initialize_schema", level = "info", skip_all, fields(table_count = tables.len()))]
	pub fn initialize_schema(&self, tables: &[Table]) -> Result<SchemaReport> {
		let statements = emit_schema(tables);
		let (respond_to, receiver) = bounded(1);

		self.submit(
			WriteCommand::CreateTables {
				statements,
				respond_to,
			},
			Backpressure::Block,
		)?;
		let outcomes = receiver.recv().map_err(|_| Error::WriterStopped)??;

		let mut report = SchemaReport::default();
		let mut registered = self.inner.tables.write();
		for (table, (name, outcome)) in tables.iter().zip(outcomes) {
			match outcome {
				Ok(()) => {
					registered.insert(name.clone(), Arc::new(table.clone()));
					report.created.push(name);
				}
				Err(err) => report.failed.push((name, err)),
			}
		}

		info!(created = report.created.len(), failed = report.failed.len(), "schema initialized");
		Ok(report)
	}

	/// Every row of `table` matching all entries of `filter`.
	///
	/// Column values are materialized as read; nulls stay in the row as
	/// [`tallydb_type::Value::Null`].
	#[instrument(name = "store::sqlite::query", level = "trace", skip(self, filter), fields(filter_len = filter.len()))]
	pub fn query(&self, table: &str, filter: &Row) -> Result<Vec<Row>> {
		let statement = self.table(table).and_then(|t| emit_select(&t, filter)).inspect_err(|e| {
			error!(table, err = %e, "query rejected");
		})?;

		let (respond_to, receiver) = bounded(1);
		self.submit(
			WriteCommand::Query {
				statement,
				respond_to,
			},
			Backpressure::Block,
		)?;
		receiver.recv().map_err(|_| Error::WriterStopped)?
	}

	/// Like [`SqliteStorage::query`], degrading every failure to no rows.
	pub fn query_or_empty(&self, table: &str, filter: &Row) -> Vec<Row> {
		self.query(table, filter).unwrap_or_default()
	}

	/// Queue a single upsert and return immediately.
	///
	/// The returned [`Pending`] can be dropped; failures are logged either way.
	/// Writes from different callers carry no ordering guarantee among
	/// each other; use [`SqliteStorage::write_batch`] when order matters.
	#[instrument(name = "store::sqlite::write", level = "trace", skip(self, row), fields(row_len = row.len()))]
	pub fn write(&self, table: &str, row: Row) -> Pending {
		let statement = match self.table(table).and_then(|t| emit_upsert(&t, &row)) {
			Ok(statement) => statement,
			Err(err) => {
				error!(table, err = %err, "write rejected");
				return Pending::failed(err);
			}
		};

		let (respond_to, receiver) = bounded(1);
		match self.submit(
			WriteCommand::Upsert {
				statement,
				respond_to,
			},
			self.inner.config.backpressure,
		) {
			Ok(()) => Pending::waiting(receiver),
			Err(err) => {
				warn!(table, err = %err, "write dropped");
				Pending::failed(err)
			}
		}
	}

	/// Upsert all `rows` as one contiguous, grouped execution and wait for it.
	///
	/// Returns the number of rows applied. Later rows win over earlier ones
	/// sharing a unique key.
	pub fn write_batch(&self, table: &str, rows: Vec<Row>) -> Result<usize> {
		self.submit_batch(table, rows).wait()
	}

	/// Non-blocking variant of [`SqliteStorage::write_batch`].
	#[instrument(name = "store::sqlite::submit_batch", level = "debug", skip(self, rows), fields(row_count = rows.len()))]
	pub fn submit_batch(&self, table: &str, rows: Vec<Row>) -> Pending<usize> {
		let statements = match self.table(table).and_then(|t| render_batch(&t, &rows)) {
			Ok(statements) => statements,
			Err(err) => {
				error!(table, err = %err, "batch rejected");
				return Pending::failed(err);
			}
		};

		let (respond_to, receiver) = bounded(1);
		match self.submit(
			WriteCommand::Batch {
				table: table.to_string(),
				statements,
				respond_to,
			},
			self.inner.config.backpressure,
		) {
			Ok(()) => Pending::waiting(receiver),
			Err(err) => {
				warn!(table, err = %err, "batch dropped");
				Pending::failed(err)
			}
		}
	}

	/// Stop the writer after everything queued so far has run.
	pub fn shutdown(&self) {
		self.inner.stop();
	}

	fn submit(&self, cmd: WriteCommand, backpressure: Backpressure) -> Result<()> {
		match backpressure {
			Backpressure::Block => self.inner.writer.send(cmd).map_err(|_| Error::WriterStopped),
			Backpressure::Reject => self.inner.writer.try_send(cmd).map_err(|e| match e {
				TrySendError::Full(_) => Error::QueueFull,
				TrySendError::Disconnected(_) => Error::WriterStopped,
			}),
		}
	}
}

fn render_batch(table: &Table, rows: &[Row]) -> Result<Vec<Statement>> {
	rows.iter().map(|row| emit_upsert(table, row)).collect()
}
