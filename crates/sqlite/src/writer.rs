// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Background writer owning the database session.
//!
//! Every statement, reads included, runs on this one thread in the order it
//! was queued. A batch is a single command, so its statements are never
//! interleaved with anyone else's.

use crossbeam_channel::{Receiver, Sender};
use rusqlite::{Connection, params_from_iter};
use tallydb_sql::Statement;
use tallydb_type::{Error, Result, Row};
use tracing::{debug, error, info, instrument, trace};

use crate::{
	convert::{from_sql, to_sql},
	session::Session,
};

/// Commands for the background writer.
pub(crate) enum WriteCommand {
	CreateTables {
		statements: Vec<Statement>,
		respond_to: Sender<Result<Vec<(String, Result<()>)>>>,
	},
	Query {
		statement: Statement,
		respond_to: Sender<Result<Vec<Row>>>,
	},
	Upsert {
		statement: Statement,
		respond_to: Sender<Result<()>>,
	},
	Batch {
		table: String,
		statements: Vec<Statement>,
		respond_to: Sender<Result<usize>>,
	},
	Shutdown,
}

/// Run the background writer until shutdown or until every sender is gone.
pub(crate) fn run_writer(receiver: Receiver<WriteCommand>, mut session: Session) {
	debug!(name: "sqlite_writer", "background writer started");

	while let Ok(cmd) = receiver.recv() {
		match cmd {
			WriteCommand::CreateTables {
				statements,
				respond_to,
			} => {
				let result = create_tables(&mut session, statements);
				let _ = respond_to.send(result);
			}
			WriteCommand::Query {
				statement,
				respond_to,
			} => {
				let result = run_query(&mut session, &statement);
				if let Err(ref e) = result {
					error!(table = statement.table(), err = %e, "query failed");
				}
				let _ = respond_to.send(result);
			}
			WriteCommand::Upsert {
				statement,
				respond_to,
			} => {
				let result = run_upsert(&mut session, &statement);
				if let Err(ref e) = result {
					error!(table = statement.table(), statement = %statement, err = %e, "write failed");
				}
				let _ = respond_to.send(result);
			}
			WriteCommand::Batch {
				table,
				statements,
				respond_to,
			} => {
				let result = run_batch(&mut session, &table, &statements);
				if let Err(ref e) = result {
					error!(table = %table, err = %e, "batch write failed");
				}
				let _ = respond_to.send(result);
			}
			WriteCommand::Shutdown => {
				info!(name: "sqlite_writer", "background writer shutting down");
				break;
			}
		}
	}

	session.close();
}

/// Executes one DDL statement per table. A failing table does not stop the
/// others; only failing to open the file fails the whole command.
#[instrument(name = "store::sqlite::create_tables", level = "debug", skip_all, fields(table_count = statements.len()))]
fn create_tables(session: &mut Session, statements: Vec<Statement>) -> Result<Vec<(String, Result<()>)>> {
	let mut outcomes = Vec::with_capacity(statements.len());

	for statement in statements {
		let conn = session.ensure_open()?;
		let result = conn.execute(statement.sql(), []);
		let outcome = match result {
			Ok(_) => {
				debug!(table = statement.table(), "loaded table");
				Ok(())
			}
			Err(err) => {
				error!(table = statement.table(), statement = %statement, err = %err, "failed to create table");
				session.observe(&err);
				Err(Error::statement(statement.table(), err))
			}
		};
		outcomes.push((statement.table().to_string(), outcome));
	}

	Ok(outcomes)
}

#[instrument(name = "store::sqlite::query", level = "trace", skip_all, fields(table = statement.table()))]
fn run_query(session: &mut Session, statement: &Statement) -> Result<Vec<Row>> {
	let conn = session.ensure_open()?;
	let result = select(conn, statement);
	result.map_err(|err| {
		session.observe(&err);
		Error::statement(statement.table(), err)
	})
}

fn select(conn: &Connection, statement: &Statement) -> rusqlite::Result<Vec<Row>> {
	let mut stmt = conn.prepare_cached(statement.sql())?;
	let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();

	let mut rows = stmt.query(params_from_iter(statement.params().iter().map(to_sql)))?;
	let mut result = Vec::new();
	while let Some(row) = rows.next()? {
		let mut record = Row::new();
		for (idx, name) in names.iter().enumerate() {
			record.insert(name.as_str(), from_sql(row.get_ref(idx)?));
		}
		result.push(record);
	}

	trace!(rows = result.len(), "query materialized");
	Ok(result)
}

#[instrument(name = "store::sqlite::upsert", level = "trace", skip_all, fields(table = statement.table()))]
fn run_upsert(session: &mut Session, statement: &Statement) -> Result<()> {
	let conn = session.ensure_open()?;
	let result = execute(conn, statement);
	result.map(|_| ()).map_err(|err| {
		session.observe(&err);
		Error::statement(statement.table(), err)
	})
}

fn execute(conn: &Connection, statement: &Statement) -> rusqlite::Result<usize> {
	conn.prepare_cached(statement.sql())?.execute(params_from_iter(statement.params().iter().map(to_sql)))
}

/// Executes a batch with auto-commit suspended.
///
/// Rows that fail are skipped and counted, the rest is committed. An
/// unrecoverable error rolls the whole batch back.
#[instrument(name = "store::sqlite::batch", level = "debug", skip(session, statements), fields(row_count = statements.len()))]
fn run_batch(session: &mut Session, table: &str, statements: &[Statement]) -> Result<usize> {
	let total = statements.len();
	if total == 0 {
		return Ok(0);
	}

	let outcome = {
		let conn = session.ensure_open()?;
		let outcome = apply_batch(conn, statements);
		debug_assert!(conn.is_autocommit());
		outcome
	};

	match outcome {
		Ok(errors) if errors.is_empty() => Ok(total),
		Ok(errors) => Err(Error::BatchPartialFailure {
			table: table.to_string(),
			failed: errors.len(),
			total,
			first: errors[0].to_string(),
		}),
		Err(err) => {
			session.observe(&err);
			Err(Error::BatchPartialFailure {
				table: table.to_string(),
				failed: total,
				total,
				first: err.to_string(),
			})
		}
	}
}

fn apply_batch(conn: &mut Connection, statements: &[Statement]) -> rusqlite::Result<Vec<rusqlite::Error>> {
	// dropping the transaction without commit rolls back and restores auto-commit
	let tx = conn.transaction()?;

	let mut errors = Vec::new();
	for statement in statements {
		if let Err(err) = execute(&tx, statement) {
			if crate::session::is_unrecoverable(&err) {
				return Err(err);
			}
			errors.push(err);
		}
	}

	tx.commit()?;
	Ok(errors)
}
