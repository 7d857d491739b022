// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tallydb_catalog::{Column, Table};
use tallydb_type::{Error, Result, Row, Value};

use crate::{Statement, quote_identifier};

// ── CREATE TABLE ────────────────────────────────────────────────────────

pub fn emit_create_table(table: &Table) -> Statement {
	let mut cols: Vec<String> = table.columns().iter().map(emit_column).collect();

	if !table.unique_matched().is_empty() {
		let matched: Vec<String> = table.unique_matched().iter().map(|name| quote_identifier(name)).collect();
		cols.push(format!("UNIQUE ({})", matched.join(", ")));
	}

	let mut result = Statement::new(table.name());
	result.push(&format!("CREATE TABLE IF NOT EXISTS {} ({})", quote_identifier(table.name()), cols.join(", ")));
	result
}

/// One `CREATE TABLE` statement per table, in registry order.
pub fn emit_schema<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Vec<Statement> {
	tables.into_iter().map(emit_create_table).collect()
}

fn emit_column(column: &Column) -> String {
	let mut result = format!("{} {}", quote_identifier(column.name()), column.data_type());

	if column.is_primary_key() {
		result.push_str(" PRIMARY KEY");
	}
	if column.is_auto_increment() {
		result.push_str(" AUTOINCREMENT");
	}
	if column.is_not_null() {
		result.push_str(" NOT NULL");
	}
	if column.is_unique() {
		result.push_str(" UNIQUE");
	}

	result
}

// ── WHERE ───────────────────────────────────────────────────────────────

/// Renders `filter` as an AND-ed equality predicate; `1=1` when empty.
///
/// A null filter value compares with `IS NULL`, since `= NULL` never matches.
pub fn emit_filter(table: &Table, filter: &Row) -> Result<Statement> {
	let mut result = Statement::new(table.name());
	push_filter(&mut result, table, filter)?;
	Ok(result)
}

fn push_filter(statement: &mut Statement, table: &Table, filter: &Row) -> Result<()> {
	if filter.is_empty() {
		statement.push("1=1");
		return Ok(());
	}

	for (idx, (column, value)) in filter.iter().enumerate() {
		check_column(table, column)?;
		if idx > 0 {
			statement.push(" AND ");
		}

		let column = quote_identifier(column);
		match value {
			Value::Null => statement.push(&format!("{column} IS NULL")),
			value => {
				statement.push(&format!("{column} = "));
				statement.bind(value.clone());
			}
		}
	}

	Ok(())
}

// ── SELECT ──────────────────────────────────────────────────────────────

pub fn emit_select(table: &Table, filter: &Row) -> Result<Statement> {
	let mut result = Statement::new(table.name());
	result.push(&format!("SELECT * FROM {} WHERE ", quote_identifier(table.name())));
	push_filter(&mut result, table, filter)?;
	Ok(result)
}

// ── INSERT OR REPLACE ───────────────────────────────────────────────────

/// Renders a full row as an upsert that replaces any row sharing a unique key.
pub fn emit_upsert(table: &Table, row: &Row) -> Result<Statement> {
	if row.is_empty() {
		return Err(Error::EmptyRow(table.name().to_string()));
	}

	let mut cols = Vec::with_capacity(row.len());
	for column in row.columns() {
		check_column(table, column)?;
		cols.push(quote_identifier(column));
	}

	let mut result = Statement::new(table.name());
	result.push(&format!("INSERT OR REPLACE INTO {} ({}) VALUES (", quote_identifier(table.name()), cols.join(", ")));
	for (idx, value) in row.values().enumerate() {
		if idx > 0 {
			result.push(", ");
		}
		result.bind(value.clone());
	}
	result.push(")");

	Ok(result)
}

fn check_column(table: &Table, column: &str) -> Result<()> {
	match table.column(column) {
		Some(_) => Ok(()),
		None => Err(Error::UnknownColumn {
			table: table.name().to_string(),
			column: column.to_string(),
		}),
	}
}
