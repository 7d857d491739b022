// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Column;

/// A table declaration: ordered columns plus an optional composite unique key.
///
/// Column order is the order of the rendered `CREATE TABLE` statement. The
/// composite key (`unique_matched`) keeps declaration order and ignores
/// repeated names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
	name: String,
	columns: Vec<Column>,
	unique_matched: Vec<String>,
}

impl Table {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			columns: Vec::new(),
			unique_matched: Vec::new(),
		}
	}

	pub fn add_column(&mut self, column: Column) -> &mut Self {
		debug_assert!(self.column(column.name()).is_none(), "duplicate column {} in {}", column.name(), self.name);
		self.columns.push(column);
		self
	}

	pub fn with_column(mut self, column: Column) -> Self {
		self.add_column(column);
		self
	}

	pub fn add_unique_matched(&mut self, column: impl Into<String>) -> &mut Self {
		let column = column.into();
		if !self.unique_matched.contains(&column) {
			self.unique_matched.push(column);
		}
		self
	}

	pub fn with_unique_matched(mut self, column: impl Into<String>) -> Self {
		self.add_unique_matched(column);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn columns(&self) -> &[Column] {
		&self.columns
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name() == name)
	}

	pub fn unique_matched(&self) -> &[String] {
		&self.unique_matched
	}

	/// Columns whose values identify the row an upsert replaces.
	///
	/// The composite key when declared, otherwise every single-column
	/// unique or primary key.
	pub fn conflict_key(&self) -> Vec<&str> {
		if !self.unique_matched.is_empty() {
			return self.unique_matched.iter().map(String::as_str).collect();
		}

		self.columns
			.iter()
			.filter(|column| column.is_unique() || column.is_primary_key())
			.map(Column::name)
			.collect()
	}

	/// Lists every broken model invariant. Empty for a well-formed table.
	pub fn violations(&self) -> Vec<String> {
		let mut result = Vec::new();

		let mut seen = HashSet::new();
		for column in &self.columns {
			if !seen.insert(column.name()) {
				result.push(format!("{}: duplicate column `{}`", self.name, column.name()));
			}
		}

		let auto_increment: Vec<&Column> = self.columns.iter().filter(|c| c.is_auto_increment()).collect();
		if auto_increment.len() > 1 {
			result.push(format!("{}: {} auto-increment columns", self.name, auto_increment.len()));
		}
		for column in auto_increment {
			if !column.is_primary_key() {
				result.push(format!("{}: auto-increment column `{}` is not the primary key", self.name, column.name()));
			}
		}

		let primary_keys = self.columns.iter().filter(|c| c.is_primary_key()).count();
		if primary_keys > 1 {
			result.push(format!("{}: {} primary key columns", self.name, primary_keys));
		}

		for matched in &self.unique_matched {
			if self.column(matched).is_none() {
				result.push(format!("{}: composite key references unknown column `{}`", self.name, matched));
			}
		}

		result
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DataType;

	fn deaths() -> Table {
		Table::new("deaths")
			.with_column(Column::new("id", DataType::Integer).auto_increment())
			.with_column(Column::new("uuid", DataType::Text).not_null())
			.with_column(Column::new("value", DataType::Integer))
			.with_column(Column::new("world", DataType::Text).not_null())
			.with_unique_matched("uuid")
			.with_unique_matched("world")
	}

	#[test]
	fn test_column_order() {
		let table = deaths();
		let names: Vec<&str> = table.columns().iter().map(Column::name).collect();
		assert_eq!(names, vec!["id", "uuid", "value", "world"]);
		assert_eq!(table.column("world").map(Column::data_type), Some(DataType::Text));
		assert!(table.column("missing").is_none());
	}

	#[test]
	fn test_unique_matched_is_a_set() {
		let mut table = deaths();
		table.add_unique_matched("uuid");
		assert_eq!(table.unique_matched(), &["uuid".to_string(), "world".to_string()]);
	}

	#[test]
	fn test_conflict_key_prefers_composite() {
		assert_eq!(deaths().conflict_key(), vec!["uuid", "world"]);

		let joins = Table::new("joins")
			.with_column(Column::new("uuid", DataType::Text).unique())
			.with_column(Column::new("value", DataType::Integer));
		assert_eq!(joins.conflict_key(), vec!["uuid"]);
	}

	#[test]
	fn test_well_formed_has_no_violations() {
		assert!(deaths().violations().is_empty());
	}

	#[test]
	fn test_violations() {
		let table = Table {
			name: "broken".to_string(),
			columns: vec![
				Column::new("a", DataType::Integer).auto_increment(),
				Column::new("b", DataType::Integer).auto_increment(),
				Column::new("a", DataType::Text),
			],
			unique_matched: vec!["zzz".to_string()],
		};

		let violations = table.violations();
		assert!(violations.contains(&"broken: duplicate column `a`".to_string()));
		assert!(violations.contains(&"broken: 2 auto-increment columns".to_string()));
		assert!(violations.contains(&"broken: 2 primary key columns".to_string()));
		assert!(violations.contains(&"broken: composite key references unknown column `zzz`".to_string()));
	}

	#[test]
	fn test_serde_roundtrip_keeps_order() {
		let table = deaths();
		let json = serde_json::to_string(&table).unwrap();
		let back: Table = serde_json::from_str(&json).unwrap();
		assert_eq!(back, table);
	}
}
