// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use tallydb_type::Value;

use crate::render_literal;

/// A rendered statement with its values bound positionally (`?1`, `?2`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
	table: String,
	sql: String,
	inline: String,
	params: Vec<Value>,
}

impl Statement {
	pub(crate) fn new(table: &str) -> Self {
		Self {
			table: table.to_string(),
			sql: String::new(),
			inline: String::new(),
			params: Vec::new(),
		}
	}

	pub(crate) fn push(&mut self, text: &str) {
		self.sql.push_str(text);
		self.inline.push_str(text);
	}

	pub(crate) fn bind(&mut self, value: Value) {
		self.params.push(value);
		self.sql.push_str(&format!("?{}", self.params.len()));
		self.inline.push_str(&render_literal(&self.params[self.params.len() - 1]));
	}

	/// Table the statement targets.
	pub fn table(&self) -> &str {
		&self.table
	}

	/// Statement text with `?N` placeholders.
	pub fn sql(&self) -> &str {
		&self.sql
	}

	pub fn params(&self) -> &[Value] {
		&self.params
	}

	/// Statement text with every bound value substituted as a literal.
	pub fn inline(&self) -> &str {
		&self.inline
	}

	pub fn into_parts(self) -> (String, String, Vec<Value>) {
		(self.table, self.sql, self.params)
	}
}

impl Display for Statement {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.inline)
	}
}
