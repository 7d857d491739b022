// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Value;

/// Column name to value mapping, kept in insertion order.
///
/// Used both as a filter (every entry becomes an equality predicate) and as
/// a full record handed to an upsert.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
	entries: IndexMap<String, Value>,
}

impl Row {
	pub fn new() -> Self {
		Self {
			entries: IndexMap::new(),
		}
	}

	pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
		self.insert(column, value);
		self
	}

	/// Builds a row from untyped text, tagging every value with [`Value::infer`].
	pub fn parse<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
	where
		K: Into<String>,
		V: AsRef<str>,
	{
		entries.into_iter().fold(Row::new(), |row, (column, raw)| row.with(column, Value::infer(raw.as_ref())))
	}

	pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(column.into(), value.into())
	}

	pub fn get(&self, column: &str) -> Option<&Value> {
		self.entries.get(column)
	}

	/// Stringified value of `column`; nulls read as `""`.
	pub fn get_str(&self, column: &str) -> Option<String> {
		self.entries.get(column).map(ToString::to_string)
	}

	pub fn contains(&self, column: &str) -> bool {
		self.entries.contains_key(column)
	}

	pub fn columns(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn values(&self) -> impl Iterator<Item = &Value> {
		self.entries.values()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.entries.iter().map(|(column, value)| (column.as_str(), value))
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Compares the stringified entries of both rows, ignoring order.
	pub fn same_entries(&self, other: &Row) -> bool {
		self.len() == other.len()
			&& self.iter().all(|(column, value)| {
				other.get(column).is_some_and(|other| other.to_string() == value.to_string())
			})
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Row {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		iter.into_iter().fold(Row::new(), |row, (column, value)| row.with(column, value))
	}
}

impl IntoIterator for Row {
	type Item = (String, Value);
	type IntoIter = indexmap::map::IntoIter<String, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
