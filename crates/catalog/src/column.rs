// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Storage class declared for a column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
	Integer,
	Real,
	Text,
	Blob,
	Numeric,
}

impl DataType {
	pub fn as_str(&self) -> &'static str {
		match self {
			DataType::Integer => "INTEGER",
			DataType::Real => "REAL",
			DataType::Text => "TEXT",
			DataType::Blob => "BLOB",
			DataType::Numeric => "NUMERIC",
		}
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	name: String,
	data_type: DataType,
	primary_key: bool,
	auto_increment: bool,
	not_null: bool,
	unique: bool,
}

impl Column {
	pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
		Self {
			name: name.into(),
			data_type,
			primary_key: false,
			auto_increment: false,
			not_null: false,
			unique: false,
		}
	}

	pub fn primary_key(mut self) -> Self {
		self.primary_key = true;
		self
	}

	/// Auto-increment is only valid on the primary key, so this sets both.
	pub fn auto_increment(mut self) -> Self {
		self.primary_key = true;
		self.auto_increment = true;
		self
	}

	pub fn not_null(mut self) -> Self {
		self.not_null = true;
		self
	}

	pub fn unique(mut self) -> Self {
		self.unique = true;
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	pub fn is_primary_key(&self) -> bool {
		self.primary_key
	}

	pub fn is_auto_increment(&self) -> bool {
		self.auto_increment
	}

	pub fn is_not_null(&self) -> bool {
		self.not_null
	}

	pub fn is_unique(&self) -> bool {
		self.unique
	}
}
