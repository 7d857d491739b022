// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("database unavailable at {path}: {reason}")]
	ConnectionUnavailable {
		path: String,
		reason: String,
	},

	#[error("statement on table `{table}` failed: {reason}")]
	Statement {
		table: String,
		reason: String,
	},

	#[error("batch on table `{table}` failed for {failed} of {total} rows, first error: {first}")]
	BatchPartialFailure {
		table: String,
		failed: usize,
		total: usize,
		first: String,
	},

	#[error("table `{0}` is not registered")]
	UnknownTable(String),

	#[error("table `{table}` has no column `{column}`")]
	UnknownColumn {
		table: String,
		column: String,
	},

	#[error("row for table `{0}` has no entries")]
	EmptyRow(String),

	#[error("write queue is full")]
	QueueFull,

	#[error("storage writer has stopped")]
	WriterStopped,
}

impl Error {
	pub fn statement(table: impl Into<String>, reason: impl ToString) -> Self {
		Error::Statement {
			table: table.into(),
			reason: reason.to_string(),
		}
	}

	pub fn connection(path: impl Into<String>, reason: impl ToString) -> Self {
		Error::ConnectionUnavailable {
			path: path.into(),
			reason: reason.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(
			Error::statement("joins", "no such column: foo").to_string(),
			"statement on table `joins` failed: no such column: foo"
		);
		assert_eq!(
			Error::BatchPartialFailure {
				table: "deaths".to_string(),
				failed: 2,
				total: 10,
				first: "NOT NULL constraint failed: deaths.world".to_string(),
			}
			.to_string(),
			"batch on table `deaths` failed for 2 of 10 rows, first error: NOT NULL constraint failed: deaths.world"
		);
		assert_eq!(Error::UnknownTable("nope".to_string()).to_string(), "table `nope` is not registered");
	}
}
