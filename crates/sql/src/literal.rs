// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use tallydb_type::{Value, util::hex};

/// Double-quotes an identifier, doubling embedded quotes.
pub fn quote_identifier(name: &str) -> String {
	format!("\"{}\"", name.replace('"', "\"\""))
}

/// Renders `value` as a SQLite literal: numbers bare, text single-quoted.
pub fn render_literal(value: &Value) -> String {
	match value {
		Value::Null => "NULL".to_string(),
		Value::Integer(value) => value.to_string(),
		Value::Real(value) => value.to_string(),
		Value::Text(value) => format!("'{}'", value.replace('\'', "''")),
		Value::Blob(value) => format!("X'{}'", hex::encode(value)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_numeric_is_bare() {
		assert_eq!(render_literal(&Value::infer("42")), "42");
		assert_eq!(render_literal(&Value::infer("4.5")), "4.5");
		assert_eq!(render_literal(&Value::Integer(-3)), "-3");
	}

	#[test]
	fn test_text_is_quoted() {
		assert_eq!(render_literal(&Value::infer("nether")), "'nether'");
		assert_eq!(render_literal(&Value::text("42")), "'42'");
	}

	#[test]
	fn test_text_quotes_are_escaped() {
		assert_eq!(render_literal(&Value::text("it's")), "'it''s'");
		assert_eq!(render_literal(&Value::text("'); DROP TABLE joins; --")), "'''); DROP TABLE joins; --'");
	}

	#[test]
	fn test_null_and_blob() {
		assert_eq!(render_literal(&Value::Null), "NULL");
		assert_eq!(render_literal(&Value::Blob(vec![0x01, 0xab])), "X'01ab'");
	}

	#[test]
	fn test_quote_identifier() {
		assert_eq!(quote_identifier("uuid"), "\"uuid\"");
		assert_eq!(quote_identifier("odd\"name"), "\"odd\"\"name\"");
	}
}
