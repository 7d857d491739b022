// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Conversions between TallyDB values and rusqlite values.

use rusqlite::types::{Value as SqlValue, ValueRef};
use tallydb_type::Value;

pub(crate) fn to_sql(value: &Value) -> SqlValue {
	match value {
		Value::Null => SqlValue::Null,
		Value::Integer(value) => SqlValue::Integer(*value),
		Value::Real(value) => SqlValue::Real(*value),
		Value::Text(value) => SqlValue::Text(value.clone()),
		Value::Blob(value) => SqlValue::Blob(value.clone()),
	}
}

pub(crate) fn from_sql(value: ValueRef<'_>) -> Value {
	match value {
		ValueRef::Null => Value::Null,
		ValueRef::Integer(value) => Value::Integer(value),
		ValueRef::Real(value) => Value::Real(value),
		ValueRef::Text(bytes) => Value::Text(String::from_utf8_lossy(bytes).into_owned()),
		ValueRef::Blob(bytes) => Value::Blob(bytes.to_vec()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_to_sql() {
		assert_eq!(to_sql(&Value::Null), SqlValue::Null);
		assert_eq!(to_sql(&Value::Integer(3)), SqlValue::Integer(3));
		assert_eq!(to_sql(&Value::Real(4.5)), SqlValue::Real(4.5));
		assert_eq!(to_sql(&Value::text("abc")), SqlValue::Text("abc".to_string()));
	}

	#[test]
	fn test_from_sql() {
		assert_eq!(from_sql(ValueRef::Null), Value::Null);
		assert_eq!(from_sql(ValueRef::Integer(7)), Value::Integer(7));
		assert_eq!(from_sql(ValueRef::Text(b"nether")), Value::text("nether"));
		assert_eq!(from_sql(ValueRef::Blob(&[1, 2])), Value::Blob(vec![1, 2]));
	}
}
