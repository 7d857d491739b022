// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::util::hex;

mod infer;
mod into;

/// A single cell exchanged with the store, tagged with its storage class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	/// Absent value, stringifies as the empty string
	Null,
	/// A signed 8-byte integer
	Integer(i64),
	/// An 8-byte floating point
	Real(f64),
	/// A UTF-8 string
	Text(String),
	/// Raw bytes
	Blob(Vec<u8>),
}

impl Value {
	pub fn text(value: impl Into<String>) -> Self {
		Value::Text(value.into())
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	pub fn is_numeric(&self) -> bool {
		matches!(self, Value::Integer(_) | Value::Real(_))
	}

	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::Integer(value) => Some(*value),
			Value::Real(value) if value.fract() == 0.0 => Some(*value as i64),
			Value::Text(value) => value.parse().ok(),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::Integer(value) => Some(*value as f64),
			Value::Real(value) => Some(*value),
			Value::Text(value) => value.parse().ok(),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(value) => Some(value),
			_ => None,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Null => Ok(()),
			Value::Integer(value) => Display::fmt(value, f),
			Value::Real(value) => Display::fmt(value, f),
			Value::Text(value) => f.write_str(value),
			Value::Blob(value) => f.write_str(&hex::encode(value)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Value::Null.to_string(), "");
		assert_eq!(Value::Integer(-42).to_string(), "-42");
		assert_eq!(Value::Real(4.5).to_string(), "4.5");
		assert_eq!(Value::Real(3.0).to_string(), "3");
		assert_eq!(Value::text("nether").to_string(), "nether");
		assert_eq!(Value::Blob(vec![0xca, 0xfe]).to_string(), "cafe");
	}

	#[test]
	fn test_accessors() {
		assert_eq!(Value::Integer(7).as_i64(), Some(7));
		assert_eq!(Value::Real(7.0).as_i64(), Some(7));
		assert_eq!(Value::Real(7.5).as_i64(), None);
		assert_eq!(Value::text("12").as_i64(), Some(12));
		assert_eq!(Value::Integer(2).as_f64(), Some(2.0));
		assert_eq!(Value::text("world").as_str(), Some("world"));
		assert_eq!(Value::Integer(1).as_str(), None);
		assert!(Value::Real(1.5).is_numeric());
		assert!(!Value::text("1.5").is_numeric());
		assert!(Value::Null.is_null());
	}

	#[test]
	fn test_serde() {
		let json = serde_json::to_string(&Value::Integer(3)).unwrap();
		assert_eq!(json, r#"{"Integer":3}"#);
		let value: Value = serde_json::from_str(r#"{"Text":"abc"}"#).unwrap();
		assert_eq!(value, Value::text("abc"));
	}
}
