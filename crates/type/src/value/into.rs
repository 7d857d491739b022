// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Value;

macro_rules! impl_from_integer {
	($($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(value: $t) -> Self {
					Value::Integer(value as i64)
				}
			}
		)*
	};
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Value::Real(value as f64)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Real(value)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Integer(value as i64)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Text(value.to_string())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Text(value)
	}
}

impl From<&String> for Value {
	fn from(value: &String) -> Self {
		Value::Text(value.clone())
	}
}

impl From<Vec<u8>> for Value {
	fn from(value: Vec<u8>) -> Self {
		Value::Blob(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Value::Null,
		}
	}
}
