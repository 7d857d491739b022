// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use super::Value;

impl Value {
	/// Tags text that arrived untyped.
	///
	/// Integers win over reals so counters keep their exact form. Parsing
	/// uses Rust's own number grammar, which always takes `.` as the decimal
	/// point. Non-finite results (`NaN`, `inf`) and padded input stay text.
	pub fn infer(raw: &str) -> Value {
		if let Ok(value) = raw.parse::<i64>() {
			return Value::Integer(value);
		}

		match raw.parse::<f64>() {
			Ok(value) if value.is_finite() => Value::Real(value),
			_ => Value::Text(raw.to_string()),
		}
	}
}
