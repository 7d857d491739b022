// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex encoding without prefix.
pub fn encode(bytes: &[u8]) -> String {
	let mut result = String::with_capacity(bytes.len() * 2);
	for &byte in bytes {
		result.push(HEX_CHARS[(byte >> 4) as usize] as char);
		result.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
	}
	result
}
