// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: output.rs
// Author: rustdigest maintainers

//! Hex rendering of digest results.

use super::digest::DigestResult;

/// Render bytes as paired lowercase hex digits, no separators, no
/// prefix. Total for any byte sequence; the output is always twice as
/// long as the input.
pub fn render_hex(bytes: &[u8]) -> String {
	hex::encode(bytes)
}

/// Format the per-computation output line, e.g. `SHA-256: <64 hex>`.
pub fn digest_line(result: &DigestResult) -> String {
	format!(
		"{}: {}",
		result.display_name(),
		render_hex(result.as_bytes())
	)
}
