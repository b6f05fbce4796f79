// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: lib.rs
// Author: rustdigest maintainers

pub mod rdg {
	pub mod app;
	pub mod cli;
	pub mod digest;
	pub mod output;
}
