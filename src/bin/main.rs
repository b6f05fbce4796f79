// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: main.rs
// Author: rustdigest maintainers

use rustdigest::rdg::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
