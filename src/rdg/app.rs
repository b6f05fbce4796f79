// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: app.rs
// Author: rustdigest maintainers

//! Invocation driver: argument count check, event dispatch and report
//! printing. `execute` builds the full report without touching the
//! process environment so invocation behavior stays testable.

use std::error::Error;

use super::cli::{self, CliEvent};
use super::digest::{self, DigestError};
use super::output;

/// Everything one invocation prints, split by stream. `lines` goes to
/// stdout, `errors` to stderr.
#[derive(Debug, Default)]
pub struct RunReport {
	pub lines: Vec<String>,
	pub errors: Vec<String>,
	pub exit_code: i32,
}

/// Build the report for one invocation. `args` excludes the program
/// name; fewer than two of them is the usage error.
pub fn execute(program: &str, args: &[String]) -> RunReport {
	let mut report = RunReport::default();

	if args.len() < 2 {
		report.lines.push(cli::usage(program));
		report.exit_code = 1;
		return report;
	}

	for event in cli::scan(args) {
		match event {
			CliEvent::Request(request) => {
				match digest::compute(
					request.algorithm,
					&request.text,
				) {
					Ok(result) => report
						.lines
						.push(output::digest_line(&result)),
					Err(err) => {
						report.errors.push(describe_failure(&err))
					}
				}
			}
			CliEvent::UnknownOption(_) => {
				report.lines.push("Unknown option".to_string());
			}
			CliEvent::MissingOperand(flag) => {
				report.lines.push(format!(
					"Option -{} requires a text operand",
					flag
				));
			}
		}
	}

	report
}

fn describe_failure(err: &DigestError) -> String {
	format!("error: {}", err)
}

/// Parse process arguments, print the report and surface the exit
/// code. Provider failures and unknown options are non-fatal; only the
/// usage error exits nonzero.
pub fn run() -> Result<(), Box<dyn Error>> {
	let mut args = std::env::args();
	let program =
		args.next().unwrap_or_else(|| String::from("rdg"));
	let args: Vec<String> = args.collect();

	let report = execute(&program, &args);
	for line in &report.lines {
		println!("{}", line);
	}
	for error in &report.errors {
		eprintln!("{}", error);
	}
	if report.exit_code != 0 {
		std::process::exit(report.exit_code);
	}
	Ok(())
}
