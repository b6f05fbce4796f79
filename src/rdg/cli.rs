// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: cli.rs
// Author: rustdigest maintainers

//! Getopt-compatible scanning of digest requests from process
//! arguments. Scanning produces an ordered event list instead of
//! dispatching in place, so parsing order and computation stay
//! decoupled while the output order of the original tool is preserved.

use super::digest::DigestAlgorithm;

/// One digest computation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestRequest {
	pub algorithm: DigestAlgorithm,
	pub text: String,
}

/// Ordered outcome of scanning one argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliEvent {
	Request(DigestRequest),
	UnknownOption(char),
	MissingOperand(char),
}

const FLAG_BINDINGS: &[(char, DigestAlgorithm)] = &[
	('a', DigestAlgorithm::Sha256),
	('b', DigestAlgorithm::Sha1),
];

pub fn usage(program: &str) -> String {
	format!("Usage: {} -a <text> or -b <text>", program)
}

fn algorithm_for_flag(flag: char) -> Option<DigestAlgorithm> {
	FLAG_BINDINGS
		.iter()
		.find(|(candidate, _)| *candidate == flag)
		.map(|(_, algorithm)| *algorithm)
}

/// Scan `args` (program name excluded) into an ordered event list.
///
/// A flag's operand is the remainder of its own token when non-empty,
/// otherwise the next argument. `--` ends option scanning and bare
/// operands are skipped. Unknown flag characters are reported per
/// character within a cluster, as getopt does.
pub fn scan(args: &[String]) -> Vec<CliEvent> {
	let mut events = Vec::new();
	let mut index = 0;

	while index < args.len() {
		let token = &args[index];
		index += 1;

		if token == "--" {
			break;
		}
		if !token.starts_with('-') || token.len() == 1 {
			continue;
		}

		let mut chars = token[1..].chars();
		while let Some(flag) = chars.next() {
			let algorithm = match algorithm_for_flag(flag) {
				Some(algorithm) => algorithm,
				None => {
					events.push(CliEvent::UnknownOption(flag));
					continue;
				}
			};

			let attached = chars.as_str();
			let text = if !attached.is_empty() {
				attached.to_string()
			} else if index < args.len() {
				let operand = args[index].clone();
				index += 1;
				operand
			} else {
				events.push(CliEvent::MissingOperand(flag));
				break;
			};

			events.push(CliEvent::Request(DigestRequest {
				algorithm,
				text,
			}));
			break;
		}
	}

	events
}
