// SPDX-License-Identifier: MIT OR Apache-2.0

use rustdigest::rdg::app::execute;

fn args(list: &[&str]) -> Vec<String> {
	list.iter().map(|s| s.to_string()).collect()
}

const HELLO_SHA256: &str =
	"SHA-256: 2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824";
const HELLO_SHA1: &str =
	"SHA-1: aaf4c61ddcc5e8a2dabede0f3b482cd9aea9434d";

#[test]
fn sha256_flag_prints_labelled_digest() {
	let report = execute("rdg", &args(&["-a", "hello"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(report.lines, vec![HELLO_SHA256.to_string()]);
	assert!(report.errors.is_empty());
}

#[test]
fn sha1_flag_prints_labelled_digest() {
	let report = execute("rdg", &args(&["-b", "hello"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(report.lines, vec![HELLO_SHA1.to_string()]);
	assert!(report.errors.is_empty());
}

#[test]
fn repeated_flags_dispatch_in_scan_order() {
	let report = execute(
		"rdg",
		&args(&["-b", "hello", "-a", "hello", "-b", "hello"]),
	);
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![
			HELLO_SHA1.to_string(),
			HELLO_SHA256.to_string(),
			HELLO_SHA1.to_string(),
		]
	);
}

#[test]
fn attached_operands_bind_to_their_flag() {
	let report = execute("rdg", &args(&["-ahello", "-bhello"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![HELLO_SHA256.to_string(), HELLO_SHA1.to_string()]
	);
}

#[test]
fn empty_text_operand_hashes_the_empty_string() {
	let report = execute("rdg", &args(&["-a", ""]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![
			"SHA-256: e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
				.to_string()
		]
	);
}

#[test]
fn unknown_option_is_reported_and_non_fatal() {
	let report = execute("rdg", &args(&["-x", "-a", "hello"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![
			"Unknown option".to_string(),
			HELLO_SHA256.to_string(),
		]
	);
}

#[test]
fn unknown_option_alone_produces_no_digest_line() {
	let report = execute("rdg", &args(&["-x", "foo"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(report.lines, vec!["Unknown option".to_string()]);
	assert!(report.errors.is_empty());
}

#[test]
fn unknown_cluster_member_is_reported_before_the_valid_flag() {
	let report = execute("rdg", &args(&["-xa", "hello"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![
			"Unknown option".to_string(),
			HELLO_SHA256.to_string(),
		]
	);
}

#[test]
fn trailing_flag_without_operand_is_skipped() {
	let report = execute("rdg", &args(&["-a", "hello", "-b"]));
	assert_eq!(report.exit_code, 0);
	assert_eq!(
		report.lines,
		vec![
			HELLO_SHA256.to_string(),
			"Option -b requires a text operand".to_string(),
		]
	);
}

#[test]
fn double_dash_ends_option_scanning() {
	let report = execute("rdg", &args(&["--", "-a"]));
	assert_eq!(report.exit_code, 0);
	assert!(report.lines.is_empty());
	assert!(report.errors.is_empty());
}

#[test]
fn no_arguments_prints_usage_and_fails() {
	let report = execute("rdg", &[]);
	assert_eq!(report.exit_code, 1);
	assert_eq!(
		report.lines,
		vec!["Usage: rdg -a <text> or -b <text>".to_string()]
	);
}

#[test]
fn single_argument_prints_usage_and_fails() {
	let report = execute("rdg", &args(&["-a"]));
	assert_eq!(report.exit_code, 1);
	assert_eq!(
		report.lines,
		vec!["Usage: rdg -a <text> or -b <text>".to_string()]
	);
}

#[test]
fn bare_operands_are_ignored() {
	let report = execute("rdg", &args(&["hello", "world"]));
	assert_eq!(report.exit_code, 0);
	assert!(report.lines.is_empty());
	assert!(report.errors.is_empty());
}
