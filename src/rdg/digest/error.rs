// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: error.rs
// Author: rustdigest maintainers

//! Error taxonomy for the digest engine. Provider and resource failures
//! abort the current computation only; selector failures are user errors.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestErrorKind {
	ContextAllocation,
	AlgorithmInit,
	Update,
	Finalize,
	UnknownAlgorithm,
}

#[derive(Debug)]
pub struct DigestError {
	kind: DigestErrorKind,
	message: Cow<'static, str>,
}

impl DigestError {
	pub fn new(
		kind: DigestErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn unknown_algorithm(selector: &str) -> Self {
		Self::new(
			DigestErrorKind::UnknownAlgorithm,
			format!("unknown digest algorithm `{}`", selector),
		)
	}

	pub fn kind(&self) -> DigestErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for DigestError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for DigestError {}
