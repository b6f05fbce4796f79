// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: registry.rs
// Author: rustdigest maintainers

//! Registry definitions for digest algorithms, including factory dispatch
//! and metadata shared by the CLI and the digest engine.

use digest::DynDigest;
use sha1::Sha1;
use sha2::{Digest, Sha256};
use strum::EnumIter;

use super::error::DigestError;

/// Capability identifier for a supported digest algorithm.
#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter)]
pub enum DigestAlgorithm {
	Sha1,
	Sha256,
}

impl DigestAlgorithm {
	pub fn descriptor(self) -> &'static AlgorithmDescriptor {
		descriptor(self)
	}

	pub fn output_length(self) -> usize {
		self.descriptor().output_length
	}

	pub fn display_name(self) -> &'static str {
		self.descriptor().display_name
	}
}

impl std::fmt::Display for DigestAlgorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.descriptor().display_name)
	}
}

pub type ProviderConstructor =
	fn() -> Result<Box<dyn DynDigest>, DigestError>;

/// Static catalog row describing one selectable algorithm.
#[derive(Clone, Copy, Debug)]
pub struct AlgorithmDescriptor {
	pub algorithm: DigestAlgorithm,
	pub identifier: &'static str,
	pub display_name: &'static str,
	pub output_length: usize,
	pub constructor: ProviderConstructor,
}

const SHA1_DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
	algorithm: DigestAlgorithm::Sha1,
	identifier: "SHA1",
	display_name: "SHA-1",
	output_length: 20,
	constructor: create_sha1,
};

const SHA256_DESCRIPTOR: AlgorithmDescriptor = AlgorithmDescriptor {
	algorithm: DigestAlgorithm::Sha256,
	identifier: "SHA256",
	display_name: "SHA-256",
	output_length: 32,
	constructor: create_sha256,
};

pub fn catalog() -> &'static [AlgorithmDescriptor] {
	const ALGORITHMS: &[AlgorithmDescriptor] =
		&[SHA1_DESCRIPTOR, SHA256_DESCRIPTOR];
	ALGORITHMS
}

/// Selector lookup. Exact and case-sensitive; callers surface a miss as
/// an `UnknownAlgorithm` error.
pub fn find_algorithm(
	identifier: &str,
) -> Option<&'static AlgorithmDescriptor> {
	catalog()
		.iter()
		.find(|entry| entry.identifier == identifier)
}

pub fn descriptor(
	algorithm: DigestAlgorithm,
) -> &'static AlgorithmDescriptor {
	match algorithm {
		DigestAlgorithm::Sha1 => &SHA1_DESCRIPTOR,
		DigestAlgorithm::Sha256 => &SHA256_DESCRIPTOR,
	}
}

fn create_sha1() -> Result<Box<dyn DynDigest>, DigestError> {
	Ok(Box::new(Sha1::new()))
}

fn create_sha256() -> Result<Box<dyn DynDigest>, DigestError> {
	Ok(Box::new(Sha256::new()))
}
