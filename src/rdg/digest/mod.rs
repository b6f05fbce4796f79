// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: src/rdg/digest/mod.rs
// Author: rustdigest maintainers
//
// Digest engine: algorithm registry, context lifecycle and the one-shot
// computation entry point used by the CLI.

pub mod context;
pub mod error;
pub mod registry;

pub use context::{DigestContext, DigestResult, Phase};
pub use error::{DigestError, DigestErrorKind};
pub use registry::{
	catalog, descriptor, find_algorithm, AlgorithmDescriptor,
	DigestAlgorithm, ProviderConstructor,
};

/// Run one complete digest lifecycle over `text`.
///
/// Every call creates, initializes, updates and finalizes its own
/// context, so consecutive computations within one process share no
/// state.
pub fn compute(
	algorithm: DigestAlgorithm,
	text: &str,
) -> Result<DigestResult, DigestError> {
	let mut context = DigestContext::create(algorithm)?;
	context.initialize()?;
	context.update(text.as_bytes())?;
	context.finalize()
}

/// Resolve a selector token and run one computation with it.
pub fn compute_with_selector(
	selector: &str,
	text: &str,
) -> Result<DigestResult, DigestError> {
	let descriptor = find_algorithm(selector)
		.ok_or_else(|| DigestError::unknown_algorithm(selector))?;
	compute(descriptor.algorithm, text)
}
