// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustdigest
// File: context.rs
// Author: rustdigest maintainers

//! Single-use digest computation contexts. A context passes through the
//! phases `Created → Initialized → Updated → Finalized` in strict order;
//! `finalize` consumes the context, and the provider state it owns is
//! dropped on every exit path exactly once.

use digest::DynDigest;

use super::error::{DigestError, DigestErrorKind};
use super::registry::{self, AlgorithmDescriptor, DigestAlgorithm};

/// Lifecycle phase of a digest computation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
	Created,
	Initialized,
	Updated,
	Finalized,
}

/// Mutable accumulator for one digest computation. Owned exclusively by
/// one caller; never reusable after `finalize`.
pub struct DigestContext {
	descriptor: &'static AlgorithmDescriptor,
	state: Option<Box<dyn DynDigest>>,
	phase: Phase,
}

impl DigestContext {
	/// Allocate provider state for `algorithm`.
	pub fn create(
		algorithm: DigestAlgorithm,
	) -> Result<Self, DigestError> {
		let descriptor = registry::descriptor(algorithm);
		let state = (descriptor.constructor)().map_err(|err| {
			DigestError::new(
				DigestErrorKind::ContextAllocation,
				format!(
					"cannot allocate {} provider state: {}",
					descriptor.display_name, err
				),
			)
		})?;
		Ok(Self {
			descriptor,
			state: Some(state),
			phase: Phase::Created,
		})
	}

	pub fn algorithm(&self) -> DigestAlgorithm {
		self.descriptor.algorithm
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	/// Bind the provider to the algorithm's initial state.
	pub fn initialize(&mut self) -> Result<(), DigestError> {
		if self.phase != Phase::Created {
			return Err(DigestError::new(
				DigestErrorKind::AlgorithmInit,
				format!(
					"cannot initialize a {} context in the {:?} phase",
					self.descriptor.display_name, self.phase
				),
			));
		}
		let state = self.state.as_mut().ok_or_else(|| {
			DigestError::new(
				DigestErrorKind::AlgorithmInit,
				"provider state is missing",
			)
		})?;
		if state.output_size() != self.descriptor.output_length {
			return Err(DigestError::new(
				DigestErrorKind::AlgorithmInit,
				format!(
					"provider rejected {}: output size {} does not match declared length {}",
					self.descriptor.display_name,
					state.output_size(),
					self.descriptor.output_length
				),
			));
		}
		state.reset();
		self.phase = Phase::Initialized;
		Ok(())
	}

	/// Feed `bytes` into the running computation. Legal zero or more
	/// times once initialized.
	pub fn update(
		&mut self,
		bytes: &[u8],
	) -> Result<(), DigestError> {
		if !matches!(self.phase, Phase::Initialized | Phase::Updated)
		{
			return Err(DigestError::new(
				DigestErrorKind::Update,
				format!(
					"cannot update a {} context in the {:?} phase",
					self.descriptor.display_name, self.phase
				),
			));
		}
		let state = self.state.as_mut().ok_or_else(|| {
			DigestError::new(
				DigestErrorKind::Update,
				"provider state is missing",
			)
		})?;
		state.update(bytes);
		self.phase = Phase::Updated;
		Ok(())
	}

	/// Produce the digest and retire the context.
	pub fn finalize(mut self) -> Result<DigestResult, DigestError> {
		if !matches!(self.phase, Phase::Initialized | Phase::Updated)
		{
			return Err(DigestError::new(
				DigestErrorKind::Finalize,
				format!(
					"cannot finalize a {} context in the {:?} phase",
					self.descriptor.display_name, self.phase
				),
			));
		}
		let state = self.state.take().ok_or_else(|| {
			DigestError::new(
				DigestErrorKind::Finalize,
				"provider state is missing",
			)
		})?;
		self.phase = Phase::Finalized;
		let bytes = state.finalize().to_vec();
		if bytes.len() != self.descriptor.output_length {
			return Err(DigestError::new(
				DigestErrorKind::Finalize,
				format!(
					"provider produced {} bytes for {}, expected {}",
					bytes.len(),
					self.descriptor.display_name,
					self.descriptor.output_length
				),
			));
		}
		Ok(DigestResult {
			descriptor: self.descriptor,
			bytes,
		})
	}
}

/// Owned, fixed-length digest output plus the algorithm that produced it.
#[derive(Clone, Debug)]
pub struct DigestResult {
	descriptor: &'static AlgorithmDescriptor,
	bytes: Vec<u8>,
}

impl DigestResult {
	pub fn algorithm(&self) -> DigestAlgorithm {
		self.descriptor.algorithm
	}

	pub fn display_name(&self) -> &'static str {
		self.descriptor.display_name
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.bytes
	}

	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}
