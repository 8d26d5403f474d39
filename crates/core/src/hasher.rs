// Copyright 2024-2025 Irreducible Inc.

use crate::{
	backend::{Backend, OptimizedBackend, ReferenceBackend},
	digest::Digest,
	engine,
	error::Error,
	scratchpad::Scratchpad,
	variant::Variant,
};

/// Hashes `input`, allocating a fresh scratchpad for the call.
pub fn hash(input: &[u8], variant: Variant, backend: Backend) -> Result<Digest, Error> {
	let mut scratchpad = Scratchpad::new(variant);
	hash_with_scratchpad(input, variant, backend, &mut scratchpad)
}

/// Hashes `input` using a caller-owned scratchpad.
///
/// The scratchpad must have been created for a variant with the same scratchpad size; its
/// previous contents are irrelevant.
pub fn hash_with_scratchpad(
	input: &[u8],
	variant: Variant,
	backend: Backend,
	scratchpad: &mut Scratchpad,
) -> Result<Digest, Error> {
	match backend {
		Backend::Reference => engine::hash::<ReferenceBackend>(input, variant, scratchpad),
		Backend::Optimized => engine::hash::<OptimizedBackend>(input, variant, scratchpad),
	}
}

/// A hash variant bound to a backend.
///
/// ```
/// use cryptonight_core::{Backend, CryptoNight, Variant};
///
/// let hasher = CryptoNight::new(Variant::TurtleV2).with_backend(Backend::Reference);
/// let digest = hasher.hash(b"").unwrap();
/// assert_eq!(
/// 	digest.to_string(),
/// 	"16cba4f89786b8aa785a4085f529f757296402aca4edbaefc1470bc691071ed9"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoNight {
	variant: Variant,
	backend: Backend,
}

impl CryptoNight {
	pub fn new(variant: Variant) -> Self {
		Self {
			variant,
			backend: Backend::default(),
		}
	}

	pub fn with_backend(self, backend: Backend) -> Self {
		Self { backend, ..self }
	}

	pub fn variant(&self) -> Variant {
		self.variant
	}

	pub fn backend(&self) -> Backend {
		self.backend
	}

	/// Allocates a scratchpad this hasher accepts.
	pub fn new_scratchpad(&self) -> Scratchpad {
		Scratchpad::new(self.variant)
	}

	pub fn hash(&self, input: &[u8]) -> Result<Digest, Error> {
		hash(input, self.variant, self.backend)
	}

	pub fn hash_with(&self, input: &[u8], scratchpad: &mut Scratchpad) -> Result<Digest, Error> {
		hash_with_scratchpad(input, self.variant, self.backend, scratchpad)
	}
}
