// Copyright 2024-2025 Irreducible Inc.

use std::fmt;

use cryptonight_utils::env::boolean_env_flag_set;

use crate::{
	aes::{Accelerated, AesRound, Portable},
	tweak::{integer_sqrt_fp64, integer_sqrt_reference},
};

/// Environment flag that selects [`Backend::Reference`] in [`Backend::from_env`].
pub const REFERENCE_BACKEND_ENV: &str = "CRYPTONIGHT_REFERENCE_BACKEND";

/// Implementation strategy of a hash.
///
/// Both backends produce identical digests for every input and variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
	/// Byte-wise AES and a bit-by-bit integer square root. Slow, easy to audit.
	Reference,
	/// The fastest AES round available on the target and a floating point square root with an
	/// exact integer correction.
	#[default]
	Optimized,
}

impl Backend {
	/// [`Backend::Reference`] if `CRYPTONIGHT_REFERENCE_BACKEND` is set, otherwise the default.
	pub fn from_env() -> Self {
		if boolean_env_flag_set(REFERENCE_BACKEND_ENV) {
			Self::Reference
		} else {
			Self::default()
		}
	}
}

impl fmt::Display for Backend {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Reference => f.write_str("reference"),
			Self::Optimized => f.write_str("optimized"),
		}
	}
}

/// The primitives a backend contributes to the engine, which is monomorphised over them.
pub(crate) trait HashBackend {
	type Aes: AesRound;

	/// `floor(sqrt(2^64 + n) * 2) - 2^33`.
	fn isqrt(n: u64) -> u64;
}

pub(crate) struct ReferenceBackend;

impl HashBackend for ReferenceBackend {
	type Aes = Portable;

	#[inline]
	fn isqrt(n: u64) -> u64 {
		integer_sqrt_reference(n)
	}
}

pub(crate) struct OptimizedBackend;

impl HashBackend for OptimizedBackend {
	type Aes = Accelerated;

	#[inline]
	fn isqrt(n: u64) -> u64 {
		integer_sqrt_fp64(n)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_is_optimized() {
		assert_eq!(Backend::default(), Backend::Optimized);
		assert_eq!(Backend::Reference.to_string(), "reference");
	}
}
