// Copyright 2024-2025 Irreducible Inc.

//! The four standard hash functions a scratchpad hash finishes with.
//!
//! The choice between them is made by the low two bits of the first state byte after the final
//! permutation, and the chosen function digests the entire 200-byte state.

use std::fmt;

use blake_hash::Blake256;
use groestl_crypto::Groestl256;
use jh::Jh256;
use skein::{consts::U32, Skein512};

/// Size in bytes of every finalizer output.
pub const DIGEST_BYTES: usize = 32;

/// One of the finalization hash functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalHash {
	/// BLAKE-256 (the SHA-3 finalist, not BLAKE2).
	Blake256,
	/// Grøstl-256.
	Groestl256,
	/// JH-256.
	Jh256,
	/// Skein-512 with a 256-bit output.
	Skein256,
}

impl FinalHash {
	pub const ALL: [Self; 4] = [Self::Blake256, Self::Groestl256, Self::Jh256, Self::Skein256];

	/// Picks the function addressed by the low two bits of `selector`.
	#[inline]
	pub const fn select(selector: u8) -> Self {
		match selector & 3 {
			0 => Self::Blake256,
			1 => Self::Groestl256,
			2 => Self::Jh256,
			3 => Self::Skein256,
			_ => unreachable!(),
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Self::Blake256 => "blake-256",
			Self::Groestl256 => "groestl-256",
			Self::Jh256 => "jh-256",
			Self::Skein256 => "skein-512-256",
		}
	}

	/// Hashes `data` with the selected function.
	pub fn digest(self, data: &[u8]) -> [u8; DIGEST_BYTES] {
		let mut out = [0u8; DIGEST_BYTES];
		match self {
			Self::Blake256 => {
				use blake_hash::Digest;
				out.copy_from_slice(&Blake256::digest(data));
			}
			Self::Groestl256 => {
				use groestl_crypto::Digest;
				out.copy_from_slice(&Groestl256::digest(data));
			}
			Self::Jh256 => {
				use jh::Digest;
				out.copy_from_slice(&Jh256::digest(data));
			}
			Self::Skein256 => {
				use skein::Digest;
				out.copy_from_slice(&Skein512::<U32>::digest(data));
			}
		}
		out
	}
}

impl fmt::Display for FinalHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;

	#[test]
	fn test_select_uses_low_bits_only() {
		for selector in 0..=u8::MAX {
			assert_eq!(FinalHash::select(selector), FinalHash::ALL[(selector & 3) as usize]);
		}
	}

	#[test]
	fn test_blake256_empty() {
		assert_eq!(
			FinalHash::Blake256.digest(b""),
			hex!("716f6e863f744b9ac22c97ec7b76ea5f5908bc5b2f67c61510bfc4751384ea7a")
		);
	}

	#[test]
	fn test_groestl256_empty() {
		assert_eq!(
			FinalHash::Groestl256.digest(b""),
			hex!("1a52d11d550039be16107f9c58db9ebcc417f16f736adb2502567119f0083467")
		);
	}

	#[test]
	fn test_functions_are_distinct() {
		let state = [0x42u8; 200];
		let digests = FinalHash::ALL.map(|f| f.digest(&state));
		for (i, a) in digests.iter().enumerate() {
			for b in &digests[i + 1..] {
				assert_ne!(a, b);
			}
		}
	}
}
