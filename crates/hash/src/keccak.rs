// Copyright 2024-2025 Irreducible Inc.

//! Keccak sponge that exposes the whole 1600-bit state instead of a truncated digest.
//!
//! This is the original Keccak submission padding (`0x01 .. 0x80`), not the SHA-3 domain
//! separated one, with a rate of 136 bytes. The first 32 bytes of [`KeccakState::absorb`] are
//! therefore exactly Keccak-256 of the input.

use bytemuck::must_cast;
use tiny_keccak::keccakf;

/// Size of the Keccak-f\[1600\] state in bytes.
pub const STATE_BYTES: usize = 200;
/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;
/// Sponge rate in bytes.
pub const RATE_BYTES: usize = 136;

/// The 200-byte Keccak-f\[1600\] state.
///
/// Bytes are kept in the little-endian lane order of the reference implementation so that byte
/// offsets into the state are platform independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeccakState([u8; STATE_BYTES]);

impl Default for KeccakState {
	fn default() -> Self {
		Self([0; STATE_BYTES])
	}
}

impl KeccakState {
	/// Absorbs `input` into a fresh state and returns the state after the last permutation.
	pub fn absorb(input: &[u8]) -> Self {
		let mut state = Self::default();

		let mut blocks = input.chunks_exact(RATE_BYTES);
		for block in &mut blocks {
			state.xor_rate(block);
			state.permute();
		}

		// The final block is always present, even when the input length is a multiple of the
		// rate; it may carry nothing but padding.
		let tail = blocks.remainder();
		let mut last = [0u8; RATE_BYTES];
		last[..tail.len()].copy_from_slice(tail);
		last[tail.len()] = 0x01;
		last[RATE_BYTES - 1] |= 0x80;
		state.xor_rate(&last);
		state.permute();

		state
	}

	/// Applies Keccak-f\[1600\] (24 rounds) in place.
	pub fn permute(&mut self) {
		let mut lanes: [u64; LANES] = must_cast::<_, [u64; LANES]>(self.0).map(u64::from_le);
		keccakf(&mut lanes);
		self.0 = must_cast(lanes.map(u64::to_le));
	}

	/// Returns lane `index` as a little-endian 64-bit word.
	///
	/// # Panics
	///
	/// Panics if `index >= 25`.
	#[inline]
	pub fn lane(&self, index: usize) -> u64 {
		let mut lane = [0u8; 8];
		lane.copy_from_slice(&self.0[index * 8..index * 8 + 8]);
		u64::from_le_bytes(lane)
	}

	pub fn as_bytes(&self) -> &[u8; STATE_BYTES] {
		&self.0
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8; STATE_BYTES] {
		&mut self.0
	}

	fn xor_rate(&mut self, block: &[u8]) {
		debug_assert_eq!(block.len(), RATE_BYTES);
		for (dst, src) in self.0[..RATE_BYTES].iter_mut().zip(block) {
			*dst ^= src;
		}
	}
}

impl From<[u8; STATE_BYTES]> for KeccakState {
	fn from(bytes: [u8; STATE_BYTES]) -> Self {
		Self(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hex_literal::hex;
	use proptest::prelude::*;
	use tiny_keccak::{Hasher, Keccak};

	fn keccak256(input: &[u8]) -> [u8; 32] {
		let mut hasher = Keccak::v256();
		hasher.update(input);
		let mut out = [0u8; 32];
		hasher.finalize(&mut out);
		out
	}

	#[test]
	fn test_empty_input_prefix_is_keccak256() {
		let state = KeccakState::absorb(b"");
		assert_eq!(
			&state.as_bytes()[..32],
			&hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")[..]
		);
	}

	#[test]
	fn test_rate_boundaries() {
		for len in [RATE_BYTES - 1, RATE_BYTES, RATE_BYTES + 1, 2 * RATE_BYTES] {
			let input = vec![0x5a; len];
			assert_eq!(&KeccakState::absorb(&input).as_bytes()[..32], &keccak256(&input)[..]);
		}
	}

	#[test]
	fn test_lane_is_little_endian() {
		let mut bytes = [0u8; STATE_BYTES];
		bytes[8..16].copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
		let state = KeccakState::from(bytes);
		assert_eq!(state.lane(1), 0x0807_0605_0403_0201);
		assert_eq!(state.lane(0), 0);
	}

	#[test]
	fn test_permute_matches_tiny_keccak() {
		let mut state = KeccakState::absorb(b"The quick brown fox jumps over the lazy dog");
		let mut lanes: [u64; LANES] = std::array::from_fn(|i| state.lane(i));
		keccakf(&mut lanes);
		state.permute();
		for (i, lane) in lanes.iter().enumerate() {
			assert_eq!(state.lane(i), *lane);
		}
	}

	proptest! {
		#[test]
		fn test_absorb_prefix_vs_keccak256(input in prop::collection::vec(any::<u8>(), 0..=600)) {
			let state = KeccakState::absorb(&input);
			let expected = keccak256(&input);
			prop_assert_eq!(&state.as_bytes()[..32], &expected[..]);
		}
	}
}
