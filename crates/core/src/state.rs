// Copyright 2024-2025 Irreducible Inc.

//! The permutation state as seen by the scratchpad engine.

use cryptonight_hash::{FinalHash, KeccakState, DIGEST_BYTES};
use cryptonight_utils::ensure;
use tracing::trace;

use crate::{
	aes::{Block, BLOCK_BYTES, KEY_BYTES},
	error::Error,
	variant::{Variant, INIT_BLOCKS, INIT_BYTES},
};

const FILL_KEY: usize = 0;
const ABSORB_KEY: usize = 32;
const TEXT: usize = 64;

/// The 200-byte Keccak state together with the byte regions the engine reads from it.
///
/// | bytes      | use                                              |
/// |------------|--------------------------------------------------|
/// | `0..32`    | key of the fill round keys                       |
/// | `32..64`   | key of the absorb round keys                     |
/// | `0..64`    | initial `a` and `b` registers                    |
/// | `64..96`   | second `b` register (division/sqrt tweak)        |
/// | `96..112`  | initial division and square root registers       |
/// | `64..192`  | the eight "text" blocks the scratchpad grows from |
/// | `192..200` | byte-xor tweak seed                              |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationState(KeccakState);

impl PermutationState {
	/// Checks the minimum input length of `variant` and absorbs `input`.
	///
	/// The length gate runs before any absorption.
	pub fn expand(input: &[u8], variant: Variant) -> Result<Self, Error> {
		let spec = variant.spec();
		ensure!(
			spec.accepts_len(input.len()),
			Error::InvalidInput {
				variant,
				min_len: spec.min_input_len,
				len: input.len(),
			}
		);

		trace!(len = input.len(), "absorbing input");
		Ok(Self(KeccakState::absorb(input)))
	}

	pub fn fill_key(&self) -> &[u8; KEY_BYTES] {
		self.array(FILL_KEY)
	}

	pub fn absorb_key(&self) -> &[u8; KEY_BYTES] {
		self.array(ABSORB_KEY)
	}

	/// Returns the 16 bytes starting at `offset`.
	pub fn block(&self, offset: usize) -> Block {
		*self.array(offset)
	}

	/// Little-endian 64-bit lane `index`.
	pub fn lane(&self, index: usize) -> u64 {
		self.0.lane(index)
	}

	/// The eight blocks at bytes `64..192`.
	pub fn text(&self) -> [Block; INIT_BLOCKS] {
		std::array::from_fn(|i| self.block(TEXT + i * BLOCK_BYTES))
	}

	pub fn set_text(&mut self, text: &[Block; INIT_BLOCKS]) {
		let region = &mut self.0.as_bytes_mut()[TEXT..TEXT + INIT_BYTES];
		for (dst, block) in region.chunks_exact_mut(BLOCK_BYTES).zip(text) {
			dst.copy_from_slice(block);
		}
	}

	/// Permutes the state one last time and compresses it with the finalizer it selects.
	pub fn finalize(mut self) -> [u8; DIGEST_BYTES] {
		self.0.permute();
		let bytes = self.0.as_bytes();
		let function = FinalHash::select(bytes[0]);
		trace!(%function, "finalizing");
		function.digest(bytes)
	}

	pub fn as_bytes(&self) -> &[u8] {
		self.0.as_bytes()
	}

	fn array<const N: usize>(&self, offset: usize) -> &[u8; N] {
		self.0.as_bytes()[offset..offset + N]
			.try_into()
			.expect("region lies within the 200-byte state")
	}
}
