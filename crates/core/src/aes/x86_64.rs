// Copyright 2024-2025 Irreducible Inc.

use std::arch::x86_64::{__m128i, _mm_aesenc_si128, _mm_loadu_si128, _mm_storeu_si128};

use super::{AesRound, Block, RoundKeys};

/// AES round on the AES-NI `AESENC` instruction.
///
/// Only compiled when the `aes` target feature is enabled at build time, so the intrinsics are
/// always available where this type exists.
#[derive(Debug, Clone, Copy, Default)]
pub struct AesNi;

#[inline(always)]
fn load(block: &Block) -> __m128i {
	// SAFETY: `block` is 16 readable bytes and the load is unaligned.
	unsafe { _mm_loadu_si128(block.as_ptr().cast()) }
}

#[inline(always)]
fn store(block: &mut Block, value: __m128i) {
	// SAFETY: `block` is 16 writable bytes and the store is unaligned.
	unsafe { _mm_storeu_si128(block.as_mut_ptr().cast(), value) }
}

#[inline(always)]
fn aesenc(value: __m128i, key: __m128i) -> __m128i {
	// SAFETY: the module is gated on `target_feature = "aes"`.
	unsafe { _mm_aesenc_si128(value, key) }
}

impl AesRound for AesNi {
	#[inline]
	fn round(block: &mut Block, key: &Block) {
		store(block, aesenc(load(block), load(key)));
	}

	#[inline]
	fn pseudo_rounds(block: &mut Block, keys: &RoundKeys) {
		let mut value = load(block);
		for key in keys.as_blocks() {
			value = aesenc(value, load(key));
		}
		store(block, value);
	}
}
