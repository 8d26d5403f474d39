// Copyright 2024-2025 Irreducible Inc.

//! AES building blocks of the scratchpad hash.
//!
//! The hash never runs textbook AES. It uses two primitives built from full encryption rounds
//! (SubBytes, ShiftRows, MixColumns, AddRoundKey, i.e. the `AESENC` instruction):
//!
//! * a single round keyed by a data-dependent register, inside the mixing loop, and
//! * ten consecutive rounds keyed by the first ten AES-256 round keys, with neither an initial
//!   whitening key nor a shortened last round, to fill and to re-absorb the scratchpad.

use cfg_if::cfg_if;

mod portable;
mod tables;

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "aes"))] {
		mod x86_64;
		pub use x86_64::AesNi as Accelerated;
	} else {
		pub use tables::Tables as Accelerated;
	}
}

pub use portable::Portable;
pub use tables::Tables;

/// AES block size in bytes.
pub const BLOCK_BYTES: usize = 16;
/// Number of rounds applied by [`AesRound::pseudo_rounds`].
pub const PSEUDO_ROUNDS: usize = 10;
/// Size in bytes of the keys the round keys are expanded from.
pub const KEY_BYTES: usize = 32;

/// One 128-bit AES state, column-major as in FIPS-197.
pub type Block = [u8; BLOCK_BYTES];

/// The AES S-box.
pub(crate) const SBOX: [u8; 256] = sbox();

/// Multiplication by `x` in GF(2^8) modulo the AES polynomial.
#[inline(always)]
pub(crate) const fn xtime(b: u8) -> u8 {
	(b << 1) ^ if b & 0x80 != 0 { 0x1b } else { 0 }
}

const fn sbox() -> [u8; 256] {
	// Powers of the generator 3 give log/antilog tables, from which inverses follow.
	let mut exp = [0u8; 256];
	let mut log = [0u8; 256];
	let mut x = 1u8;
	let mut i = 0;
	while i < 255 {
		exp[i] = x;
		log[x as usize] = i as u8;
		x ^= xtime(x);
		i += 1;
	}

	let mut sbox = [0u8; 256];
	let mut i = 0;
	while i < 256 {
		let inv = if i == 0 {
			0
		} else {
			exp[(255 - log[i] as usize) % 255]
		};
		sbox[i] = inv
			^ inv.rotate_left(1)
			^ inv.rotate_left(2)
			^ inv.rotate_left(3)
			^ inv.rotate_left(4)
			^ 0x63;
		i += 1;
	}
	sbox
}

/// An implementation of the AES encryption round.
///
/// All implementations must be bit-for-bit interchangeable; the hash backends only differ in
/// which one they plug in.
pub trait AesRound {
	/// Applies one full encryption round to `block` with `key` as the round key.
	fn round(block: &mut Block, key: &Block);

	/// Applies one full round per round key, in order.
	#[inline]
	fn pseudo_rounds(block: &mut Block, keys: &RoundKeys) {
		for key in keys.as_blocks() {
			Self::round(block, key);
		}
	}
}

/// The first ten round keys of the AES-256 key schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundKeys([Block; PSEUDO_ROUNDS]);

impl RoundKeys {
	/// Runs the AES-256 key expansion on `key` until ten round keys are available.
	pub fn expand(key: &[u8; KEY_BYTES]) -> Self {
		const KEY_WORDS: usize = KEY_BYTES / 4;
		const WORDS: usize = PSEUDO_ROUNDS * BLOCK_BYTES / 4;

		let mut words = [[0u8; 4]; WORDS];
		for (word, chunk) in words.iter_mut().zip(key.chunks_exact(4)) {
			word.copy_from_slice(chunk);
		}

		let mut rcon = 1u8;
		for i in KEY_WORDS..WORDS {
			let mut temp = words[i - 1];
			if i % KEY_WORDS == 0 {
				temp.rotate_left(1);
				temp = temp.map(|b| SBOX[b as usize]);
				temp[0] ^= rcon;
				rcon = xtime(rcon);
			} else if i % KEY_WORDS == 4 {
				temp = temp.map(|b| SBOX[b as usize]);
			}
			let prev = words[i - KEY_WORDS];
			words[i] = std::array::from_fn(|k| prev[k] ^ temp[k]);
		}

		let mut keys = [[0u8; BLOCK_BYTES]; PSEUDO_ROUNDS];
		for (key, quad) in keys.iter_mut().zip(words.chunks_exact(4)) {
			for (dst, word) in key.chunks_exact_mut(4).zip(quad) {
				dst.copy_from_slice(word);
			}
		}
		Self(keys)
	}

	pub fn as_blocks(&self) -> &[Block; PSEUDO_ROUNDS] {
		&self.0
	}
}

#[inline(always)]
pub(crate) fn xor_block(dst: &mut Block, src: &Block) {
	for (d, s) in dst.iter_mut().zip(src) {
		*d ^= s;
	}
}
