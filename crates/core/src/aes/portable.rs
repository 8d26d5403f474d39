// Copyright 2024-2025 Irreducible Inc.

use super::{xor_block, xtime, AesRound, Block, SBOX};

/// Byte-oriented AES round that follows FIPS-197 step by step.
///
/// Slow, but every step is spelled out, which makes it the reference the faster
/// implementations are tested against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Portable;

impl AesRound for Portable {
	fn round(block: &mut Block, key: &Block) {
		let substituted = (*block).map(|b| SBOX[b as usize]);

		// Row `r` of column `c` comes from column `c + r`.
		let shifted: Block = std::array::from_fn(|i| {
			let (col, row) = (i / 4, i % 4);
			substituted[row + 4 * ((col + row) % 4)]
		});

		for (out, col) in block.chunks_exact_mut(4).zip(shifted.chunks_exact(4)) {
			let all = col[0] ^ col[1] ^ col[2] ^ col[3];
			for row in 0..4 {
				out[row] = col[row] ^ all ^ xtime(col[row] ^ col[(row + 1) % 4]);
			}
		}

		xor_block(block, key);
	}
}
