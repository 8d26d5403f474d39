// Copyright 2024-2025 Irreducible Inc.

use super::{xtime, AesRound, Block, SBOX};

/// Encryption T-tables: `TE[r][x]` is the MixColumns contribution of S-box output `SBOX[x]`
/// sitting in row `r`, packed little-endian into one column word.
static TE: [[u32; 256]; 4] = te_tables();

const fn te_tables() -> [[u32; 256]; 4] {
	let mut tables = [[0u32; 256]; 4];
	let mut x = 0;
	while x < 256 {
		let s = SBOX[x];
		let s2 = xtime(s);
		let word = u32::from_le_bytes([s2, s, s, s2 ^ s]);
		tables[0][x] = word;
		tables[1][x] = word.rotate_left(8);
		tables[2][x] = word.rotate_left(16);
		tables[3][x] = word.rotate_left(24);
		x += 1;
	}
	tables
}

/// Table-driven AES round: four lookups and XORs per column.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tables;

impl AesRound for Tables {
	#[inline]
	fn round(block: &mut Block, key: &Block) {
		let input = *block;
		for col in 0..4 {
			let word = TE[0][input[4 * col] as usize]
				^ TE[1][input[4 * ((col + 1) % 4) + 1] as usize]
				^ TE[2][input[4 * ((col + 2) % 4) + 2] as usize]
				^ TE[3][input[4 * ((col + 3) % 4) + 3] as usize];
			let key_word = u32::from_le_bytes([
				key[4 * col],
				key[4 * col + 1],
				key[4 * col + 2],
				key[4 * col + 3],
			]);
			block[4 * col..4 * col + 4].copy_from_slice(&(word ^ key_word).to_le_bytes());
		}
	}
}
