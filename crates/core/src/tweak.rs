// Copyright 2024-2025 Irreducible Inc.

//! Per-variant extra mixing of the main loop.

use crate::{
	aes::Block,
	backend::HashBackend,
	scratchpad::{lanes, to_block, Lanes},
};

/// Byte of the freshly written block that the byte-xor tweak rewrites.
const TWEAK_BYTE: usize = 11;
const TWEAK_TABLE: u32 = 0x75310;

/// Byte-xor tweak of the first half-step.
#[inline(always)]
pub(crate) fn tweak_byte(block: &mut Block) {
	let t = block[TWEAK_BYTE];
	let index = (((t >> 3) & 6) | (t & 1)) << 1;
	block[TWEAK_BYTE] = t ^ ((TWEAK_TABLE >> index) & 0x30) as u8;
}

#[inline(always)]
pub(crate) fn add_lanes(x: Lanes, y: Lanes) -> Lanes {
	[x[0].wrapping_add(y[0]), x[1].wrapping_add(y[1])]
}

#[inline(always)]
pub(crate) fn xor_lanes(x: Lanes, y: Lanes) -> Lanes {
	[x[0] ^ y[0], x[1] ^ y[1]]
}

/// Rotates the three neighbours of block `j` (same 64-byte line) while adding the registers to
/// them.
///
/// All three blocks are read before any is written.
#[inline(always)]
pub(crate) fn shuffle_add(pad: &mut [Block], j: usize, a: Lanes, b0: Lanes, b1: Lanes) {
	let c1 = lanes(&pad[j ^ 1]);
	let c2 = lanes(&pad[j ^ 2]);
	let c3 = lanes(&pad[j ^ 3]);
	pad[j ^ 1] = to_block(add_lanes(c3, b1));
	pad[j ^ 2] = to_block(add_lanes(c1, b0));
	pad[j ^ 3] = to_block(add_lanes(c2, a));
}

/// Packs the 32-bit quotient and the remainder of `dividend / divisor` into one word, quotient
/// in the low half.
///
/// A zero divisor yields the quotient `u32::MAX` with the dividend as remainder.
#[inline(always)]
pub(crate) fn divide(dividend: u64, divisor: u32) -> u64 {
	let (quotient, remainder) = match divisor {
		0 => (u32::MAX, dividend),
		d => {
			let d = d as u64;
			((dividend / d) as u32, dividend % d)
		}
	};
	quotient as u64 + (remainder << 32)
}

/// `floor(sqrt(2^64 + n) * 2) - 2^33`, computed one result bit at a time.
pub(crate) fn integer_sqrt_reference(n: u64) -> u64 {
	let mut n = n;
	let mut r = 1u64 << 63;
	let mut bit = 1u64 << 60;
	while bit != 0 {
		let candidate = r.wrapping_add(bit);
		if n >= candidate {
			n = n.wrapping_sub(candidate);
			r = r.wrapping_add(bit << 1);
		}
		r >>= 1;
		bit >>= 2;
	}
	(r << 1).wrapping_add((n > r) as u64) - (1 << 33)
}

/// `floor(sqrt(2^64 + n) * 2) - 2^33`, from a double precision estimate.
///
/// The estimate is off by at most one and is corrected with exact integer arithmetic.
pub(crate) fn integer_sqrt_fp64(n: u64) -> u64 {
	const TWO_POW_64: f64 = 18446744073709551616.0;
	const TWO_POW_33: f64 = 8589934592.0;

	let r = ((n as f64 + TWO_POW_64).sqrt() * 2.0 - TWO_POW_33) as u64;

	let s = r >> 1;
	let b = r & 1;
	let r2 = s.wrapping_mul(s.wrapping_add(b)).wrapping_add(r << 32);
	let mut fixed = r;
	if r2.wrapping_add(b) > n {
		fixed = fixed.wrapping_sub(1);
	}
	if r2.wrapping_add(1 << 32) < n.wrapping_sub(s) {
		fixed = fixed.wrapping_add(1);
	}
	fixed
}

/// Division and square root registers of the division/sqrt tweak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct IntegerMath {
	pub division: u64,
	pub sqrt: u64,
}

impl IntegerMath {
	/// Folds the previous results into `c2` and advances both chains from `c1`.
	#[inline(always)]
	pub fn step<B: HashBackend>(&mut self, c2: &mut Lanes, c1: Lanes) {
		c2[0] ^= self.division ^ (self.sqrt << 32);

		let divisor = (c1[0] as u32).wrapping_add((self.sqrt << 1) as u32) | 0x8000_0001;
		self.division = divide(c1[1], divisor);

		let sqrt_input = c1[0].wrapping_add(self.division);
		self.sqrt = B::isqrt(sqrt_input);
	}
}
