// Copyright 2024-2025 Irreducible Inc.

//! The memory-hard core: fill the scratchpad, mix it, absorb it back into the state.

use cryptonight_utils::ensure;
use tracing::{instrument, trace};

use crate::{
	aes::{xor_block, AesRound, RoundKeys},
	backend::HashBackend,
	digest::Digest,
	error::Error,
	scratchpad::{lanes, to_block, Lanes, Scratchpad},
	state::PermutationState,
	tweak::{add_lanes, shuffle_add, tweak_byte, xor_lanes, IntegerMath},
	variant::{Tweak, Variant, VariantSpec, BYTE_XOR_TWEAK_OFFSET},
};

/// Hashes `input` with `scratchpad` as working memory.
///
/// The scratchpad size and then the input length are checked before any work is done.
#[instrument(skip_all, level = "debug", fields(variant = %variant, len = input.len()))]
pub(crate) fn hash<B: HashBackend>(
	input: &[u8],
	variant: Variant,
	scratchpad: &mut Scratchpad,
) -> Result<Digest, Error> {
	let spec = variant.spec();
	ensure!(
		scratchpad.fits(variant),
		Error::ScratchpadSizeMismatch {
			variant,
			expected: spec.scratchpad_bytes,
			actual: scratchpad.len_bytes(),
		}
	);
	let mut state = PermutationState::expand(input, variant)?;

	fill::<B::Aes>(&state, scratchpad);
	trace!("scratchpad filled");

	mix::<B>(&state, byte_xor_seed(input, spec), spec, scratchpad);
	trace!(iterations = spec.iterations, "scratchpad mixed");

	absorb::<B::Aes>(&mut state, scratchpad);
	trace!("scratchpad absorbed");

	Ok(Digest::from(state.finalize()))
}

/// Input word folded into the byte-xor tweak; zero for other tweaks.
fn byte_xor_seed(input: &[u8], spec: &VariantSpec) -> u64 {
	match spec.tweak {
		Tweak::ByteXor => {
			let mut word = [0u8; 8];
			word.copy_from_slice(&input[BYTE_XOR_TWEAK_OFFSET..BYTE_XOR_TWEAK_OFFSET + 8]);
			u64::from_le_bytes(word)
		}
		Tweak::None | Tweak::DivisionSqrt => 0,
	}
}

/// Overwrites every byte of the scratchpad with the encrypted text region of the state.
fn fill<A: AesRound>(state: &PermutationState, scratchpad: &mut Scratchpad) {
	let keys = RoundKeys::expand(state.fill_key());
	let mut text = state.text();
	for chunk in scratchpad.chunks_mut() {
		for block in &mut text {
			A::pseudo_rounds(block, &keys);
		}
		chunk.copy_from_slice(&text);
	}
}

fn absorb<A: AesRound>(state: &mut PermutationState, scratchpad: &Scratchpad) {
	let keys = RoundKeys::expand(state.absorb_key());
	let mut text = state.text();
	for chunk in scratchpad.chunks() {
		for (block, src) in text.iter_mut().zip(chunk) {
			xor_block(block, src);
			A::pseudo_rounds(block, &keys);
		}
	}
	state.set_text(&text);
}

#[inline(always)]
fn index(register: Lanes, mask: usize) -> usize {
	(register[0] / 16) as usize & mask
}

fn mix<B: HashBackend>(
	state: &PermutationState,
	seed: u64,
	spec: &VariantSpec,
	scratchpad: &mut Scratchpad,
) {
	let tweak = spec.tweak;
	let mask = spec.address_mask();
	let pad = scratchpad.blocks_mut();

	let mut a = xor_lanes(lanes(&state.block(0)), lanes(&state.block(32)));
	let mut b0 = xor_lanes(lanes(&state.block(16)), lanes(&state.block(48)));
	let mut b1 = xor_lanes(lanes(&state.block(64)), lanes(&state.block(80)));
	let mut math = IntegerMath {
		division: state.lane(12),
		sqrt: state.lane(13),
	};
	let tweak_value = state.lane(24) ^ seed;

	for _ in 0..spec.iterations {
		let j = index(a, mask);
		let mut c1 = pad[j];
		B::Aes::round(&mut c1, &to_block(a));
		if tweak == Tweak::DivisionSqrt {
			shuffle_add(pad, j, a, b0, b1);
		}
		let c1 = lanes(&c1);
		let mut written = to_block(xor_lanes(c1, b0));
		if tweak == Tweak::ByteXor {
			tweak_byte(&mut written);
		}
		pad[j] = written;

		let j = index(c1, mask);
		let mut c2 = lanes(&pad[j]);
		if tweak == Tweak::DivisionSqrt {
			math.step::<B>(&mut c2, c1);
		}
		let product = c1[0] as u128 * c2[0] as u128;
		let mut d = [(product >> 64) as u64, product as u64];
		if tweak == Tweak::DivisionSqrt {
			pad[j ^ 1] = to_block(xor_lanes(lanes(&pad[j ^ 1]), d));
			d = xor_lanes(d, lanes(&pad[j ^ 2]));
			shuffle_add(pad, j, a, b0, b1);
		}
		a = add_lanes(a, d);
		let mut written = a;
		if tweak == Tweak::ByteXor {
			written[1] ^= tweak_value;
		}
		pad[j] = to_block(written);
		a = xor_lanes(a, c2);
		if tweak == Tweak::DivisionSqrt {
			b1 = b0;
		}
		b0 = c1;
	}
}
