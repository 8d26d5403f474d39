// Copyright 2024-2025 Irreducible Inc.

//! The table of hash variants and their parameters.

use std::{fmt, str::FromStr};

use static_assertions::const_assert;

use crate::{aes::BLOCK_BYTES, error::ParseVariantError};

/// Bytes written per fill step: eight AES blocks taken from the permutation state.
pub const INIT_BYTES: usize = 128;
/// Number of AES blocks processed per fill step.
pub const INIT_BLOCKS: usize = INIT_BYTES / BLOCK_BYTES;

const STANDARD_SCRATCHPAD_BYTES: usize = 1 << 21;
const STANDARD_ITERATIONS: usize = 1 << 19;

const TURTLE_SCRATCHPAD_BYTES: usize = STANDARD_SCRATCHPAD_BYTES / 8;
const TURTLE_ITERATIONS: usize = STANDARD_ITERATIONS / 8;
/// The turtle loop addresses only the first half of its scratchpad; fill and absorb cover all of it.
const TURTLE_ADDRESS_BYTES: usize = TURTLE_SCRATCHPAD_BYTES / 2;

/// Inputs of byte-xor variants must reach past the 8 tweak bytes starting at this offset.
pub(crate) const BYTE_XOR_TWEAK_OFFSET: usize = 35;
/// Minimum input length of variants with the byte-xor tweak.
pub const BYTE_XOR_MIN_INPUT_LEN: usize = BYTE_XOR_TWEAK_OFFSET + 8;

const_assert!(STANDARD_SCRATCHPAD_BYTES % INIT_BYTES == 0);
const_assert!(BYTE_XOR_MIN_INPUT_LEN == 43);

/// Extra mixing applied inside the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tweak {
	/// Plain encrypt, xor and write.
	None,
	/// Shuffles a byte of every AES output and folds an input-derived value into every
	/// multiplication output.
	ByteXor,
	/// Integer division and square root chains plus shuffled additions into the neighbouring
	/// scratchpad blocks.
	DivisionSqrt,
}

/// Constant parameters of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantSpec {
	pub name: &'static str,
	/// Scratchpad size in bytes. Always a power of two and a multiple of [`INIT_BYTES`].
	pub scratchpad_bytes: usize,
	/// Size in bytes of the leading scratchpad window the main loop addresses. Equal to
	/// `scratchpad_bytes` except for the turtle family, whose loop only reaches the first half.
	pub address_bytes: usize,
	/// Number of main loop iterations; each iteration performs two scratchpad updates.
	pub iterations: usize,
	/// Inputs shorter than this are rejected.
	pub min_input_len: usize,
	pub tweak: Tweak,
}

impl VariantSpec {
	const fn new(
		name: &'static str,
		scratchpad_bytes: usize,
		iterations: usize,
		tweak: Tweak,
	) -> Self {
		// Scratchpad addresses are masked with `blocks - 1` and the fill writes whole
		// `INIT_BYTES` chunks. Evaluated in a static initializer, so a bad row fails the build.
		assert!(scratchpad_bytes.is_power_of_two());
		assert!(scratchpad_bytes >= INIT_BYTES);

		let min_input_len = match tweak {
			Tweak::ByteXor => BYTE_XOR_MIN_INPUT_LEN,
			Tweak::None | Tweak::DivisionSqrt => 0,
		};

		Self {
			name,
			scratchpad_bytes,
			address_bytes: scratchpad_bytes,
			iterations,
			min_input_len,
			tweak,
		}
	}

	/// Restricts main loop addresses to the first `address_bytes` of the scratchpad.
	const fn with_address_bytes(self, address_bytes: usize) -> Self {
		assert!(address_bytes.is_power_of_two());
		assert!(address_bytes >= BLOCK_BYTES && address_bytes <= self.scratchpad_bytes);

		Self {
			address_bytes,
			..self
		}
	}

	/// Mask applied to block indices in the main loop.
	pub const fn address_mask(&self) -> usize {
		self.address_bytes / BLOCK_BYTES - 1
	}

	/// Number of AES blocks in the scratchpad.
	pub const fn blocks(&self) -> usize {
		self.scratchpad_bytes / BLOCK_BYTES
	}

	/// Whether an input of `len` bytes passes the minimum length gate.
	pub const fn accepts_len(&self, len: usize) -> bool {
		len >= self.min_input_len
	}
}

/// Identifier of a hash variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
	V0,
	V1,
	V2,
	LiteV0,
	LiteV1,
	LiteV2,
	TurtleV0,
	TurtleV1,
	TurtleV2,
}

static SPECS: [VariantSpec; 9] = [
	VariantSpec::new("cn/0", STANDARD_SCRATCHPAD_BYTES, STANDARD_ITERATIONS, Tweak::None),
	VariantSpec::new("cn/1", STANDARD_SCRATCHPAD_BYTES, STANDARD_ITERATIONS, Tweak::ByteXor),
	VariantSpec::new("cn/2", STANDARD_SCRATCHPAD_BYTES, STANDARD_ITERATIONS, Tweak::DivisionSqrt),
	VariantSpec::new("cn-lite/0", STANDARD_SCRATCHPAD_BYTES / 2, STANDARD_ITERATIONS / 2, Tweak::None),
	VariantSpec::new("cn-lite/1", STANDARD_SCRATCHPAD_BYTES / 2, STANDARD_ITERATIONS / 2, Tweak::ByteXor),
	VariantSpec::new(
		"cn-lite/2",
		STANDARD_SCRATCHPAD_BYTES / 2,
		STANDARD_ITERATIONS / 2,
		Tweak::DivisionSqrt,
	),
	VariantSpec::new("cn-turtle/0", TURTLE_SCRATCHPAD_BYTES, TURTLE_ITERATIONS, Tweak::None)
		.with_address_bytes(TURTLE_ADDRESS_BYTES),
	VariantSpec::new("cn-turtle/1", TURTLE_SCRATCHPAD_BYTES, TURTLE_ITERATIONS, Tweak::ByteXor)
		.with_address_bytes(TURTLE_ADDRESS_BYTES),
	VariantSpec::new(
		"cn-turtle/2",
		TURTLE_SCRATCHPAD_BYTES,
		TURTLE_ITERATIONS,
		Tweak::DivisionSqrt,
	)
	.with_address_bytes(TURTLE_ADDRESS_BYTES),
];

impl Variant {
	pub const ALL: [Self; 9] = [
		Self::V0,
		Self::V1,
		Self::V2,
		Self::LiteV0,
		Self::LiteV1,
		Self::LiteV2,
		Self::TurtleV0,
		Self::TurtleV1,
		Self::TurtleV2,
	];

	/// The constant parameters of this variant.
	#[inline]
	pub fn spec(self) -> &'static VariantSpec {
		&SPECS[self as usize]
	}

	pub fn name(self) -> &'static str {
		self.spec().name
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Variant {
	type Err = ParseVariantError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|variant| variant.name().eq_ignore_ascii_case(s))
			.ok_or_else(|| ParseVariantError(s.to_owned()))
	}
}
