// Copyright 2024-2025 Irreducible Inc.

use bytemuck::must_cast;

use crate::{
	aes::{Block, BLOCK_BYTES},
	variant::{Variant, INIT_BLOCKS},
};

/// A block viewed as two little-endian 64-bit lanes.
pub(crate) type Lanes = [u64; 2];

#[inline(always)]
pub(crate) fn lanes(block: &Block) -> Lanes {
	must_cast::<Block, Lanes>(*block).map(u64::from_le)
}

#[inline(always)]
pub(crate) fn to_block(lanes: Lanes) -> Block {
	must_cast(lanes.map(u64::to_le))
}

/// The large working buffer of one hash invocation.
///
/// A scratchpad is only ever read after the fill phase of a hash has overwritten all of it, so
/// a buffer may be reused across invocations of the same variant without clearing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scratchpad(Box<[Block]>);

impl Scratchpad {
	/// Allocates a zeroed scratchpad sized for `variant`.
	pub fn new(variant: Variant) -> Self {
		Self(vec![[0; BLOCK_BYTES]; variant.spec().blocks()].into_boxed_slice())
	}

	pub fn len_bytes(&self) -> usize {
		self.0.len() * BLOCK_BYTES
	}

	/// Whether this scratchpad has the exact size `variant` requires.
	pub fn fits(&self, variant: Variant) -> bool {
		self.len_bytes() == variant.spec().scratchpad_bytes
	}

	pub fn as_bytes(&self) -> &[u8] {
		bytemuck::cast_slice(&self.0)
	}

	pub fn as_bytes_mut(&mut self) -> &mut [u8] {
		bytemuck::cast_slice_mut(&mut self.0)
	}

	pub(crate) fn blocks_mut(&mut self) -> &mut [Block] {
		&mut self.0
	}

	/// The scratchpad in 128-byte chunks of eight blocks, the unit of fill and absorb.
	pub(crate) fn chunks(&self) -> impl Iterator<Item = &[Block]> {
		self.0.chunks_exact(INIT_BLOCKS)
	}

	pub(crate) fn chunks_mut(&mut self) -> impl Iterator<Item = &mut [Block]> {
		self.0.chunks_exact_mut(INIT_BLOCKS)
	}
}
