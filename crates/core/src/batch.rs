// Copyright 2024-2025 Irreducible Inc.

use cryptonight_utils::thread_local_mut::ThreadLocalMut;
use rayon::prelude::*;
use tracing::instrument;

use crate::{
	backend::Backend, digest::Digest, error::Error, hasher::hash_with_scratchpad,
	scratchpad::Scratchpad, variant::Variant,
};

/// Hashes every input in parallel, keeping one scratchpad per worker thread.
///
/// Results are in input order; a failing input does not affect the others.
#[instrument(skip_all, level = "debug", fields(variant = %variant, count = inputs.len()))]
pub fn hash_batch<I>(inputs: &[I], variant: Variant, backend: Backend) -> Vec<Result<Digest, Error>>
where
	I: AsRef<[u8]> + Sync,
{
	let scratchpads = ThreadLocalMut::new();
	inputs
		.par_iter()
		.map(|input| {
			scratchpads.with_mut(
				|| Scratchpad::new(variant),
				|scratchpad| hash_with_scratchpad(input.as_ref(), variant, backend, scratchpad),
			)
		})
		.collect()
}
