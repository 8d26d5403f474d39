// Copyright 2024-2025 Irreducible Inc.

use std::sync::OnceLock;

use crate::env::env_usize;

/// Worker count for batch hashing. Takes precedence over `RAYON_NUM_THREADS`.
pub const THREADS_ENV: &str = "CRYPTONIGHT_THREADS";

/// Configures the global rayon pool used for batch hashing.
///
/// The thread count comes from `CRYPTONIGHT_THREADS`, then `RAYON_NUM_THREADS`; with neither set
/// rayon's defaults apply. Every worker keeps its own scratchpad, so the count also bounds the
/// memory held by a batch. With a single thread the pool runs on the calling thread, which keeps
/// profiles of one hash free of scheduler noise.
///
/// NOTE: rayon initializes its global pool only once, so this must run before any parallel work,
/// typically first thing in `main`. A reference to the result is returned because
/// `ThreadPoolBuildError` is not `Clone`.
pub fn adjust_thread_pool() -> &'static Result<(), rayon::ThreadPoolBuildError> {
	static ONCE_GUARD: OnceLock<Result<(), rayon::ThreadPoolBuildError>> = OnceLock::new();

	ONCE_GUARD.get_or_init(|| {
		// `rayon::current_num_threads` would initialize the global pool with its defaults.
		match env_usize(THREADS_ENV).or_else(|| env_usize("RAYON_NUM_THREADS")) {
			Some(1) => rayon::ThreadPoolBuilder::new()
				.num_threads(1)
				.use_current_thread()
				.build_global(),
			Some(threads) => rayon::ThreadPoolBuilder::new()
				.num_threads(threads)
				.build_global(),
			None => Ok(()),
		}
	})
}
