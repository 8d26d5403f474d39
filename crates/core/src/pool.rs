// Copyright 2024-2025 Irreducible Inc.

use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::{scratchpad::Scratchpad, variant::Variant};

/// Number of idle scratchpads a pool keeps unless configured otherwise.
pub const DEFAULT_MAX_IDLE: usize = 4;

/// A bounded set of idle scratchpads that can be shared between threads.
///
/// Scratchpads are handed out by value, so a borrower owns its buffer exclusively until it gives
/// it back with [`ScratchpadPool::release`].
#[derive(Debug)]
pub struct ScratchpadPool {
	idle: Mutex<Vec<Scratchpad>>,
	max_idle: usize,
}

impl Default for ScratchpadPool {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_IDLE)
	}
}

impl ScratchpadPool {
	pub fn new(max_idle: usize) -> Self {
		Self {
			idle: Mutex::new(Vec::with_capacity(max_idle)),
			max_idle,
		}
	}

	/// Takes an idle scratchpad sized for `variant`, or allocates one.
	pub fn acquire(&self, variant: Variant) -> Scratchpad {
		let reused = {
			let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
			idle.iter()
				.position(|pad| pad.fits(variant))
				.map(|i| idle.swap_remove(i))
		};
		match reused {
			Some(pad) => pad,
			None => {
				debug!(%variant, "allocating scratchpad");
				Scratchpad::new(variant)
			}
		}
	}

	/// Returns a scratchpad to the pool; it is dropped if the pool is full.
	pub fn release(&self, scratchpad: Scratchpad) {
		let mut idle = self.idle.lock().unwrap_or_else(PoisonError::into_inner);
		if idle.len() < self.max_idle {
			idle.push(scratchpad);
		} else {
			debug!(bytes = scratchpad.len_bytes(), "pool full, dropping scratchpad");
		}
	}

	/// Runs `f` with a pooled scratchpad for `variant` and releases it afterwards.
	pub fn with_scratchpad<R>(&self, variant: Variant, f: impl FnOnce(&mut Scratchpad) -> R) -> R {
		let mut scratchpad = self.acquire(variant);
		let result = f(&mut scratchpad);
		self.release(scratchpad);
		result
	}

	pub fn idle_count(&self) -> usize {
		self.idle
			.lock()
			.unwrap_or_else(PoisonError::into_inner)
			.len()
	}
}
