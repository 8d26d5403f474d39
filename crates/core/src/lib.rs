// Copyright 2024-2025 Irreducible Inc.

//! CryptoNight family of memory-hard proof-of-work hashes.
//!
//! A hash absorbs its input into a Keccak state, expands part of that state into a scratchpad
//! of up to 2 MiB with AES, runs a long data-dependent read/modify/write loop over the
//! scratchpad, folds the scratchpad back into the state and finishes with one of four hash
//! functions chosen by the state itself.

pub mod aes;
mod backend;
mod batch;
mod digest;
mod engine;
mod error;
mod hasher;
mod pool;
mod scratchpad;
mod state;
mod tweak;
mod variant;

pub use backend::{Backend, REFERENCE_BACKEND_ENV};
pub use batch::hash_batch;
pub use digest::Digest;
pub use error::{Error, ParseDigestError, ParseVariantError};
pub use hasher::{hash, hash_with_scratchpad, CryptoNight};
pub use pool::{ScratchpadPool, DEFAULT_MAX_IDLE};
pub use scratchpad::Scratchpad;
pub use state::PermutationState;
pub use variant::{Tweak, Variant, VariantSpec, BYTE_XOR_MIN_INPUT_LEN, INIT_BLOCKS, INIT_BYTES};
