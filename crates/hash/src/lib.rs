// Copyright 2023-2025 Irreducible Inc.

//! Standard hash building blocks shared by the scratchpad hash engine: the Keccak sponge that
//! expands the input and the finalization functions that compress the final state.

pub mod finalizer;
pub mod keccak;

pub use finalizer::{FinalHash, DIGEST_BYTES};
pub use keccak::{KeccakState, LANES, RATE_BYTES, STATE_BYTES};
