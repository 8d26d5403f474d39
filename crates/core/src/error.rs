// Copyright 2024-2025 Irreducible Inc.

use crate::variant::Variant;

/// Error returned by the hashing entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
	#[error("{variant} requires at least {min_len} bytes of input, got {len}")]
	InvalidInput {
		variant: Variant,
		min_len: usize,
		len: usize,
	},
	/// Thrown when a caller-provided scratchpad was sized for a different variant.
	#[error("{variant} needs a scratchpad of {expected} bytes, got {actual}")]
	ScratchpadSizeMismatch {
		variant: Variant,
		expected: usize,
		actual: usize,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash variant \"{0}\"")]
pub struct ParseVariantError(pub String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseDigestError {
	#[error("a digest is {expected} hex characters, got {actual}")]
	Length { expected: usize, actual: usize },
	#[error("invalid hex: {0}")]
	Hex(#[from] hex::FromHexError),
}
