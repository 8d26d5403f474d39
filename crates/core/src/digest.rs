// Copyright 2024-2025 Irreducible Inc.

use std::{fmt, str::FromStr};

use cryptonight_hash::DIGEST_BYTES;

use crate::error::ParseDigestError;

/// A 32-byte hash output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_BYTES]);

impl Digest {
	pub const fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
		&self.0
	}

	pub const fn into_bytes(self) -> [u8; DIGEST_BYTES] {
		self.0
	}
}

impl From<[u8; DIGEST_BYTES]> for Digest {
	fn from(bytes: [u8; DIGEST_BYTES]) -> Self {
		Self(bytes)
	}
}

impl From<Digest> for [u8; DIGEST_BYTES] {
	fn from(digest: Digest) -> Self {
		digest.0
	}
}

impl AsRef<[u8]> for Digest {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl fmt::LowerHex for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&hex::encode(self.0))
	}
}

impl fmt::Display for Digest {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::LowerHex::fmt(self, f)
	}
}

impl FromStr for Digest {
	type Err = ParseDigestError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() != 2 * DIGEST_BYTES {
			return Err(ParseDigestError::Length {
				expected: 2 * DIGEST_BYTES,
				actual: s.len(),
			});
		}
		let mut bytes = [0u8; DIGEST_BYTES];
		hex::decode_to_slice(s, &mut bytes)?;
		Ok(Self(bytes))
	}
}
