// Copyright 2024-2025 Irreducible Inc.

//! Early-return helpers for precondition checks.
//!
//! With the `bail_panic` feature enabled a failed check panics at the failure site instead of
//! returning, which makes the offending caller show up directly in a backtrace.

#[cfg(feature = "bail_panic")]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		panic!("{}", $err);
	};
}

#[cfg(not(feature = "bail_panic"))]
#[macro_export]
macro_rules! bail {
	($err:expr) => {
		return Err($err.into());
	};
}

#[macro_export]
macro_rules! ensure {
	($cond:expr, $err:expr) => {
		if !$cond {
			$crate::bail!($err);
		}
	};
}

#[cfg(all(test, not(feature = "bail_panic")))]
mod tests {
	#[derive(Debug, PartialEq, Eq)]
	struct TooShort(usize);

	impl std::fmt::Display for TooShort {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			write!(f, "input of {} bytes is too short", self.0)
		}
	}

	fn check_len(input: &[u8], min_len: usize) -> Result<usize, TooShort> {
		ensure!(input.len() >= min_len, TooShort(input.len()));
		Ok(input.len())
	}

	#[test]
	fn test_ensure_passes_through() {
		assert_eq!(check_len(&[0; 43], 43), Ok(43));
	}

	#[test]
	fn test_ensure_returns_error() {
		assert_eq!(check_len(&[0; 42], 43), Err(TooShort(42)));
	}
}
