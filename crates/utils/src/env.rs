// Copyright 2024-2025 Irreducible Inc.

//! Configuration read from environment variables.

/// Whether `flag` is set to one of `1`, `on`, `true` or `yes` (any case).
pub fn boolean_env_flag_set(flag: &str) -> bool {
	std::env::var(flag).is_ok_and(|val| is_truthy(&val))
}

/// Reads `name` as a positive integer. Unset, empty, zero or malformed values yield `None`.
pub fn env_usize(name: &str) -> Option<usize> {
	std::env::var(name).ok().and_then(|val| parse_positive(&val))
}

fn is_truthy(val: &str) -> bool {
	["1", "on", "true", "yes"]
		.iter()
		.any(|accepted| val.trim().eq_ignore_ascii_case(accepted))
}

fn parse_positive(val: &str) -> Option<usize> {
	val.trim().parse().ok().filter(|&n| n > 0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_unset_variables() {
		assert!(!boolean_env_flag_set("CRYPTONIGHT_UTILS_TEST_FLAG_THAT_IS_NEVER_SET"));
		assert_eq!(env_usize("CRYPTONIGHT_UTILS_TEST_COUNT_THAT_IS_NEVER_SET"), None);
	}

	#[test]
	fn test_truthy_values() {
		for val in ["1", "on", "ON", "True", "yes", " yes "] {
			assert!(is_truthy(val), "{val:?}");
		}
		for val in ["", "0", "off", "no", "2"] {
			assert!(!is_truthy(val), "{val:?}");
		}
	}

	#[test]
	fn test_parse_positive() {
		assert_eq!(parse_positive("4"), Some(4));
		assert_eq!(parse_positive(" 16\n"), Some(16));
		assert_eq!(parse_positive("0"), None);
		assert_eq!(parse_positive("-1"), None);
		assert_eq!(parse_positive("many"), None);
	}
}
