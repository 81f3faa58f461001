// Copyright 2025 Irreducible Inc.

/// Returns the base-2 logarithm of `n`.
///
/// ## Panics
///
/// Panics if `n` is not a power of two.
pub fn log2_strict_usize(n: usize) -> usize {
	assert!(n.is_power_of_two(), "{n} is not a power of two");
	n.trailing_zeros() as usize
}

/// Returns `ceil(log2(n))`, with `log2_ceil_usize(0) == 0`.
pub const fn log2_ceil_usize(n: usize) -> usize {
	if n <= 1 {
		0
	} else {
		(usize::BITS - (n - 1).leading_zeros()) as usize
	}
}

/// Returns the smallest power of two that is at least `n`, or `None` on overflow.
pub const fn checked_next_power_of_two(n: usize) -> Option<usize> {
	n.checked_next_power_of_two()
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[rstest::rstest]
	#[case(1, 0)]
	#[case(2, 1)]
	#[case(1024, 10)]
	fn test_log2_strict(#[case] n: usize, #[case] expected: usize) {
		assert_eq!(log2_strict_usize(n), expected);
	}

	#[test]
	#[should_panic]
	fn test_log2_strict_rejects_non_power_of_two() {
		log2_strict_usize(12);
	}

	proptest! {
		#[test]
		fn log2_ceil_brackets_input(n in 1usize..1 << 40) {
			let log = log2_ceil_usize(n);
			prop_assert!(n <= 1 << log);
			if log > 0 {
				prop_assert!(n > 1 << (log - 1));
			}
		}
	}
}
