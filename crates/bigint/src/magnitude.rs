// Copyright 2025 Irreducible Inc.

//! Unsigned digit-slice arithmetic in radix 81, least significant digit first.
//!
//! Slices passed in may carry zero digits above their significant length. Output slices are
//! expected to be zero-filled and long enough for the result; the `## Preconditions` sections
//! state the exact lengths.

use std::{cmp::Ordering, iter};

use itertools::{EitherOrBoth, Itertools};

pub(crate) const RADIX: u8 = t81_store::RADIX;

/// Powers of three below the radix: a digit holds exactly four trits.
pub(crate) const POW3: [u8; 4] = [1, 3, 9, 27];
pub(crate) const TRITS_PER_DIGIT: usize = 4;

/// Number of digits up to and including the most significant non-zero digit.
pub(crate) fn significant_len(digits: &[u8]) -> usize {
	digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

pub(crate) fn trimmed(digits: &[u8]) -> &[u8] {
	&digits[..significant_len(digits)]
}

/// Orders two magnitudes: first by significant length, then most significant digit first.
pub(crate) fn cmp_mag(a: &[u8], b: &[u8]) -> Ordering {
	let (a, b) = (trimmed(a), trimmed(b));
	a.len()
		.cmp(&b.len())
		.then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Writes `a + b` into `out`.
///
/// ## Preconditions
///
/// - `out.len() > max(a.len(), b.len())`
pub(crate) fn add_into(a: &[u8], b: &[u8], out: &mut [u8]) {
	let n = a.len().max(b.len());
	assert!(out.len() > n);

	let mut carry = 0u8;
	for (k, pair) in a.iter().zip_longest(b).enumerate() {
		let sum = match pair {
			EitherOrBoth::Both(&x, &y) => x + y,
			EitherOrBoth::Left(&x) | EitherOrBoth::Right(&x) => x,
		} + carry;
		(out[k], carry) = if sum >= RADIX {
			(sum - RADIX, 1)
		} else {
			(sum, 0)
		};
	}
	out[n] = carry;
}

/// Subtracts `b` from `a` in place.
///
/// ## Preconditions
///
/// - `a >= b` as magnitudes
pub(crate) fn sub_assign(a: &mut [u8], b: &[u8]) {
	let b = trimmed(b);
	let mut borrow = 0u8;
	for (k, x) in a.iter_mut().enumerate() {
		if k >= b.len() && borrow == 0 {
			break;
		}
		let y = b.get(k).copied().unwrap_or(0) + borrow;
		(*x, borrow) = if *x >= y {
			(*x - y, 0)
		} else {
			(*x + RADIX - y, 1)
		};
	}
	debug_assert_eq!(borrow, 0, "subtrahend exceeds minuend");
}

/// Writes `a - b` into `out`.
///
/// ## Preconditions
///
/// - `a >= b` as magnitudes
/// - `out.len() >= a.len()`
pub(crate) fn sub_into(a: &[u8], b: &[u8], out: &mut [u8]) {
	out[..a.len()].copy_from_slice(a);
	sub_assign(out, b);
}

/// Writes `a * m` into `out`.
///
/// ## Preconditions
///
/// - `m < 81`
/// - `out.len() > a.len()`
pub(crate) fn mul_small_into(a: &[u8], m: u8, out: &mut [u8]) {
	debug_assert!(m < RADIX);
	let mut carry = 0u32;
	for (o, &x) in out.iter_mut().zip(a) {
		let v = x as u32 * m as u32 + carry;
		*o = (v % RADIX as u32) as u8;
		carry = v / RADIX as u32;
	}
	out[a.len()] = carry as u8;
}

/// Divides `a` in place by a small divisor, returning the remainder.
///
/// ## Preconditions
///
/// - `0 < d <= 81^4`
pub(crate) fn div_small_assign(a: &mut [u8], d: u64) -> u64 {
	debug_assert!(d > 0);
	let mut rem = 0u64;
	for digit in a.iter_mut().rev() {
		let cur = rem * RADIX as u64 + *digit as u64;
		*digit = (cur / d) as u8;
		rem = cur % d;
	}
	rem
}

/// Digits of a machine integer, least significant first. Zero yields no digits.
pub(crate) fn radix_digits(mut n: u128) -> Vec<u8> {
	iter::from_fn(|| {
		(n != 0).then(|| {
			let digit = (n % RADIX as u128) as u8;
			n /= RADIX as u128;
			digit
		})
	})
	.collect()
}

/// The value of a magnitude as a `u128`, or `None` if it does not fit.
pub(crate) fn to_u128(digits: &[u8]) -> Option<u128> {
	digits.iter().rev().try_fold(0u128, |acc, &d| {
		acc.checked_mul(RADIX as u128)?.checked_add(d as u128)
	})
}

/// Schoolbook long division, one quotient digit per dividend digit.
///
/// The running remainder is shifted up by one digit, the next dividend digit is brought down,
/// and the quotient digit is found by subtracting `b` until the remainder drops below it. This
/// takes at most 80 subtractions per digit.
///
/// ## Preconditions
///
/// - `b` is non-zero and has no zero digits above its significant length
/// - `quotient.len() >= a.len()`
/// - `remainder.len() == b.len() + 1`, zero-filled
pub(crate) fn long_divide(a: &[u8], b: &[u8], quotient: &mut [u8], remainder: &mut [u8]) {
	debug_assert_eq!(significant_len(b), b.len());
	assert_eq!(remainder.len(), b.len() + 1);

	let top = remainder.len() - 1;
	for (k, &digit) in a.iter().enumerate().rev() {
		debug_assert_eq!(remainder[top], 0);
		remainder.copy_within(0..top, 1);
		remainder[0] = digit;

		let mut q = 0u8;
		while cmp_mag(remainder, b) != Ordering::Less {
			sub_assign(remainder, b);
			q += 1;
		}
		debug_assert!(q < RADIX);
		quotient[k] = q;
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn digits_of(n: u128) -> Vec<u8> {
		radix_digits(n)
	}

	#[test]
	fn test_significant_len() {
		assert_eq!(significant_len(&[]), 0);
		assert_eq!(significant_len(&[0, 0]), 0);
		assert_eq!(significant_len(&[3, 0, 5, 0, 0]), 3);
	}

	#[test]
	fn test_cmp_ignores_leading_zeros() {
		assert_eq!(cmp_mag(&[1, 2, 0, 0], &[1, 2]), Ordering::Equal);
		assert_eq!(cmp_mag(&[0, 3], &[80]), Ordering::Greater);
		assert_eq!(cmp_mag(&[80, 2], &[0, 3]), Ordering::Less);
	}

	#[test]
	fn test_add_carries_through() {
		let mut out = [0u8; 3];
		add_into(&[80, 80], &[1], &mut out);
		assert_eq!(out, [0, 0, 1]);
	}

	#[test]
	fn test_radix_digits_of_zero_is_empty() {
		assert!(radix_digits(0).is_empty());
		assert_eq!(radix_digits(81), vec![0, 1]);
	}

	proptest! {
		#[test]
		fn add_sub_match_machine_arithmetic(a in 0u64..u64::MAX / 2, b in 0u64..u64::MAX / 2) {
			let (da, db) = (digits_of(a as u128), digits_of(b as u128));
			let mut sum = vec![0u8; da.len().max(db.len()) + 1];
			add_into(&da, &db, &mut sum);
			prop_assert_eq!(to_u128(&sum), Some(a as u128 + b as u128));

			let (hi, lo) = if a >= b { (&da, &db) } else { (&db, &da) };
			let mut diff = vec![0u8; hi.len()];
			sub_into(hi, lo, &mut diff);
			prop_assert_eq!(to_u128(&diff), Some(a.abs_diff(b) as u128));
		}

		#[test]
		fn small_ops_match_machine_arithmetic(a in any::<u64>(), m in 0u8..81, d in 1u64..43_046_721) {
			let da = digits_of(a as u128);
			let mut prod = vec![0u8; da.len() + 1];
			mul_small_into(&da, m, &mut prod);
			prop_assert_eq!(to_u128(&prod), Some(a as u128 * m as u128));

			let mut quot = da.clone();
			let rem = div_small_assign(&mut quot, d);
			prop_assert_eq!(to_u128(&quot), Some((a / d) as u128));
			prop_assert_eq!(rem, a % d);
		}

		#[test]
		fn long_divide_matches_machine_arithmetic(a in any::<u128>(), b in 1u128..u128::MAX) {
			let (da, db) = (digits_of(a), digits_of(b));
			let mut quotient = vec![0u8; da.len()];
			let mut remainder = vec![0u8; db.len() + 1];
			long_divide(&da, &db, &mut quotient, &mut remainder);
			prop_assert_eq!(to_u128(&quotient), Some(a / b));
			prop_assert_eq!(to_u128(&remainder), Some(a % b));
		}
	}
}
