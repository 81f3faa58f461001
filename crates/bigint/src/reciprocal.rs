// Copyright 2025 Irreducible Inc.

//! Division through a fixed-point reciprocal refined by Newton iteration.
//!
//! For a dividend of `m` digits and a divisor `b` of `n` digits, the reciprocal is approximated
//! as `x ≈ 81^m / b`. Every Newton step `x' = x + floor(x * (81^m - b * x) / 81^m)` keeps `x` at
//! or below the true reciprocal while roughly doubling its number of correct digits. The
//! quotient estimate `floor(a * x / 81^m)` is then at most a few units below the true quotient
//! and is fixed up by a bounded correction loop.

use std::cmp::Ordering;

use t81_utils::checked_arithmetics::log2_ceil_usize;

use crate::{
	Engine, Error, Sign, T81Int,
	magnitude::{self, RADIX},
};

/// Number of divisor digits used for the initial reciprocal estimate.
const ESTIMATE_DIGITS: usize = 4;
/// Quotient corrections allowed before giving up on the estimate.
const MAX_CORRECTIONS: usize = 8;

/// Upper bound on the Newton steps needed for a quotient of `quotient_digits` digits.
///
/// The initial estimate is correct to at least one bit, and each step doubles the number of
/// correct bits, while the quotient needs under `log2(81) < 7` bits per digit plus two guard
/// digits.
fn max_iterations(quotient_digits: usize) -> usize {
	log2_ceil_usize(7 * (quotient_digits + 2)) + 2
}

/// Non-negative quotient and remainder of two magnitudes, or `None` if the Newton estimate needs
/// more than [`MAX_CORRECTIONS`] fix-ups.
///
/// ## Preconditions
///
/// - `b` is non-zero and has no zero digits above its significant length
/// - `a >= b`
pub(crate) fn divide(
	engine: &Engine,
	a: &[u8],
	b: &[u8],
) -> Result<Option<(T81Int, T81Int)>, Error> {
	let scale = a.len();
	let dividend = engine.from_digits(Sign::Positive, a)?;
	let divisor = engine.from_digits(Sign::Positive, b)?;
	let reciprocal = reciprocal(engine, &divisor, scale, a.len() - b.len())?;

	let mut quotient = engine.shift_digits_down(&engine.mul(&dividend, &reciprocal)?, scale)?;
	let mut remainder = engine.sub(&dividend, &engine.mul(&quotient, &divisor)?)?;

	let one = engine.one()?;
	for _ in 0..=MAX_CORRECTIONS {
		if remainder.is_negative() {
			quotient = engine.sub(&quotient, &one)?;
			remainder = engine.add(&remainder, &divisor)?;
		} else if magnitude::cmp_mag(remainder.digits(), divisor.digits()) != Ordering::Less {
			quotient = engine.add(&quotient, &one)?;
			remainder = engine.sub(&remainder, &divisor)?;
		} else {
			return Ok(Some((quotient, remainder)));
		}
	}
	Ok(None)
}

/// Approximates `81^scale / divisor` from below.
fn reciprocal(
	engine: &Engine,
	divisor: &T81Int,
	scale: usize,
	quotient_digits: usize,
) -> Result<T81Int, Error> {
	let b = divisor.digits();
	let n = b.len();
	let top = n.min(ESTIMATE_DIGITS);
	let head = b[n - top..]
		.iter()
		.rev()
		.fold(0u64, |acc, &d| acc * RADIX as u64 + d as u64);

	// b < (head + 1) * 81^(n - top), so this under-estimates 81^scale / b.
	let exponent = scale - n + top;
	let mut estimate = engine.allocator().allocate(exponent + 1)?;
	estimate.digits_mut()[exponent] = 1;
	magnitude::div_small_assign(estimate.digits_mut(), head + 1);
	let mut x = T81Int::from_parts(Sign::Positive, estimate);

	let unit = engine.shift_digits_up(&engine.one()?, scale)?;
	for _ in 0..max_iterations(quotient_digits) {
		let error = engine.sub(&unit, &engine.mul(divisor, &x)?)?;
		debug_assert!(!error.is_negative(), "reciprocal estimate overshot");
		let step = engine.shift_digits_down(&engine.mul(&x, &error)?, scale)?;
		if step.is_zero() {
			break;
		}
		x = engine.add(&x, &step)?;
	}
	Ok(x)
}
