// Copyright 2025 Irreducible Inc.

use std::cmp::Ordering;

use crate::{DivStrategy, Engine, Error, Sign, T81Int, magnitude, reciprocal};

impl Engine {
	/// Truncated division: `a = q * b + r` with `|r| < |b|` and `r` carrying the sign of `a`.
	pub fn div_rem(&self, a: &T81Int, b: &T81Int) -> Result<(T81Int, T81Int), Error> {
		self.div_rem_with(a, b, self.config().div_strategy())
	}

	/// Divides with an explicit strategy, ignoring the configured one.
	pub fn div_rem_with(
		&self,
		a: &T81Int,
		b: &T81Int,
		strategy: DivStrategy,
	) -> Result<(T81Int, T81Int), Error> {
		if b.is_zero() {
			return Err(Error::DivisionByZero);
		}
		if magnitude::cmp_mag(a.digits(), b.digits()) == Ordering::Less {
			return Ok((self.zero()?, self.duplicate(a)?));
		}

		let (dividend, divisor) = (a.digits(), b.digits());
		let strategy = self.config().resolve_div(strategy, divisor.len());
		let _span = tracing::trace_span!(
			"div_rem",
			?strategy,
			lhs_len = dividend.len(),
			rhs_len = divisor.len()
		)
		.entered();

		let (quotient, remainder) = match strategy {
			DivStrategy::Reciprocal => match reciprocal::divide(self, dividend, divisor)? {
				Some(pair) => pair,
				None => {
					tracing::debug!(
						lhs_len = dividend.len(),
						rhs_len = divisor.len(),
						"reciprocal quotient needed too many corrections, using long division"
					);
					self.long_divide(dividend, divisor)?
				}
			},
			DivStrategy::Long | DivStrategy::Auto => self.long_divide(dividend, divisor)?,
		};

		Ok((
			quotient.with_sign(a.sign() * b.sign()),
			remainder.with_sign(a.sign()),
		))
	}

	pub fn div(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		Ok(self.div_rem(a, b)?.0)
	}

	/// Non-negative quotient and remainder of two magnitudes.
	fn long_divide(&self, a: &[u8], b: &[u8]) -> Result<(T81Int, T81Int), Error> {
		let mut quotient = self.allocator().allocate(a.len())?;
		let mut remainder = self.allocator().allocate(b.len() + 1)?;
		magnitude::long_divide(a, b, quotient.digits_mut(), remainder.digits_mut());
		Ok((
			T81Int::from_parts(Sign::Positive, quotient),
			T81Int::from_parts(Sign::Positive, remainder),
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[rstest::rstest]
	#[case::exact(84, 12, 7, 0)]
	#[case::positive(100, 7, 14, 2)]
	#[case::negative_dividend(-100, 7, -14, -2)]
	#[case::negative_divisor(100, -7, -14, 2)]
	#[case::both_negative(-100, -7, 14, -2)]
	#[case::smaller_dividend(-5, 81, 0, -5)]
	#[case::zero_dividend(0, 3, 0, 0)]
	fn test_truncated_division(
		#[case] a: i64,
		#[case] b: i64,
		#[case] q: i64,
		#[case] r: i64,
	) {
		let engine = Engine::default();
		let (a, b) = (engine.from_i64(a).unwrap(), engine.from_i64(b).unwrap());
		for strategy in [DivStrategy::Long, DivStrategy::Reciprocal] {
			let (quotient, remainder) = engine.div_rem_with(&a, &b, strategy).unwrap();
			assert_eq!(quotient.to_i64().unwrap(), q, "{strategy:?}");
			assert_eq!(remainder.to_i64().unwrap(), r, "{strategy:?}");
		}
	}

	#[test]
	fn test_division_by_zero() {
		let engine = Engine::default();
		let zero = engine.zero().unwrap();
		for a in [engine.from_i64(17).unwrap(), engine.zero().unwrap()] {
			assert!(matches!(engine.div_rem(&a, &zero), Err(Error::DivisionByZero)));
			assert!(matches!(
				engine.div_rem_with(&a, &zero, DivStrategy::Reciprocal),
				Err(Error::DivisionByZero)
			));
		}
	}

	#[test]
	fn test_div_large_by_single_digit() {
		let engine = Engine::default();
		// 81^32 - 1 = 80 * (1 + 81 + ... + 81^31)
		let a = engine.parse(&"@".repeat(32)).unwrap();
		let b = engine.parse("@").unwrap();
		let (q, r) = engine.div_rem(&a, &b).unwrap();
		assert_eq!(q.to_string(), "1".repeat(32));
		assert!(r.is_zero());
	}
}
