// Copyright 2025 Irreducible Inc.

//! Operations composed from the additive, multiplicative and divisive primitives.

use crate::{
	Engine, Error, T81Int,
	magnitude::{self, POW3, TRITS_PER_DIGIT},
};

impl Engine {
	/// The remainder of truncated division, carrying the sign of `a`.
	pub fn modulus(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		Ok(self.div_rem(a, b)?.1)
	}

	/// `base^exp` by square-and-multiply. `pow(x, 0)` is one for every `x`, including zero.
	pub fn pow(&self, base: &T81Int, exp: u64) -> Result<T81Int, Error> {
		let mut result = self.one()?;
		if exp == 0 {
			return Ok(result);
		}

		let mut square = self.duplicate(base)?;
		let mut exp = exp;
		loop {
			if exp & 1 == 1 {
				result = self.mul(&result, &square)?;
			}
			exp >>= 1;
			if exp == 0 {
				return Ok(result);
			}
			square = self.mul(&square, &square)?;
		}
	}

	/// Greatest common divisor of the magnitudes. Always non-negative; `gcd(0, 0)` is zero.
	pub fn gcd(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		let mut x = self.abs(a)?;
		let mut y = self.abs(b)?;
		while !y.is_zero() {
			let (_, r) = self.div_rem(&x, &y)?;
			x = y;
			y = r;
		}
		Ok(x)
	}

	/// `n!`.
	pub fn factorial(&self, n: u64) -> Result<T81Int, Error> {
		let mut acc = self.one()?;
		for k in 2..=n {
			acc = self.mul(&acc, &self.from_u64(k)?)?;
		}
		Ok(acc)
	}

	/// `a * 3^k`.
	pub fn shl_trits(&self, a: &T81Int, k: usize) -> Result<T81Int, Error> {
		if a.is_zero() {
			return self.zero();
		}
		let digit_shift = k / TRITS_PER_DIGIT;
		let mut out = self
			.allocator()
			.allocate(a.num_digits() + digit_shift + 1)?;
		magnitude::mul_small_into(
			a.digits(),
			POW3[k % TRITS_PER_DIGIT],
			&mut out.digits_mut()[digit_shift..],
		);
		Ok(T81Int::from_parts(a.sign(), out))
	}

	/// `a / 3^k`, truncated toward zero.
	pub fn shr_trits(&self, a: &T81Int, k: usize) -> Result<T81Int, Error> {
		let Some(high) = a.digits().get(k / TRITS_PER_DIGIT..).filter(|d| !d.is_empty()) else {
			return self.zero();
		};
		let mut out = self.allocator().allocate_from(high)?;
		magnitude::div_small_assign(out.digits_mut(), POW3[k % TRITS_PER_DIGIT] as u64);
		Ok(T81Int::from_parts(a.sign(), out))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_pow_scenario() {
		let engine = Engine::default();
		let result = engine.pow(&engine.parse("3").unwrap(), 4).unwrap();
		assert_eq!(result, engine.from_i64(81).unwrap());
		assert_eq!(result.to_string(), "10");
	}

	#[rstest::rstest]
	#[case::zero_to_zero(0, 0, 1)]
	#[case::zero_base(0, 5, 0)]
	#[case::negative_odd(-2, 61, -(1 << 61))]
	#[case::negative_even(-3, 4, 81)]
	#[case::one(1, u64::MAX, 1)]
	fn test_pow(#[case] base: i64, #[case] exp: u64, #[case] expected: i64) {
		let engine = Engine::default();
		let result = engine.pow(&engine.from_i64(base).unwrap(), exp).unwrap();
		assert_eq!(result.to_i64().unwrap(), expected);
	}

	#[rstest::rstest]
	#[case::scenario(12, 18, 6)]
	#[case::signs_ignored(-12, 18, 6)]
	#[case::coprime(81, 80, 1)]
	#[case::with_zero(0, -7, 7)]
	#[case::both_zero(0, 0, 0)]
	fn test_gcd(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
		let engine = Engine::default();
		let (a, b) = (engine.from_i64(a).unwrap(), engine.from_i64(b).unwrap());
		assert_eq!(engine.gcd(&a, &b).unwrap().to_i64().unwrap(), expected);
		assert_eq!(engine.gcd(&b, &a).unwrap().to_i64().unwrap(), expected);
	}

	#[test]
	fn test_gcd_base81_text() {
		let engine = Engine::default();
		// C = 12, I = 18
		let g = engine
			.gcd(&engine.parse("C").unwrap(), &engine.parse("I").unwrap())
			.unwrap();
		assert_eq!(g.to_string(), "6");
	}

	#[test]
	fn test_modulus_follows_dividend_sign() {
		let engine = Engine::default();
		let m = engine
			.modulus(&engine.from_i64(-100).unwrap(), &engine.from_i64(7).unwrap())
			.unwrap();
		assert_eq!(m.to_i64().unwrap(), -2);
	}

	#[test]
	fn test_factorial() {
		let engine = Engine::default();
		assert_eq!(engine.factorial(0).unwrap().to_i64().unwrap(), 1);
		assert_eq!(engine.factorial(20).unwrap().to_i64().unwrap(), 2_432_902_008_176_640_000);
		let f25 = engine.factorial(25).unwrap();
		let f24 = engine.factorial(24).unwrap();
		assert_eq!(engine.div(&f25, &f24).unwrap().to_i64().unwrap(), 25);
	}

	#[rstest::rstest]
	#[case::within_digit(5, 2, 45)]
	#[case::whole_digit(-5, 4, -405)]
	#[case::mixed(1, 7, 2187)]
	#[case::zero(0, 9, 0)]
	fn test_shl_trits(#[case] a: i64, #[case] k: usize, #[case] expected: i64) {
		let engine = Engine::default();
		let shifted = engine.shl_trits(&engine.from_i64(a).unwrap(), k).unwrap();
		assert_eq!(shifted.to_i64().unwrap(), expected);
	}

	#[rstest::rstest]
	#[case::within_digit(45, 2, 5)]
	#[case::truncates(-100, 2, -11)]
	#[case::whole_digits(2187, 7, 1)]
	#[case::past_end(80, 4, 0)]
	#[case::far_past_end(-80, 100, 0)]
	fn test_shr_trits(#[case] a: i64, #[case] k: usize, #[case] expected: i64) {
		let engine = Engine::default();
		let shifted = engine.shr_trits(&engine.from_i64(a).unwrap(), k).unwrap();
		assert_eq!(shifted.to_i64().unwrap(), expected);
	}
}
