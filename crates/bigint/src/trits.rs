// Copyright 2025 Irreducible Inc.

//! Balanced-ternary view of sign-magnitude values and the trit-wise logic built on it.
//!
//! Values are stored as sign and radix-81 magnitude. The operators here expand both operands to
//! balanced trits in `{-1, 0, 1}`, combine them position by position, and re-encode the result.

use itertools::Itertools;
use t81_store::DigitAllocator;

use crate::{
	Engine, Error, Sign, T81Int,
	magnitude::{POW3, TRITS_PER_DIGIT},
};

/// Balanced trits of `value`, least significant first, without trailing zero trits.
pub(crate) fn to_balanced(value: &T81Int) -> Vec<i8> {
	let mut trits = Vec::with_capacity(value.num_digits() * TRITS_PER_DIGIT + 1);
	let mut carry = 0u8;
	for &digit in value.digits() {
		let mut digit = digit;
		for _ in 0..TRITS_PER_DIGIT {
			let t = digit % 3 + carry;
			digit /= 3;
			let (trit, next_carry) = match t {
				0 => (0i8, 0),
				1 => (1, 0),
				2 => (-1, 1),
				_ => (0, 1),
			};
			trits.push(trit);
			carry = next_carry;
		}
	}
	if carry == 1 {
		trits.push(1);
	}
	if value.is_negative() {
		trits.iter_mut().for_each(|t| *t = -*t);
	}
	while trits.last() == Some(&0) {
		trits.pop();
	}
	trits
}

/// Re-encodes balanced trits, least significant first, as a sign-magnitude value.
pub(crate) fn from_balanced(trits: &[i8], allocator: &DigitAllocator) -> Result<T81Int, Error> {
	let negative = trits
		.iter()
		.rev()
		.find(|&&t| t != 0)
		.is_some_and(|&t| t < 0);

	let mut store = allocator.allocate(trits.len().div_ceil(TRITS_PER_DIGIT))?;
	let digits = store.digits_mut();
	let mut borrow = 0i8;
	for (i, &trit) in trits.iter().enumerate() {
		let t = if negative { -trit } else { trit } - borrow;
		let t = if t < 0 {
			borrow = 1;
			t + 3
		} else {
			borrow = 0;
			t
		};
		digits[i / TRITS_PER_DIGIT] += t as u8 * POW3[i % TRITS_PER_DIGIT];
	}
	debug_assert_eq!(borrow, 0);
	Ok(T81Int::from_parts(Sign::from_negative(negative), store))
}

impl Engine {
	/// Trit-wise minimum.
	pub fn tand(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.combine_trits(a, b, |x, y| x.min(y))
	}

	/// Trit-wise maximum.
	pub fn tor(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.combine_trits(a, b, |x, y| x.max(y))
	}

	/// Trit-wise `-(x * y)`: zero when either trit is zero, `-1` when the trits agree.
	pub fn txor(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.combine_trits(a, b, |x, y| -(x * y))
	}

	/// Trit-wise negation, which in balanced ternary is numeric negation.
	pub fn tnot(&self, a: &T81Int) -> Result<T81Int, Error> {
		self.negate(a)
	}

	fn combine_trits(
		&self,
		a: &T81Int,
		b: &T81Int,
		op: impl Fn(i8, i8) -> i8,
	) -> Result<T81Int, Error> {
		let (lhs, rhs) = (to_balanced(a), to_balanced(b));
		let trits = lhs
			.iter()
			.zip_longest(&rhs)
			.map(|pair| {
				let (&x, &y) = pair.or(&0, &0);
				op(x, y)
			})
			.collect::<Vec<_>>();
		from_balanced(&trits, self.allocator())
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_balanced_expansion() {
		let engine = Engine::default();
		assert_eq!(to_balanced(&engine.from_i64(5).unwrap()), vec![-1, -1, 1]);
		assert_eq!(to_balanced(&engine.from_i64(-5).unwrap()), vec![1, 1, -1]);
		assert!(to_balanced(&engine.zero().unwrap()).is_empty());
		// 40 = 1111 in balanced ternary, 41 needs a fifth trit.
		assert_eq!(to_balanced(&engine.from_i64(40).unwrap()), vec![1, 1, 1, 1]);
		assert_eq!(to_balanced(&engine.from_i64(41).unwrap()), vec![-1, -1, -1, -1, 1]);
	}

	#[rstest::rstest]
	#[case::mixed(5, 3, -4, 12, 3)]
	#[case::opposite_units(1, -1, -1, 1, 1)]
	#[case::with_zero(7, 0, -3, 10, 0)]
	fn test_trit_logic(
		#[case] a: i64,
		#[case] b: i64,
		#[case] and: i64,
		#[case] or: i64,
		#[case] xor: i64,
	) {
		let engine = Engine::default();
		let (a, b) = (engine.from_i64(a).unwrap(), engine.from_i64(b).unwrap());
		assert_eq!(engine.tand(&a, &b).unwrap().to_i64().unwrap(), and);
		assert_eq!(engine.tor(&a, &b).unwrap().to_i64().unwrap(), or);
		assert_eq!(engine.txor(&a, &b).unwrap().to_i64().unwrap(), xor);
	}

	proptest! {
		#[test]
		fn balanced_round_trip(n in any::<i64>()) {
			let engine = Engine::default();
			let value = engine.from_i64(n).unwrap();
			let back = from_balanced(&to_balanced(&value), engine.allocator()).unwrap();
			prop_assert_eq!(back, value);
		}

		#[test]
		fn tnot_is_involutive_and_de_morgan_holds(a in any::<i32>(), b in any::<i32>()) {
			let engine = Engine::default();
			let (a, b) = (engine.from_i64(a as i64).unwrap(), engine.from_i64(b as i64).unwrap());
			prop_assert_eq!(engine.tnot(&engine.tnot(&a).unwrap()).unwrap(), engine.duplicate(&a).unwrap());
			let lhs = engine.tnot(&engine.tand(&a, &b).unwrap()).unwrap();
			let rhs = engine.tor(&engine.tnot(&a).unwrap(), &engine.tnot(&b).unwrap()).unwrap();
			prop_assert_eq!(lhs, rhs);
		}
	}
}
