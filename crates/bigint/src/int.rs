// Copyright 2025 Irreducible Inc.

use std::{
	cmp::Ordering,
	fmt,
	hash::{Hash, Hasher},
	str::FromStr,
};

use getset::CopyGetters;
use t81_store::{BackingKind, DigitAllocator, DigitStore};

use crate::{Error, Notation, Sign, magnitude, notation};

/// An arbitrary-precision signed integer stored as a sign and radix-81 magnitude.
///
/// The magnitude never carries zero digits above its most significant non-zero digit, except for
/// zero itself, which is the single digit `0` with [`Sign::Zero`]. Values are created through an
/// [`Engine`](crate::Engine) and every operation returns a new value.
#[derive(Debug, CopyGetters)]
pub struct T81Int {
	#[getset(get_copy = "pub")]
	sign: Sign,
	store: DigitStore,
}

impl T81Int {
	/// Builds a normalized value from a sign and a digit store of arbitrary length.
	///
	/// Zero digits above the significant length are trimmed and a zero magnitude gets
	/// [`Sign::Zero`], whatever `sign` says.
	pub(crate) fn from_parts(sign: Sign, mut store: DigitStore) -> Self {
		let len = magnitude::significant_len(store.digits());
		store.truncate(len.max(1));
		debug_assert!(len == 0 || !sign.is_zero(), "non-zero magnitude with zero sign");
		let sign = match sign {
			_ if len == 0 => Sign::Zero,
			Sign::Zero => Sign::Positive,
			sign => sign,
		};
		Self { sign, store }
	}

	/// Replaces the sign of a non-zero value. Zero stays zero.
	pub(crate) fn with_sign(mut self, sign: Sign) -> Self {
		if !self.sign.is_zero() && !sign.is_zero() {
			self.sign = sign;
		}
		self
	}

	/// The magnitude digits, least significant first.
	pub fn digits(&self) -> &[u8] {
		self.store.digits()
	}

	pub fn num_digits(&self) -> usize {
		self.store.len()
	}

	pub fn is_zero(&self) -> bool {
		self.sign.is_zero()
	}

	pub fn is_negative(&self) -> bool {
		self.sign.is_negative()
	}

	/// Whether the digits live on the heap or in a mapped region.
	pub fn backing(&self) -> BackingKind {
		self.store.kind()
	}

	/// Flips the sign in place, reusing the digit store.
	pub fn into_negated(mut self) -> Self {
		self.sign = -self.sign;
		self
	}

	pub fn to_i64(&self) -> Result<i64, Error> {
		const OVERFLOW: Error = Error::Overflow { target: "i64" };

		let magnitude = magnitude::to_u128(self.digits()).ok_or(OVERFLOW)?;
		if self.is_negative() {
			0i64.checked_sub_unsigned(u64::try_from(magnitude).map_err(|_| OVERFLOW)?)
				.ok_or(OVERFLOW)
		} else {
			i64::try_from(magnitude).map_err(|_| OVERFLOW)
		}
	}

	pub fn to_string_with(&self, notation: Notation) -> String {
		notation::format(self, notation)
	}
}

/// Orders two values numerically.
pub fn compare(a: &T81Int, b: &T81Int) -> Ordering {
	a.sign.cmp(&b.sign).then_with(|| match a.sign {
		Sign::Positive => magnitude::cmp_mag(a.digits(), b.digits()),
		Sign::Negative => magnitude::cmp_mag(b.digits(), a.digits()),
		Sign::Zero => Ordering::Equal,
	})
}

/// Orders two values by absolute value.
pub fn compare_magnitude(a: &T81Int, b: &T81Int) -> Ordering {
	magnitude::cmp_mag(a.digits(), b.digits())
}

impl PartialEq for T81Int {
	fn eq(&self, other: &Self) -> bool {
		self.sign == other.sign && self.digits() == other.digits()
	}
}

impl Eq for T81Int {}

impl PartialOrd for T81Int {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for T81Int {
	fn cmp(&self, other: &Self) -> Ordering {
		compare(self, other)
	}
}

impl Hash for T81Int {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.sign.hash(state);
		self.digits().hash(state);
	}
}

impl fmt::Display for T81Int {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_string_with(Notation::Base81))
	}
}

impl FromStr for T81Int {
	type Err = Error;

	/// Parses base-81 text using a default heap/mapped allocator.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		notation::parse(s, Notation::Base81, &DigitAllocator::default())
	}
}

impl TryFrom<&T81Int> for i64 {
	type Error = Error;

	fn try_from(value: &T81Int) -> Result<Self, Self::Error> {
		value.to_i64()
	}
}
