// Copyright 2025 Irreducible Inc.

use std::{cmp::Ordering, sync::Arc};

use getset::Getters;
use t81_store::{DigitAllocator, StoreObserver};

use crate::{EngineConfig, Error, Notation, Sign, T81Int, magnitude, notation};

/// Entry point for creating and combining [`T81Int`] values.
///
/// An engine owns its configuration and the allocator every result is drawn from. It holds no
/// mutable state, so one engine can be shared freely between threads.
#[derive(Debug, Clone, Default, Getters)]
pub struct Engine {
	#[getset(get = "pub")]
	config: EngineConfig,
	#[getset(get = "pub")]
	allocator: DigitAllocator,
}

#[allow(clippy::wrong_self_convention)]
impl Engine {
	pub fn new(config: EngineConfig) -> Self {
		let allocator = DigitAllocator::new(config.store().clone());
		Self { config, allocator }
	}

	pub fn from_env() -> Self {
		Self::new(EngineConfig::from_env())
	}

	/// Reports the lifecycle of every digit store this engine allocates to `observer`.
	pub fn with_observer(mut self, observer: Arc<dyn StoreObserver>) -> Self {
		self.allocator = self.allocator.with_observer(observer);
		self
	}

	/// Parses base-81 text.
	pub fn parse(&self, s: &str) -> Result<T81Int, Error> {
		self.parse_with(s, Notation::Base81)
	}

	pub fn parse_with(&self, s: &str, notation: Notation) -> Result<T81Int, Error> {
		notation::parse(s, notation, &self.allocator)
	}

	pub fn zero(&self) -> Result<T81Int, Error> {
		Ok(T81Int::from_parts(Sign::Zero, self.allocator.allocate(1)?))
	}

	pub fn one(&self) -> Result<T81Int, Error> {
		self.from_u64(1)
	}

	pub fn from_i64(&self, n: i64) -> Result<T81Int, Error> {
		self.from_u128(Sign::from_negative(n < 0), n.unsigned_abs() as u128)
	}

	pub fn from_u64(&self, n: u64) -> Result<T81Int, Error> {
		self.from_u128(Sign::Positive, n as u128)
	}

	fn from_u128(&self, sign: Sign, n: u128) -> Result<T81Int, Error> {
		self.from_digits(sign, &magnitude::radix_digits(n))
	}

	/// Builds a normalized value from a sign and magnitude digits, least significant first.
	pub(crate) fn from_digits(&self, sign: Sign, digits: &[u8]) -> Result<T81Int, Error> {
		Ok(T81Int::from_parts(sign, self.allocator.allocate_from(digits)?))
	}

	/// A copy of `a` in a freshly allocated store.
	pub fn duplicate(&self, a: &T81Int) -> Result<T81Int, Error> {
		self.from_digits(a.sign(), a.digits())
	}

	pub fn negate(&self, a: &T81Int) -> Result<T81Int, Error> {
		self.from_digits(-a.sign(), a.digits())
	}

	pub fn abs(&self, a: &T81Int) -> Result<T81Int, Error> {
		self.from_digits(a.sign() * a.sign(), a.digits())
	}

	pub fn add(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.add_signed((a.sign(), a.digits()), (b.sign(), b.digits()))
	}

	/// `a + (-b)`, without materialising the negation.
	pub fn sub(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.add_signed((a.sign(), a.digits()), (-b.sign(), b.digits()))
	}

	fn add_signed(
		&self,
		(a_sign, a): (Sign, &[u8]),
		(b_sign, b): (Sign, &[u8]),
	) -> Result<T81Int, Error> {
		if b_sign.is_zero() {
			return self.from_digits(a_sign, a);
		}
		if a_sign.is_zero() {
			return self.from_digits(b_sign, b);
		}

		if a_sign == b_sign {
			let mut out = self.allocator.allocate(a.len().max(b.len()) + 1)?;
			magnitude::add_into(a, b, out.digits_mut());
			return Ok(T81Int::from_parts(a_sign, out));
		}

		let (sign, larger, smaller) = match magnitude::cmp_mag(a, b) {
			Ordering::Equal => return self.zero(),
			Ordering::Greater => (a_sign, a, b),
			Ordering::Less => (b_sign, b, a),
		};
		let mut out = self.allocator.allocate(larger.len())?;
		magnitude::sub_into(larger, smaller, out.digits_mut());
		Ok(T81Int::from_parts(sign, out))
	}

	/// `a * 81^k`.
	pub(crate) fn shift_digits_up(&self, a: &T81Int, k: usize) -> Result<T81Int, Error> {
		if a.is_zero() {
			return self.zero();
		}
		let mut out = self.allocator.allocate(a.num_digits() + k)?;
		out.digits_mut()[k..].copy_from_slice(a.digits());
		Ok(T81Int::from_parts(a.sign(), out))
	}

	/// `a / 81^k`, truncated toward zero.
	pub(crate) fn shift_digits_down(&self, a: &T81Int, k: usize) -> Result<T81Int, Error> {
		match a.digits().get(k..) {
			Some(high) if !high.is_empty() => self.from_digits(a.sign(), high),
			_ => self.zero(),
		}
	}
}
