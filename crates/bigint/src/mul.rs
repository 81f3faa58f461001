// Copyright 2025 Irreducible Inc.

use crate::{Engine, Error, MulStrategy, T81Int, magnitude::RADIX, spectral};

/// Allocates a zeroed scratch buffer, reporting allocation failure instead of aborting.
pub(crate) fn scratch<T: Clone + Default>(len: usize) -> Result<Vec<T>, Error> {
	let mut buf = Vec::new();
	buf.try_reserve_exact(len)
		.map_err(|_| t81_store::Error::HeapExhausted {
			bytes: len.saturating_mul(size_of::<T>()),
		})?;
	buf.resize(len, T::default());
	Ok(buf)
}

/// Adds every partial product `a[i] * b[j]` into `acc[i + j]`, without carrying.
///
/// Each slot of the accumulator grows by at most `80 * 80` per partial product, so a `u64`
/// accumulator cannot overflow for any operand length that fits in memory.
///
/// ## Preconditions
///
/// - `acc.len() >= a.len() + b.len() - 1`
pub(crate) fn schoolbook_accumulate(a: &[u8], b: &[u8], acc: &mut [u64]) {
	for (i, &ai) in a.iter().enumerate() {
		if ai == 0 {
			continue;
		}
		for (slot, &bj) in acc[i..i + b.len()].iter_mut().zip(b) {
			*slot += ai as u64 * bj as u64;
		}
	}
}

/// Multiply two magnitudes using the textbook algorithm, returning unreduced position sums.
///
/// The result has `a.len() + b.len()` slots so that [`carry_propagate`] can absorb the final
/// carry.
pub(crate) fn schoolbook(a: &[u8], b: &[u8]) -> Result<Vec<u64>, Error> {
	let mut acc = scratch::<u64>(a.len() + b.len())?;
	schoolbook_accumulate(a, b, &mut acc);
	Ok(acc)
}

/// Reduces unreduced position sums to radix-81 digits.
///
/// ## Preconditions
///
/// - the value represented by `acc` fits in `out.len()` digits
pub(crate) fn carry_propagate(acc: &[u64], out: &mut [u8]) {
	let radix = RADIX as u64;
	let mut carry = 0u64;
	for (k, digit) in out.iter_mut().enumerate() {
		let value = acc.get(k).copied().unwrap_or(0) + carry;
		*digit = (value % radix) as u8;
		carry = value / radix;
	}
	debug_assert_eq!(carry, 0, "product overflows its output");
}

impl Engine {
	pub fn mul(&self, a: &T81Int, b: &T81Int) -> Result<T81Int, Error> {
		self.mul_with(a, b, self.config().mul_strategy())
	}

	/// Multiplies with an explicit strategy, ignoring the configured one.
	pub fn mul_with(&self, a: &T81Int, b: &T81Int, strategy: MulStrategy) -> Result<T81Int, Error> {
		let sign = a.sign() * b.sign();
		if sign.is_zero() {
			return self.zero();
		}

		let (a, b) = (a.digits(), b.digits());
		let strategy = self.config().resolve_mul(strategy, a.len(), b.len());
		let _span =
			tracing::trace_span!("mul", ?strategy, lhs_len = a.len(), rhs_len = b.len()).entered();

		let acc = match strategy {
			MulStrategy::Spectral => match spectral::convolve(a, b)? {
				Some(acc) => acc,
				None => {
					tracing::debug!(
						lhs_len = a.len(),
						rhs_len = b.len(),
						"spectral product outside its precision bound, using schoolbook"
					);
					schoolbook(a, b)?
				}
			},
			MulStrategy::Schoolbook | MulStrategy::Auto => schoolbook(a, b)?,
		};

		let mut out = self.allocator().allocate(a.len() + b.len())?;
		carry_propagate(&acc, out.digits_mut());
		Ok(T81Int::from_parts(sign, out))
	}
}
