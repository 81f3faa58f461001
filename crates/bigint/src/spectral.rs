// Copyright 2025 Irreducible Inc.

//! Convolution of digit sequences through a complex radix-2 FFT over `f64`.

use std::{
	f64::consts::PI,
	ops::{Add, Mul, Sub},
};

use t81_utils::checked_arithmetics::{checked_next_power_of_two, log2_strict_usize};

use crate::{Error, magnitude::RADIX, mul::scratch};

/// Largest distance from the nearest integer a coefficient may have before rounding.
const MAX_ROUNDING_DEVIATION: f64 = 0.25;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Complex {
	re: f64,
	im: f64,
}

impl Complex {
	fn from_angle(theta: f64) -> Self {
		let (im, re) = theta.sin_cos();
		Self { re, im }
	}

	fn conj(self) -> Self {
		Self {
			re: self.re,
			im: -self.im,
		}
	}
}

impl Add for Complex {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self {
			re: self.re + rhs.re,
			im: self.im + rhs.im,
		}
	}
}

impl Sub for Complex {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self {
			re: self.re - rhs.re,
			im: self.im - rhs.im,
		}
	}
}

impl Mul for Complex {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self {
			re: self.re * rhs.re - self.im * rhs.im,
			im: self.re * rhs.im + self.im * rhs.re,
		}
	}
}

/// Reverses the low `bits` bits of an unsigned integer.
fn reverse_bits(x: usize, bits: u32) -> usize {
	x.reverse_bits().unbounded_shr(usize::BITS - bits)
}

/// Moves the element at index `i` to index `reverse_bits(i, log2(len))`.
///
/// # Panics
///
/// Panics if the buffer length is not a power of two.
fn bit_reverse_indices<T>(buffer: &mut [T]) {
	let bits = log2_strict_usize(buffer.len()) as u32;
	for i in 0..buffer.len() {
		let i_rev = reverse_bits(i, bits);
		if i < i_rev {
			buffer.swap(i, i_rev);
		}
	}
}

/// Whether the worst-case floating-point error of a length-`n` convolution of radix-81 digits
/// stays below one half, so that rounding recovers every coefficient exactly.
fn precision_bound_holds(n: usize, log_n: usize) -> bool {
	let max_digit = (RADIX - 1) as f64;
	n as f64 * max_digit * max_digit * (3.0 * log_n as f64 + 4.0) * f64::EPSILON < 0.5
}

/// The first `n / 2` powers of the primitive `n`-th root of unity `exp(-2πi / n)`.
fn twiddles(n: usize) -> Result<Vec<Complex>, Error> {
	let mut roots = scratch::<Complex>(n / 2)?;
	for (k, root) in roots.iter_mut().enumerate() {
		*root = Complex::from_angle(-2.0 * PI * k as f64 / n as f64);
	}
	Ok(roots)
}

/// In-place iterative FFT. The inverse transform is left unscaled.
///
/// ## Preconditions
///
/// - `data.len()` is a power of two and `roots` holds its `data.len() / 2` twiddles
fn transform(data: &mut [Complex], roots: &[Complex], inverse: bool) {
	let n = data.len();
	let log_n = log2_strict_usize(n);
	debug_assert_eq!(roots.len(), n / 2);

	bit_reverse_indices(data);
	for layer in 0..log_n {
		let block_size_half = 1 << layer;
		let stride = n >> (layer + 1);
		for block_start in (0..n).step_by(block_size_half << 1) {
			for j in 0..block_size_half {
				let twiddle = roots[j * stride];
				let twiddle = if inverse { twiddle.conj() } else { twiddle };
				let idx0 = block_start + j;
				let idx1 = idx0 + block_size_half;
				// perform butterfly
				let u = data[idx0];
				let v = data[idx1] * twiddle;
				data[idx0] = u + v;
				data[idx1] = u - v;
			}
		}
	}
}

/// Convolves two digit sequences, returning `a.len() + b.len()` unreduced position sums.
///
/// Returns `Ok(None)` when the transform length is outside the precision bound or when any
/// coefficient lands too far from an integer to be trusted; the caller then falls back to an
/// exact product.
pub(crate) fn convolve(a: &[u8], b: &[u8]) -> Result<Option<Vec<u64>>, Error> {
	let out_len = a.len() + b.len();
	let Some(n) = checked_next_power_of_two(out_len) else {
		return Ok(None);
	};
	let log_n = log2_strict_usize(n);
	if !precision_bound_holds(n, log_n) {
		return Ok(None);
	}

	let roots = twiddles(n)?;
	let mut lhs = scratch::<Complex>(n)?;
	let mut rhs = scratch::<Complex>(n)?;
	for (slot, &d) in lhs.iter_mut().zip(a) {
		slot.re = d as f64;
	}
	for (slot, &d) in rhs.iter_mut().zip(b) {
		slot.re = d as f64;
	}

	transform(&mut lhs, &roots, false);
	transform(&mut rhs, &roots, false);
	for (x, &y) in lhs.iter_mut().zip(&rhs) {
		*x = *x * y;
	}
	transform(&mut lhs, &roots, true);

	let scale = 1.0 / n as f64;
	let mut acc = scratch::<u64>(out_len)?;
	for (slot, coefficient) in acc.iter_mut().zip(&lhs) {
		let value = coefficient.re * scale;
		let rounded = value.round();
		if rounded < 0.0 || (value - rounded).abs() > MAX_ROUNDING_DEVIATION {
			return Ok(None);
		}
		*slot = rounded as u64;
	}
	Ok(Some(acc))
}
