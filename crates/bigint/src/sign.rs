// Copyright 2025 Irreducible Inc.

use std::ops::{Mul, Neg};

/// The sign of a [`T81Int`](crate::T81Int). Zero has its own sign, so there is no negative zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
	Negative,
	Zero,
	Positive,
}

impl Sign {
	pub fn is_negative(self) -> bool {
		self == Self::Negative
	}

	pub fn is_zero(self) -> bool {
		self == Self::Zero
	}

	pub(crate) fn from_negative(negative: bool) -> Self {
		if negative {
			Self::Negative
		} else {
			Self::Positive
		}
	}
}

impl Neg for Sign {
	type Output = Self;

	fn neg(self) -> Self {
		match self {
			Self::Negative => Self::Positive,
			Self::Zero => Self::Zero,
			Self::Positive => Self::Negative,
		}
	}
}

impl Mul for Sign {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		match (self, rhs) {
			(Self::Zero, _) | (_, Self::Zero) => Self::Zero,
			(lhs, rhs) if lhs == rhs => Self::Positive,
			_ => Self::Negative,
		}
	}
}
