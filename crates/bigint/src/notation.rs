// Copyright 2025 Irreducible Inc.

//! Text representations of [`T81Int`] values.

use std::fmt;

use t81_store::DigitAllocator;

use crate::{
	Error, ParseError, Sign, T81Int,
	magnitude::{POW3, TRITS_PER_DIGIT},
	trits,
};

/// The digit alphabet of a textual integer.
///
/// Every notation accepts an optional leading `-` and at least one digit. There is no radix
/// prefix and no whitespace tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
	/// One character per radix-81 digit: `0-9`, `A-Z`, `a-z`, then `!#$%&()*+,./:;<=>?@`.
	#[default]
	Base81,
	/// Unbalanced trits `0`, `1`, `2`.
	Ternary,
	/// Balanced trits `T` (minus one), `0`, `1`. The sign is carried by the trits themselves.
	BalancedTernary,
}

impl fmt::Display for Notation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Base81 => "base-81",
			Self::Ternary => "ternary",
			Self::BalancedTernary => "balanced ternary",
		})
	}
}

const BASE81_ALPHABET: &[u8; 81] =
	b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!#$%&()*+,./:;<=>?@";

const BASE81_VALUES: [u8; 128] = {
	let mut table = [u8::MAX; 128];
	let mut i = 0;
	while i < BASE81_ALPHABET.len() {
		table[BASE81_ALPHABET[i] as usize] = i as u8;
		i += 1;
	}
	table
};

impl Notation {
	fn digit_value(self, ch: char) -> Option<i8> {
		match self {
			Self::Base81 => BASE81_VALUES
				.get(ch as usize)
				.copied()
				.filter(|&v| v != u8::MAX)
				.map(|v| v as i8),
			Self::Ternary => ch.to_digit(3).map(|v| v as i8),
			Self::BalancedTernary => match ch {
				'T' => Some(-1),
				'0' => Some(0),
				'1' => Some(1),
				_ => None,
			},
		}
	}
}

/// Parses `s` in the given notation, allocating the digits from `allocator`.
pub(crate) fn parse(
	s: &str,
	notation: Notation,
	allocator: &DigitAllocator,
) -> Result<T81Int, Error> {
	let (negative, body) = match s.strip_prefix('-') {
		Some(rest) => (true, rest),
		None => (false, s),
	};
	if body.is_empty() {
		return Err(ParseError::Empty.into());
	}

	// Validate up front: every accepted character is ASCII, so byte length equals digit count.
	let offset = usize::from(negative);
	let values = body
		.chars()
		.enumerate()
		.map(|(position, ch)| {
			notation
				.digit_value(ch)
				.ok_or(ParseError::InvalidDigit {
					ch,
					position: position + offset,
					notation,
				})
		})
		.collect::<Result<Vec<i8>, _>>()?;

	let sign = Sign::from_negative(negative);
	match notation {
		Notation::Base81 => {
			let mut store = allocator.allocate(values.len())?;
			for (digit, &value) in store.digits_mut().iter_mut().zip(values.iter().rev()) {
				*digit = value as u8;
			}
			Ok(T81Int::from_parts(sign, store))
		}
		Notation::Ternary => {
			let mut store = allocator.allocate(values.len().div_ceil(TRITS_PER_DIGIT))?;
			let digits = store.digits_mut();
			for (i, &trit) in values.iter().rev().enumerate() {
				digits[i / TRITS_PER_DIGIT] += trit as u8 * POW3[i % TRITS_PER_DIGIT];
			}
			Ok(T81Int::from_parts(sign, store))
		}
		Notation::BalancedTernary => {
			let lsb_first: Vec<i8> = values.into_iter().rev().collect();
			let value = trits::from_balanced(&lsb_first, allocator)?;
			Ok(if negative {
				value.into_negated()
			} else {
				value
			})
		}
	}
}

pub(crate) fn format(value: &T81Int, notation: Notation) -> String {
	let mut out = String::new();
	match notation {
		Notation::Base81 => {
			if value.is_negative() {
				out.push('-');
			}
			out.extend(
				value
					.digits()
					.iter()
					.rev()
					.map(|&d| BASE81_ALPHABET[d as usize] as char),
			);
		}
		Notation::Ternary => {
			if value.is_negative() {
				out.push('-');
			}
			let trits = value
				.digits()
				.iter()
				.rev()
				.flat_map(|&d| POW3.iter().rev().map(move |&p| d / p % 3))
				.skip_while(|&t| t == 0);
			out.extend(trits.map(|t| char::from(b'0' + t)));
		}
		Notation::BalancedTernary => {
			out.extend(trits::to_balanced(value).iter().rev().map(|&t| match t {
				-1 => 'T',
				0 => '0',
				_ => '1',
			}));
		}
	}
	if out.is_empty() {
		out = "0".to_string();
	}
	out
}
